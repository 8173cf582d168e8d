use super::super::attack_tables::{king_reaches, king_ring};
use super::super::types::KING_HOME_COL;
use super::super::{Board, CastleSide, Color, ColoredPiece, IllegalReason, Piece, Square};
use super::MoveShape;

/// One step in any direction, or the two-column castling step from the king's
/// home square. Two columns from anywhere else is just the wrong shape.
///
/// The castling step is only recognised here; whether it is allowed is the
/// castling module's decision. A king may never land next to the enemy king,
/// which also keeps king moves from ever depending on king moves.
pub(super) fn check(color: Color, from: Square, to: Square, board: &Board) -> Result<MoveShape, IllegalReason> {
    let (d_row, d_col) = from.delta(to);
    let shape = if king_reaches(from, to) {
        MoveShape::Regular
    } else if d_row == 0 && d_col.abs() == 2 && from == Square(color.back_row(), KING_HOME_COL) {
        MoveShape::Castle(CastleSide::from_king_step(d_col))
    } else {
        return Err(IllegalReason::WrongShape);
    };

    if borders_king(color.opponent(), to, board) {
        return Err(IllegalReason::AdjacentKings);
    }
    Ok(shape)
}

/// True if the king of `color` stands on a square next to `sq`
fn borders_king(color: Color, sq: Square, board: &Board) -> bool {
    let king = ColoredPiece::new(color, Piece::King);
    king_ring(sq).any(|n| board.piece_at(n) == Some(king))
}
