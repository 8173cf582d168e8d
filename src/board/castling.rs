//! Castling eligibility.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::is_attacked;
use super::types::KING_HOME_COL;
use super::{Board, CastleSide, CastlingRights, Color, ColoredPiece, Piece, Square};

/// The first castling precondition that fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleBlock {
    KingMoved,
    RookMoved,
    /// Flags allow it but the king is not on its home square
    KingNotHome,
    /// Flags allow it but no rook of the right color stands in the corner
    RookMissing,
    PathOccupied,
    SquareAttacked(Square),
}

impl fmt::Display for CastleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleBlock::KingMoved => write!(f, "the king has already moved"),
            CastleBlock::RookMoved => write!(f, "the rook has already moved"),
            CastleBlock::KingNotHome => write!(f, "the king is not on its starting square"),
            CastleBlock::RookMissing => write!(f, "there is no rook in the corner"),
            CastleBlock::PathOccupied => write!(f, "pieces stand between king and rook"),
            CastleBlock::SquareAttacked(sq) => write!(f, "{sq} is attacked"),
        }
    }
}

/// Check whether `color` may castle on `side`, in order:
/// king unmoved, rook unmoved, nothing between them, and no square the king
/// stands on, crosses or lands on attacked on the current board.
pub fn castle_check(
    color: Color,
    side: CastleSide,
    board: &Board,
    rights: &CastlingRights,
) -> Result<(), CastleBlock> {
    if rights.king_moved(color) {
        return Err(CastleBlock::KingMoved);
    }
    if rights.rook_moved(color, side) {
        return Err(CastleBlock::RookMoved);
    }

    let row = color.back_row();
    if board.piece_at(Square(row, KING_HOME_COL)) != Some(ColoredPiece::new(color, Piece::King)) {
        return Err(CastleBlock::KingNotHome);
    }
    if board.piece_at(side.rook_home(color)) != Some(ColoredPiece::new(color, Piece::Rook)) {
        return Err(CastleBlock::RookMissing);
    }

    let (lo, hi) = ordered(KING_HOME_COL, side.rook_col());
    if (lo + 1..hi).any(|col| !board.is_empty(Square(row, col))) {
        return Err(CastleBlock::PathOccupied);
    }

    let target = side.king_target_col();
    let king_path = [KING_HOME_COL, (KING_HOME_COL + target) / 2, target];
    if let Some(sq) = king_path
        .into_iter()
        .map(|col| Square(row, col))
        .find(|&sq| is_attacked(color, sq, board))
    {
        return Err(CastleBlock::SquareAttacked(sq));
    }

    Ok(())
}

/// Boolean form of [`castle_check`]
#[must_use]
pub fn can_castle(color: Color, side: CastleSide, board: &Board, rights: &CastlingRights) -> bool {
    castle_check(color, side, board, rights).is_ok()
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
