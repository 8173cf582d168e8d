//! Attack detection.
//!
//! A square is attacked when an enemy piece could capture on it. Only the
//! piece shapes from `movegen` are consulted, never the legality layer, so an
//! attack query can not recurse into king-safety checks.

use super::attack_tables::{king_reaches, knight_reaches};
use super::movegen::{bishop_line, pawn_attacks, queen_line, rook_line};
use super::{Board, Color, ColoredPiece, Piece, Square};

/// True if a piece of `color`'s opponent attacks `square`.
///
/// The square is treated as if it held a `color` piece, so pawns threaten
/// their forward diagonals and never the square straight ahead.
#[must_use]
pub fn is_attacked(color: Color, square: Square, board: &Board) -> bool {
    square.is_on_board()
        && board
        .pieces_of(color.opponent())
        .any(|(from, attacker)| attacks_square(attacker, from, square, board))
}

/// Squares of the enemy pieces that attack `square`
#[must_use]
pub fn attackers_of(color: Color, square: Square, board: &Board) -> Vec<Square> {
    if !square.is_on_board() {
        return Vec::new();
    }
    board
        .pieces_of(color.opponent())
        .filter(|&(from, attacker)| attacks_square(attacker, from, square, board))
        .map(|(from, _)| from)
        .collect()
}

/// Could `attacker` on `from` capture something standing on `target`?
pub(crate) fn attacks_square(attacker: ColoredPiece, from: Square, target: Square, board: &Board) -> bool {
    if from == target {
        return false;
    }
    match attacker.piece {
        Piece::Pawn => pawn_attacks(attacker.color, from, target),
        Piece::Knight => knight_reaches(from, target),
        Piece::King => king_reaches(from, target),
        Piece::Rook => rook_line(from, target, board).is_ok(),
        Piece::Bishop => bishop_line(from, target, board).is_ok(),
        Piece::Queen => queen_line(from, target, board).is_ok(),
    }
}
