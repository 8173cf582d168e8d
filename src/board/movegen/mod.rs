//! Pseudo-legal piece rules.
//!
//! These predicates answer "can this piece make this step on this board?"
//! without looking at the safety of the mover's own king.

mod kings;
mod knights;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::castle_check;
use super::{Board, CastleSide, CastlingRights, ColoredPiece, IllegalReason, Piece, Square};

pub(crate) use pawns::attacks as pawn_attacks;
pub(crate) use sliders::{bishop as bishop_line, queen as queen_line, rook as rook_line};

/// What kind of step a pseudo-legal move is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveShape {
    Regular,
    Castle(CastleSide),
}

/// Check the step `from -> to` for `mover` against its piece rule.
///
/// The destination may be empty or hold an enemy piece. A king's castling step
/// is handed to the castling rules with `rights`. No piece can step on or off
/// the grid.
pub fn check_piece_move(
    mover: ColoredPiece,
    from: Square,
    to: Square,
    board: &Board,
    rights: &CastlingRights,
) -> Result<MoveShape, IllegalReason> {
    if !from.is_on_board() || !to.is_on_board() {
        return Err(IllegalReason::WrongShape);
    }
    if board.color_on(to) == Some(mover.color) {
        return Err(IllegalReason::OwnPieceAtDestination);
    }

    let regular = |r: Result<(), IllegalReason>| r.map(|()| MoveShape::Regular);
    match mover.piece {
        Piece::Pawn => regular(pawns::check(mover.color, from, to, board)),
        Piece::Rook => regular(sliders::rook(from, to, board)),
        Piece::Knight => regular(knights::check(from, to)),
        Piece::Bishop => regular(sliders::bishop(from, to, board)),
        Piece::Queen => regular(sliders::queen(from, to, board)),
        Piece::King => match kings::check(mover.color, from, to, board)? {
            MoveShape::Castle(side) => {
                castle_check(mover.color, side, board, rights)
                    .map_err(IllegalReason::CastlingUnavailable)?;
                Ok(MoveShape::Castle(side))
            }
            MoveShape::Regular => Ok(MoveShape::Regular),
        },
    }
}

/// Boolean form of [`check_piece_move`].
#[must_use]
pub fn can_move(
    mover: ColoredPiece,
    from: Square,
    to: Square,
    board: &Board,
    rights: &CastlingRights,
) -> bool {
    check_piece_move(mover, from, to, board, rights).is_ok()
}
