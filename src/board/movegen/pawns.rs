use super::super::{Board, Color, IllegalReason, Square};

/// Pawn steps: one square forward onto an empty square, two from the start
/// row when both squares are empty, or one square diagonally forward onto an
/// enemy piece. No en passant.
pub(super) fn check(color: Color, from: Square, to: Square, board: &Board) -> Result<(), IllegalReason> {
    let dir = color.pawn_direction();
    let (d_row, d_col) = from.delta(to);

    if d_col == 0 {
        if d_row == dir {
            return if board.is_empty(to) {
                Ok(())
            } else {
                Err(IllegalReason::BlockedPath)
            };
        }
        if d_row == 2 * dir {
            if from.row() != color.pawn_start_row() {
                return Err(IllegalReason::WrongShape);
            }
            let passed = from
                .offset(dir, 0)
                .ok_or(IllegalReason::WrongShape)?;
            return if board.is_empty(passed) && board.is_empty(to) {
                Ok(())
            } else {
                Err(IllegalReason::BlockedPath)
            };
        }
        return Err(IllegalReason::WrongShape);
    }

    if d_row == dir && d_col.abs() == 1 {
        return match board.color_on(to) {
            Some(target) if target != color => Ok(()),
            Some(_) => Err(IllegalReason::OwnPieceAtDestination),
            None => Err(IllegalReason::WrongShape),
        };
    }

    Err(IllegalReason::WrongShape)
}

/// Squares a pawn on `from` threatens, regardless of what stands there
#[inline]
pub(crate) fn attacks(color: Color, from: Square, target: Square) -> bool {
    let (d_row, d_col) = from.delta(target);
    d_row == color.pawn_direction() && d_col.abs() == 1
}
