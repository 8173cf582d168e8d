use super::super::{Board, IllegalReason, Square};

/// Squares strictly between `from` and `to` along a straight or diagonal line.
///
/// Callers must have checked that the two squares share a line.
fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (d_row, d_col) = from.delta(to);
    let steps = d_row.abs().max(d_col.abs());
    let (s_row, s_col) = (d_row.signum(), d_col.signum());
    (1..steps).filter_map(move |i| from.offset(s_row * i, s_col * i))
}

fn path_clear(from: Square, to: Square, board: &Board) -> Result<(), IllegalReason> {
    if between(from, to).all(|sq| board.is_empty(sq)) {
        Ok(())
    } else {
        Err(IllegalReason::BlockedPath)
    }
}

/// Same row or same column, nothing in between.
pub(crate) fn rook(from: Square, to: Square, board: &Board) -> Result<(), IllegalReason> {
    if from == to || (from.row() != to.row() && from.col() != to.col()) {
        return Err(IllegalReason::WrongShape);
    }
    path_clear(from, to, board)
}

/// Equal row and column distance, nothing in between.
pub(crate) fn bishop(from: Square, to: Square, board: &Board) -> Result<(), IllegalReason> {
    let (d_row, d_col) = from.delta(to);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return Err(IllegalReason::WrongShape);
    }
    path_clear(from, to, board)
}

/// Rook-legal or bishop-legal.
pub(crate) fn queen(from: Square, to: Square, board: &Board) -> Result<(), IllegalReason> {
    let straight = rook(from, to, board);
    if straight.is_ok() {
        return straight;
    }
    let diagonal = bishop(from, to, board);
    if diagonal.is_ok() {
        return diagonal;
    }
    // Report the failure of the line the move actually lies on.
    if straight != Err(IllegalReason::WrongShape) {
        straight
    } else {
        diagonal
    }
}
