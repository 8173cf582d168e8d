//! Full move legality: piece rules plus king safety.

#[cfg(feature = "logging")]
use log::{trace, warn};

use super::attacks::is_attacked;
use super::movegen::check_piece_move;
use super::{Board, BoardError, CastlingRights, Color, IllegalReason, Move, MoveError, Square};

/// Who is asking. Only changes whether a rejection is reported to the player;
/// the verdict is the same for every context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveContext {
    /// A move the player actually asked for
    Player,
    /// Highlighting the destinations of a selected piece
    MoveGuide,
    /// Searching for any move while not in check
    Stalemate,
    /// Searching for any move while in check
    Checkmate,
}

impl MoveContext {
    #[cfg(feature = "logging")]
    #[inline]
    const fn surfaces_warnings(self) -> bool {
        matches!(self, MoveContext::Player)
    }
}

/// Decide whether the piece on `from` may move to `to`.
///
/// The move is played on a clone of `board`; it is refused if the mover's king
/// is attacked afterwards, whether it was in check before (unresolved check)
/// or not (self-inflicted check). Squares off the grid are refused with
/// [`MoveError::OffBoard`].
pub fn check_move(
    from: Square,
    to: Square,
    board: &Board,
    rights: &CastlingRights,
    context: MoveContext,
) -> Result<(), MoveError> {
    on_board(from)?;
    on_board(to)?;
    let mover = board.piece_at(from).ok_or(MoveError::NoSelection)?;
    check_piece_move(mover, from, to, board, rights)?;

    let king_before = board.find_king(mover.color)?;
    let checked_before = is_attacked(mover.color, king_before, board);

    let mut after = board.clone();
    after.apply(from, to);
    let king_after = after.find_king(mover.color)?;
    let checked_after = is_attacked(mover.color, king_after, &after);

    let reason = match (checked_before, checked_after) {
        (_, false) => return Ok(()),
        (true, true) => IllegalReason::KingInCheckUnresolved,
        (false, true) => IllegalReason::OwnKingExposed,
    };

    #[cfg(not(feature = "logging"))]
    let _ = context;
    #[cfg(feature = "logging")]
    if context.surfaces_warnings() {
        warn!("{} {from}{to} rejected: {reason}", mover.color);
    } else {
        trace!("{context:?} {from}{to}: {reason}");
    }
    Err(MoveError::Illegal(reason))
}

fn on_board(sq: Square) -> Result<Square, MoveError> {
    if sq.is_on_board() {
        Ok(sq)
    } else {
        Err(MoveError::OffBoard(sq))
    }
}

/// Boolean form of [`check_move`]
#[must_use]
pub fn is_legal(from: Square, to: Square, board: &Board, rights: &CastlingRights, context: MoveContext) -> bool {
    check_move(from, to, board, rights, context).is_ok()
}

/// Every square the piece on `from` may legally move to
#[must_use]
pub fn legal_destinations(from: Square, board: &Board, rights: &CastlingRights) -> Vec<Square> {
    if !from.is_on_board() {
        return Vec::new();
    }
    Square::all()
        .filter(|&to| to != from && is_legal(from, to, board, rights, MoveContext::MoveGuide))
        .collect()
}

/// Every legal move for `color`, ordered by source then destination square
#[must_use]
pub fn legal_moves(color: Color, board: &Board, rights: &CastlingRights) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| {
            legal_destinations(from, board, rights)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Is the king of `color` attacked right now?
pub fn is_in_check(color: Color, board: &Board) -> Result<bool, BoardError> {
    let king = board.find_king(color)?;
    Ok(is_attacked(color, king, board))
}
