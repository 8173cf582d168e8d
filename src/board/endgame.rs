//! Checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "logging")]
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::is_attacked;
use super::legality::{is_legal, MoveContext};
use super::{Board, BoardError, CastlingRights, Color, Square};

/// Outcome of a position for the side about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    Stalemate,
    Checkmate { winner: Color },
}

impl GameStatus {
    /// Stalemate and checkmate end the game
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
        }
    }
}

/// Classify the position for `color`, the side about to move.
///
/// A board holding nothing but the two kings is a dead position and reported
/// as stalemate before anything else is looked at.
pub fn classify(color: Color, board: &Board, rights: &CastlingRights) -> Result<GameStatus, BoardError> {
    if board.only_kings_remain() {
        #[cfg(feature = "logging")]
        debug!("only kings remain, {color} to move: stalemate");
        return Ok(GameStatus::Stalemate);
    }

    let king = board.find_king(color)?;
    let in_check = is_attacked(color, king, board);
    let context = if in_check {
        MoveContext::Checkmate
    } else {
        MoveContext::Stalemate
    };

    let status = match (in_check, any_move(color, board, rights, context)) {
        (_, true) => GameStatus::InProgress,
        (true, false) => GameStatus::Checkmate {
            winner: color.opponent(),
        },
        (false, false) => GameStatus::Stalemate,
    };
    #[cfg(feature = "logging")]
    debug!("{color} to move: {status}");
    Ok(status)
}

/// Does `color` have at least one legal move?
pub fn has_any_legal_move(color: Color, board: &Board, rights: &CastlingRights) -> Result<bool, BoardError> {
    let king = board.find_king(color)?;
    let context = if is_attacked(color, king, board) {
        MoveContext::Checkmate
    } else {
        MoveContext::Stalemate
    };
    Ok(any_move(color, board, rights, context))
}

fn any_move(color: Color, board: &Board, rights: &CastlingRights, context: MoveContext) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        Square::all().any(|to| to != from && is_legal(from, to, board, rights, context))
    })
}
