//! Error types for board and rules operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleBlock;
use super::endgame::GameStatus;
use super::types::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid file/rank notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// A corrupted board: contract violations that no legal game can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardError {
    /// Unrecognised piece symbol in a diagram
    UnknownPieceKind { symbol: char },
    /// The given color has no king on the board
    MissingKing { color: Color },
    /// Diagram does not describe an 8x8 grid
    MalformedDiagram { row: usize, cols: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnknownPieceKind { symbol } => {
                write!(f, "Unknown piece symbol '{symbol}'")
            }
            BoardError::MissingKing { color } => write!(f, "{color} has no king on the board"),
            BoardError::MalformedDiagram { row, cols } => {
                write!(f, "Diagram row {row} has {cols} squares, expected 8")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Why a move was rejected. For user feedback only; never drives control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IllegalReason {
    /// A piece stands between source and destination
    BlockedPath,
    /// The piece cannot move in that pattern
    WrongShape,
    /// The move would leave the mover's king attacked
    OwnKingExposed,
    /// The king is in check and the move does not resolve it
    KingInCheckUnresolved,
    /// The destination holds one of the mover's own pieces
    OwnPieceAtDestination,
    /// Kings may never stand next to each other
    AdjacentKings,
    /// A castling step whose preconditions fail
    CastlingUnavailable(CastleBlock),
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::BlockedPath => write!(f, "Another piece is in the way"),
            IllegalReason::WrongShape => write!(f, "That piece cannot move there"),
            IllegalReason::OwnKingExposed => write!(f, "King cannot be moved into check!"),
            IllegalReason::KingInCheckUnresolved => write!(f, "King is in check!"),
            IllegalReason::OwnPieceAtDestination => {
                write!(f, "Destination is occupied by your own piece")
            }
            IllegalReason::AdjacentKings => {
                write!(f, "A king cannot move next to the other king")
            }
            IllegalReason::CastlingUnavailable(block) => write!(f, "Cannot castle: {block}"),
        }
    }
}

impl std::error::Error for IllegalReason {}

/// Error returned when a move request is refused. The game state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveError {
    /// No piece of the side to move is selected
    NoSelection,
    /// A square outside the 8x8 grid was given
    OffBoard(Square),
    /// The move breaks a rule
    Illegal(IllegalReason),
    /// The game has already ended
    GameOver(GameStatus),
    /// The board violates an engine invariant
    Corrupt(BoardError),
}

impl MoveError {
    /// The rule-level reason, if this is an illegal-move rejection
    #[must_use]
    pub const fn reason(&self) -> Option<IllegalReason> {
        match self {
            MoveError::Illegal(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSelection => write!(f, "No piece selected"),
            MoveError::OffBoard(sq) => write!(f, "Square {sq} is off the board"),
            MoveError::Illegal(reason) => write!(f, "Illegal move: {reason}"),
            MoveError::GameOver(status) => write!(f, "Game is over: {status}"),
            MoveError::Corrupt(err) => write!(f, "Corrupted board: {err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Illegal(reason) => Some(reason),
            MoveError::Corrupt(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IllegalReason> for MoveError {
    fn from(reason: IllegalReason) -> Self {
        MoveError::Illegal(reason)
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Corrupt(err)
    }
}
