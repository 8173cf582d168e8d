//! A game in progress: the live board, whose turn it is, castling flags and
//! the undo stack.

mod history;
mod session;

pub use history::{History, HistoryEntry};
pub use session::{GameSession, MoveRecord, MoveResult, UndoResult};
