//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = GameSession::new();
//! assert!(game.apply_move(Square(6, 4), Square(4, 4)).is_ok());
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

pub use super::{
    classify, is_attacked, is_legal, Board, BoardBuilder, BoardError, CastleSide, CastlingRights,
    Color, GameStatus, IllegalReason, Move, MoveContext, MoveError, Piece, Square,
};
pub use crate::game::{GameSession, MoveRecord, MoveResult, UndoResult};
