//! Chess board representation and rules.
//!
//! The board is a plain 8x8 grid. Every rule is a deterministic predicate over
//! a borrowed board, so probing a hypothetical position is just a matter of
//! cloning the board and applying a move to the clone.
//!
//! Layering (each layer only calls the ones before it):
//! `movegen` (piece shapes) -> `attacks` -> `castling` -> `legality` -> `endgame`.
//!
//! # Example
//! ```
//! use chess_rules::board::{is_legal, Board, CastlingRights, MoveContext, Square};
//!
//! let board = Board::new();
//! let rights = CastlingRights::all();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert!(is_legal(e2, e4, &board, &rights, MoveContext::Player));
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod castling;
mod endgame;
mod error;
mod legality;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, IllegalReason, MoveError, MoveParseError, SquareError};
pub use state::{AppliedMove, Board, BoardSnapshot};
pub use types::{CastleSide, CastlingRights, Color, ColoredPiece, Move, Piece, Square};

// Public API - rules
pub use attacks::{attackers_of, is_attacked};
pub use castling::{can_castle, castle_check, CastleBlock};
pub use endgame::{classify, has_any_legal_move, GameStatus};
pub use legality::{check_move, is_in_check, is_legal, legal_destinations, legal_moves, MoveContext};
pub use movegen::{can_move, check_piece_move, MoveShape};
