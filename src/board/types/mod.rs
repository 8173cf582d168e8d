//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds and their owners
//! - `Square` - (row, col) board coordinate
//! - `Move` - a source/destination pair
//! - `CastlingRights` and `CastleSide` - the six "has moved" flags

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use moves::Move;
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;

// Re-export internal constants
pub(crate) use castling::KING_HOME_COL;
