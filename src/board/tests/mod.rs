//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Piece movement shapes
//! - `attacks.rs` - Attacked squares
//! - `castling.rs` - Castling eligibility and flags
//! - `legality.rs` - King safety
//! - `endgame.rs` - Checkmate and stalemate
//! - `proptest.rs` - Property-based tests over random games

mod attacks;
mod endgame;

use super::{Board, Square};

/// Parse a diagram, rank 8 first. Indentation and blank lines are ignored.
pub(super) fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).unwrap()
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}
