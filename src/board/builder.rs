//! Fluent builder for setting up positions.
//!
//! Places pieces one at a time instead of parsing a diagram. Castling starts
//! fully disabled on a fresh builder, since an arbitrary setup rarely has its
//! kings and rooks at home.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, CastleSide, Color, Piece, Square};
//!
//! let (board, side, rights) = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(7, 7), Color::White, Piece::Rook)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .castle_kingside(Color::White)
//!     .side_to_move(Color::White)
//!     .into_parts();
//! assert_eq!(side, Color::White);
//! assert!(rights.allows(Color::White, CastleSide::Kingside));
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, BoardError, CastleSide, CastlingRights, Color, ColoredPiece, Piece, Square};
use crate::game::GameSession;

#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, ColoredPiece)>,
    side_to_move: Color,
    rights: CastlingRights,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// An empty board, White to move, no castling.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            rights: CastlingRights::none(),
        }
    }

    /// The standard initial position with every castle available.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
            side_to_move: Color::White,
            rights: CastlingRights::all(),
        }
    }

    /// Place a piece, replacing whatever stood there
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, ColoredPiece::new(color, piece)));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace the castling flags wholesale.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.rights = rights;
        self
    }

    /// Mark the king and kingside rook of `color` as unmoved.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.rights.grant(color, CastleSide::Kingside);
        self
    }

    /// Mark the king and queenside rook of `color` as unmoved.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.rights.grant(color, CastleSide::Queenside);
        self
    }

    #[must_use]
    pub fn build(&self) -> Board {
        let mut board = Board::empty();
        for &(square, piece) in &self.pieces {
            board.set_piece(square, piece);
        }
        board
    }

    /// Board, side to move and castling flags.
    #[must_use]
    pub fn into_parts(self) -> (Board, Color, CastlingRights) {
        (self.build(), self.side_to_move, self.rights)
    }

    /// Start a game from the built position.
    ///
    /// Fails if either king is missing.
    pub fn build_session(self) -> Result<GameSession, BoardError> {
        let (board, side, rights) = self.into_parts();
        GameSession::from_position(board, side, rights)
    }
}
