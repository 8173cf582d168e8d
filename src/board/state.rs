use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::KING_HOME_COL;
use super::{BoardError, CastleSide, Color, ColoredPiece, Piece, Square};

type Grid = [[Option<ColoredPiece>; 8]; 8];

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    let back_rank = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
    for (col, piece) in back_rank.iter().enumerate() {
        board.set_piece(Square(0, col), ColoredPiece::new(Color::Black, *piece));
        board.set_piece(Square(1, col), ColoredPiece::new(Color::Black, Piece::Pawn));
        board.set_piece(Square(6, col), ColoredPiece::new(Color::White, Piece::Pawn));
        board.set_piece(Square(7, col), ColoredPiece::new(Color::White, *piece));
    }
    board
});

/// An 8x8 grid of squares, each empty or holding one piece.
///
/// The board carries no turn or castling state; those live in the session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: Grid,
}

/// What `Board::apply` did besides moving the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub piece: ColoredPiece,
    pub captured: Option<ColoredPiece>,
    pub castle: Option<CastleSide>,
    pub promoted: bool,
}

/// A read-only copy of the grid for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub squares: Grid,
}

impl BoardSnapshot {
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<ColoredPiece> {
        self.squares.get(sq.row())?.get(sq.col()).copied().flatten()
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        BoardSnapshot {
            squares: board.squares,
        }
    }
}

impl Board {
    /// The standard initial position
    #[must_use]
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.squares.get(sq.row())?.get(sq.col()).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|p| p.piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Put `piece` on `sq`. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, piece: ColoredPiece) {
        if let Some(cell) = self.cell_mut(sq) {
            *cell = Some(piece);
        }
    }

    /// Empty a square, returning whatever stood there
    pub fn clear(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.cell_mut(sq)?.take()
    }

    fn cell_mut(&mut self, sq: Square) -> Option<&mut Option<ColoredPiece>> {
        self.squares.get_mut(sq.row())?.get_mut(sq.col())
    }

    /// Every occupied square, row by row from a8
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Every square occupied by `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn find_king(&self, color: Color) -> Result<Square, BoardError> {
        let king = ColoredPiece::new(color, Piece::King);
        self.pieces()
            .find(|(_, p)| *p == king)
            .map(|(sq, _)| sq)
            .ok_or(BoardError::MissingKing { color })
    }

    /// True when the only pieces left are the two kings
    #[must_use]
    pub fn only_kings_remain(&self) -> bool {
        let mut count = 0;
        for (_, p) in self.pieces() {
            if p.piece != Piece::King {
                return false;
            }
            count += 1;
        }
        count == 2
    }

    /// Move the piece on `from` to `to` without checking any rule.
    ///
    /// A king stepping two columns also brings the matching rook across, and a
    /// pawn reaching its last row becomes a queen. Returns `None` if `from` is
    /// empty or either square is off the board.
    pub fn apply(&mut self, from: Square, to: Square) -> Option<AppliedMove> {
        if !to.is_on_board() {
            return None;
        }
        let piece = self.clear(from)?;
        let captured = self.clear(to);

        let mut castle = None;
        let (d_row, d_col) = from.delta(to);
        let from_home = from == Square(piece.color.back_row(), KING_HOME_COL);
        if piece.piece == Piece::King && from_home && d_row == 0 && d_col.abs() == 2 {
            let side = CastleSide::from_king_step(d_col);
            let rook_from = Square(from.row(), side.rook_col());
            let rook_to = Square(from.row(), side.rook_target_col());
            if let Some(rook) = self.clear(rook_from) {
                self.set_piece(rook_to, rook);
            }
            castle = Some(side);
        }

        let promoted = piece.piece == Piece::Pawn && to.row() == piece.color.promotion_row();
        let placed = if promoted {
            ColoredPiece::new(piece.color, Piece::Queen)
        } else {
            piece
        };
        self.set_piece(to, placed);

        Some(AppliedMove {
            piece,
            captured,
            castle,
            promoted,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }

    /// Parse the diagram form produced by `Display`.
    ///
    /// Eight rows, row 0 (rank 8) first; `.` is empty, uppercase is White.
    /// Spaces inside a row and blank lines are ignored.
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(BoardError::MalformedDiagram {
                row: rows.len(),
                cols: 0,
            });
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(BoardError::MalformedDiagram {
                    row,
                    cols: cells.len(),
                });
            }
            for (col, &symbol) in cells.iter().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let piece = ColoredPiece::from_symbol(symbol)
                    .ok_or(BoardError::UnknownPieceKind { symbol })?;
                board.set_piece(Square(row, col), piece);
            }
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', ColoredPiece::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
