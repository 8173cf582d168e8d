//! Castling flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, ColoredPiece, Piece};
use super::square::Square;

pub(crate) const KING_HOME_COL: usize = 4;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column of this side's rook before castling
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// The side a two-column king move heads towards
    #[inline]
    #[must_use]
    pub(crate) const fn from_king_step(d_col: isize) -> CastleSide {
        if d_col > 0 {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        }
    }

    /// Corner a castling rook of `color` starts from
    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        Square(color.back_row(), self.rook_col())
    }
}

/// The six "has moved" flags that gate castling.
///
/// Flags only ever go from `false` to `true` during play: a king or rook that
/// has left its square never regains the right to castle, even if it returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    pub(crate) white_king_moved: bool,
    pub(crate) black_king_moved: bool,
    pub(crate) white_rook_queenside_moved: bool,
    pub(crate) white_rook_kingside_moved: bool,
    pub(crate) black_rook_queenside_moved: bool,
    pub(crate) black_rook_kingside_moved: bool,
}

impl CastlingRights {
    /// Nothing has moved: every castle is still possible
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights {
            white_king_moved: false,
            black_king_moved: false,
            white_rook_queenside_moved: false,
            white_rook_kingside_moved: false,
            black_rook_queenside_moved: false,
            black_rook_kingside_moved: false,
        }
    }

    /// Everything has moved: no castle is possible
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights {
            white_king_moved: true,
            black_king_moved: true,
            white_rook_queenside_moved: true,
            white_rook_kingside_moved: true,
            black_rook_queenside_moved: true,
            black_rook_kingside_moved: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => self.white_rook_queenside_moved,
            (Color::White, CastleSide::Kingside) => self.white_rook_kingside_moved,
            (Color::Black, CastleSide::Queenside) => self.black_rook_queenside_moved,
            (Color::Black, CastleSide::Kingside) => self.black_rook_kingside_moved,
        }
    }

    /// True if neither the king nor the rook on `side` has moved
    #[inline]
    #[must_use]
    pub const fn allows(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        *self.rook_flag(color, side) = true;
    }

    /// Record that `piece` left `from`.
    ///
    /// A king sets its own flag. Any piece vacating a corner sets that corner's
    /// rook flag, whatever the piece is.
    pub fn record_departure(&mut self, from: Square, piece: ColoredPiece) {
        if piece.piece == Piece::King {
            self.mark_king_moved(piece.color);
        }
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if side.rook_home(color) == from {
                    self.mark_rook_moved(color, side);
                }
            }
        }
    }

    /// Re-enable castling for `color` on `side`. Only for building positions.
    pub(crate) fn grant(&mut self, color: Color, side: CastleSide) {
        match color {
            Color::White => self.white_king_moved = false,
            Color::Black => self.black_king_moved = false,
        }
        *self.rook_flag(color, side) = false;
    }

    fn rook_flag(&mut self, color: Color, side: CastleSide) -> &mut bool {
        match (color, side) {
            (Color::White, CastleSide::Queenside) => &mut self.white_rook_queenside_moved,
            (Color::White, CastleSide::Kingside) => &mut self.white_rook_kingside_moved,
            (Color::Black, CastleSide::Queenside) => &mut self.black_rook_queenside_moved,
            (Color::Black, CastleSide::Kingside) => &mut self.black_rook_kingside_moved,
        }
    }
}
