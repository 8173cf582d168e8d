//! Square type and coordinate conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is rank 8 (Black's back row) and row 7 is rank 1; col 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        let sq = Square(row, col);
        sq.is_on_board().then_some(sq)
    }

    /// False for squares built by hand with a row or column past 7
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Build a square from a file letter (`a`-`h`, either case) and a rank (1-8)
    pub fn from_file_rank(file: char, rank: u8) -> Result<Self, SquareError> {
        let col = match file.to_ascii_lowercase() {
            f @ 'a'..='h' => f as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: format!("{file}{rank}"),
                })
            }
        };
        if !(1..=8).contains(&rank) {
            return Err(SquareError::InvalidNotation {
                notation: format!("{file}{rank}"),
            });
        }
        Ok(Square(8 - rank as usize, col))
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// File letter, lowercase
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    /// Rank number (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        8 - self.0 as u8
    }

    /// The square displaced by (`d_row`, `d_col`), if it is still on the board
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Signed (row, col) displacement from `self` to `to`
    #[inline]
    #[must_use]
    pub(crate) fn delta(self, to: Square) -> (isize, isize) {
        (
            to.0 as isize - self.0 as isize,
            to.1 as isize - self.1 as isize,
        )
    }

    /// Get the square's index (0-63, a8=0, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// All 64 squares, row by row starting at a8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", self.file(), self.rank())
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let rank = match chars[1] {
            r @ '1'..='8' => r as u8 - b'0',
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Square::from_file_rank(chars[0], rank).map_err(|_| SquareError::InvalidNotation {
            notation: s.to_string(),
        })
    }
}
