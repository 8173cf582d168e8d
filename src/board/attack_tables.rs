//! Precomputed reach tables for the leaper pieces (knights, kings).
//!
//! Entry `n` is a mask of the squares a piece on square index `n`
//! (row * 8 + col) can jump to, one bit per target index.

use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn build(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        *slot = deltas
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(dr, dc))
            .fold(0u64, |mask, target| mask | bit(target));
    }
    table
}

pub(crate) static KNIGHT_REACH: Lazy<[u64; 64]> = Lazy::new(|| build(&KNIGHT_DELTAS));

pub(crate) static KING_REACH: Lazy<[u64; 64]> = Lazy::new(|| build(&KING_DELTAS));

#[inline]
pub(crate) fn bit(sq: Square) -> u64 {
    1u64 << sq.as_index()
}

#[inline]
pub(crate) fn knight_reaches(from: Square, to: Square) -> bool {
    KNIGHT_REACH[from.as_index()] & bit(to) != 0
}

#[inline]
pub(crate) fn king_reaches(from: Square, to: Square) -> bool {
    KING_REACH[from.as_index()] & bit(to) != 0
}

/// Squares one king step away from `sq`
pub(crate) fn king_ring(sq: Square) -> impl Iterator<Item = Square> {
    let mask = KING_REACH[sq.as_index()];
    (0..64)
        .filter(move |idx| mask & (1u64 << idx) != 0)
        .map(Square::from_index)
}
