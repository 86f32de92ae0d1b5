//! Queen destinations: the orthogonal and diagonal walks from one square.

use crate::moves::sliding::{slide_attacks, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn queen_attacks(square: u8, occupancy: u64) -> u64 {
    slide_attacks(square, &ORTHOGONAL_DIRECTIONS, occupancy)
        | slide_attacks(square, &DIAGONAL_DIRECTIONS, occupancy)
}
