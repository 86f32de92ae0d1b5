//! Bishop attack masks.
//!
//! Occupancy-aware diagonal rays plus an empty-board table used when testing
//! that blocked rays are a strict subset of the open ones.

use crate::moves::sliding::{empty_board_rays, slide_attacks, DIAGONAL_DIRECTIONS};

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    slide_attacks(square, &DIAGONAL_DIRECTIONS, occupancy)
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = empty_board_rays(sq as i32, &DIAGONAL_DIRECTIONS);
        sq += 1;
    }

    table
}
