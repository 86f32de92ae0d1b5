use crate::moves::sliding::{empty_board_rays, slide_attacks, ORTHOGONAL_DIRECTIONS};

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    slide_attacks(square, &ORTHOGONAL_DIRECTIONS, occupancy)
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = empty_board_rays(sq as i32, &ORTHOGONAL_DIRECTIONS);
        sq += 1;
    }

    table
}
