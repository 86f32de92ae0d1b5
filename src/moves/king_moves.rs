//! King step masks: the eight neighbours of each square, clipped to the
//! board. No attack or check information is involved.

use crate::moves::sliding::{step_table, Direction};

const KING_STEPS: [Direction; 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const KING_ATTACKS: [u64; 64] = step_table(&KING_STEPS);

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}
