//! Knight jump masks. A jump ignores whatever stands in between, so one mask
//! per square covers every position.

use crate::moves::sliding::{step_table, Direction};

const KNIGHT_STEPS: [Direction; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KNIGHT_ATTACKS: [u64; 64] = step_table(&KNIGHT_STEPS);

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;

    #[test]
    fn centre_knight_reaches_eight_squares() {
        let d4 = 27u8;
        assert_eq!(knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn g1_knight_reaches_e2_f3_h3() {
        let g1 = 6u8;
        let expected = (1u64 << 12) | (1u64 << 21) | (1u64 << 23);
        assert_eq!(knight_attacks(g1), expected);
    }

    #[test]
    fn corner_and_edge_knights_lose_jumps() {
        let a1 = 0u8;
        assert_eq!(knight_attacks(a1), (1u64 << 10) | (1u64 << 17));
        assert_eq!(knight_attacks(1).count_ones(), 3);
        assert_eq!(knight_attacks(63).count_ones(), 2);
    }
}
