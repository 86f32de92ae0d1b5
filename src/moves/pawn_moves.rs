//! Pawn shape rules.
//!
//! Pushes depend on occupancy (a pawn never captures straight ahead), while
//! the diagonal masks are fixed per color and only yield a destination when
//! an opposing piece sits there.

use crate::game_state::chess_rules::{pawn_direction, pawn_home_rank};
use crate::game_state::chess_types::Color;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// Forward pushes: one step if empty, two from the home rank if both squares
/// are empty.
pub fn pawn_pushes(color: Color, square: u8, occupancy: u64) -> u64 {
    let empty = !occupancy;
    let step = 8 * pawn_direction(color);

    let one_step = square as i8 + step;
    if !(0..64).contains(&one_step) {
        return 0;
    }
    let one_mask = (1u64 << one_step) & empty;
    if one_mask == 0 || square / 8 + 1 != pawn_home_rank(color) {
        return one_mask;
    }

    one_mask | ((1u64 << (one_step + step)) & empty)
}

/// Pushes plus diagonal captures onto `enemy_occupancy`.
#[inline]
pub fn pawn_moves(color: Color, square: u8, occupancy: u64, enemy_occupancy: u64) -> u64 {
    pawn_pushes(color, square, occupancy) | (pawn_attacks(color, square) & enemy_occupancy)
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
