//! Direction walks shared by the piece tables.
//!
//! Knights and kings take a single step per direction, so their masks come
//! from `step_table`. Sliders repeat the step: a ray walks one square at a time from the origin, includes every square it
//! reaches, and stops on (and includes) the first occupied square. Whether
//! that blocker is capturable is decided by the generator's own-piece filter.

/// (rank step, file step) pairs.
pub type Direction = (i32, i32);

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn slide_attacks(square: u8, directions: &[Direction], occupancy: u64) -> u64 {
    let sq = square as i32;
    directions
        .iter()
        .fold(0u64, |acc, &(rank_step, file_step)| {
            acc | trace_ray(sq, rank_step, file_step, occupancy)
        })
}

fn trace_ray(square: i32, rank_step: i32, file_step: i32, occupancy: u64) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

/// Same walk ignoring occupancy, for building empty-board tables.
pub const fn empty_board_rays(square: i32, directions: &[Direction; 4]) -> u64 {
    let mut rays = 0u64;
    let mut d = 0usize;

    while d < 4 {
        let (rank_step, file_step) = directions[d];
        let mut file = (square % 8) + file_step;
        let mut rank = (square / 8) + rank_step;

        while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            rays |= 1u64 << (rank * 8 + file);
            file += file_step;
            rank += rank_step;
        }
        d += 1;
    }

    rays
}

/// One step in each direction from every square, clipped to the board.
pub const fn step_table(steps: &[Direction; 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let rank = (sq / 8) as i32;
        let file = (sq % 8) as i32;
        let mut i = 0usize;

        while i < 8 {
            let (rank_step, file_step) = steps[i];
            let (to_rank, to_file) = (rank + rank_step, file + file_step);
            if to_rank >= 0 && to_rank < 8 && to_file >= 0 && to_file < 8 {
                table[sq] |= 1u64 << (to_rank * 8 + to_file);
            }
            i += 1;
        }
        sq += 1;
    }

    table
}
