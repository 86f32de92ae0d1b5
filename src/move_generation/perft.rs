//! Pseudo-legal perft.
//!
//! Counts leaf nodes of the move tree built from `generate_moves_for_color`.
//! With no king-safety filtering the counts match standard legal perft only
//! while no side can be in check (depth 3 from the initial position).

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_moves_for_color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    perft_recurse(&game_state.board, game_state.active_player, depth, &mut total);
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    let side = game_state.active_player;
    let mut out = Vec::new();

    for mv in generate_moves_for_color(&game_state.board, side) {
        let mut next = game_state.board.clone();
        make(&mut next, mv);

        let mut counts = PerftCounts::default();
        if depth <= 1 {
            counts.nodes = 1;
        } else {
            perft_recurse(&next, side.opposite(), depth - 1, &mut counts);
        }
        out.push((mv, counts.nodes));
    }

    out
}

fn perft_recurse(board: &Board, side: Color, depth: u8, counts: &mut PerftCounts) {
    for mv in generate_moves_for_color(board, side) {
        if depth == 1 {
            counts.nodes += 1;
            if !board.is_empty(mv.to) {
                counts.captures += 1;
            }
            continue;
        }

        let mut next = board.clone();
        make(&mut next, mv);
        let mut local = PerftCounts::default();
        perft_recurse(&next, side.opposite(), depth - 1, &mut local);
        counts.merge(local);
    }
}

fn make(board: &mut Board, mv: Move) {
    if let Some(piece) = board.clear(mv.from) {
        board.place(mv.to, piece);
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::chess_types::GameState;

    #[test]
    fn perft_depth_zero_is_one_node() {
        assert_eq!(
            perft(&GameState::new_game(), 0),
            PerftCounts {
                nodes: 1,
                captures: 0
            }
        );
    }

    #[test]
    fn perft_start_position_shallow_depths() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth3 = perft(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
    }

    #[test]
    fn perft_rook_ending_counts_every_king_reply() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("valid FEN");
        assert_eq!(perft(&game, 1).nodes, 15);
        assert_eq!(
            perft(&game, 2),
            PerftCounts {
                nodes: 75,
                captures: 0
            }
        );
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divide = perft_divide(&game, 2);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }
}
