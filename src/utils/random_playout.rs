//! Random pseudo-legal playouts.
//!
//! Drives a game forward by picking uniformly among every generated move of
//! the side to move. Used to stress the generator and applicator over
//! positions no hand-written test reaches; it is not an opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::{apply_move, AppliedMove};
use crate::move_generation::move_generator::generate_moves_for_color;

/// Play up to `plies` random moves, stopping early if the side to move has
/// none. Returns the moves played.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    plies: usize,
    rng: &mut R,
) -> Vec<AppliedMove> {
    let mut played = Vec::with_capacity(plies);

    for _ in 0..plies {
        let moves = generate_moves_for_color(&game_state.board, game_state.active_player);
        let Some(picked) = moves.as_slice().choose(rng) else {
            break;
        };
        match apply_move(game_state, picked.from, picked.to) {
            Ok(applied) => played.push(applied),
            Err(_) => break,
        }
    }

    played
}

/// Deterministic playout from the initial position.
pub fn seeded_playout(seed: u64, plies: usize) -> (GameState, Vec<AppliedMove>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game_state = GameState::new_game();
    let played = random_playout(&mut game_state, plies, &mut rng);
    (game_state, played)
}
