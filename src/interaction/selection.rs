//! Click and drag selection state machine.
//!
//! `BoardSession` owns a `GameState` plus the current selection and its
//! highlighted destinations. Clicks and drag-and-drop are two entry points
//! into the same select/commit steps, so "click e2, click e4" and "drag e2,
//! drop e4" leave the session in identical states.

use log::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::{play_move, AppliedMove};
use crate::move_generation::move_generator::generate_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// An own piece is selected; `targets` are its candidate destinations.
    Selected { origin: Square, targets: Vec<Square> },
    /// The selected piece moved.
    Moved(AppliedMove),
    /// The selection was dropped without moving.
    Cleared,
    /// The input was refused and nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    game_state: GameState,
    selected: Option<Square>,
    targets: Vec<Square>,
}

impl BoardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_game_state(game_state: GameState) -> Self {
        Self {
            game_state,
            selected: None,
            targets: Vec::new(),
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the current selection.
    #[inline]
    pub fn highlighted(&self) -> &[Square] {
        &self.targets
    }

    pub fn highlighted_mask(&self) -> u64 {
        self.targets.iter().fold(0u64, |acc, sq| acc | sq.mask())
    }

    pub fn click(&mut self, square: Square) -> SelectionOutcome {
        if !self.game_state.is_active() {
            return SelectionOutcome::Ignored;
        }

        if let Some(origin) = self.selected {
            if self.targets.contains(&square) {
                return self.commit(origin, square);
            }
            if origin == square {
                return self.clear();
            }
        }

        if self.game_state.is_owned_by_active_player(square) {
            self.select(square)
        } else {
            self.clear()
        }
    }

    pub fn drag_start(&mut self, square: Square) -> SelectionOutcome {
        if !self.game_state.is_active() || !self.game_state.is_owned_by_active_player(square) {
            return SelectionOutcome::Ignored;
        }
        self.select(square)
    }

    pub fn drop(&mut self, square: Square) -> SelectionOutcome {
        let Some(origin) = self.selected else {
            return SelectionOutcome::Ignored;
        };

        if self.targets.contains(&square) {
            return self.commit(origin, square);
        }
        self.clear()
    }

    /// End of a drag gesture. Only presentation state (drag styling) is tied
    /// to it, so the session is unchanged.
    pub fn drag_end(&mut self) -> SelectionOutcome {
        SelectionOutcome::Ignored
    }

    /// Select `from` and commit to `to` in one step, as two clicks would.
    /// Any earlier selection is dropped first, and a refused destination
    /// leaves nothing selected.
    pub fn move_piece(&mut self, from: Square, to: Square) -> SelectionOutcome {
        self.clear();
        match self.click(from) {
            SelectionOutcome::Selected { .. } => {}
            other => return other,
        }
        if self.targets.contains(&to) {
            self.commit(from, to)
        } else {
            self.clear()
        }
    }

    /// Replace the game with a fresh one and drop any selection.
    pub fn reset(&mut self) {
        self.game_state.reset();
        self.selected = None;
        self.targets.clear();
    }

    /// Query candidates for any square without touching the selection.
    pub fn candidates(&self, square: Square) -> Vec<Square> {
        generate_moves(&self.game_state.board, square)
    }

    fn select(&mut self, square: Square) -> SelectionOutcome {
        let targets = generate_moves(&self.game_state.board, square);
        trace!("selected {square} with {} targets", targets.len());
        self.selected = Some(square);
        self.targets = targets.clone();
        SelectionOutcome::Selected {
            origin: square,
            targets,
        }
    }

    fn clear(&mut self) -> SelectionOutcome {
        self.selected = None;
        self.targets.clear();
        SelectionOutcome::Cleared
    }

    fn commit(&mut self, origin: Square, destination: Square) -> SelectionOutcome {
        let result = play_move(&mut self.game_state, origin, destination);
        self.clear();
        match result {
            Ok(applied) => SelectionOutcome::Moved(applied),
            Err(err) => {
                trace!("move {origin}{destination} refused: {err}");
                SelectionOutcome::Cleared
            }
        }
    }
}
