//! Owned game state.
//!
//! `GameState` bundles the board with turn bookkeeping and the move log. It is
//! created with the standard position, mutated in place by each accepted
//! move, and replaced wholesale on reset.

use log::debug;

use crate::errors::BoardResult;
use crate::game_state::chess_types::*;
use crate::notation::move_log::MoveLog;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub active_player: Color,
    pub move_number: u16,
    pub status: GameStatus,
    pub move_log: MoveLog,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// The standard initial position, white to move, move 1.
    pub fn new_game() -> Self {
        Self::with_board(Board::starting_position(), Color::White, 1)
    }

    /// A state over an arbitrary board. `move_number` is clamped to at least 1.
    pub fn with_board(board: Board, active_player: Color, move_number: u16) -> Self {
        Self {
            board,
            active_player,
            move_number: move_number.max(1),
            status: GameStatus::Active,
            move_log: MoveLog::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> BoardResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Discard everything and start over from the initial position.
    pub fn reset(&mut self) {
        debug!(
            "resetting game after {} logged moves",
            self.move_log.move_count()
        );
        *self = Self::new_game();
    }

    #[inline]
    pub fn active_player(&self) -> Color {
        self.active_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn move_number(&self) -> u16 {
        self.move_number
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Whether the piece on `square` belongs to the side to move.
    #[inline]
    pub fn is_owned_by_active_player(&self, square: Square) -> bool {
        self.board
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.active_player)
    }
}
