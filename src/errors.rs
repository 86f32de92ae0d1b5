use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Everything the board core can reject. None of these are fatal: the
/// operation that returns one has left the game state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside rank 1-8 / file 0-7.
    #[error("square out of bounds: rank {rank}, file {file}")]
    OutOfBounds { rank: i16, file: i16 },

    /// The provided algebraic square (e.g. `e4`) could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// The provided FEN string is invalid or could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Attempted to move from a square that holds no piece.
    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    /// The piece on the origin belongs to the side not on move.
    #[error("piece on {square} does not belong to {active}")]
    NotYourTurn { square: Square, active: Color },

    /// The destination is not among the generated candidates for the origin.
    #[error("illegal destination: {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },

    #[error("the game has ended")]
    GameEnded,
}

pub type BoardResult<T> = Result<T, BoardError>;
