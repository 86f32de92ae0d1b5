//! Square name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values. Used by FEN handling, tests, and the terminal front end.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::chess_types::Square;

/// Parse a square name such as `"e4"`. Case-insensitive on the file letter.
pub fn algebraic_to_square(square: &str) -> BoardResult<Square> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(BoardError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(BoardError::InvalidAlgebraic(square.to_owned()));
    }

    coordinates_to_square(i16::from(rank - b'0'), i16::from(file - b'a'))
}

/// Square at a 1-based rank and 0-based file.
pub fn coordinates_to_square(rank: i16, file: i16) -> BoardResult<Square> {
    u8::try_from(rank)
        .ok()
        .zip(u8::try_from(file).ok())
        .and_then(|(r, f)| Square::new(r, f))
        .ok_or(BoardError::OutOfBounds { rank, file })
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
