//! Terminal-oriented board renderer.
//!
//! Draws ranks 8 down to 1 with file letters above and below. Highlighted
//! squares (e.g. the current selection's destinations) are marked when empty
//! and bracketed when occupied.

use crate::game_state::chess_types::*;
use crate::notation::move_notation::PieceSymbols;

pub fn render_game_state(game_state: &GameState) -> String {
    render_board(&game_state.board, PieceSymbols::Unicode, None, 0)
}

/// Render with a symbol style, an optional selected square, and a mask of
/// highlighted squares.
pub fn render_board(
    board: &Board,
    symbols: PieceSymbols,
    selected: Option<Square>,
    highlighted: u64,
) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (1..=8u8).rev() {
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let Some(sq) = Square::new(rank, file) else {
                continue;
            };
            let piece = board.piece_at(sq).map(|p| symbols.symbol(p));
            let is_target = highlighted & sq.mask() != 0;

            let (left, right) = if selected == Some(sq) {
                ('(', ')')
            } else if is_target && piece.is_some() {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            let body = match piece {
                Some(ch) => ch,
                None if is_target => '*',
                None => empty_square_char(symbols),
            };

            out.push(left);
            out.push(body);
            out.push(right);
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn empty_square_char(symbols: PieceSymbols) -> char {
    match symbols {
        PieceSymbols::Unicode => '·',
        PieceSymbols::Letters => '.',
    }
}
