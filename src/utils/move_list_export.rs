//! Plain-text export of a game's move list.
//!
//! A bracketed header block (`[Key "Value"]`, PGN style) followed by the
//! numbered move lines. The notation is this board's own long form, not SAN,
//! so the output is for people rather than PGN readers.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, TimeZone};

use crate::game_state::chess_types::*;
use crate::notation::move_notation::PieceSymbols;

pub fn write_move_list(game_state: &GameState, symbols: PieceSymbols) -> String {
    write_move_list_at(game_state, symbols, &Local::now())
}

/// Same as `write_move_list` with the `Date` header taken from `now`.
pub fn write_move_list_at<Tz: TimeZone>(
    game_state: &GameState,
    symbols: PieceSymbols,
    now: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Date", now.format("%Y.%m.%d").to_string());
    headers.insert("Moves", game_state.move_log.move_count().to_string());
    headers.insert("Status", game_state.status().to_string());
    headers.insert("ToMove", game_state.active_player().to_string());
    headers.insert("FEN", game_state.get_fen());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    for line in game_state.move_log.render_lines(symbols) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
