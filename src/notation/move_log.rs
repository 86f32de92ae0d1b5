//! Append-only move log, paired by move number.
//!
//! A white move opens a new entry under the current move number; the black
//! reply completes it. The log lives inside `GameState`, so a reset clears it.

use crate::game_state::chess_types::Color;
use crate::notation::move_notation::{MoveRecord, PieceSymbols};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLogEntry {
    pub move_number: u16,
    pub white: Option<MoveRecord>,
    pub black: Option<MoveRecord>,
}

impl MoveLogEntry {
    /// `"1. ♙e2-e4 ♟d7-d5"`; a missing white half prints as `...`.
    pub fn render(&self, symbols: PieceSymbols) -> String {
        let white = self
            .white
            .map(|record| record.notation(symbols))
            .unwrap_or_else(|| "...".to_owned());

        match self.black {
            Some(black) => format!("{}. {} {}", self.move_number, white, black.notation(symbols)),
            None => format!("{}. {}", self.move_number, white),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<MoveLogEntry>,
}

impl MoveLog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mover: Color, move_number: u16, record: MoveRecord) {
        match mover {
            Color::White => self.entries.push(MoveLogEntry {
                move_number,
                white: Some(record),
                black: None,
            }),
            Color::Black => match self.entries.last_mut() {
                Some(last) if last.move_number == move_number && last.black.is_none() => {
                    last.black = Some(record);
                }
                _ => self.entries.push(MoveLogEntry {
                    move_number,
                    white: None,
                    black: Some(record),
                }),
            },
        }
    }

    #[inline]
    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of half-moves recorded.
    pub fn move_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| usize::from(entry.white.is_some()) + usize::from(entry.black.is_some()))
            .sum()
    }

    /// Records in play order.
    pub fn records(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| entry.white.iter().chain(entry.black.iter()))
    }

    pub fn render_lines(&self, symbols: PieceSymbols) -> Vec<String> {
        self.entries.iter().map(|entry| entry.render(symbols)).collect()
    }
}
