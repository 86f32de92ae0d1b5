//! Move notation.
//!
//! Records read `<piece><from><sep><to>`, e.g. `♙e2-e4` or `♙e4xd5`, where the
//! separator is `x` for a capture and `-` otherwise.

use std::fmt;

use crate::game_state::chess_types::*;

/// How pieces are written in notation and board renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceSymbols {
    /// Chess glyphs, ♙ … ♚.
    #[default]
    Unicode,
    /// FEN letters, uppercase for white.
    Letters,
}

impl PieceSymbols {
    pub fn symbol(self, piece: Piece) -> char {
        match self {
            PieceSymbols::Unicode => piece_to_unicode(piece),
            PieceSymbols::Letters => piece_to_letter(piece),
        }
    }
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

pub fn piece_to_letter(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

#[inline]
pub fn format_move(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> String {
    format_move_with(PieceSymbols::Unicode, piece, from, to, captured)
}

pub fn format_move_with(
    symbols: PieceSymbols,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
) -> String {
    let separator = if captured.is_some() { 'x' } else { '-' };
    format!("{}{from}{separator}{to}", symbols.symbol(piece))
}

/// What was moved where, and what (if anything) it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub fn notation(&self, symbols: PieceSymbols) -> String {
        format_move_with(symbols, self.piece, self.from, self.to, self.captured)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation(PieceSymbols::Unicode))
    }
}
