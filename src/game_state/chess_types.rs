/// Core value types shared by the board, move generation, and notation.
///
/// Squares are stored as a flat index `(rank - 1) * 8 + file`, so `a1 == 0`,
/// `h1 == 7`, and `h8 == 63`. Ranks are 1-based and files 0-based, matching
/// the way squares are named on the board (`file 4, rank 2` is `e2`).
use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A piece token: what it is and whose it is. Glyphs live in the notation
/// and rendering layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// One of the 64 board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Build a square from a 1-based rank and 0-based file.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 1 || rank > 8 || file > 7 {
            return None;
        }
        Some(Self((rank - 1) * 8 + file))
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index > 63 {
            return None;
        }
        Some(Self(index))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8 + 1
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// One-hot mask of this square.
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// Step by a rank/file delta, or `None` when the step leaves the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = self.rank() as i16 + rank_delta as i16;
        let file = self.file() as i16 + file_delta as i16;
        if rank < 1 || rank > 8 || file < 0 || file > 7 {
            return None;
        }
        Square::new(rank as u8, file as u8)
    }

    /// Iterate the squares of a mask in ascending index order.
    pub fn iter_mask(mask: u64) -> impl Iterator<Item = Square> {
        let mut remaining = mask;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let index = remaining.trailing_zeros() as u8;
            remaining &= remaining - 1;
            Some(Square(index))
        })
    }

    /// All 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file()), self.rank())
    }
}

/// A requested relocation. Produced from generated destinations and consumed
/// right away by the applicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Active,
    Ended,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "In Progress"),
            GameStatus::Ended => write!(f, "Ended"),
        }
    }
}
