//! Mailbox board: one optional piece per square.
//!
//! Move generation works on occupancy masks, so the board can also summarise
//! itself as per-color 64-bit square sets on demand.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// The standard initial position.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for sq in Square::all() {
            let back = BACK_RANK[sq.file() as usize];
            let piece = match sq.rank() {
                1 => Piece::new(back, Color::White),
                2 => Piece::new(PieceKind::Pawn, Color::White),
                7 => Piece::new(PieceKind::Pawn, Color::Black),
                8 => Piece::new(back, Color::Black),
                _ => continue,
            };
            board.place(sq, piece);
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Put a piece on a square, returning whatever was there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.index()].replace(piece)
    }

    /// Empty a square, returning whatever was there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Occupied squares, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn occupancy_by_color(&self, color: Color) -> u64 {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .fold(0u64, |acc, (sq, _)| acc | sq.mask())
    }

    pub fn occupancy_all(&self) -> u64 {
        self.pieces().fold(0u64, |acc, (sq, _)| acc | sq.mask())
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn starting_position_has_one_king_per_color() {
        let board = Board::starting_position();
        assert_eq!(board.count(Piece::new(PieceKind::King, Color::White)), 1);
        assert_eq!(board.count(Piece::new(PieceKind::King, Color::Black)), 1);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn starting_position_places_back_ranks() {
        let board = Board::starting_position();
        let e1 = Square::new(1, 4).expect("e1");
        let d8 = Square::new(8, 3).expect("d8");
        assert_eq!(
            board.piece_at(e1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(d8),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.occupancy_by_color(Color::White), 0xFFFF);
        assert_eq!(board.occupancy_by_color(Color::Black), 0xFFFFu64 << 48);
    }

    #[test]
    fn place_and_clear_return_previous_occupant() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3).expect("d4");
        let rook = Piece::new(PieceKind::Rook, Color::Black);

        assert_eq!(board.place(d4, rook), None);
        assert!(!board.is_empty(d4));
        assert_eq!(board.clear(d4), Some(rook));
        assert!(board.is_empty(d4));
    }
}
