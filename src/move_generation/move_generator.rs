//! Pseudo-legal destination generation.
//!
//! Dispatches on the piece standing on the origin square to its shape rule,
//! then removes squares held by the mover's own color. Nothing here looks at
//! king safety: a move that leaves the mover's king attacked is still
//! generated.

use log::trace;

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Destination mask for the piece on `origin`; empty if there is none.
pub fn generate_moves_mask(board: &Board, origin: Square) -> u64 {
    let Some(piece) = board.piece_at(origin) else {
        return 0;
    };

    let own_occ = board.occupancy_by_color(piece.color);
    let enemy_occ = board.occupancy_by_color(piece.color.opposite());
    let occupancy = own_occ | enemy_occ;
    let from = origin.index() as u8;

    let candidates = match piece.kind {
        PieceKind::Pawn => pawn_moves(piece.color, from, occupancy, enemy_occ),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        PieceKind::King => king_attacks(from),
    };

    candidates & !own_occ
}

/// Candidate destinations for the piece on `origin`, ascending by square
/// index. Empty when the origin holds no piece.
pub fn generate_moves(board: &Board, origin: Square) -> Vec<Square> {
    let destinations: Vec<Square> =
        Square::iter_mask(generate_moves_mask(board, origin)).collect();
    trace!("{} candidate destinations from {origin}", destinations.len());
    destinations
}

/// Every pseudo-legal move for `color`, grouped by origin square.
pub fn generate_moves_for_color(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::<Move>::with_capacity(64);

    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for to in Square::iter_mask(generate_moves_mask(board, from)) {
            out.push(Move::new(from, to));
        }
    }

    out
}
