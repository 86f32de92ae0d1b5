//! FEN-to-GameState parser.
//!
//! Reads the piece placement, side to move, and fullmove number. Castling,
//! en passant, and the halfmove clock have no meaning on this board: they are
//! checked for shape and then dropped. Trailing fields may be omitted.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::chess_types::*;
use crate::notation::move_notation::piece_to_letter;
use crate::utils::algebraic::{algebraic_to_square, coordinates_to_square};

pub fn parse_fen(fen: &str) -> BoardResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().unwrap_or("w");
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side = parse_side_to_move(side_part)?;
    check_castling_field(castling_part)?;
    if en_passant_part != "-" {
        algebraic_to_square(en_passant_part)
            .map_err(|_| invalid(&format!("bad en-passant square {en_passant_part}")))?;
    }
    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad halfmove clock {halfmove_part}")))?;
    let fullmove = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("bad fullmove number {fullmove_part}")))?;

    Ok(GameState::with_board(board, side, fullmove))
}

fn parse_board(board_part: &str) -> BoardResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as i16;
        let mut file = 0i16;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("bad empty-square count '{ch}'")));
                }
                file += empty_count as i16;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("bad piece character '{ch}'")))?;
            let square = coordinates_to_square(rank, file)
                .map_err(|_| invalid(&format!("rank {rank} has too many files")))?;
            board.place(square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> BoardResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("bad side-to-move field {side_part}"))),
    }
}

fn check_castling_field(castling_part: &str) -> BoardResult<()> {
    if castling_part == "-" || castling_part.chars().all(|ch| "KQkq".contains(ch)) {
        return Ok(());
    }
    Err(invalid(&format!("bad castling field {castling_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    PieceKind::ALL
        .into_iter()
        .map(|kind| Piece::new(kind, color))
        .find(|piece| piece_to_letter(*piece) == ch)
}

fn invalid(reason: &str) -> BoardError {
    BoardError::InvalidFen(reason.to_owned())
}
