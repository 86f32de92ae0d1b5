use crate::game_state::chess_types::*;
use crate::notation::move_notation::piece_to_letter;

/// FEN for the current state. Castling and en passant are always `-` and the
/// halfmove clock is always `0`.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.active_player {
        Color::White => "w",
        Color::Black => "b",
    };

    format!("{} {} - - 0 {}", board, side_to_move, game_state.move_number)
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (1..=8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let piece = Square::new(rank, file).and_then(|sq| board.piece_at(sq));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_letter(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 1 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::GameState;
    use crate::move_generation::move_apply::apply_move;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn new_game_matches_starting_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn custom_placement_survives_reparse() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b - - 0 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, fen);
        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn fen_follows_played_moves() {
        let mut game = GameState::new_game();
        let e2 = algebraic_to_square("e2").expect("e2");
        let e4 = algebraic_to_square("e4").expect("e4");
        apply_move(&mut game, e2, e4).expect("pawn on e2");

        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );
    }
}
