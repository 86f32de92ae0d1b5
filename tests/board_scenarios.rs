//! End-to-end play through the public API.

use plum_board::game_state::chess_types::{Board, Color, GameState, Piece, PieceKind, Square};
use plum_board::interaction::selection::{BoardSession, SelectionOutcome};
use plum_board::move_generation::move_apply::{apply_move, play_move};
use plum_board::move_generation::move_generator::generate_moves;
use plum_board::moves::bishop_moves::BISHOP_RAYS;
use plum_board::moves::king_moves::king_attacks;
use plum_board::moves::knight_moves::knight_attacks;
use plum_board::moves::rook_moves::ROOK_RAYS;
use plum_board::notation::move_notation::PieceSymbols;

fn sq(name: &str) -> Square {
    plum_board::utils::algebraic::algebraic_to_square(name).expect("valid square")
}

fn names(squares: &[Square]) -> Vec<String> {
    squares.iter().map(Square::to_string).collect()
}

#[test]
fn white_e_pawn_from_start_has_single_and_double_step() {
    let game = GameState::new_game();
    assert_eq!(names(&generate_moves(&game.board, sq("e2"))), ["e3", "e4"]);
}

#[test]
fn move_numbers_pair_white_and_black() {
    let mut game = GameState::new_game();

    play_move(&mut game, sq("e2"), sq("e4")).expect("e2-e4");
    assert_eq!(game.move_number, 1);
    play_move(&mut game, sq("d7"), sq("d5")).expect("d7-d5");
    assert_eq!(game.move_number, 2);
    assert_eq!(game.active_player, Color::White);

    let capture = play_move(&mut game, sq("e4"), sq("d5")).expect("e4xd5");
    assert_eq!(capture.move_number, 2);
    assert_eq!(capture.notation, "♙e4xd5");

    assert_eq!(
        game.move_log.render_lines(PieceSymbols::Unicode),
        ["1. ♙e2-e4 ♟d7-d5", "2. ♙e4xd5"]
    );
}

#[test]
fn rook_on_open_file_stops_at_the_capture() {
    let mut game = GameState::new_game();
    // Clear the a-file for the white rook and bring a black pawn to a5.
    for (from, to) in [
        ("a2", "a4"),
        ("b7", "b5"),
        ("a4", "b5"),
        ("a7", "a5"),
        ("a1", "a2"),
        ("h7", "h6"),
    ] {
        play_move(&mut game, sq(from), sq(to)).expect("scripted move is generated");
    }

    let rook_moves = names(&generate_moves(&game.board, sq("a2")));
    for expected in ["a1", "a3", "a4", "a5"] {
        assert!(rook_moves.contains(&expected.to_owned()), "missing {expected}");
    }
    assert!(!rook_moves.contains(&"a6".to_owned()));
    assert_eq!(rook_moves, ["a1", "a3", "a4", "a5"]);
}

#[test]
fn selecting_an_empty_square_changes_nothing() {
    let mut session = BoardSession::new();
    assert!(session.candidates(sq("e4")).is_empty());
    assert_eq!(session.click(sq("e4")), SelectionOutcome::Cleared);
    assert_eq!(session.selected(), None);
    assert_eq!(session.game_state(), &GameState::new_game());
}

#[test]
fn reset_after_a_game_restores_everything() {
    let mut session = BoardSession::new();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("d1", "h5"), ("b8", "c6")] {
        assert!(matches!(
            session.move_piece(sq(from), sq(to)),
            SelectionOutcome::Moved(_)
        ));
    }
    session.click(sq("h5"));

    session.reset();

    let fresh = GameState::new_game();
    assert_eq!(session.game_state(), &fresh);
    assert_eq!(session.game_state().active_player, Color::White);
    assert_eq!(session.game_state().move_number, 1);
    assert!(session.game_state().move_log.is_empty());
}

#[test]
fn sliders_never_jump_blockers_anywhere() {
    let blocker = Piece::new(PieceKind::Pawn, Color::Black);
    for kind in [PieceKind::Rook, PieceKind::Bishop, PieceKind::Queen] {
        for origin in Square::all() {
            for block_at in Square::all().filter(|s| *s != origin) {
                let mut board = Board::empty();
                board.place(origin, Piece::new(kind, Color::White));
                board.place(block_at, blocker);

                let moves = generate_moves(&board, origin);
                let (dr, df) = (
                    block_at.rank() as i8 - origin.rank() as i8,
                    block_at.file() as i8 - origin.file() as i8,
                );
                let on_line = (dr == 0 || df == 0 || dr.abs() == df.abs())
                    && match kind {
                        PieceKind::Rook => dr == 0 || df == 0,
                        PieceKind::Bishop => dr != 0 && df != 0,
                        _ => true,
                    };
                if !on_line {
                    continue;
                }

                assert!(moves.contains(&block_at), "{kind:?} {origin} should reach {block_at}");
                let (step_r, step_f) = (dr.signum(), df.signum());
                let mut beyond = block_at.offset(step_r, step_f);
                while let Some(square) = beyond {
                    assert!(
                        !moves.contains(&square),
                        "{kind:?} {origin} jumped {block_at} to {square}"
                    );
                    beyond = square.offset(step_r, step_f);
                }
            }
        }
    }
}

#[test]
fn empty_board_slides_match_ray_tables() {
    for origin in Square::all() {
        let mut board = Board::empty();
        board.place(origin, Piece::new(PieceKind::Rook, Color::Black));
        let mask = generate_moves(&board, origin)
            .iter()
            .fold(0u64, |acc, s| acc | s.mask());
        assert_eq!(mask, ROOK_RAYS[origin.index()]);

        board.place(origin, Piece::new(PieceKind::Bishop, Color::Black));
        let mask = generate_moves(&board, origin)
            .iter()
            .fold(0u64, |acc, s| acc | s.mask());
        assert_eq!(mask, BISHOP_RAYS[origin.index()]);
    }
}

#[test]
fn knight_and_king_ignore_occupancy_except_own_pieces() {
    for origin in Square::all() {
        for kind in [PieceKind::Knight, PieceKind::King] {
            let fixed = match kind {
                PieceKind::Knight => knight_attacks(origin.index() as u8),
                _ => king_attacks(origin.index() as u8),
            };

            let mut board = Board::empty();
            board.place(origin, Piece::new(kind, Color::White));
            for other in Square::all().filter(|s| *s != origin) {
                board.place(other, Piece::new(PieceKind::Pawn, Color::Black));
            }

            let mask = generate_moves(&board, origin)
                .iter()
                .fold(0u64, |acc, s| acc | s.mask());
            assert_eq!(mask, fixed, "{kind:?} on {origin}");
        }
    }
}

#[test]
fn pawn_double_step_iff_home_rank_and_path_clear() {
    for color in [Color::White, Color::Black] {
        let (dir, home) = match color {
            Color::White => (1i8, 2u8),
            Color::Black => (-1i8, 7u8),
        };
        for rank in 2..=7u8 {
            for blocked in [None, Some(1i8), Some(2i8)] {
                let origin = Square::new(rank, 3).expect("d-file square");
                let mut board = Board::empty();
                board.place(origin, Piece::new(PieceKind::Pawn, color));
                if let Some(distance) = blocked {
                    if let Some(block) = origin.offset(dir * distance, 0) {
                        board.place(block, Piece::new(PieceKind::Knight, color.opposite()));
                    }
                }

                let moves = generate_moves(&board, origin);
                let two = origin.offset(2 * dir, 0);
                let offered = two.is_some_and(|s| moves.contains(&s));
                assert_eq!(
                    offered,
                    rank == home && blocked.is_none(),
                    "{color:?} pawn on rank {rank}, blocked {blocked:?}"
                );
            }
        }
    }
}

#[test]
fn apply_toggles_turn_once_per_move() {
    let mut game = GameState::new_game();
    let script = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    for (ply, (from, to)) in script.iter().enumerate() {
        let before = game.active_player;
        let number_before = game.move_number;
        apply_move(&mut game, sq(from), sq(to)).expect("knight present");
        assert_eq!(game.active_player, before.opposite());
        let expected = if game.active_player == Color::White {
            number_before + 1
        } else {
            number_before
        };
        assert_eq!(game.move_number, expected, "ply {ply}");
    }
    assert_eq!(game.board, Board::starting_position());
    assert_eq!(game.move_number, 3);
}
