//! Move application.
//!
//! `apply_move` is the raw applicator: it trusts the caller to pass a
//! generated destination and only refuses an empty origin. `play_move` is the
//! command entry point used by interactive callers and checks turn and
//! destination first. Both leave the state untouched when they return `Err`.

use log::debug;

use crate::errors::{BoardError, BoardResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_moves_mask;
use crate::notation::move_notation::MoveRecord;

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub record: MoveRecord,
    /// Move number the move was played under (before any increment).
    pub move_number: u16,
    pub mover: Color,
    pub notation: String,
}

impl AppliedMove {
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.record.captured
    }
}

/// The move is logged under the color of the piece that moved; the turn
/// passes from the active player either way.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> BoardResult<AppliedMove> {
    let moved_piece = game_state
        .board
        .piece_at(from)
        .ok_or(BoardError::EmptyOrigin(from))?;

    let mover = moved_piece.color;
    let move_number = game_state.move_number;

    game_state.board.clear(from);
    let captured = game_state.board.place(to, moved_piece);

    let record = MoveRecord {
        piece: moved_piece,
        from,
        to,
        captured,
    };
    let notation = record.to_string();
    game_state.move_log.record(mover, move_number, record);

    game_state.active_player = game_state.active_player.opposite();
    if game_state.active_player == Color::White {
        game_state.move_number = game_state.move_number.saturating_add(1);
    }

    debug!("{move_number}. {mover} {notation}");

    Ok(AppliedMove {
        record,
        move_number,
        mover,
        notation,
    })
}

/// Validate a move request against the current turn and generated
/// destinations, then apply it.
pub fn play_move(game_state: &mut GameState, from: Square, to: Square) -> BoardResult<AppliedMove> {
    if !game_state.is_active() {
        return Err(BoardError::GameEnded);
    }

    let piece = game_state
        .board
        .piece_at(from)
        .ok_or(BoardError::EmptyOrigin(from))?;

    if piece.color != game_state.active_player {
        return Err(BoardError::NotYourTurn {
            square: from,
            active: game_state.active_player,
        });
    }

    if generate_moves_mask(&game_state.board, from) & to.mask() == 0 {
        return Err(BoardError::IllegalDestination { from, to });
    }

    apply_move(game_state, from, to)
}

#[cfg(test)]
mod tests {
    use super::{apply_move, play_move};
    use crate::errors::BoardError;
    use crate::game_state::chess_types::{
        Board, Color, GameState, GameStatus, Piece, PieceKind, Square,
    };
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn apply_relocates_piece_and_toggles_turn() {
        let mut game = GameState::new_game();
        let applied = apply_move(&mut game, sq("e2"), sq("e4")).expect("pawn on e2");

        assert!(game.board.is_empty(sq("e2")));
        assert_eq!(
            game.board.piece_at(sq("e4")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.active_player, Color::Black);
        assert_eq!(game.move_number, 1);
        assert_eq!(applied.move_number, 1);
        assert_eq!(applied.mover, Color::White);
        assert_eq!(applied.notation, "♙e2-e4");
        assert_eq!(applied.captured(), None);
    }

    #[test]
    fn move_number_advances_after_black_reply() {
        let mut game = GameState::new_game();
        apply_move(&mut game, sq("e2"), sq("e4")).expect("white pawn");
        assert_eq!(game.move_number, 1);
        apply_move(&mut game, sq("e7"), sq("e5")).expect("black pawn");
        assert_eq!(game.move_number, 2);
        assert_eq!(game.active_player, Color::White);
    }

    #[test]
    fn capture_discards_occupant_and_marks_notation() {
        let mut game = GameState::new_game();
        apply_move(&mut game, sq("e2"), sq("e4")).expect("white pawn");
        apply_move(&mut game, sq("d7"), sq("d5")).expect("black pawn");
        let applied = apply_move(&mut game, sq("e4"), sq("d5")).expect("capture");

        assert_eq!(
            applied.captured(),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(applied.notation, "♙e4xd5");
        assert_eq!(game.board.pieces().count(), 31);
        assert_eq!(game.status, GameStatus::Active);
    }

    #[test]
    fn apply_from_empty_square_is_a_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();

        let err = apply_move(&mut game, sq("e4"), sq("e5")).expect_err("e4 is empty");

        assert_eq!(err, BoardError::EmptyOrigin(sq("e4")));
        assert_eq!(game, before);
    }

    #[test]
    fn raw_apply_logs_piece_under_its_own_color() {
        let mut game = GameState::new_game();
        let applied = apply_move(&mut game, sq("b8"), sq("c6")).expect("knight on b8");

        assert_eq!(applied.mover, Color::Black);
        assert_eq!(game.active_player, Color::Black);
        assert_eq!(game.move_number, 1);

        let entry = &game.move_log.entries()[0];
        assert!(entry.white.is_none());
        assert_eq!(entry.black.map(|record| record.from), Some(sq("b8")));
    }

    #[test]
    fn kings_can_be_captured() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("e2"), Piece::new(PieceKind::Rook, Color::White));
        let mut game = GameState::with_board(board, Color::White, 1);

        let applied = play_move(&mut game, sq("e2"), sq("e8")).expect("rook reaches e8");

        assert_eq!(
            applied.captured(),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(game.status, GameStatus::Active);
    }

    #[test]
    fn play_rejects_wrong_side_and_illegal_destinations() {
        let mut game = GameState::new_game();
        let before = game.clone();

        assert_eq!(
            play_move(&mut game, sq("e7"), sq("e5")),
            Err(BoardError::NotYourTurn {
                square: sq("e7"),
                active: Color::White
            })
        );
        assert_eq!(
            play_move(&mut game, sq("e2"), sq("e5")),
            Err(BoardError::IllegalDestination {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(
            play_move(&mut game, sq("e3"), sq("e4")),
            Err(BoardError::EmptyOrigin(sq("e3")))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn play_refuses_when_game_has_ended() {
        let mut game = GameState::new_game();
        game.status = GameStatus::Ended;
        assert_eq!(
            play_move(&mut game, sq("e2"), sq("e4")),
            Err(BoardError::GameEnded)
        );
    }
}
