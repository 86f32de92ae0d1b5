//! Crate root module declarations for the Plum Board project.
//!
//! An 8×8 chess board core: board state, pseudo-legal move generation, move
//! application, move notation, and a headless click/drag selection session
//! that a front end (the bundled terminal binary, or any other) drives.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod perft;
}

pub mod notation {
    pub mod move_log;
    pub mod move_notation;
}

pub mod interaction {
    pub mod selection;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_list_export;
    pub mod random_playout;
    pub mod render_game_state;
}
