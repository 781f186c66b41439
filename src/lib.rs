//! Crate root module declarations for the schach_engine rules engine.
//!
//! This file exposes the board model, the per-piece move geometry, the
//! legality and game-end machinery, and notation/snapshot helpers so
//! binaries, benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
    pub mod game_state;
    pub mod game_status;
    pub mod replay;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_end_checks;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_snapshot;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
