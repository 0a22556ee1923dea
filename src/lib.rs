//! Crate root module declarations for the Plum Negamax chess engine.
//!
//! Exposes the rules core (game state, move generation, check detection,
//! apply/undo), the evaluator and negamax search, the engine façade used by
//! calling layers, and notation helpers, so binaries, tests, and benches can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod directions;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod check_detection;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod background;
    pub mod board_scoring;
    pub mod negamax;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod move_notation;
    pub mod render_game_state;
}
