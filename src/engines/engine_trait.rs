//! Engine abstraction used by the calling layer.
//!
//! Defines the output payload so different move-selection strategies can be
//! swapped at runtime behind a single trait interface, including on a
//! background worker thread.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::Score;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the position has no legal moves.
    pub best_move: Option<Move>,
    /// Side-to-move perspective, when the engine computes one.
    pub score: Option<Score>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Reset any per-game state (for example reseeding a fixed RNG).
    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `game_state` is left untouched.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
