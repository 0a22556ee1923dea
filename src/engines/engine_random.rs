//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used for diagnostics, integration
//! testing, and as a sparring partner for the negamax engine.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::negamax::random_move;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            seed,
            rng: rng_for(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Random"
    }

    fn new_game(&mut self) {
        self.rng = rng_for(self.seed);
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state)?;

        Ok(EngineOutput {
            best_move: random_move(&legal_moves, &mut self.rng),
            score: None,
            info_lines: vec![format!("picked from {} legal moves", legal_moves.len())],
        })
    }
}
