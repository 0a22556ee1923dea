//! Fixed-depth negamax engine.
//!
//! Wraps `search::negamax` with the default generator and scorer and owns the
//! RNG used for root move shuffling. A configured seed makes every game
//! reproducible; `new_game` rewinds the RNG to that seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::PositionalScorer;
use crate::search::negamax::{search, SearchConfig};

pub struct NegamaxEngine {
    config: SearchConfig,
    rng: StdRng,
    move_generator: LegalMoveGenerator,
    scorer: PositionalScorer,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: seeded_rng(config.seed),
            move_generator: LegalMoveGenerator,
            scorer: PositionalScorer,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Plum Negamax"
    }

    fn new_game(&mut self) {
        self.rng = seeded_rng(self.config.seed);
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let mut scratch = game_state.clone();
        let result = match search(
            &mut scratch,
            &self.move_generator,
            &self.scorer,
            self.config.depth,
            &mut self.rng,
        ) {
            Ok(result) => result,
            Err(ChessError::GameOver { status }) => {
                return Ok(EngineOutput {
                    best_move: None,
                    score: None,
                    info_lines: vec![format!("game over: {status}")],
                });
            }
            Err(err) => return Err(err),
        };

        let mut info_lines = vec![format!(
            "depth {}: best {} scores {} after {} nodes and {} cutoffs",
            self.config.depth, result.best_move, result.score, result.nodes, result.cutoffs
        )];
        if result.used_fallback {
            info_lines.push(format!(
                "every move loses to mate within {} plies; {} was picked at random",
                self.config.depth, result.best_move
            ));
        }

        Ok(EngineOutput {
            best_move: Some(result.best_move),
            score: Some(result.score),
            info_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::NegamaxEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::search::negamax::SearchConfig;

    fn seeded(seed: u64, depth: u8) -> NegamaxEngine {
        NegamaxEngine::new(SearchConfig {
            depth,
            seed: Some(seed),
        })
    }

    #[test]
    fn seeded_engine_replays_after_new_game() {
        let game = GameState::new_game();
        let mut engine = seeded(9, 2);
        let first = engine.choose_move(&game).expect("search").best_move;
        engine.new_game();
        let replay = engine.choose_move(&game).expect("search").best_move;
        assert!(first.is_some());
        assert_eq!(first, replay);
    }

    #[test]
    fn leaves_caller_state_alone() {
        let game = GameState::new_game();
        let before = game.clone();
        let mut engine = seeded(1, 2);
        let output = engine.choose_move(&game).expect("search");
        assert_eq!(game, before);
        assert!(output.score.is_some());
        assert!(output.info_lines[0].starts_with("depth 2: best "));
    }

    #[test]
    fn lost_position_reports_the_random_pick() {
        let game = GameState::from_fen("7k/8/6K1/8/8/8/8/R7 b - - 0 1").expect("FEN");
        let output = seeded(5, 2).choose_move(&game).expect("search");
        assert_eq!(output.best_move.map(|mv| mv.to_long_algebraic()), Some("h8g8".to_owned()));
        assert_eq!(output.info_lines.len(), 2);
        assert!(output.info_lines[1].contains("picked at random"));
    }

    #[test]
    fn finished_game_yields_no_move() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN");
        let output = seeded(0, 3).choose_move(&game).expect("stalemate is not an error");
        assert_eq!(output.best_move, None);
        assert_eq!(output.info_lines, vec!["game over: stalemate"]);
    }
}
