//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search walks the tree on the caller's `GameState` with make/unmake and
//! always restores it before returning, including on error. Root moves are
//! shuffled with a caller-supplied RNG so equal-scoring moves vary from game
//! to game while a seeded RNG keeps tests deterministic.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::check_detection::is_square_attacked;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::{game_status, LegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, PositionalScorer, Score, CHECKMATE_SCORE};

/// Bound wider than any reachable score.
pub const INFINITY: Score = CHECKMATE_SCORE * 2;

/// The original fixed AI depth.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search. Fixed per engine; zero is treated as one.
    pub depth: u8,
    /// Seed for root move shuffling. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score of `best_move` from the side to move's perspective.
    pub score: Score,
    pub nodes: u64,
    pub cutoffs: u64,
    /// True when every root move scored as a forced loss and `best_move` was
    /// drawn at random instead.
    pub used_fallback: bool,
}

#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

/// Pick a move for the side to move with the default generator and scorer.
pub fn best_move<R: Rng + ?Sized>(
    game_state: &mut GameState,
    depth: u8,
    rng: &mut R,
) -> ChessResult<Move> {
    search(game_state, &LegalMoveGenerator, &PositionalScorer, depth, rng).map(|r| r.best_move)
}

/// Root of the negamax search.
///
/// Fails with `ChessError::GameOver` when the position has no legal moves.
pub fn search<G: MoveGenerator, S: BoardScorer, R: Rng + ?Sized>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    rng: &mut R,
) -> ChessResult<SearchResult> {
    let depth = depth.max(1);
    let mut moves = generator.generate_legal_moves(game_state)?;
    if moves.is_empty() {
        return Err(ChessError::GameOver {
            status: game_status(game_state)?,
        });
    }
    moves.shuffle(rng);

    let mut stats = SearchStats::default();
    let mut alpha = -INFINITY;
    let beta = INFINITY;
    // A root move is only chosen if it scores above a plain loss, so a side
    // that gets mated whatever it plays ends up on the random fallback.
    let mut best: Option<Move> = None;
    let mut best_score = -CHECKMATE_SCORE;
    let mut max_seen = -INFINITY;

    for mv in &moves {
        let record = make_move(game_state, *mv);
        let result = negamax(game_state, generator, scorer, depth - 1, -beta, -alpha, &mut stats);
        unmake_move(game_state, &record);
        let score = -result?;
        trace!(mv = %mv, score, "root move scored");

        // Strictly greater: ties keep the first move seen, which the shuffle made random.
        if score > best_score {
            best_score = score;
            best = Some(*mv);
        }
        max_seen = max_seen.max(score);
        alpha = alpha.max(score);
    }

    let (best_move, score, used_fallback) = match best {
        Some(mv) => (mv, best_score, false),
        None => {
            let mv = random_move(&moves, rng).ok_or(ChessError::EmptyMoveList { depth })?;
            warn!(mv = %mv, score = max_seen, "every move loses to mate, playing a random one");
            (mv, max_seen, true)
        }
    };

    debug!(
        depth,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        best = %best_move,
        score,
        "search complete"
    );

    Ok(SearchResult {
        best_move,
        score,
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
        used_fallback,
    })
}

/// Score of `game_state` for the side to move, searched `depth` plies deep.
///
/// Terminal positions short-circuit at any depth. Mates are scored as
/// `CHECKMATE_SCORE + depth`, so a mate found with more depth remaining
/// (a shorter mate) is preferred.
fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: Score,
    beta: Score,
    stats: &mut SearchStats,
) -> ChessResult<Score> {
    stats.nodes += 1;

    let moves = generator.generate_legal_moves(game_state)?;
    if moves.is_empty() {
        return terminal_score(game_state, depth);
    }

    if depth == 0 {
        let white_score = scorer.static_score(game_state);
        return Ok(match game_state.side_to_move {
            Color::Light => white_score,
            Color::Dark => -white_score,
        });
    }

    let mut best = -INFINITY;
    for mv in moves {
        let record = make_move(game_state, mv);
        let result = negamax(game_state, generator, scorer, depth - 1, -beta, -alpha, stats);
        unmake_move(game_state, &record);
        let score = -result?;

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok(best)
}

fn terminal_score(game_state: &GameState, depth: u8) -> ChessResult<Score> {
    let side = game_state.side_to_move;
    let king = game_state.king_square(side)?;
    if is_square_attacked(&game_state.board, king, side.opposite(), None) {
        Ok(-(CHECKMATE_SCORE + depth as Score))
    } else {
        Ok(0)
    }
}

/// Uniformly random legal move. The root falls back to it when every move
/// loses to mate.
pub fn random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}
