//! Static board evaluation.
//!
//! Search delegates position scoring to the `BoardScorer` trait so alternate
//! heuristics can be swapped without touching search code. Scores are in
//! centipawns from Light's perspective: positive favors Light.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::game_status;
use crate::move_generation::move_generator::GameStatus;
use crate::search::piece_square_tables::positional_bonus;

pub type Score = i32;

/// Checkmate magnitude: 1000 pawns.
pub const CHECKMATE_SCORE: Score = 100_000;
pub const STALEMATE_SCORE: Score = 0;

pub trait BoardScorer: Send + Sync {
    /// Material and positional score, ignoring whether the game is over.
    fn static_score(&self, game_state: &GameState) -> Score;

    /// Full evaluation. Checkmate and stalemate override the static score.
    fn score(&self, game_state: &GameState) -> ChessResult<Score> {
        Ok(match game_status(game_state)? {
            GameStatus::Checkmate => terminal_checkmate_score(game_state.side_to_move),
            GameStatus::Stalemate => STALEMATE_SCORE,
            GameStatus::Ongoing => self.static_score(game_state),
        })
    }
}

/// Score when `mated` has been checkmated.
#[inline]
pub const fn terminal_checkmate_score(mated: Color) -> Score {
    match mated {
        Color::Light => -CHECKMATE_SCORE,
        Color::Dark => CHECKMATE_SCORE,
    }
}

/// Material plus piece-square tables. Kings carry no material value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> Score {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    pub fn material_balance_white_minus_black(game_state: &GameState) -> Score {
        game_state
            .board
            .iter()
            .flatten()
            .map(|piece| signed(piece.color, Self::piece_value(piece.kind)))
            .sum()
    }
}

impl BoardScorer for PositionalScorer {
    fn static_score(&self, game_state: &GameState) -> Score {
        game_state
            .board
            .iter()
            .enumerate()
            .filter_map(|(square, piece)| piece.map(|p| (square as Square, p)))
            .map(|(square, piece)| {
                let bonus = positional_bonus(piece.kind, piece.color, square);
                let value = Self::piece_value(piece.kind) + bonus;
                signed(piece.color, value)
            })
            .sum()
    }
}

#[inline]
fn signed(color: Color, value: Score) -> Score {
    match color {
        Color::Light => value,
        Color::Dark => -value,
    }
}

/// Evaluate with the default scorer.
pub fn score(game_state: &GameState) -> ChessResult<Score> {
    PositionalScorer.score(game_state)
}
