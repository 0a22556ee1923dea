//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type across the crate. Input-related
//! variants (`InvalidMove`, `InvalidFen`, `InvalidNotation`, undo misuse) are
//! recoverable: the operation was rejected and the game state is unchanged.
//! `CorruptState` and `EmptyMoveList` indicate a broken invariant; the current
//! game cannot continue and only a fresh `GameState::new_game()` recovers.

use thiserror::Error;

use crate::move_generation::move_generator::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The move is not in the legal move set of the current position.
    #[error("invalid move {mv}: not legal in the current position")]
    InvalidMove { mv: String },

    /// A board invariant was violated (for example a missing king).
    #[error("corrupt game state: {reason}")]
    CorruptState { reason: String },

    /// A non-terminal search node produced no moves.
    #[error("move generator returned no moves for a non-terminal position at depth {depth}")]
    EmptyMoveList { depth: u8 },

    /// `undo` was handed a record that is not the most recent one.
    #[error("undo record for {mv} is not the most recent move")]
    UndoOutOfOrder { mv: String },

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid move notation: {0}")]
    InvalidNotation(String),

    /// A move was requested from a position that has already ended.
    #[error("game is over: {status}")]
    GameOver { status: GameStatus },

    /// The background search worker exited without delivering a move.
    #[error("search worker failed: {0}")]
    SearchWorker(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

impl ChessError {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        ChessError::CorruptState {
            reason: reason.into(),
        }
    }

    /// True for errors that invalidate the whole game session.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChessError::CorruptState { .. } | ChessError::EmptyMoveList { .. }
        )
    }
}
