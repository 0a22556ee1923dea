//! Core mailbox board state.
//!
//! `GameState` is the single owner of the board for one game. It is mutated
//! in place by `apply`/`undo` (checked, for the calling layer) and by
//! `make_move`/`unmake_move` (unchecked, for search and perft). Every applied
//! move leaves an `UndoRecord` on the move log, which doubles as the history
//! of castling rights and en-passant targets.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::check_detection::is_square_attacked;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastleRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Cached king locations, indexed by `Color::index()`.
    pub king_squares: [Square; 2],

    pub move_log: Vec<UndoRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::Light,
            castling_rights: CastleRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [0; 2],
            move_log: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board with no kings. Only useful as a base for position setup.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            game_state.board[make_square(0, file) as usize] = Some(Piece::new(Color::Light, kind));
            game_state.board[make_square(1, file) as usize] =
                Some(Piece::new(Color::Light, PieceKind::Pawn));
            game_state.board[make_square(6, file) as usize] =
                Some(Piece::new(Color::Dark, PieceKind::Pawn));
            game_state.board[make_square(7, file) as usize] = Some(Piece::new(Color::Dark, kind));
        }
        game_state.castling_rights = CastleRights::ALL;
        game_state.king_squares = [4, 60];
        debug_assert_eq!(game_state.get_fen(), STARTING_POSITION_FEN);
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    /// Location of `color`'s king, verified against the board.
    #[inline]
    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        let square = self.king_squares[color.index()];
        match self.board[square as usize] {
            Some(Piece {
                color: c,
                kind: PieceKind::King,
            }) if c == color => Ok(square),
            _ => Err(ChessError::corrupt(format!("{color:?} king is missing"))),
        }
    }

    /// Rescan the board for kings and refresh the cache.
    ///
    /// Fails with `CorruptState` unless each side has exactly one king.
    pub fn locate_kings(&mut self) -> ChessResult<()> {
        for color in [Color::Light, Color::Dark] {
            let mut kings = (0..64u8).filter(|&sq| {
                self.board[sq as usize] == Some(Piece::new(color, PieceKind::King))
            });
            let first = kings
                .next()
                .ok_or_else(|| ChessError::corrupt(format!("{color:?} king is missing")))?;
            if kings.next().is_some() {
                return Err(ChessError::corrupt(format!("{color:?} has more than one king")));
            }
            self.king_squares[color.index()] = first;
        }
        Ok(())
    }

    pub fn is_in_check(&self) -> ChessResult<bool> {
        let king = self.king_square(self.side_to_move)?;
        Ok(is_square_attacked(
            &self.board,
            king,
            self.side_to_move.opposite(),
            None,
        ))
    }

    /// Number of plies played since this state was created.
    #[inline]
    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().map(|record| record.mv)
    }

    /// Play `mv` if it is legal in the current position.
    ///
    /// The move is matched structurally (from, to, promotion) against the
    /// generated legal moves, so callers may pass a bare move built from two
    /// clicked squares. Illegal moves are rejected without touching the state.
    pub fn apply(&mut self, mv: Move) -> ChessResult<UndoRecord> {
        let legal = legal_moves(self)?;
        let Some(found) = legal.into_iter().find(|candidate| *candidate == mv) else {
            debug!(mv = %mv, "rejected illegal move");
            return Err(ChessError::InvalidMove {
                mv: mv.to_long_algebraic(),
            });
        };
        Ok(make_move(self, found))
    }

    /// Reverse `record`, which must be the most recently applied move.
    pub fn undo(&mut self, record: UndoRecord) -> ChessResult<()> {
        match self.move_log.last() {
            None => Err(ChessError::NothingToUndo),
            Some(last)
                if *last == record && record.prev_move_log_len + 1 == self.move_log.len() =>
            {
                unmake_move(self, &record);
                Ok(())
            }
            Some(_) => Err(ChessError::UndoOutOfOrder {
                mv: record.mv.to_long_algebraic(),
            }),
        }
    }

    /// Reverse the most recent move from the log.
    pub fn undo_last(&mut self) -> ChessResult<UndoRecord> {
        let record = *self.move_log.last().ok_or(ChessError::NothingToUndo)?;
        unmake_move(self, &record);
        Ok(record)
    }
}
