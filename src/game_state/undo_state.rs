use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Everything needed to reverse one `make_move`.
///
/// Returned by `GameState::apply` and consumed by `GameState::undo`; the game
/// keeps a copy of every record in its move log as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    pub mv: Move,
    /// Piece removed from the board and the square it was removed from.
    pub captured: Option<(Piece, Square)>,

    pub prev_castling_rights: CastleRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
    pub prev_move_log_len: usize,
}
