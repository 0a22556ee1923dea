use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::directions::KNIGHT_OFFSETS;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        if let Some(to) = offset_square(from, d_rank, d_file) {
            push_step(game_state, from, to, piece, out);
        }
    }
}
