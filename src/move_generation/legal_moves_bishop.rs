use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::directions::DIAGONAL_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    push_ray_moves(game_state, from, piece, &DIAGONAL_DIRECTIONS, out);
}
