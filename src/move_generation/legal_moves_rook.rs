use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::directions::ORTHOGONAL_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    push_ray_moves(game_state, from, piece, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn rook_ray_stops_at_first_enemy_and_before_own_piece() {
        // Rook a1, own pawn a3, enemy knight d1.
        let game = GameState::from_fen("4k3/8/8/8/8/P7/8/R2nK3 w - - 0 1").expect("FEN");
        let mut moves = Vec::new();
        generate_rook_moves(&game, 0, Piece::new(Color::Light, PieceKind::Rook), &mut moves);

        let mut targets: Vec<Square> = moves.iter().map(|mv| mv.to).collect();
        targets.sort_unstable();
        // b1, c1, d1 (capture), a2.
        assert_eq!(targets, vec![1, 2, 3, 8]);
        assert!(moves.iter().any(|mv| mv.to == 3 && mv.is_capture()));
    }
}
