//! Building blocks shared by the per-piece move generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

/// Push a move to `to` unless an own piece stands there.
#[inline]
pub fn push_step(
    game_state: &GameState,
    from: Square,
    to: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    match game_state.board[to as usize] {
        None => out.push(Move::quiet(from, to, piece)),
        Some(target) if target.color != piece.color => {
            out.push(Move::new(from, to, piece, Some(target), None, 0));
        }
        Some(_) => {}
    }
}

/// Walk each ray until the board edge, an own piece, or the first enemy
/// piece (which is included as a capture).
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in directions {
        let mut cursor = from;
        while let Some(to) = offset_square(cursor, d_rank, d_file) {
            match game_state.board[to as usize] {
                None => out.push(Move::quiet(from, to, piece)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::new(from, to, piece, Some(target), None, 0));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
