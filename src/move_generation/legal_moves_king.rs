use crate::game_state::chess_rules::{kingside_geometry, queenside_geometry};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::check_detection::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::directions::ALL_DIRECTIONS;
use crate::moves::move_descriptions::{Move, FLAG_CASTLING};

/// Adjacent steps plus castling. Step destinations are not yet checked for
/// attacks; castling moves are fully legal when emitted.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    for (d_rank, d_file) in ALL_DIRECTIONS {
        if let Some(to) = offset_square(from, d_rank, d_file) {
            push_step(game_state, from, to, piece, out);
        }
    }

    generate_castling_moves(game_state, from, piece, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let side = piece.color;
    let enemy = side.opposite();
    let rights = game_state.castling_rights;
    let board = &game_state.board;

    for (allowed, geometry) in [
        (rights.kingside(side), kingside_geometry(side)),
        (rights.queenside(side), queenside_geometry(side)),
    ] {
        if !allowed || from != geometry.king_from {
            continue;
        }
        if board[geometry.rook_from as usize] != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }
        if geometry
            .must_be_empty
            .iter()
            .any(|&sq| board[sq as usize].is_some())
        {
            continue;
        }
        // Origin, transit, and destination must all be safe.
        if geometry
            .king_path
            .iter()
            .any(|&sq| is_square_attacked(board, sq, enemy, Some(from)))
        {
            continue;
        }
        out.push(Move::new(from, geometry.king_to, piece, None, None, FLAG_CASTLING));
    }
}
