use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<Move>,
) {
    let side = piece.color;
    let forward = side.pawn_direction();
    let board = &game_state.board;

    if let Some(one_step) = offset_square(from, forward, 0) {
        if board[one_step as usize].is_none() {
            push_pawn_move(from, one_step, piece, None, out);

            if square_rank(from) == side.pawn_start_rank() {
                if let Some(two_step) = offset_square(one_step, forward, 0) {
                    if board[two_step as usize].is_none() {
                        out.push(Move::new(
                            from,
                            two_step,
                            piece,
                            None,
                            None,
                            FLAG_DOUBLE_PAWN_PUSH,
                        ));
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(to) = offset_square(from, forward, d_file) else {
            continue;
        };
        match board[to as usize] {
            Some(target) if target.color != side => {
                push_pawn_move(from, to, piece, Some(target), out);
            }
            None if game_state.en_passant_square == Some(to) => {
                let enemy_pawn = Piece::new(side.opposite(), PieceKind::Pawn);
                let victim_square = make_square(square_rank(from), square_file(to));
                if board[victim_square as usize] == Some(enemy_pawn) {
                    out.push(Move::new(
                        from,
                        to,
                        piece,
                        Some(enemy_pawn),
                        None,
                        FLAG_EN_PASSANT,
                    ));
                }
            }
            _ => {}
        }
    }
}

/// Push a pawn move, fanning out into every promotion choice on the last rank.
fn push_pawn_move(
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    out: &mut Vec<Move>,
) {
    if square_rank(to) == piece.color.promotion_rank() {
        for kind in PROMOTION_KINDS {
            out.push(Move::new(from, to, piece, captured, Some(kind), 0));
        }
    } else {
        out.push(Move::new(from, to, piece, captured, None, 0));
    }
}
