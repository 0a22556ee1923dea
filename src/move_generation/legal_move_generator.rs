//! Full legal move generation pipeline.
//!
//! Runs the per-piece pseudo-legal generators through a kind-indexed function
//! table, then filters the result with the pin and check information from
//! `check_detection`. Only en passant is verified by simulation, since both
//! pawns leaving one rank can uncover a check no static pin sees.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::check_detection::{
    detect_checks_and_pins, is_square_attacked, CheckDetection,
};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GameStatus, MoveGenerator};
use crate::moves::directions::direction_between;
use crate::moves::move_descriptions::Move;

type PieceMoveFn = fn(&GameState, Square, Piece, &mut Vec<Move>);

/// Pseudo-legal generator per piece kind, indexed by `PieceKind::index()`.
const PIECE_MOVE_FUNCTIONS: [PieceMoveFn; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<Move>> {
        legal_moves(game_state)
    }
}

/// Legal moves for the side to move, in board order (a1 to h8, then by
/// generator order for each piece).
pub fn legal_moves(game_state: &GameState) -> ChessResult<Vec<Move>> {
    let detection = detect_checks_and_pins(game_state)?;
    Ok(legal_moves_with_detection(game_state, &detection))
}

pub fn legal_moves_with_detection(
    game_state: &GameState,
    detection: &CheckDetection,
) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut pseudo = Vec::with_capacity(64);

    if detection.check.is_double_check() {
        let king = Piece::new(side, PieceKind::King);
        generate_king_moves(game_state, detection.king_square, king, &mut pseudo);
    } else {
        for square in 0..64u8 {
            if let Some(piece) = game_state.board[square as usize] {
                if piece.color == side {
                    let generate = PIECE_MOVE_FUNCTIONS[piece.kind.index()];
                    generate(game_state, square, piece, &mut pseudo);
                }
            }
        }
    }

    pseudo.retain(|mv| is_legal(game_state, detection, mv));
    pseudo
}

fn is_legal(game_state: &GameState, detection: &CheckDetection, mv: &Move) -> bool {
    let enemy = game_state.side_to_move.opposite();

    if mv.moved.kind == PieceKind::King {
        // Castling already verified its whole path.
        return mv.is_castle()
            || !is_square_attacked(&game_state.board, mv.to, enemy, Some(mv.from));
    }

    if detection.check.is_double_check() {
        return false;
    }

    if let Some(pin_direction) = detection.pins.direction(mv.from) {
        if direction_between(detection.king_square, mv.to) != Some(pin_direction) {
            return false;
        }
    }

    if detection.check.in_check
        && !detection.check.resolves_single_check(mv.to)
        && !(mv.is_en_passant() && detection.check.resolves_single_check(mv.capture_square()))
    {
        return false;
    }

    if mv.is_en_passant() {
        return en_passant_keeps_king_safe(game_state, detection.king_square, mv);
    }

    true
}

/// Play the capture on a scratch board and look for an uncovered attack.
fn en_passant_keeps_king_safe(game_state: &GameState, king_square: Square, mv: &Move) -> bool {
    let mut board = game_state.board;
    board[mv.from as usize] = None;
    board[mv.capture_square() as usize] = None;
    board[mv.to as usize] = Some(mv.moved);
    !is_square_attacked(&board, king_square, game_state.side_to_move.opposite(), None)
}

pub fn game_status(game_state: &GameState) -> ChessResult<GameStatus> {
    let detection = detect_checks_and_pins(game_state)?;
    let moves = legal_moves_with_detection(game_state, &detection);
    Ok(status_from(&moves, &detection))
}

#[inline]
pub fn status_from(moves: &[Move], detection: &CheckDetection) -> GameStatus {
    match (moves.is_empty(), detection.check.in_check) {
        (false, _) => GameStatus::Ongoing,
        (true, true) => GameStatus::Checkmate,
        (true, false) => GameStatus::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::{game_status, legal_moves, LegalMoveGenerator};
    use crate::game_state::{chess_rules::STARTING_POSITION_FEN, game_state::GameState};
    use crate::move_generation::move_generator::{GameStatus, MoveGenerator};

    fn moves_of(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out: Vec<String> = legal_moves(&game)
            .expect("generation should succeed")
            .iter()
            .map(|mv| mv.to_long_algebraic())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = GameState::from_fen(STARTING_POSITION_FEN).expect("FEN");
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("generation should succeed");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let moves = moves_of("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(moves.iter().all(|mv| !mv.starts_with("e2")));
    }

    #[test]
    fn pinned_rook_may_slide_along_pin_and_capture_pinner() {
        let moves = moves_of("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let rook: Vec<&String> = moves.iter().filter(|mv| mv.starts_with("e2")).collect();
        assert_eq!(rook.len(), 6);
        assert!(moves.contains(&"e2e8".to_owned()));
        assert!(!moves.contains(&"e2d2".to_owned()));
    }

    #[test]
    fn single_check_allows_block_capture_or_king_move() {
        // Bishop a5 checks e1. The rook can block on b4; the knight can do neither.
        let moves = moves_of("4k3/8/8/b7/8/8/8/1R2K2N w - - 0 1");
        assert!(moves.contains(&"b1b4".to_owned()));
        assert!(!moves.contains(&"b1b2".to_owned()));
        assert!(!moves.iter().any(|mv| mv.starts_with("h1")));
        assert!(moves.contains(&"e1e2".to_owned()));
        assert!(!moves.contains(&"e1d2".to_owned()));
    }

    #[test]
    fn double_check_only_king_moves() {
        let moves = moves_of("4r1k1/8/8/8/8/3n4/8/R3K3 w Q - 0 1");
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.starts_with("e1")));
    }

    #[test]
    fn king_cannot_retreat_along_checking_ray() {
        let moves = moves_of("4r1k1/8/8/8/8/8/4K3/8 w - - 0 1");
        assert!(!moves.contains(&"e2e1".to_owned()));
        assert!(!moves.contains(&"e2e3".to_owned()));
        assert!(moves.contains(&"e2d1".to_owned()));
    }

    #[test]
    fn en_passant_rejected_when_it_uncovers_rank_check() {
        // Both pawns leave the fifth rank, exposing the king to the rook.
        let moves = moves_of("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
        assert!(!moves.contains(&"b5c6".to_owned()));
        assert!(moves.contains(&"b5b6".to_owned()));
    }

    #[test]
    fn en_passant_can_capture_a_checking_pawn() {
        let moves = moves_of("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
        assert!(moves.contains(&"e4d3".to_owned()));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let game = GameState::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN");
        assert!(legal_moves(&game).expect("generate").is_empty());
        assert!(game.is_in_check().expect("kings present"));
        assert_eq!(game_status(&game).expect("status"), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN");
        assert_eq!(game_status(&game).expect("status"), GameStatus::Stalemate);
    }
}
