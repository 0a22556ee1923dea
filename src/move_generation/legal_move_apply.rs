//! Reversible in-place move application.
//!
//! `make_move` trusts its input: callers pass moves taken from the legal move
//! generator. `unmake_move` is its exact inverse, which is what lets search
//! walk the tree on a single `GameState` without cloning at every node.

use crate::game_state::chess_rules::castling_geometry_for;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

pub fn make_move(game_state: &mut GameState, mv: Move) -> UndoRecord {
    let moving_color = mv.moved.color;
    let from = mv.from as usize;
    let to = mv.to as usize;

    let capture_square = mv.capture_square();
    let captured = game_state.board[capture_square as usize]
        .take()
        .map(|piece| (piece, capture_square));

    let record = UndoRecord {
        mv,
        captured,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
        prev_move_log_len: game_state.move_log.len(),
    };

    game_state.board[from] = None;
    let placed = match mv.promotion {
        Some(kind) => Piece::new(moving_color, kind),
        None => mv.moved,
    };
    game_state.board[to] = Some(placed);

    if mv.moved.kind == PieceKind::King {
        game_state.king_squares[moving_color.index()] = mv.to;
        if mv.is_castle() {
            if let Some(geometry) = castling_geometry_for(moving_color, mv.from, mv.to) {
                let rook = game_state.board[geometry.rook_from as usize].take();
                game_state.board[geometry.rook_to as usize] = rook;
            }
        }
        game_state.castling_rights.clear_color(moving_color);
    }

    if mv.moved.kind == PieceKind::Rook {
        game_state.castling_rights.clear_rook_home(mv.from);
    }
    // Anything landing on a rook home square means that rook is gone.
    game_state.castling_rights.clear_rook_home(mv.to);

    game_state.en_passant_square = if mv.is_double_pawn_push() {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    if mv.moved.kind == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = moving_color.opposite();
    game_state.move_log.push(record);

    record
}

pub fn unmake_move(game_state: &mut GameState, record: &UndoRecord) {
    let mv = record.mv;
    let moving_color = mv.moved.color;

    game_state.board[mv.to as usize] = None;
    game_state.board[mv.from as usize] = Some(mv.moved);
    if let Some((piece, square)) = record.captured {
        game_state.board[square as usize] = Some(piece);
    }

    if mv.moved.kind == PieceKind::King {
        game_state.king_squares[moving_color.index()] = mv.from;
        if mv.is_castle() {
            if let Some(geometry) = castling_geometry_for(moving_color, mv.from, mv.to) {
                let rook = game_state.board[geometry.rook_to as usize].take();
                game_state.board[geometry.rook_from as usize] = rook;
            }
        }
    }

    game_state.castling_rights = record.prev_castling_rights;
    game_state.en_passant_square = record.prev_en_passant_square;
    game_state.halfmove_clock = record.prev_halfmove_clock;
    game_state.fullmove_number = record.prev_fullmove_number;
    game_state.side_to_move = moving_color;
    game_state.move_log.truncate(record.prev_move_log_len);
}

#[cfg(test)]
mod tests {
    use super::{make_move, unmake_move};
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn assert_every_move_round_trips(fen: &str) {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let before = game.clone();
        for mv in legal_moves(&game).expect("generation should succeed") {
            let record = make_move(&mut game, mv);
            assert_ne!(game.board, before.board, "{mv} should change the board");
            unmake_move(&mut game, &record);
            assert_eq!(game, before, "{mv} did not round trip");
        }
    }

    #[test]
    fn every_move_round_trips_in_tactical_positions() {
        assert_every_move_round_trips(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        );
        assert_every_move_round_trips(
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        );
        assert_every_move_round_trips("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
    }

    #[test]
    fn castling_moves_the_rook_and_clears_rights() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = long_algebraic_to_move("e1c1", &game).expect("queenside castle is legal");
        assert!(castle.is_castle());

        let record = make_move(&mut game, castle);
        assert_eq!(game.piece_at(2), Some(Piece::new(Color::Light, PieceKind::King)));
        assert_eq!(game.piece_at(3), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(game.piece_at(0), None);
        assert!(!game.castling_rights.light_kingside && !game.castling_rights.light_queenside);
        assert!(game.castling_rights.dark_kingside && game.castling_rights.dark_queenside);
        assert_eq!(game.king_squares[Color::Light.index()], 2);

        unmake_move(&mut game, &record);
        assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn capturing_a_home_rook_clears_opponent_right() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let capture = long_algebraic_to_move("h1h8", &game).expect("rook trade is legal");
        make_move(&mut game, capture);
        assert!(!game.castling_rights.light_kingside);
        assert!(!game.castling_rights.dark_kingside);
        assert!(game.castling_rights.light_queenside && game.castling_rights.dark_queenside);
    }

    #[test]
    fn double_push_sets_en_passant_target_and_next_move_clears_it() {
        let mut game = GameState::new_game();
        let push = long_algebraic_to_move("e2e4", &game).expect("legal");
        make_move(&mut game, push);
        // e3
        assert_eq!(game.en_passant_square, Some(20));

        let reply = long_algebraic_to_move("g8f6", &game).expect("legal");
        make_move(&mut game, reply);
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn promotion_capture_round_trips() {
        let mut game =
            GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();
        let promote = long_algebraic_to_move("a7b8n", &game).expect("capture-promotion is legal");
        let record = make_move(&mut game, promote);
        assert_eq!(game.piece_at(57), Some(Piece::new(Color::Light, PieceKind::Knight)));
        assert_eq!(
            record.captured,
            Some((Piece::new(Color::Dark, PieceKind::Rook), 57))
        );
        unmake_move(&mut game, &record);
        assert_eq!(game, before);
    }
}
