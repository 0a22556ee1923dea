//! Perft node counting over make/unmake.
//!
//! Walks the full legal move tree to a fixed depth and tallies leaf move
//! categories. Matching published counts is the primary correctness check
//! for the move generator, check detector, and apply/undo.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detection::detect_checks_and_pins;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_with_detection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf nodes `depth` plies below `game_state`. The state is restored
/// before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state)? {
        let record = make_move(game_state, mv);
        let result = if depth == 1 {
            leaf_counts(game_state)
        } else {
            perft(game_state, depth - 1)
        };
        unmake_move(game_state, &record);
        total.merge(result?);
    }
    Ok(total)
}

/// Per-root-move node counts, for diffing against a reference engine.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> ChessResult<Vec<(String, u64)>> {
    let mut out = Vec::new();
    for mv in legal_moves(game_state)? {
        let record = make_move(game_state, mv);
        let result = perft(game_state, depth.saturating_sub(1));
        unmake_move(game_state, &record);
        out.push((mv.to_long_algebraic(), result?.nodes));
    }
    Ok(out)
}

/// Classify the move that produced `game_state` (the last logged move).
fn leaf_counts(game_state: &GameState) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    let Some(mv) = game_state.last_move() else {
        return Ok(counts);
    };

    if mv.is_capture() {
        counts.captures = 1;
    }
    if mv.is_en_passant() {
        counts.en_passant = 1;
    }
    if mv.is_castle() {
        counts.castles = 1;
    }
    if mv.promotion.is_some() {
        counts.promotions = 1;
    }

    let detection = detect_checks_and_pins(game_state)?;
    if detection.check.in_check {
        counts.checks = 1;
        if legal_moves_with_detection(game_state, &detection).is_empty() {
            counts.checkmates = 1;
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::game_state::GameState;

    fn nodes(fen: &str, depth: u8) -> u64 {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let before = game.clone();
        let counts = perft(&mut game, depth).expect("perft should run");
        assert_eq!(game, before, "perft must leave the state untouched");
        counts.nodes
    }

    #[test]
    fn start_position_to_depth_three() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1).expect("perft").nodes, 20);
        assert_eq!(perft(&mut game, 2).expect("perft").nodes, 400);
        let d3 = perft(&mut game, 3).expect("perft");
        assert_eq!(d3.nodes, 8902);
        assert_eq!(d3.captures, 34);
        assert_eq!(d3.checks, 12);
    }

    #[test]
    fn kiwipete_to_depth_two() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let d1 = perft(&mut game, 1).expect("perft");
        assert_eq!(d1.nodes, 48);
        assert_eq!(d1.captures, 8);
        assert_eq!(d1.castles, 2);
        let d2 = perft(&mut game, 2).expect("perft");
        assert_eq!(d2.nodes, 2039);
        assert_eq!(d2.captures, 351);
        assert_eq!(d2.en_passant, 1);
        assert_eq!(d2.castles, 91);
        assert_eq!(d2.checks, 3);
    }

    #[test]
    fn endgame_position_with_en_passant_pins() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(nodes(fen, 1), 14);
        assert_eq!(nodes(fen, 2), 191);
        assert_eq!(nodes(fen, 3), 2812);
    }

    #[test]
    fn promotion_heavy_position() {
        let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        assert_eq!(nodes(fen, 1), 6);
        assert_eq!(nodes(fen, 2), 264);
        assert_eq!(nodes(fen, 3), 9467);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, 2).expect("divide");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
