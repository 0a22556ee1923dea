//! Ray-casting check and pin detection.
//!
//! Walks the eight rays out of the side-to-move's king, then probes knight,
//! pawn, and king contact squares. The result tells the move generator which
//! pieces are pinned (and along which line) and which squares can resolve a
//! check, so pseudo-legal moves can be filtered without trial application.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::directions::{is_diagonal, ALL_DIRECTIONS, KNIGHT_OFFSETS};

/// One piece giving check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checker {
    pub square: Square,
    pub kind: PieceKind,
    /// Squares strictly between a sliding checker and the king. Empty for
    /// contact and knight checks, where only capture or a king move helps.
    pub block_squares: Vec<Square>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub checkers: Vec<Checker>,
}

impl CheckInfo {
    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checkers.len() >= 2
    }

    /// Whether a non-king move to `square` captures or blocks the single checker.
    pub fn resolves_single_check(&self, square: Square) -> bool {
        match self.checkers.as_slice() {
            [checker] => checker.square == square || checker.block_squares.contains(&square),
            _ => false,
        }
    }
}

/// Pinned squares of the side to move, each with the ray (from the king)
/// the pinned piece is confined to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinInfo {
    directions: [Option<(i8, i8)>; 64],
}

impl Default for PinInfo {
    fn default() -> Self {
        Self {
            directions: [None; 64],
        }
    }
}

impl PinInfo {
    #[inline]
    pub fn direction(&self, square: Square) -> Option<(i8, i8)> {
        self.directions[square as usize]
    }

    #[inline]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.directions[square as usize].is_some()
    }

    pub fn pinned_squares(&self) -> impl Iterator<Item = (Square, (i8, i8))> + '_ {
        self.directions
            .iter()
            .enumerate()
            .filter_map(|(sq, dir)| dir.map(|d| (sq as Square, d)))
    }

    fn pin(&mut self, square: Square, direction: (i8, i8)) {
        self.directions[square as usize] = Some(direction);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDetection {
    pub king_square: Square,
    pub check: CheckInfo,
    pub pins: PinInfo,
}

/// Checks and pins against the side to move. Pure function of the board and
/// side to move.
pub fn detect_checks_and_pins(game_state: &GameState) -> ChessResult<CheckDetection> {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let king_square = game_state.king_square(side)?;
    let board = &game_state.board;

    let mut check = CheckInfo::default();
    let mut pins = PinInfo::default();

    for direction in ALL_DIRECTIONS {
        let mut pin_candidate: Option<Square> = None;
        let mut between = Vec::new();
        let mut cursor = king_square;

        while let Some(next) = offset_square(cursor, direction.0, direction.1) {
            cursor = next;
            match board[next as usize] {
                None => between.push(next),
                Some(piece) if piece.color == side => {
                    if pin_candidate.is_some() {
                        break;
                    }
                    pin_candidate = Some(next);
                }
                Some(piece) => {
                    if slides_along(piece.kind, direction) {
                        match pin_candidate {
                            Some(pinned) => pins.pin(pinned, direction),
                            None => check.checkers.push(Checker {
                                square: next,
                                kind: piece.kind,
                                block_squares: std::mem::take(&mut between),
                            }),
                        }
                    }
                    break;
                }
            }
        }
    }

    for (d_rank, d_file) in KNIGHT_OFFSETS {
        if let Some(square) = offset_square(king_square, d_rank, d_file) {
            if board[square as usize] == Some(Piece::new(enemy, PieceKind::Knight)) {
                check.checkers.push(contact_checker(square, PieceKind::Knight));
            }
        }
    }

    // Enemy pawns attack the king from the squares diagonally ahead of it.
    let forward = side.pawn_direction();
    for d_file in [-1, 1] {
        if let Some(square) = offset_square(king_square, forward, d_file) {
            if board[square as usize] == Some(Piece::new(enemy, PieceKind::Pawn)) {
                check.checkers.push(contact_checker(square, PieceKind::Pawn));
            }
        }
    }

    for (d_rank, d_file) in ALL_DIRECTIONS {
        if let Some(square) = offset_square(king_square, d_rank, d_file) {
            if board[square as usize] == Some(Piece::new(enemy, PieceKind::King)) {
                check.checkers.push(contact_checker(square, PieceKind::King));
            }
        }
    }

    check.in_check = !check.checkers.is_empty();

    Ok(CheckDetection {
        king_square,
        check,
        pins,
    })
}

/// Whether `square` is attacked by any piece of `attacker`.
///
/// `vacated` is treated as empty, so a king can test the squares it would
/// step to without shielding them with its own body.
pub fn is_square_attacked(
    board: &Board,
    square: Square,
    attacker: Color,
    vacated: Option<Square>,
) -> bool {
    let occupant = |sq: Square| {
        if Some(sq) == vacated {
            None
        } else {
            board[sq as usize]
        }
    };

    for direction in ALL_DIRECTIONS {
        let mut cursor = square;
        while let Some(next) = offset_square(cursor, direction.0, direction.1) {
            cursor = next;
            if let Some(piece) = occupant(next) {
                if piece.color == attacker && slides_along(piece.kind, direction) {
                    return true;
                }
                break;
            }
        }
    }

    let attacked_by = |d_rank: i8, d_file: i8, kind: PieceKind| {
        offset_square(square, d_rank, d_file)
            .and_then(&occupant)
            .is_some_and(|piece| piece == Piece::new(attacker, kind))
    };

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(d_rank, d_file)| attacked_by(d_rank, d_file, PieceKind::Knight))
    {
        return true;
    }

    // A pawn attacking `square` stands one rank behind it from its own side.
    let behind = -attacker.pawn_direction();
    if attacked_by(behind, -1, PieceKind::Pawn) || attacked_by(behind, 1, PieceKind::Pawn) {
        return true;
    }

    ALL_DIRECTIONS
        .iter()
        .any(|&(d_rank, d_file)| attacked_by(d_rank, d_file, PieceKind::King))
}

#[inline]
fn slides_along(kind: PieceKind, direction: (i8, i8)) -> bool {
    if is_diagonal(direction) {
        kind.slides_diagonally()
    } else {
        kind.slides_orthogonally()
    }
}

fn contact_checker(square: Square, kind: PieceKind) -> Checker {
    Checker {
        square,
        kind,
        block_squares: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{detect_checks_and_pins, is_square_attacked};
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn start_position_has_no_checks_or_pins() {
        let detection = detect_checks_and_pins(&GameState::new_game()).expect("detect");
        assert!(!detection.check.in_check);
        assert_eq!(detection.pins.pinned_squares().count(), 0);
        assert_eq!(detection.king_square, sq("e1"));
    }

    #[test]
    fn queen_h5_after_e4_e5_pins_f7_without_check() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "e7e5", "d1h5"] {
            let mv = long_algebraic_to_move(text, &game).expect("legal");
            game.apply(mv).expect("apply");
        }
        let detection = detect_checks_and_pins(&game).expect("detect");
        assert!(!detection.check.in_check);
        assert!(detection.check.checkers.is_empty());
        // h5-g6-f7-e8: the f7 pawn shields the king.
        let pinned: Vec<_> = detection.pins.pinned_squares().collect();
        assert_eq!(pinned, vec![(sq("f7"), (-1, 1))]);
    }

    #[test]
    fn rook_on_file_pins_knight_in_front_of_king() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN");
        let detection = detect_checks_and_pins(&game).expect("detect");
        assert!(!detection.check.in_check);
        assert_eq!(detection.pins.direction(sq("e2")), Some((1, 0)));
        assert_eq!(detection.pins.pinned_squares().count(), 1);
    }

    #[test]
    fn sliding_check_reports_block_squares() {
        let game = GameState::from_fen("4k3/8/8/b7/8/8/8/4K3 w - - 0 1").expect("FEN");
        let detection = detect_checks_and_pins(&game).expect("detect");
        assert!(detection.check.in_check);
        let [checker] = detection.check.checkers.as_slice() else {
            panic!("expected exactly one checker");
        };
        assert_eq!(checker.square, sq("a5"));
        assert_eq!(checker.kind, PieceKind::Bishop);
        assert_eq!(checker.block_squares, vec![sq("d2"), sq("c3"), sq("b4")]);
        assert!(detection.check.resolves_single_check(sq("c3")));
        assert!(detection.check.resolves_single_check(sq("a5")));
        assert!(!detection.check.resolves_single_check(sq("e2")));
    }

    #[test]
    fn knight_and_rook_double_check() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/3n4/8/4K3 w - - 0 1").expect("FEN");
        let detection = detect_checks_and_pins(&game).expect("detect");
        assert!(detection.check.is_double_check());
        let knight = detection
            .check
            .checkers
            .iter()
            .find(|c| c.kind == PieceKind::Knight)
            .expect("knight checker");
        assert!(knight.block_squares.is_empty());
    }

    #[test]
    fn pawn_checks_depend_on_color() {
        let light_in_check = GameState::from_fen("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1").expect("FEN");
        assert!(detect_checks_and_pins(&light_in_check).expect("detect").check.in_check);

        // A dark pawn behind the light king does not attack it.
        let not_check = GameState::from_fen("4k3/8/8/8/4K3/3p4/8/8 w - - 0 1").expect("FEN");
        assert!(!detect_checks_and_pins(&not_check).expect("detect").check.in_check);
    }

    #[test]
    fn non_matching_slider_neither_checks_nor_pins() {
        // Bishop on the e-file cannot use the file.
        let game = GameState::from_fen("4b1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN");
        let detection = detect_checks_and_pins(&game).expect("detect");
        assert!(!detection.check.in_check);
        assert!(!detection.pins.is_pinned(sq("e2")));
    }

    #[test]
    fn vacated_square_does_not_block_attacks() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4K3/8 w - - 0 1").expect("FEN");
        // With the king on e2 the rook's line to e1 is shielded.
        assert!(!is_square_attacked(&game.board, sq("e1"), Color::Dark, None));
        assert!(is_square_attacked(
            &game.board,
            sq("e1"),
            Color::Dark,
            Some(sq("e2"))
        ));
    }
}
