//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Castling is written as the king's two-square move and en passant as a
//! plain diagonal pawn move. Parsing never constructs a move on its own: the
//! text is matched against the legal moves of the position, so everything the
//! notation leaves implicit (captured piece, flags) comes from the generator.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from));
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(kind) = mv.promotion {
        out.push(kind.letter());
    }
    out
}

/// Split move text into origin, destination and promotion choice without
/// consulting a position.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidNotation(format!(
            "expected a move like e2e4 or e7e8q, got {text:?}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch)?),
    };
    Ok((from, to, promotion))
}

/// Resolve move text to the matching legal move of `game_state`.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let (from, to, promotion) = parse_long_algebraic(text)?;
    legal_moves(game_state)?
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
        .ok_or_else(|| ChessError::InvalidMove {
            mv: text.trim().to_owned(),
        })
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessError::InvalidNotation(format!(
            "invalid promotion piece character: {ch}"
        ))),
    }
}
