//! Short human-readable move text for move logs (`Nf3`, `exd5`, `0-0`).
//!
//! This is not full SAN: there is no disambiguation and no check suffix.
//! It only needs the move itself, so it can be produced after the fact from
//! the move log without the position.

use crate::game_state::chess_types::{square_file, PieceKind};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{file_char, square_to_algebraic};

pub fn move_notation(mv: &Move) -> String {
    if mv.is_castle() {
        return if square_file(mv.to) > square_file(mv.from) {
            "0-0".to_owned()
        } else {
            "0-0-0".to_owned()
        };
    }

    let destination = square_to_algebraic(mv.to);
    let mut out = String::new();

    if mv.moved.kind == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(file_char(mv.from));
            out.push('x');
        }
        out.push_str(&destination);
        if mv.is_en_passant() {
            out.push_str(" e.p.");
        }
        if let Some(kind) = mv.promotion {
            out.push('=');
            out.push(kind.letter().to_ascii_uppercase());
        }
        return out;
    }

    out.push(mv.moved.kind.letter().to_ascii_uppercase());
    if mv.is_capture() {
        out.push('x');
    }
    out.push_str(&destination);
    out
}
