//! Canonical chess-rule constants.
//!
//! Starting position, king/rook home squares, and the castling geometry used
//! by move generation and move application.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fixed squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub must_be_empty: &'static [Square],
    /// Squares the king stands on, crosses, or lands on; none may be attacked.
    pub king_path: &'static [Square],
}

pub const LIGHT_KINGSIDE: CastlingGeometry = CastlingGeometry {
    king_from: 4,
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    must_be_empty: &[5, 6],
    king_path: &[4, 5, 6],
};

pub const LIGHT_QUEENSIDE: CastlingGeometry = CastlingGeometry {
    king_from: 4,
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    must_be_empty: &[1, 2, 3],
    king_path: &[4, 3, 2],
};

pub const DARK_KINGSIDE: CastlingGeometry = CastlingGeometry {
    king_from: 60,
    king_to: 62,
    rook_from: 63,
    rook_to: 61,
    must_be_empty: &[61, 62],
    king_path: &[60, 61, 62],
};

pub const DARK_QUEENSIDE: CastlingGeometry = CastlingGeometry {
    king_from: 60,
    king_to: 58,
    rook_from: 56,
    rook_to: 59,
    must_be_empty: &[57, 58, 59],
    king_path: &[60, 59, 58],
};

#[inline]
pub fn kingside_geometry(color: Color) -> &'static CastlingGeometry {
    match color {
        Color::Light => &LIGHT_KINGSIDE,
        Color::Dark => &DARK_KINGSIDE,
    }
}

#[inline]
pub fn queenside_geometry(color: Color) -> &'static CastlingGeometry {
    match color {
        Color::Light => &LIGHT_QUEENSIDE,
        Color::Dark => &DARK_QUEENSIDE,
    }
}

/// Look up the castling move a king makes from `from` to `to`, if any.
pub fn castling_geometry_for(
    color: Color,
    from: Square,
    to: Square,
) -> Option<&'static CastlingGeometry> {
    [kingside_geometry(color), queenside_geometry(color)]
        .into_iter()
        .find(|geometry| geometry.king_from == from && geometry.king_to == to)
}
