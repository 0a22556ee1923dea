//! Terminal-oriented Unicode board renderer.
//!
//! Used by the console driver and by tests for diagnostics in text
//! environments.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    const FILES: &str = "  a b c d e f g h";
    let mut out = String::with_capacity(200);
    out.push_str(FILES);
    out.push('\n');

    for rank in (0..8u8).rev() {
        let rank_label = char::from(b'1' + rank);
        let squares: Vec<String> = (0..8u8)
            .map(|file| {
                game_state.board[make_square(rank, file) as usize]
                    .map_or('·', piece_to_unicode)
                    .to_string()
            })
            .collect();
        out.push_str(&format!("{rank_label} {} {rank_label}\n", squares.join(" ")));
    }

    out.push_str(FILES);
    out
}

/// Glyphs indexed by `Color::index()` then `PieceKind::index()`.
const GLYPHS: [[char; 6]; 2] = [
    ['♙', '♘', '♗', '♖', '♕', '♔'],
    ['♟', '♞', '♝', '♜', '♛', '♚'],
];

#[inline]
fn piece_to_unicode(piece: Piece) -> char {
    GLYPHS[piece.color.index()][piece.kind.index()]
}
