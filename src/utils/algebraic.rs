//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the 0..64
//! square indices used by the board, with `a1 = 0` and `h8 = 63`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{make_square, square_file, square_rank, Square};

/// Convert a coordinate such as `"e4"` to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidNotation(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Ok(make_square(rank - b'1', file - b'a'))
}

/// Convert a square index (`0..=63`) to a coordinate such as `"e4"`.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(file_char(square));
    out.push(char::from(b'1' + square_rank(square)));
    out
}

#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square_file(square))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, file_char, square_to_algebraic};
    use crate::chess_errors::ChessError;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(square_to_algebraic(0), "a1");
        assert_eq!(square_to_algebraic(63), "h8");
        assert_eq!(file_char(28), 'e');
    }

    #[test]
    fn rejects_out_of_board_coordinates() {
        for bad in ["", "e", "i1", "a9", "a0", "e44", "E4"] {
            assert!(matches!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidNotation(_))
            ));
        }
    }
}
