//! Ray directions and jump offsets as `(d_rank, d_file)` pairs.

/// Orthogonal rays: rook and queen lines.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal rays: bishop and queen lines.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight rays from a square; orthogonal first, then diagonal.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub const fn is_diagonal(direction: (i8, i8)) -> bool {
    direction.0 != 0 && direction.1 != 0
}

/// Unit step from `from` towards `to` when the two share a rank, file, or diagonal.
pub fn direction_between(from: u8, to: u8) -> Option<(i8, i8)> {
    if from == to {
        return None;
    }
    let d_rank = (to / 8) as i8 - (from / 8) as i8;
    let d_file = (to % 8) as i8 - (from % 8) as i8;
    if d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs() {
        Some((d_rank.signum(), d_file.signum()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{direction_between, is_diagonal, ALL_DIRECTIONS};

    #[test]
    fn four_orthogonal_then_four_diagonal() {
        assert!(ALL_DIRECTIONS[..4].iter().all(|d| !is_diagonal(*d)));
        assert!(ALL_DIRECTIONS[4..].iter().all(|d| is_diagonal(*d)));
    }

    #[test]
    fn direction_between_aligned_squares_only() {
        // a1 -> h8
        assert_eq!(direction_between(0, 63), Some((1, 1)));
        // e1 -> e8
        assert_eq!(direction_between(4, 60), Some((1, 0)));
        // b1 -> c3 is a knight hop
        assert_eq!(direction_between(1, 18), None);
    }
}
