use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::utils::long_algebraic::move_to_long_algebraic;

pub const FLAG_EN_PASSANT: u8 = 1 << 0;
pub const FLAG_CASTLING: u8 = 1 << 1;
pub const FLAG_DOUBLE_PAWN_PUSH: u8 = 1 << 2;

/// A fully described move.
///
/// Equality and hashing only look at `from`, `to`, and `promotion`: two moves
/// that name the same squares and promotion choice are the same move, whatever
/// auxiliary data they carry.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    /// Captured piece. For en passant this pawn sits behind `to`, not on it.
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub flags: u8,
}

impl Move {
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        moved: Piece,
        captured: Option<Piece>,
        promotion: Option<PieceKind>,
        flags: u8,
    ) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
            promotion,
            flags,
        }
    }

    #[inline]
    pub const fn quiet(from: Square, to: Square, moved: Piece) -> Self {
        Self::new(from, to, moved, None, None, 0)
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    /// Square of the captured piece, which differs from `to` only for en passant.
    #[inline]
    pub const fn capture_square(&self) -> Square {
        if self.is_en_passant() {
            // The captured pawn shares the mover's origin rank.
            (self.from / 8) * 8 + self.to % 8
        } else {
            self.to
        }
    }

    pub fn to_long_algebraic(&self) -> String {
        move_to_long_algebraic(self)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, FLAG_EN_PASSANT};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn equality_ignores_auxiliary_data() {
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let plain = Move::quiet(36, 43, pawn);
        let ep = Move::new(
            36,
            43,
            pawn,
            Some(Piece::new(Color::Dark, PieceKind::Pawn)),
            None,
            FLAG_EN_PASSANT,
        );
        assert_eq!(plain, ep);

        let queen_promo = Move::new(52, 60, pawn, None, Some(PieceKind::Queen), 0);
        let knight_promo = Move::new(52, 60, pawn, None, Some(PieceKind::Knight), 0);
        assert_ne!(queen_promo, knight_promo);
    }

    #[test]
    fn en_passant_capture_square_is_behind_destination() {
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        // e5xd6 removes the pawn on d5.
        let ep = Move::new(36, 43, pawn, None, None, FLAG_EN_PASSANT);
        assert_eq!(ep.capture_square(), 35);

        let dark_pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        // d4xe3 removes the pawn on e4.
        let dark_ep = Move::new(27, 20, dark_pawn, None, None, FLAG_EN_PASSANT);
        assert_eq!(dark_ep.capture_square(), 28);
    }
}
