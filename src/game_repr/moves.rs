use std::fmt;

use smallvec::SmallVec;

use super::{Piece, Square, Type};

/// Move buffer used by the generators. Almost every position fits inline.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the h-file rook
    King,
    /// Toward the a-file rook
    Queen,
}

impl CastleSide {
    /// (rook from, rook to) files for this side
    pub fn rook_files(self) -> (i32, i32) {
        match self {
            CastleSide::King => (7, 5),
            CastleSide::Queen => (0, 3),
        }
    }

    /// File the king lands on
    pub fn king_file(self) -> i32 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }
}

/// A piece taken by a move and the square it stood on.
///
/// For en passant `square` is the square behind the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub square: Square,
    pub piece: Piece,
}

/// Immutable description of one ply.
///
/// Only moves produced by the legality filter are safe to hand to
/// [`Position::make_move`](super::Position::make_move); the executor trusts
/// everything except the source square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Type,
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Type>,
    pub captured: Option<Capture>,
    pub castle: Option<CastleSide>,
}

impl Move {
    pub fn quiet(piece: Type, from: Square, to: Square) -> Move {
        Move {
            piece,
            from,
            to,
            promotion: None,
            captured: None,
            castle: None,
        }
    }

    pub fn capture(piece: Type, from: Square, to: Square, captured: Piece) -> Move {
        Move {
            captured: Some(Capture {
                square: to,
                piece: captured,
            }),
            ..Move::quiet(piece, from, to)
        }
    }

    pub fn with_promotion(self, promotion: Type) -> Move {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some(c) if c.square != self.to)
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn is_double_push(&self) -> bool {
        self.piece == Type::Pawn && (self.to.rank() - self.from.rank()).abs() == 2
    }

    /// Long notation: `O-O`, `Pe2-e4`, `Pd4xe3`, `Pb7xa8=Q`.
    pub fn describe(&self) -> String {
        match self.castle {
            Some(CastleSide::King) => return "O-O".to_string(),
            Some(CastleSide::Queen) => return "O-O-O".to_string(),
            None => {}
        }
        let sep = if self.is_capture() { 'x' } else { '-' };
        let mut text = format!(
            "{}{}{}{}",
            self.piece.to_char().to_ascii_uppercase(),
            self.from,
            sep,
            self.to
        );
        if let Some(promotion) = self.promotion {
            text.push('=');
            text.push(promotion.to_char().to_ascii_uppercase());
        }
        text
    }
}

/// Coordinate notation (`e2e4`, `e7e8q`). Castles print as the king move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}
