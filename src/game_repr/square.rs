use std::fmt;
use std::str::FromStr;

use super::ChessError;

/// A board square stored as a 0..64 index.
///
/// | 3 bits | 3 bits |
/// |  Rank  |  File  |
///
/// a1 = 0, b1 = 1, ... h8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Build a square from zero-based file (a = 0) and rank (1 = 0).
    pub fn new(file: i32, rank: i32) -> Result<Square, ChessError> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Square((rank * 8 + file) as u8))
        } else {
            Err(ChessError::SquareOutOfRange { file, rank })
        }
    }

    pub fn from_index(idx: usize) -> Result<Square, ChessError> {
        if idx < 64 {
            Ok(Square(idx as u8))
        } else {
            Err(ChessError::IndexOutOfRange(idx))
        }
    }

    /// Caller guarantees `idx < 64`.
    #[inline(always)]
    pub(crate) const fn from_index_unchecked(idx: usize) -> Square {
        Square(idx as u8)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn file(self) -> i32 {
        (self.0 % 8) as i32
    }

    #[inline(always)]
    pub fn rank(self) -> i32 {
        (self.0 / 8) as i32
    }

    /// Step by a (file, rank) direction vector; `None` when the result leaves
    /// the board.
    #[inline]
    pub fn offset(self, df: i32, dr: i32) -> Option<Square> {
        let file = self.file().checked_add(df)?;
        let rank = self.rank().checked_add(dr)?;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// All 64 squares in scan order (a1, b1, ... h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Parses algebraic notation: file letter a-h, rank digit 1-8.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Square::new((file - b'a') as i32, (rank - b'1') as i32)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + (self.0 % 8)) as char;
        let rank = (b'1' + (self.0 / 8)) as char;
        write!(f, "{}{}", file, rank)
    }
}
