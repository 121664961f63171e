#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    /// Promotion choices, in the order moves are generated.
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    pub const ALL: [Type; 6] = [
        Type::Pawn,
        Type::Knight,
        Type::Bishop,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Lowercase letter, as used in coordinate notation for promotions
    pub fn to_char(self) -> char {
        match self {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Type> {
        match c.to_ascii_lowercase() {
            'p' => Some(Type::Pawn),
            'n' => Some(Type::Knight),
            'b' => Some(Type::Bishop),
            'r' => Some(Type::Rook),
            'q' => Some(Type::Queen),
            'k' => Some(Type::King),
            _ => None,
        }
    }

    /// Kings and rooks carry a moved flag; nothing else does.
    #[inline]
    pub fn tracks_moved(self) -> bool {
        matches!(self, Type::King | Type::Rook)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank delta of a pawn push
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank of the king and rooks in the initial setup
    #[inline]
    pub fn home_rank(self) -> i32 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Rank pawns may double push from
    #[inline]
    pub fn pawn_start_rank(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Farthest rank, where pawns promote
    #[inline]
    pub fn promotion_rank(self) -> i32 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

/// A piece together with the part of its history that matters for legality.
///
/// `moved` is only maintained for kings and rooks (castling eligibility). A
/// pawn's en-passant status is not stored on the piece: it is derived from
/// [`Position::en_passant`](super::Position::en_passant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    pub moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self {
            color,
            piece_type,
            moved: false,
        }
    }

    /// A king or rook that has already lost its castling eligibility.
    pub const fn moved(color: Color, piece_type: Type) -> Self {
        Self {
            color,
            piece_type,
            moved: true,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = Type::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, piece_type))
    }

    /// Uppercase for white, lowercase for black
    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    #[inline]
    pub fn is_a(&self, color: Color, piece_type: Type) -> bool {
        self.color == color && self.piece_type == piece_type
    }
}
