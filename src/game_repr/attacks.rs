use super::*;

/// (file, rank) direction vectors
pub(crate) const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];
pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

impl Position {
    /// First occupied square walking from `square` (exclusive) along `dir`.
    #[inline]
    pub(crate) fn first_blocker(&self, square: Square, (df, dr): (i32, i32)) -> Option<(Square, Piece)> {
        let mut current = square;
        while let Some(next) = current.offset(df, dr) {
            if let Some(piece) = self.piece_at(next) {
                return Some((next, piece));
            }
            current = next;
        }
        None
    }

    /// Checks if a square is under attack by any piece of the given color.
    ///
    /// Probes outward from `square` as each attacker archetype would move and
    /// looks for a matching enemy piece at the end of the ray or offset. The
    /// occupant of `square` itself is irrelevant.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        // A pawn of `by_color` attacks forward-diagonally, so look one rank
        // back (from its point of view) from the probed square
        let back = -by_color.forward();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(df, back) {
                if matches!(self.piece_at(sq), Some(p) if p.is_a(by_color, Type::Pawn)) {
                    return true;
                }
            }
        }

        let hit = |offsets: &[(i32, i32)], piece_type: Type| {
            offsets.iter().any(|&(df, dr)| {
                square
                    .offset(df, dr)
                    .and_then(|sq| self.piece_at(sq))
                    .is_some_and(|p| p.is_a(by_color, piece_type))
            })
        };
        if hit(&KNIGHT_OFFSETS[..], Type::Knight) || hit(&KING_OFFSETS[..], Type::King) {
            return true;
        }

        let slider = |dirs: &[(i32, i32)], piece_type: Type| {
            dirs.iter().any(|&dir| {
                self.first_blocker(square, dir).is_some_and(|(_, p)| {
                    p.color == by_color
                        && (p.piece_type == piece_type || p.piece_type == Type::Queen)
                })
            })
        };
        slider(&ORTHOGONAL[..], Type::Rook) || slider(&DIAGONAL[..], Type::Bishop)
    }

    /// Every square holding a `by_color` piece that attacks `square`.
    pub fn attackers_of(&self, square: Square, by_color: Color) -> Vec<Square> {
        let mut attackers = Vec::new();
        let mut push_if = |sq: Square, piece_type: Type, also_queen: bool| {
            if let Some(p) = self.piece_at(sq) {
                if p.color == by_color
                    && (p.piece_type == piece_type || (also_queen && p.piece_type == Type::Queen))
                {
                    attackers.push(sq);
                }
            }
        };

        let back = -by_color.forward();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(df, back) {
                push_if(sq, Type::Pawn, false);
            }
        }
        for &(df, dr) in &KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(df, dr) {
                push_if(sq, Type::Knight, false);
            }
        }
        for &(df, dr) in &KING_OFFSETS {
            if let Some(sq) = square.offset(df, dr) {
                push_if(sq, Type::King, false);
            }
        }
        for &dir in &ORTHOGONAL {
            if let Some((sq, _)) = self.first_blocker(square, dir) {
                push_if(sq, Type::Rook, true);
            }
        }
        for &dir in &DIAGONAL {
            if let Some((sq, _)) = self.first_blocker(square, dir) {
                push_if(sq, Type::Bishop, true);
            }
        }

        attackers.sort();
        attackers
    }

    /// Checks if the king of the given color is currently in check
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opposite())
    }
}
