use super::*;

/// Classification of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is checkmated
    Checkmate { winner: Color },
    /// The side to move has no legal moves but is not in check
    Stalemate,
    /// Neither side keeps enough material to mate (see
    /// [`Position::is_insufficient_material`])
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl Position {
    /// Returns true if the given color is in checkmate
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Returns true if the given color is in stalemate
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Heuristic material draw: no pawn, rook or queen on the board, no side
    /// with two or more bishops, and no side with both a bishop and a knight.
    ///
    /// This is an approximation, not the full rule. It ignores bishop square
    /// colors, so king and bishop against king and bishop counts as a draw
    /// whatever the colors, and king and two knights against a bare king is
    /// also reported as insufficient. Some rule sets count three or more
    /// knights on one side as mating material; this heuristic does not.
    pub fn is_insufficient_material(&self) -> bool {
        let mut bishops = [0u32; 2];
        let mut knights = [0u32; 2];
        for (_, piece) in self.pieces() {
            let side = match piece.color {
                Color::White => 0,
                Color::Black => 1,
            };
            match piece.piece_type {
                Type::Pawn | Type::Rook | Type::Queen => return false,
                Type::Bishop => bishops[side] += 1,
                Type::Knight => knights[side] += 1,
                Type::King => {}
            }
        }
        (0..2).all(|side| bishops[side] < 2 && !(bishops[side] > 0 && knights[side] > 0))
    }

    /// Terminal classification for the side to move: checkmate and stalemate
    /// first, then the material heuristic.
    pub fn status(&mut self) -> GameStatus {
        let color = self.side_to_move();
        if !self.has_legal_moves(color) {
            return if self.is_in_check(color) {
                GameStatus::Checkmate {
                    winner: color.opposite(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        GameStatus::Ongoing
    }
}
