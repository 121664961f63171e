use crate::game_repr::attacks::ORTHOGONAL;
use crate::game_repr::{MoveList, Square};

use super::super::position::Position;

impl Position {
    /// Generate rook moves into a provided buffer (n, s, e, w)
    pub fn rook_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &ORTHOGONAL, moves);
    }
}
