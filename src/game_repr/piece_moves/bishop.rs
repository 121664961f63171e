use crate::game_repr::attacks::DIAGONAL;
use crate::game_repr::{MoveList, Square};

use super::super::position::Position;

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &DIAGONAL, moves);
    }
}
