use crate::game_repr::attacks::KNIGHT_OFFSETS;
use crate::game_repr::{MoveList, Square};

use super::super::position::Position;

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KNIGHT_OFFSETS, moves);
    }
}
