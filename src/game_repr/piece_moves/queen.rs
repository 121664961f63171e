use crate::game_repr::{MoveList, Square};

use super::super::position::Position;

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.rook_moves_into(from, moves);
        self.bishop_moves_into(from, moves);
    }
}
