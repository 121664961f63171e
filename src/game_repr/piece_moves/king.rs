use crate::game_repr::attacks::KING_OFFSETS;
use crate::game_repr::{CastleSide, Move, MoveList, Square, Type};

use super::super::position::Position;

impl Position {
    pub fn king_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KING_OFFSETS, moves);
        self.castle_moves_into(from, moves);
    }

    /// Castling: an unmoved king on its home square, an unmoved rook of the
    /// same color on the corner, nothing in between, and none of the king's
    /// start, transit and destination squares attacked.
    fn castle_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(king) = self.piece_at(from) else {
            return;
        };
        let color = king.color;
        let rank = color.home_rank();

        // Check if king is in its starting position and has never moved
        if king.piece_type != Type::King || king.moved || from.rank() != rank || from.file() != 4 {
            return;
        }

        let opponent = color.opposite();
        let at = |file: i32| Square::from_index_unchecked((rank * 8 + file) as usize);

        for side in [CastleSide::King, CastleSide::Queen] {
            let (rook_file, _) = side.rook_files();
            let rook_present = matches!(
                self.piece_at(at(rook_file)),
                Some(rook) if rook.is_a(color, Type::Rook) && !rook.moved
            );
            if !rook_present {
                continue;
            }

            // Check that squares between king and rook are empty
            let (low, high) = if rook_file > 4 { (5, rook_file) } else { (rook_file + 1, 4) };
            if (low..high).any(|file| self.piece_at(at(file)).is_some()) {
                continue;
            }

            // King may not castle out of, through, or into check
            let king_file = side.king_file();
            let step = if king_file > 4 { 1 } else { -1 };
            let king_safe = [4, 4 + step, king_file]
                .iter()
                .all(|&file| !self.is_square_attacked(at(file), opponent));

            if king_safe {
                moves.push(Move {
                    castle: Some(side),
                    ..Move::quiet(Type::King, from, at(king_file))
                });
            }
        }
    }
}
