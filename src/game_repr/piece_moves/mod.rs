pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::{Move, MoveList, Position, Square, Type};

impl Position {
    /// Pseudo-legal moves of the piece on `square` (nothing if it is empty).
    /// Moves that leave the mover's king attacked are included.
    pub fn pseudo_moves_into(&self, square: Square, moves: &mut MoveList) {
        let Some(piece) = self.piece_at(square) else {
            return;
        };
        match piece.piece_type {
            Type::Pawn   => self.pawn_moves_into(square, moves),
            Type::Knight => self.knight_moves_into(square, moves),
            Type::Bishop => self.bishop_moves_into(square, moves),
            Type::Rook   => self.rook_moves_into(square, moves),
            Type::Queen  => self.queen_moves_into(square, moves),
            Type::King   => self.king_moves_into(square, moves),
        }
    }

    pub fn pseudo_moves(&self, square: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_moves_into(square, &mut moves);
        moves
    }

    /// Walk each direction until the edge, a friendly piece (excluded) or an
    /// enemy piece (included as a capture).
    pub(crate) fn slide_moves_into(&self, from: Square, dirs: &[(i32, i32)], moves: &mut MoveList) {
        let Some(moving_piece) = self.piece_at(from) else {
            return;
        };
        for &(df, dr) in dirs {
            let mut current = from;
            while let Some(to) = current.offset(df, dr) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(moving_piece.piece_type, from, to)),
                    Some(target) if target.color != moving_piece.color => {
                        moves.push(Move::capture(moving_piece.piece_type, from, to, target));
                        break;
                    }
                    Some(_) => break,
                }
                current = to;
            }
        }
    }

    /// Fixed-offset jumps (knight, king steps): on board and not onto a
    /// friendly piece.
    pub(crate) fn step_moves_into(&self, from: Square, offsets: &[(i32, i32)], moves: &mut MoveList) {
        let Some(moving_piece) = self.piece_at(from) else {
            return;
        };
        for &(df, dr) in offsets {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(moving_piece.piece_type, from, to)),
                Some(target) if target.color != moving_piece.color => {
                    moves.push(Move::capture(moving_piece.piece_type, from, to, target))
                }
                Some(_) => {}
            }
        }
    }
}
