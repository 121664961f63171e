use crate::game_repr::{Capture, Move, MoveList, Square, Type};

use super::super::position::Position;

impl Position {
    /// Generate pawn moves into a provided buffer: pushes, double push from
    /// the start rank, diagonal captures, en passant, and the four promotion
    /// choices for anything reaching the last rank.
    pub fn pawn_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(pawn) = self.piece_at(from) else {
            return;
        };
        let color = pawn.color;
        let forward = color.forward();

        // pushes
        if let Some(one) = from.offset(0, forward) {
            if self.piece_at(one).is_none() {
                push_with_promotions(Move::quiet(Type::Pawn, from, one), color.promotion_rank(), moves);

                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(0, forward) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::quiet(Type::Pawn, from, two));
                        }
                    }
                }
            }
        }

        // captures
        for df in [-1, 1] {
            let Some(to) = from.offset(df, forward) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color != color => {
                    push_with_promotions(
                        Move::capture(Type::Pawn, from, to, target),
                        color.promotion_rank(),
                        moves,
                    );
                }
                Some(_) => {}
                None if self.en_passant() == Some(to) => {
                    // The pawn that skipped `to` stands beside us, not on `to`
                    let Some(behind) = to.offset(0, -forward) else {
                        continue;
                    };
                    if let Some(victim) = self.piece_at(behind) {
                        if victim.is_a(color.opposite(), Type::Pawn) {
                            moves.push(Move {
                                captured: Some(Capture {
                                    square: behind,
                                    piece: victim,
                                }),
                                ..Move::quiet(Type::Pawn, from, to)
                            });
                        }
                    }
                }
                None => {}
            }
        }
    }
}

fn push_with_promotions(mv: Move, promotion_rank: i32, moves: &mut MoveList) {
    if mv.to.rank() == promotion_rank {
        for promotion in Type::PROMOTIONS {
            moves.push(mv.with_promotion(promotion));
        }
    } else {
        moves.push(mv);
    }
}
