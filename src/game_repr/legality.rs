use rayon::prelude::*;

use super::*;

impl Position {
    /// Legal moves for the side to move, in board scan order then per-piece
    /// direction order. Callers that need a canonical order must sort.
    pub fn legal_moves(&mut self) -> MoveList {
        self.legal_moves_for(self.side_to_move())
    }

    /// Legal moves for `color`, served from this position's cache when the
    /// same board, side and en-passant target were seen before.
    pub fn legal_moves_for(&mut self, color: Color) -> MoveList {
        let key = self.key_for(color);
        if let Some(moves) = self.cache.get(&key) {
            return moves.clone();
        }
        let mut moves = MoveList::new();
        self.generate_legal_moves_into(color, &mut moves);
        log::trace!("{} legal moves for {:?}", moves.len(), color);
        self.cache.insert(key, moves.clone());
        moves
    }

    /// Uncached generation. The buffer is cleared first.
    ///
    /// Every pseudo-legal move is applied, the mover's king is probed for
    /// attacks, and the move is taken back; the position is unchanged on
    /// return.
    pub fn generate_legal_moves_into(&mut self, color: Color, moves: &mut MoveList) {
        moves.clear();
        let mut candidates = MoveList::new();
        for square in Square::all() {
            match self.piece_at(square) {
                Some(piece) if piece.color == color => self.pseudo_moves_into(square, &mut candidates),
                _ => {}
            }
        }
        for mv in candidates {
            if self.is_move_legal(mv) {
                moves.push(mv);
            }
        }
    }

    /// Legal moves of the piece on `square` (empty if there is none).
    pub fn legal_moves_from(&mut self, square: Square) -> MoveList {
        let mut moves = self.pseudo_moves(square);
        moves.retain(|mv| self.is_move_legal(*mv));
        moves
    }

    /// Checks if a pseudo-legal move leaves the mover's own king safe.
    pub fn is_move_legal(&mut self, mv: Move) -> bool {
        let Some(moving_piece) = self.piece_at(mv.from) else {
            return false;
        };
        let color = moving_piece.color;
        let undo = self.apply(mv, moving_piece);
        let safe = !self.is_square_attacked(self.king_square(color), color.opposite());
        self.restore(mv, undo);
        safe
    }

    /// Checks if the given color has ANY legal moves available
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let key = self.key_for(color);
        if let Some(moves) = self.cache.get(&key) {
            return !moves.is_empty();
        }
        let mut candidates = MoveList::new();
        for square in Square::all() {
            match self.piece_at(square) {
                Some(piece) if piece.color == color => {
                    candidates.clear();
                    self.pseudo_moves_into(square, &mut candidates);
                    if candidates.iter().any(|mv| self.is_move_legal(*mv)) {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pos = self.clone();
        pos.perft_in_place(depth)
    }

    fn perft_in_place(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.generate_legal_moves_into(self.side_to_move(), &mut moves);

        // Bulk counting at the horizon
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let nodes_below = self.with_move(mv, |pos| pos.perft_in_place(depth - 1));
            nodes += nodes_below;
        }
        nodes
    }

    /// Divide - perft count for each first-level move (debugging tool).
    /// Sorted by coordinate notation.
    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        let mut pos = self.clone();
        let mut moves = MoveList::new();
        pos.generate_legal_moves_into(pos.side_to_move(), &mut moves);

        let mut counts: Vec<(Move, u64)> = moves
            .into_iter()
            .map(|mv| {
                let count = pos.with_move(mv, |p| p.perft_in_place(depth.saturating_sub(1)));
                (mv, count)
            })
            .collect();
        counts.sort_by_key(|(mv, _)| mv.to_string());
        counts
    }

    /// Perft with root moves spread across the rayon pool. Each worker owns a
    /// clone of the position; nothing is shared mutably.
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth <= 1 {
            return self.perft(depth);
        }
        let mut root = self.clone();
        let mut moves = MoveList::new();
        root.generate_legal_moves_into(root.side_to_move(), &mut moves);

        moves
            .into_vec()
            .into_par_iter()
            .map(|mv| {
                let mut pos = root.clone();
                pos.with_move(mv, |p| p.perft_in_place(depth - 1))
            })
            .sum()
    }

    /// Apply a generated move, run `f`, and take the move back.
    fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Position) -> R) -> R {
        let moving_piece = match self.piece_at(mv.from) {
            Some(piece) => piece,
            None => panic!("internal consistency error: generated move {} has no piece", mv),
        };
        let undo = self.apply(mv, moving_piece);
        let result = f(self);
        self.restore(mv, undo);
        result
    }
}
