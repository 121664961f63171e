use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND MOVE EXECUTION
 */

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

/// Board contents, side to move and en-passant target.
///
/// A position is driven by [`make_move`](Position::make_move) /
/// [`unmake_move`](Position::unmake_move) pairs (or the checked
/// [`play`](Position::play) / [`undo`](Position::undo) wrappers). It must not
/// be shared between threads while moves are being generated: the legality
/// filter probes by mutating in place and restoring.
#[derive(Debug, Clone)]
pub struct Position {
    /// Mailbox, indexed by [`Square::index`]
    board: [Option<Piece>; 64],
    side_to_move: Color,
    /// Square a pawn just passed over on a double push. Lives for one ply.
    en_passant: Option<Square>,
    /// Moves made through `play`, with what they overwrote
    history: Vec<(Move, UndoInfo)>,
    pub(crate) cache: MoveCache,
    config: EngineConfig,
}

/// Undo-log for one applied move: exactly the state `make_move` overwrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    /// The mover as it stood on the source square
    moved_piece: Piece,
    captured: Option<Capture>,
    /// Castling rook as it stood on its corner
    rook: Option<(Square, Piece)>,
    en_passant: Option<Square>,
    side_to_move: Color,
}

impl Default for Position {
    /// Standard starting position, white to move.
    fn default() -> Self {
        Self::starting(EngineConfig::default())
    }
}

/// Equal when occupancy (moved flags included), side to move and en-passant
/// target agree. Cache and history are not part of a position's identity.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.en_passant == other.en_passant
    }
}

impl Eq for Position {}

impl Position {
    pub fn empty() -> Position {
        Self::with_config(EngineConfig::default())
    }

    /// Empty board using the given configuration.
    pub fn with_config(config: EngineConfig) -> Position {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            en_passant: None,
            history: Vec::new(),
            cache: MoveCache::new(config.move_cache_capacity),
            config,
        }
    }

    /// Standard starting position using the given configuration.
    pub fn starting(config: EngineConfig) -> Position {
        let mut pos = Self::with_config(config);
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                let home = color.home_rank() * 8 + file as i32;
                let pawn = color.pawn_start_rank() * 8 + file as i32;
                pos.board[home as usize] = Some(Piece::new(color, piece_type));
                pos.board[pawn as usize] = Some(Piece::new(color, Type::Pawn));
            }
        }
        pos
    }

    /*-------------------- SETUP --------------------*/

    /// Place a piece, replacing whatever stood there. Returns the replaced piece.
    pub fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.board[square.index()].replace(piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Set the square a pawn just skipped over. For the target to be usable
    /// the opponent's pawn must stand directly in front of it.
    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    /*-------------------- ACCESSORS --------------------*/

    #[inline(always)]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Occupied squares in scan order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|p| (Square::from_index_unchecked(idx), p)))
    }

    /// True when the pawn on `square` can be taken en passant this ply.
    pub fn is_en_passant_target(&self, square: Square) -> bool {
        let Some(piece) = self.piece_at(square) else {
            return false;
        };
        if piece.piece_type != Type::Pawn {
            return false;
        }
        self.en_passant
            .is_some_and(|ep| square.offset(0, -piece.color.forward()) == Some(ep))
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    ///
    /// When there is no such king. That can only follow from a broken setup
    /// or an illegal move forced through the executor.
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(square) => square,
            None => panic!("internal consistency error: no {:?} king on the board", color),
        }
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.is_a(color, Type::King))
            .map(|(sq, _)| sq)
    }

    pub fn key(&self) -> PositionKey {
        self.key_for(self.side_to_move)
    }

    /// Key of this position as if `color` were to move.
    pub(crate) fn key_for(&self, color: Color) -> PositionKey {
        PositionKey::new(&self.board, color, self.en_passant)
    }

    /// Moves applied through [`play`](Position::play), oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter().map(|(mv, _)| mv)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Panics unless each color has exactly one king.
    pub fn check_invariants(&self) {
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces()
                .filter(|(_, p)| p.is_a(color, Type::King))
                .count();
            if kings != 1 {
                panic!(
                    "internal consistency error: {} {:?} kings on the board",
                    kings, color
                );
            }
        }
    }

    #[inline]
    fn verify(&self) {
        if cfg!(debug_assertions) || self.config.verify_invariants {
            self.check_invariants();
        }
    }

    /*-------------------- MOVE EXECUTION --------------------*/

    /// Apply a move and return what is needed to take it back.
    ///
    /// Only the source square is validated; the rest of the move is trusted.
    /// Apply only moves obtained from the legal-move generator.
    pub fn make_move(&mut self, mv: Move) -> Result<UndoInfo, ChessError> {
        let Some(moving_piece) = self.piece_at(mv.from) else {
            log::debug!("rejected {}: {} is empty", mv, mv.from);
            return Err(ChessError::EmptySource(mv.from));
        };
        if moving_piece.color != self.side_to_move {
            log::debug!("rejected {}: not {:?}'s piece", mv, self.side_to_move);
            return Err(ChessError::WrongColor {
                square: mv.from,
                expected: self.side_to_move,
            });
        }
        if moving_piece.piece_type != mv.piece {
            log::debug!("rejected {}: {} holds a {:?}", mv, mv.from, moving_piece.piece_type);
            return Err(ChessError::PieceMismatch {
                square: mv.from,
                expected: mv.piece,
            });
        }
        let undo = self.apply(mv, moving_piece);
        self.verify();
        Ok(undo)
    }

    /// Executor proper. The caller has checked that `moving_piece` stands on
    /// `mv.from` and belongs to the side to move.
    pub(crate) fn apply(&mut self, mv: Move, moving_piece: Piece) -> UndoInfo {
        let color = moving_piece.color;
        let mut undo = UndoInfo {
            moved_piece: moving_piece,
            captured: None,
            rook: None,
            en_passant: self.en_passant.take(),
            side_to_move: self.side_to_move,
        };

        // Captured piece, from `to` or (en passant) from behind it
        if let Some(capture) = mv.captured {
            undo.captured = self.board[capture.square.index()]
                .take()
                .map(|piece| Capture {
                    square: capture.square,
                    piece,
                });
        }

        self.board[mv.from.index()] = None;
        let placed = match mv.promotion {
            Some(promotion) => Piece::new(color, promotion),
            None => Piece {
                moved: moving_piece.moved || moving_piece.piece_type.tracks_moved(),
                ..moving_piece
            },
        };
        self.board[mv.to.index()] = Some(placed);

        if let Some(side) = mv.castle {
            let (rook_from_file, rook_to_file) = side.rook_files();
            let rank = color.home_rank();
            let rook_from = Square::from_index_unchecked((rank * 8 + rook_from_file) as usize);
            let rook_to = Square::from_index_unchecked((rank * 8 + rook_to_file) as usize);
            let rook = self.board[rook_from.index()].take();
            debug_assert!(
                matches!(rook, Some(p) if p.is_a(color, Type::Rook)),
                "castle without a rook on {}",
                rook_from
            );
            if let Some(rook) = rook {
                undo.rook = Some((rook_from, rook));
                self.board[rook_to.index()] = Some(Piece {
                    moved: true,
                    ..rook
                });
            }
        }

        if mv.is_double_push() {
            self.en_passant = mv.from.offset(0, color.forward());
        }

        self.side_to_move = color.opposite();
        undo
    }

    /// Exact inverse of [`make_move`](Position::make_move).
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        self.restore(mv, undo);
        self.verify();
    }

    pub(crate) fn restore(&mut self, mv: Move, undo: UndoInfo) {
        self.board[mv.to.index()] = None;
        self.board[mv.from.index()] = Some(undo.moved_piece);

        if let Some(capture) = undo.captured {
            self.board[capture.square.index()] = Some(capture.piece);
        }

        if let (Some(side), Some((rook_from, rook))) = (mv.castle, undo.rook) {
            let (_, rook_to_file) = side.rook_files();
            let rook_to = (rook_from.rank() * 8 + rook_to_file) as usize;
            self.board[rook_to] = None;
            self.board[rook_from.index()] = Some(rook);
        }

        self.en_passant = undo.en_passant;
        self.side_to_move = undo.side_to_move;
    }

    /// Apply a move only if it is in the current legal set, and remember it
    /// for [`undo`](Position::undo).
    pub fn play(&mut self, mv: Move) -> Result<(), ChessError> {
        if !self.legal_moves().contains(&mv) {
            log::debug!("rejected {}: not legal for {:?}", mv, self.side_to_move);
            return Err(ChessError::IllegalMove(mv.to_string()));
        }
        let undo = self.make_move(mv)?;
        self.history.push((mv, undo));
        Ok(())
    }

    /// Take back the last move made with [`play`](Position::play).
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, undo) = self.history.pop()?;
        self.unmake_move(mv, undo);
        Some(mv)
    }

    /// Resolve a from/to/promotion triple against the legal moves.
    pub fn find_move(&mut self, from: Square, to: Square, promotion: Option<Type>) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
    }

    /// Play a move given in coordinate notation (`e2e4`, `e7e8q`).
    pub fn play_coordinate(&mut self, text: &str) -> Result<Move, ChessError> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(ChessError::IllegalMove(text.to_string()));
        }
        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            Some(c) => match Type::from_char(c) {
                Some(t) if Type::PROMOTIONS.contains(&t) => Some(t),
                _ => return Err(ChessError::IllegalMove(text.to_string())),
            },
            None => None,
        };
        let mv = self
            .find_move(from, to, promotion)
            .ok_or_else(|| ChessError::IllegalMove(text.to_string()))?;
        self.play(mv)?;
        Ok(mv)
    }
}
