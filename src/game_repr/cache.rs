use std::collections::{HashMap, VecDeque};

use super::{Color, MoveList, Piece, Square, Type};

/// En-passant byte when there is no target square
const NO_EN_PASSANT: u8 = 64;

/// Canonical structural encoding of everything legal-move generation
/// depends on.
///
/// One byte per square in scan order:
///
/// | 3 bits | 1 bit |  1 bit | 3 bits |
/// | unused | moved |  color | type+1 |
///
/// (0 = empty), then the side to move and the en-passant square (64 when
/// there is none). Two positions with equal keys generate the same legal
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    squares: [u8; 64],
    side_to_move: u8,
    en_passant: u8,
}

impl PositionKey {
    pub(crate) fn new(
        board: &[Option<Piece>; 64],
        side_to_move: Color,
        en_passant: Option<Square>,
    ) -> Self {
        let mut squares = [0u8; 64];
        for (slot, piece) in squares.iter_mut().zip(board.iter()) {
            *slot = match piece {
                Some(p) => encode_piece(p),
                None => 0,
            };
        }
        Self {
            squares,
            side_to_move: match side_to_move {
                Color::White => 0,
                Color::Black => 1,
            },
            en_passant: en_passant.map_or(NO_EN_PASSANT, |sq| sq.index() as u8),
        }
    }

    /// Occupied squares in scan order as (square, type, color, moved).
    pub fn entries(&self) -> impl Iterator<Item = (Square, Type, Color, bool)> + '_ {
        self.squares.iter().enumerate().filter_map(|(idx, &byte)| {
            decode_piece(byte).map(|p| {
                (
                    Square::from_index_unchecked(idx),
                    p.piece_type,
                    p.color,
                    p.moved,
                )
            })
        })
    }

    pub fn side_to_move(&self) -> Color {
        if self.side_to_move == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn en_passant(&self) -> Option<Square> {
        if self.en_passant == NO_EN_PASSANT {
            None
        } else {
            Some(Square::from_index_unchecked(self.en_passant as usize))
        }
    }
}

#[inline]
fn encode_piece(piece: &Piece) -> u8 {
    let t = match piece.piece_type {
        Type::Pawn => 1,
        Type::Knight => 2,
        Type::Bishop => 3,
        Type::Rook => 4,
        Type::Queen => 5,
        Type::King => 6,
    };
    let c = match piece.color {
        Color::White => 0,
        Color::Black => 1 << 3,
    };
    let m = if piece.moved { 1 << 4 } else { 0 };
    t | c | m
}

fn decode_piece(byte: u8) -> Option<Piece> {
    let piece_type = match byte & 0x7 {
        1 => Type::Pawn,
        2 => Type::Knight,
        3 => Type::Bishop,
        4 => Type::Rook,
        5 => Type::Queen,
        6 => Type::King,
        _ => return None,
    };
    let color = if byte & (1 << 3) == 0 {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece {
        color,
        piece_type,
        moved: byte & (1 << 4) != 0,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Legal-move sets keyed by [`PositionKey`], owned by one position.
///
/// Entries never go stale (the key carries all relevant state), so the only
/// removal is FIFO eviction once `capacity` entries are held. Cloning yields
/// an empty cache with the same capacity: a cache is never shared between
/// positions.
#[derive(Debug)]
pub struct MoveCache {
    capacity: usize,
    entries: HashMap<PositionKey, MoveList>,
    order: VecDeque<PositionKey>,
    stats: CacheStats,
}

impl MoveCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&mut self, key: &PositionKey) -> Option<&MoveList> {
        if self.capacity == 0 {
            return None;
        }
        match self.entries.get(key) {
            Some(moves) => {
                self.stats.hits += 1;
                Some(moves)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: PositionKey, moves: MoveList) {
        if self.capacity == 0 || self.entries.contains_key(&key) {
            return;
        }
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.stats.evictions += 1;
        }
        if self.stats.evictions > 0 && self.stats.evictions % self.capacity as u64 == 0 {
            log::debug!(
                "move cache turned over {} times (capacity {})",
                self.stats.evictions / self.capacity as u64,
                self.capacity
            );
        }
        self.order.push_back(key);
        self.entries.insert(key, moves);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Clone for MoveCache {
    fn clone(&self) -> Self {
        Self::new(self.capacity)
    }
}
