use thiserror::Error;

use super::{Color, Square, Type};

/// Rejections of caller input. Engine state is never modified when one of
/// these is returned.
///
/// Internal consistency failures (a missing king, two kings of one color)
/// are not represented here: they are programming errors and panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid square notation {0:?}")]
    InvalidSquare(String),

    #[error("square coordinates out of range: file {file}, rank {rank}")]
    SquareOutOfRange { file: i32, rank: i32 },

    #[error("square index {0} out of range 0..64")]
    IndexOutOfRange(usize),

    #[error("no piece on source square {0}")]
    EmptySource(Square),

    #[error("piece on {square} does not belong to {expected:?}")]
    WrongColor { square: Square, expected: Color },

    #[error("no {expected:?} on {square}")]
    PieceMismatch { square: Square, expected: Type },

    #[error("illegal move {0}")]
    IllegalMove(String),
}
