//! Chess rules engine.
//!
//! Given a position and a side to move, [`game_repr::Position`] produces the
//! exhaustive set of legal moves, applies and reverts moves while keeping the
//! derived state (castling eligibility, en-passant target, side to move) in
//! sync, and classifies terminal positions.
//!
//! Rendering, move selection and any search live outside the library; the
//! `chess_rules` binary is one such driver.

pub mod game_repr;

pub use game_repr::{
    CacheStats, Capture, CastleSide, ChessError, Color, EngineConfig, GameStatus, Move, MoveList,
    Piece, Position, PositionKey, Square, Type, UndoInfo,
};
