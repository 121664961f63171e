mod attacks;
mod cache;
mod config;
mod error;
mod legality;
mod moves;
mod outcome;
mod piece;
mod piece_moves;
mod position;
mod square;

#[cfg(test)]
mod tests;

pub use cache::*;
pub use config::*;
pub use error::*;
pub use moves::*;
pub use outcome::*;
pub use piece::*;
pub use position::*;
pub use square::*;
