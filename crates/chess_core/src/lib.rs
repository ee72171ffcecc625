pub mod attacks;
pub mod board;
pub mod error;
pub mod perft;
pub mod position;
pub mod types;

// Re-export the board capability and its concrete implementation
pub use board::{Applied, Board};
pub use cozy_chess::Move;
pub use error::PositionError;
pub use perft::perft;
pub use position::Position;
pub use types::*;
