use thiserror::Error;

/// Errors raised while setting up a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("malformed UCI move '{0}'")]
    InvalidMove(String),

    #[error("illegal move '{0}' in this position")]
    IllegalMove(String),
}
