use std::path::PathBuf;

use thiserror::Error;

use crate::Score;

/// Errors returned by the root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),
}

/// Errors raised while loading an [`EvalConfig`](crate::EvalConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{piece} table has {len} entries, expected 64")]
    TableLength { piece: &'static str, len: usize },

    #[error("{piece} value {value} is outside 0..={max}")]
    PieceValueOutOfRange {
        piece: &'static str,
        value: Score,
        max: Score,
    },

    #[error("{piece} table entry {value} on square {square} is outside -{max}..={max}")]
    PositionalOutOfRange {
        piece: &'static str,
        square: usize,
        value: Score,
        max: Score,
    },
}
