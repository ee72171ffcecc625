//! Evaluation weights: material values and piece-square tables.
//!
//! An [`EvalConfig`] is built once, validated, and then only read. Engines
//! own their copy, so several engines with different weights can coexist.

use std::path::Path;

use chess_core::{PieceKind, Square};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::tables::{PIECE_SQUARE_TABLES, PIECE_VALUES};
use crate::Score;

/// Largest accepted material value.
pub const MAX_PIECE_VALUE: Score = 10_000;

/// Largest accepted piece-square entry, in absolute value.
pub const MAX_POSITIONAL: Score = 1_000;

/// Immutable evaluation weights.
///
/// With every value bounded by [`MAX_PIECE_VALUE`] and [`MAX_POSITIONAL`],
/// 32 pieces can never sum to [`MATE`](crate::MATE).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    values: [Score; 6],
    tables: [[Score; 64]; 6],
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            values: PIECE_VALUES,
            tables: PIECE_SQUARE_TABLES,
        }
    }
}

impl EvalConfig {
    /// Material value of a piece kind.
    #[inline]
    pub fn piece_value(&self, kind: PieceKind) -> Score {
        self.values[kind.idx()]
    }

    /// Piece-square bonus for `kind` standing on `sq`, regardless of colour.
    #[inline]
    pub fn square_value(&self, kind: PieceKind, sq: Square) -> Score {
        self.tables[kind.idx()][sq as usize]
    }

    /// Parses a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RawEvalConfig = toml::from_str(s)?;
        Self::try_from(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

// =============================================================================
// TOML representation
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawEvalConfig {
    piece_values: RawPieceValues,
    piece_square_tables: RawTables,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawPieceValues {
    pawn: Score,
    knight: Score,
    bishop: Score,
    rook: Score,
    queen: Score,
    king: Score,
}

impl Default for RawPieceValues {
    fn default() -> Self {
        let [pawn, knight, bishop, rook, queen, king] = PIECE_VALUES;
        Self {
            pawn,
            knight,
            bishop,
            rook,
            queen,
            king,
        }
    }
}

impl RawPieceValues {
    fn get(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTables {
    pawn: Vec<Score>,
    knight: Vec<Score>,
    bishop: Vec<Score>,
    rook: Vec<Score>,
    queen: Vec<Score>,
    king: Vec<Score>,
}

impl Default for RawTables {
    fn default() -> Self {
        let [pawn, knight, bishop, rook, queen, king] = PIECE_SQUARE_TABLES.map(|t| t.to_vec());
        Self {
            pawn,
            knight,
            bishop,
            rook,
            queen,
            king,
        }
    }
}

impl RawTables {
    fn get(&self, kind: PieceKind) -> &[Score] {
        match kind {
            PieceKind::Pawn => &self.pawn,
            PieceKind::Knight => &self.knight,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Rook => &self.rook,
            PieceKind::Queen => &self.queen,
            PieceKind::King => &self.king,
        }
    }
}

impl TryFrom<RawEvalConfig> for EvalConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEvalConfig) -> Result<Self, ConfigError> {
        let mut config = EvalConfig::default();

        for kind in PieceKind::ALL {
            let piece = kind.name();

            let value = raw.piece_values.get(kind);
            if !(0..=MAX_PIECE_VALUE).contains(&value) {
                return Err(ConfigError::PieceValueOutOfRange {
                    piece,
                    value,
                    max: MAX_PIECE_VALUE,
                });
            }
            config.values[kind.idx()] = value;

            let table = raw.piece_square_tables.get(kind);
            if table.len() != 64 {
                return Err(ConfigError::TableLength {
                    piece,
                    len: table.len(),
                });
            }
            for (square, &value) in table.iter().enumerate() {
                if !(-MAX_POSITIONAL..=MAX_POSITIONAL).contains(&value) {
                    return Err(ConfigError::PositionalOutOfRange {
                        piece,
                        square,
                        value,
                        max: MAX_POSITIONAL,
                    });
                }
                config.tables[kind.idx()][square] = value;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
