//! Static evaluation: material plus piece-square bonuses, with attacked
//! pieces counted at half value.

use chess_core::{Board, Color};

use crate::config::EvalConfig;
use crate::{Score, MATE};

/// Scores positions with a fixed [`EvalConfig`].
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates the position from White's perspective.
    ///
    /// Returns:
    /// - `-MATE` if White is checkmated, `MATE` if Black is
    /// - 0 for stalemate or insufficient material
    /// - otherwise the sum over all pieces of `value + square bonus`, added
    ///   for White and subtracted for Black
    ///
    /// A piece attacked by the enemy keeps only half its material value
    /// (rounded up). Defenders are not considered.
    pub fn evaluate<B: Board>(&self, board: &B) -> Score {
        if board.is_checkmate() {
            return match board.side_to_move() {
                Color::White => -MATE,
                Color::Black => MATE,
            };
        }
        if board.is_stalemate() || board.is_insufficient_material() {
            return 0;
        }

        let mut score = 0;
        for sq in 0..64 {
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };

            let mut value = self.config.piece_value(piece.kind);
            if board.is_attacked_by(piece.color.other(), sq) {
                value -= value / 2;
            }
            let total = value + self.config.square_value(piece.kind, sq);

            match piece.color {
                Color::White => score += total,
                Color::Black => score -= total,
            }
        }
        score
    }

    /// Evaluates the position from the side-to-move's perspective, as negamax
    /// expects at its leaves.
    pub fn evaluate_for_side_to_move<B: Board>(&self, board: &B) -> Score {
        let score = self.evaluate(board);
        match board.side_to_move() {
            Color::White => score,
            Color::Black => -score,
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
