//! Negamax with alpha-beta pruning, refined into Principal Variation Search.

use chess_core::Board;
use tracing::trace;

use crate::eval::Evaluator;
use crate::ordering::order_moves;
use crate::Score;

/// Recursive PVS over one borrowed board.
///
/// Scores are negamax scores: positive is good for the side to move at the
/// node being searched.
#[derive(Debug)]
pub struct Searcher<'e> {
    evaluator: &'e Evaluator,
    nodes: u64,
}

impl<'e> Searcher<'e> {
    pub fn new(evaluator: &'e Evaluator) -> Self {
        Self { evaluator, nodes: 0 }
    }

    /// Nodes entered since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `board` to `depth` plies inside the window `(alpha, beta)`.
    ///
    /// The first ordered move gets the full window. Later moves get a null
    /// window probe and are re-searched only if the probe lands strictly
    /// inside `(alpha, beta)`. Returns `alpha` as soon as it reaches `beta`.
    ///
    /// Every move is applied through [`Board::play`], so the board is back in
    /// its original state when this returns.
    pub fn search<B: Board>(
        &mut self,
        board: &mut B,
        depth: u8,
        mut alpha: Score,
        beta: Score,
    ) -> Score {
        self.nodes += 1;

        if depth == 0 || board.is_game_over() {
            return self.evaluator.evaluate_for_side_to_move(board);
        }

        let moves = order_moves(board, self.evaluator.config());
        for (i, mv) in moves.into_iter().enumerate() {
            let mut child = board.play(mv);

            let value = if i == 0 {
                -self.search(&mut *child, depth - 1, -beta, -alpha)
            } else {
                let probe = -self.search(&mut *child, depth - 1, -alpha - 1, -alpha);
                if alpha < probe && probe < beta {
                    trace!(?mv, probe, alpha, beta, "null window failed high, re-searching");
                    -self.search(&mut *child, depth - 1, -beta, -alpha)
                } else {
                    probe
                }
            };
            drop(child);

            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }

        alpha
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
