//! PVS Chess Engine
//!
//! Depth-limited negamax with alpha-beta pruning, refined into Principal
//! Variation Search. Positions are scored by material and piece-square tables
//! with a penalty for attacked pieces; moves are ordered checks first, then by
//! MVV-LVA.
//!
//! The engine never owns a board. It borrows any [`chess_core::Board`] for the
//! length of one search and returns it untouched.

pub mod config;
pub mod error;
pub mod eval;
pub mod ordering;
pub mod search;
pub mod tables;

use chess_core::Board;
use tracing::{debug, info};

pub use config::EvalConfig;
pub use error::{ConfigError, SearchError};
pub use eval::Evaluator;
pub use ordering::order_moves;
pub use search::Searcher;

/// Evaluation and search score in centipawn-like units.
pub type Score = i32;

/// Forced-mate sentinel, also used as the infinite bound of the root window.
pub const MATE: Score = 1_000_000;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// Chosen move, `None` when the root has no legal moves.
    pub best_move: Option<M>,
    /// Score of the chosen move from the root side's perspective, `None`
    /// together with `best_move`.
    pub score: Option<Score>,
    /// Nodes visited, root children included.
    pub nodes: u64,
}

/// PVS engine with its own evaluation weights.
#[derive(Debug, Clone, Default)]
pub struct PvsEngine {
    evaluator: Evaluator,
}

impl PvsEngine {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Picks the strongest move at `depth` plies, or `None` if there is nothing
    /// to play.
    pub fn find_best_move<B: Board>(
        &self,
        board: &mut B,
        depth: u8,
    ) -> Result<Option<B::Move>, SearchError> {
        self.analyse(board, depth).map(|outcome| outcome.best_move)
    }

    /// Same search as [`find_best_move`](Self::find_best_move), also reporting
    /// the score and node count.
    ///
    /// Every root move is searched with the full `(-MATE, MATE)` window. Ties
    /// keep the move that comes first in ordering.
    #[tracing::instrument(level = "debug", skip_all, fields(depth = depth))]
    pub fn analyse<B: Board>(
        &self,
        board: &mut B,
        depth: u8,
    ) -> Result<SearchOutcome<B::Move>, SearchError> {
        if depth < 1 {
            return Err(SearchError::InvalidDepth(depth));
        }

        let mut searcher = Searcher::new(&self.evaluator);
        let mut best: Option<(B::Move, Score)> = None;

        for mv in order_moves(board, self.evaluator.config()) {
            let value = {
                let mut child = board.play(mv);
                -searcher.search(&mut *child, depth - 1, -MATE, MATE)
            };
            debug!(?mv, value, "root move searched");

            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let outcome = SearchOutcome {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, value)| value),
            nodes: searcher.nodes(),
        };
        info!(
            best_move = ?outcome.best_move,
            score = ?outcome.score,
            nodes = outcome.nodes,
            "search finished"
        );
        Ok(outcome)
    }
}

/// Searches `board` to `depth` plies with the default evaluation weights.
pub fn find_best_move<B: Board>(board: &mut B, depth: u8) -> Result<Option<B::Move>, SearchError> {
    PvsEngine::default().find_best_move(board, depth)
}
