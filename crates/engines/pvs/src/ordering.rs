//! Move ordering for alpha-beta search.
//!
//! Moves that give check come first, then captures ranked by MVV-LVA
//! (most valuable victim, least valuable attacker), then everything else.

use std::cmp::Reverse;

use chess_core::{Board, PieceKind};

use crate::config::EvalConfig;
use crate::{Score, MATE};

/// Returns every legal move of `board`, best candidates first.
///
/// The result is a permutation of `board.legal_moves()`. The sort is stable,
/// so moves with equal keys keep the board's generation order.
pub fn order_moves<B: Board>(board: &B, config: &EvalConfig) -> Vec<B::Move> {
    let mut keyed: Vec<_> = board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let key = (board.gives_check(mv), capture_value(board, mv, config));
            (Reverse(key), mv)
        })
        .collect();

    keyed.sort_by_key(|&(key, _)| key);
    keyed.into_iter().map(|(_, mv)| mv).collect()
}

/// MVV-LVA score of `mv`: victim value minus attacker value for captures,
/// `MATE` if the victim is a king, 0 otherwise.
///
/// En passant lands on an empty square and scores 0.
pub fn capture_value<B: Board>(board: &B, mv: B::Move, config: &EvalConfig) -> Score {
    if !board.is_capture(mv) {
        return 0;
    }
    let (Some(victim), Some(attacker)) =
        (board.piece_at(board.move_to(mv)), board.piece_at(board.move_from(mv)))
    else {
        return 0;
    };

    if victim.kind == PieceKind::King {
        // Unreachable with a legal move generator
        return MATE;
    }
    config.piece_value(victim.kind) - config.piece_value(attacker.kind)
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
