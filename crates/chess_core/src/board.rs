//! The board capability consumed by search engines.
//!
//! Engines never construct a board. They borrow one mutably for the duration
//! of a search, drive it through [`Board::play`], and must hand it back in the
//! exact state they received it.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use crate::types::{Color, Piece, PieceKind, Square};

/// Mutable chess position with legal move generation and an undo stack.
///
/// `apply` and `undo` must be used in strict LIFO pairs. Undoing with nothing
/// applied, or applying a move that is not in `legal_moves()`, is a contract
/// violation and implementations panic.
pub trait Board {
    /// Opaque move token produced by `legal_moves()`.
    type Move: Copy + Eq + Hash + Debug;

    fn side_to_move(&self) -> Color;

    /// Legal moves for the side to move, regenerated on each call.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply(&mut self, mv: Self::Move);

    /// Rewinds the most recent `apply`.
    fn undo(&mut self);

    fn is_game_over(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    fn piece_at(&self, sq: Square) -> Option<Piece>;

    fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|pc| pc.color)
    }

    /// Whether any piece of `by` attacks `sq`.
    fn is_attacked_by(&self, by: Color, sq: Square) -> bool;

    /// Whether the side to move is currently in check.
    fn in_check(&self) -> bool {
        let us = self.side_to_move();
        let king = (0..64u8).find(|&s| {
            self.piece_at(s)
                == Some(Piece {
                    color: us,
                    kind: PieceKind::King,
                })
        });
        match king {
            Some(ksq) => self.is_attacked_by(us.other(), ksq),
            None => false,
        }
    }

    fn gives_check(&self, mv: Self::Move) -> bool;
    fn is_capture(&self, mv: Self::Move) -> bool;

    fn move_from(&self, mv: Self::Move) -> Square;
    fn move_to(&self, mv: Self::Move) -> Square;

    /// Applies `mv` and returns a guard that undoes it when dropped.
    fn play(&mut self, mv: Self::Move) -> Applied<'_, Self> {
        self.apply(mv);
        Applied { board: self }
    }
}

/// A move applied to a borrowed board; dropping the guard undoes the move.
///
/// Every exit path out of the guard's scope, including early returns on a
/// cutoff, restores the board.
pub struct Applied<'a, B: Board + ?Sized> {
    board: &'a mut B,
}

impl<B: Board + ?Sized> Deref for Applied<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: Board + ?Sized> DerefMut for Applied<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: Board + ?Sized> Drop for Applied<'_, B> {
    fn drop(&mut self) {
        self.board.undo();
    }
}
