//! Attack queries on top of cozy-chess lookup tables.

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, BitBoard,
    Board, Color, Piece, Square,
};

/// All pieces of `by` that attack `target`, with sliders blocked by the
/// current occupancy.
pub fn attackers_of(board: &Board, target: Square, by: Color) -> BitBoard {
    let occupied = board.occupied();
    let theirs = board.colors(by);

    let pawns = board.pieces(Piece::Pawn);
    let knights = board.pieces(Piece::Knight);
    let kings = board.pieces(Piece::King);
    let diagonal = board.pieces(Piece::Bishop) | board.pieces(Piece::Queen);
    let orthogonal = board.pieces(Piece::Rook) | board.pieces(Piece::Queen);

    // A pawn of `by` attacks `target` exactly when a pawn of the other colour
    // standing on `target` would attack that pawn's square.
    let attackers = (get_pawn_attacks(target, !by) & pawns)
        | (get_knight_moves(target) & knights)
        | (get_king_moves(target) & kings)
        | (get_bishop_moves(target, occupied) & diagonal)
        | (get_rook_moves(target, occupied) & orthogonal);

    attackers & theirs
}

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    !attackers_of(board, target, by).is_empty()
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
