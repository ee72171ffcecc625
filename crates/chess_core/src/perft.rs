use crate::board::Board;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, driving
/// the board only through `play`, so it also checks that undo is exact.
pub fn perft<B: Board>(board: &mut B, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.play(mv);
        nodes += perft(&mut *child, depth - 1);
    }
    nodes
}
