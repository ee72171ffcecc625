use super::*;

use std::collections::HashSet;

use chess_core::Position;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("test FEN must parse")
}

fn ordered_uci(p: &Position) -> Vec<String> {
    order_moves(p, &EvalConfig::default())
        .into_iter()
        .map(|mv| p.move_to_uci(mv))
        .collect()
}

#[test]
fn test_checks_come_before_captures() {
    // Ra8+ is the only check, Nxd5 wins a queen for a knight
    let p = pos("4k3/8/8/3q4/8/2N5/8/R3K3 w - - 0 1");
    let ordered = ordered_uci(&p);
    assert_eq!(ordered[0], "a1a8");
    assert_eq!(ordered[1], "c3d5");
}

#[test]
fn test_mvv_lva_prefers_cheap_attacker() {
    // Both the pawn and the queen can take the black rook on c3
    let p = pos("4k3/8/8/8/8/2r5/1P6/2Q1K3 w - - 0 1");
    let config = EvalConfig::default();
    let pawn_takes = p.parse_uci("b2c3").unwrap();
    let queen_takes = p.parse_uci("c1c3").unwrap();

    assert_eq!(capture_value(&p, pawn_takes, &config), 400);
    assert_eq!(capture_value(&p, queen_takes, &config), -400);

    let ordered = order_moves(&p, &config);
    let pawn_idx = ordered.iter().position(|&m| m == pawn_takes).unwrap();
    let queen_idx = ordered.iter().position(|&m| m == queen_takes).unwrap();
    assert!(pawn_idx < queen_idx);
}

#[test]
fn test_quiet_moves_score_zero() {
    let p = Position::startpos();
    let config = EvalConfig::default();
    for mv in p.legal_moves() {
        assert_eq!(capture_value(&p, mv, &config), 0);
    }
}

#[test]
fn test_quiet_moves_keep_generation_order() {
    let p = Position::startpos();
    assert_eq!(order_moves(&p, &EvalConfig::default()), p.legal_moves());
}

#[test]
fn test_en_passant_scores_zero() {
    let p = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let ep = p.parse_uci("e5d6").unwrap();
    assert!(p.is_capture(ep));
    assert_eq!(capture_value(&p, ep, &EvalConfig::default()), 0);
}

#[test]
fn test_castling_is_not_a_capture() {
    let p = pos("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let castle = p.parse_uci("e1g1").unwrap();
    assert_eq!(capture_value(&p, castle, &EvalConfig::default()), 0);
}

#[test]
fn test_ordering_is_a_permutation_of_legal_moves() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ];
    for fen in fens {
        let p = pos(fen);
        let legal = p.legal_moves();
        let ordered = order_moves(&p, &EvalConfig::default());

        assert_eq!(ordered.len(), legal.len(), "{fen}");
        let legal: HashSet<_> = legal.into_iter().collect();
        let ordered: HashSet<_> = ordered.into_iter().collect();
        assert_eq!(ordered, legal, "{fen}");
    }
}

#[test]
fn test_no_moves_gives_empty_order() {
    let p = pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(order_moves(&p, &EvalConfig::default()).is_empty());
}
