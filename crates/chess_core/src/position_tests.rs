use super::*;

const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("test FEN must parse")
}

#[test]
fn test_startpos_has_twenty_moves() {
    let p = Position::startpos();
    assert_eq!(p.legal_moves().len(), 20);
    assert_eq!(p.side_to_move(), Color::White);
    assert!(!p.is_game_over());
}

#[test]
fn test_invalid_fen_is_an_error() {
    let err = Position::from_fen("not a fen").unwrap_err();
    assert!(matches!(err, PositionError::InvalidFen { .. }));
}

#[test]
fn test_apply_then_undo_restores_position() {
    let start = Position::startpos();
    let mut p = start.clone();
    p.play_uci("e2e4").unwrap();
    assert_ne!(p, start);
    assert_eq!(p.side_to_move(), Color::Black);
    p.undo();
    assert_eq!(p, start);
}

#[test]
#[should_panic(expected = "undo called with no move applied")]
fn test_undo_without_apply_panics() {
    let mut p = Position::startpos();
    p.undo();
}

#[test]
fn test_guard_undoes_on_drop() {
    let start = Position::startpos();
    let mut p = start.clone();
    let mv = p.parse_uci("g1f3").unwrap();
    {
        let child = p.play(mv);
        assert_eq!(child.side_to_move(), Color::Black);
        assert_eq!(child.applied_moves(), 1);
    }
    assert_eq!(p, start);
}

#[test]
fn test_guard_undoes_on_early_return() {
    fn first_reply_count(p: &mut Position) -> usize {
        let Some(&mv) = p.legal_moves().first() else {
            return 0;
        };
        let child = p.play(mv);
        if child.in_check() {
            return 0;
        }
        child.legal_moves().len()
    }

    let start = Position::startpos();
    let mut p = start.clone();
    assert_eq!(first_reply_count(&mut p), 20);
    assert_eq!(p, start);
}

#[test]
fn test_illegal_and_malformed_uci_moves() {
    let mut p = Position::startpos();
    assert!(matches!(
        p.play_uci("e2e5"),
        Err(PositionError::IllegalMove(_))
    ));
    assert!(matches!(p.play_uci("zz"), Err(PositionError::InvalidMove(_))));
    assert_eq!(p, Position::startpos());
}

#[test]
fn test_castling_uses_standard_notation() {
    let mut p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let short = p.parse_uci("e1g1").unwrap();
    assert!(!p.is_capture(short));
    assert_eq!(p.move_to_uci(short), "e1g1");

    let long = p.parse_uci("e1c1").unwrap();
    assert_eq!(p.move_to_uci(long), "e1c1");

    p.play_uci("e1g1").unwrap();
    assert_eq!(
        p.piece_at(coord_to_sq("f1").unwrap()).map(|pc| pc.kind),
        Some(PieceKind::Rook)
    );
    assert_eq!(
        p.piece_at(coord_to_sq("g1").unwrap()).map(|pc| pc.kind),
        Some(PieceKind::King)
    );
}

#[test]
fn test_capture_detection() {
    // exd6 en passant lands on an empty square
    let p = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let ep = p.parse_uci("e5d6").unwrap();
    assert!(p.is_capture(ep));
    let push = p.parse_uci("e5e6").unwrap();
    assert!(!p.is_capture(push));

    let p = pos("4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1");
    let take = p.parse_uci("c3d5").unwrap();
    assert!(p.is_capture(take));
    assert_eq!(p.move_from(take), coord_to_sq("c3").unwrap());
    assert_eq!(p.move_to(take), coord_to_sq("d5").unwrap());
}

#[test]
fn test_promotion_round_trips_through_uci() {
    let p = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let promo = p.parse_uci("a7a8n").unwrap();
    assert_eq!(p.move_to_uci(promo), "a7a8n");
    // underpromotion to a knight does not check e8; a queen does
    assert!(!p.gives_check(promo));
    let queen = p.parse_uci("a7a8q").unwrap();
    assert!(p.gives_check(queen));
}

#[test]
fn test_gives_check_and_checkmate() {
    let mut p = Position::startpos();
    for mv in ["f2f3", "e7e5", "g2g4"] {
        p.play_uci(mv).unwrap();
    }
    let qh4 = p.parse_uci("d8h4").unwrap();
    assert!(p.gives_check(qh4));
    p.apply(qh4);

    assert!(p.in_check());
    assert!(p.is_checkmate());
    assert!(!p.is_stalemate());
    assert!(p.is_game_over());
    assert_eq!(p.inner(), pos(FOOLS_MATE).inner());
}

#[test]
fn test_piece_and_color_queries() {
    let p = Position::startpos();
    assert_eq!(
        p.piece_at(coord_to_sq("d8").unwrap()),
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Queen
        })
    );
    assert_eq!(p.color_at(coord_to_sq("e2").unwrap()), Some(Color::White));
    assert_eq!(p.color_at(coord_to_sq("e4").unwrap()), None);
    assert!(p.is_attacked_by(Color::White, coord_to_sq("f3").unwrap()));
    assert!(!p.is_attacked_by(Color::Black, coord_to_sq("f3").unwrap()));
}

#[test]
fn test_stalemate_predicates() {
    let p = pos("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");
    assert!(p.is_stalemate());
    assert!(!p.is_checkmate());
    assert!(p.is_game_over());
    assert!(p.legal_moves().is_empty());
}

#[test]
fn test_fivefold_repetition_ends_game() {
    let mut p = Position::startpos();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    for _ in 0..3 {
        for mv in shuffle {
            p.play_uci(mv).unwrap();
        }
    }
    for mv in &shuffle[..3] {
        p.play_uci(mv).unwrap();
    }
    assert!(!p.is_game_over());
    p.play_uci(shuffle[3]).unwrap();
    assert!(p.is_game_over(), "start position seen five times");
    assert!(!p.is_stalemate() && !p.is_checkmate());
}

#[test]
fn test_display_is_fen() {
    let p = pos(FOOLS_MATE);
    assert_eq!(p.to_string(), FOOLS_MATE);
}

#[test]
fn test_fen_clock_above_hundred_is_kept() {
    let p = pos("r3k3/8/8/8/8/8/8/4K2R w - - 120 90");
    assert_eq!(p.halfmove_clock(), 120);
    assert_eq!(p.to_string(), "r3k3/8/8/8/8/8/8/4K2R w - - 120 90");
    assert!(!p.is_game_over());

    let p = pos("r3k3/8/8/8/8/8/8/4K2R w - - 150 100");
    assert!(p.is_game_over(), "seventy-five moves without capture or pawn move");
    assert!(!p.is_stalemate() && !p.is_checkmate());
}

#[test]
fn test_seventy_five_move_rule_after_reversible_plies() {
    use std::collections::HashSet;

    let mut p = pos("r3k3/8/8/8/8/8/8/4K2R w - - 100 80");
    let mut seen = HashSet::from([p.inner().hash()]);

    for ply in 0..50 {
        assert!(!p.is_game_over(), "game ended early at ply {ply}");
        let mv = p
            .legal_moves()
            .into_iter()
            .find(|&mv| {
                if p.is_capture(mv) {
                    return false;
                }
                let mut next = p.clone();
                next.apply(mv);
                !seen.contains(&next.inner().hash()) && !next.legal_moves().is_empty()
            })
            .expect("a fresh reversible move exists");
        p.apply(mv);
        seen.insert(p.inner().hash());
    }

    assert_eq!(p.halfmove_clock(), 150);
    assert!(p.is_game_over());

    p.undo();
    assert_eq!(p.halfmove_clock(), 149);
    assert!(!p.is_game_over());
}

#[test]
fn test_capture_resets_reversible_plies() {
    let mut p = pos("r3k3/8/8/8/8/8/8/R3K3 w - - 130 90");
    p.play_uci("e1d2").unwrap();
    p.play_uci("e8d7").unwrap();
    assert_eq!(p.halfmove_clock(), 132);

    p.play_uci("a1a8").unwrap();
    assert_eq!(p.halfmove_clock(), 0);

    p.undo();
    assert_eq!(p.halfmove_clock(), 132);
}
