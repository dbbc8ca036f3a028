//! Pin, check, and terminal-flag tests.

use crate::board::{GameState, Piece, Square};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

#[test]
fn test_pinned_knight_cannot_move() {
    // The b4 bishop pins the d2 knight against the e1 king.
    let mut state = GameState::from_fen("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(moves.iter().all(|m| m.from != sq("d2")));
    assert!(!moves.is_empty());
}

#[test]
fn test_pinned_rook_may_slide_along_pin_axis() {
    // The e8 rook pins the e4 rook to the e1 king; file moves stay legal,
    // rank moves do not.
    let mut state = GameState::from_fen("4r3/8/8/8/4R3/8/8/4K2k w - - 0 1").unwrap();
    let moves = state.valid_moves();
    let rook_moves: Vec<_> = moves.iter().filter(|m| m.from == sq("e4")).collect();
    assert!(!rook_moves.is_empty());
    assert!(rook_moves.iter().all(|m| m.to.col() == sq("e4").col()));
    assert!(rook_moves.iter().any(|m| m.to == sq("e8")));
}

#[test]
fn test_horizontally_pinned_pawn_cannot_push() {
    // Position 3 from the standard perft suite: the b5 pawn is pinned
    // along the fifth rank by the h5 rook.
    let mut state = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(moves.iter().all(|m| m.from != sq("b5")));
}

#[test]
fn test_single_check_responses() {
    // The e2 rook checks the e1 king; the only answers are Kd1, Kf1, Kxe2.
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(state.in_check());
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|m| m.piece_moved.1 == Piece::King));
    assert!(moves.iter().any(|m| m.to == sq("e2")));
}

#[test]
fn test_check_blocked_by_interposition() {
    // The a2 rook can block the e-file check on e1 at e2.
    let mut state = GameState::from_fen("4r2k/8/8/8/8/8/R7/4K3 w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(state.in_check());
    assert!(moves.iter().any(|m| m.from == sq("a2") && m.to == sq("e2")));
    // Squares outside the checking ray do not help.
    assert!(moves.iter().all(|m| m.from != sq("a2") || m.to.col() == sq("e2").col()));
}

#[test]
fn test_double_check_allows_only_king_moves() {
    // Rook on e8 and knight on d3 both attack e1.
    let mut state = GameState::from_fen("2k1r3/8/8/8/8/3n4/8/4K3 w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(state.in_check());
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.piece_moved.1 == Piece::King));
}

#[test]
fn test_king_cannot_retreat_along_checking_ray() {
    // Kings and a rook on the e-file: e1 king may not step to e2's shadow.
    let mut state = GameState::from_fen("4r2k/8/8/8/8/8/4K3/8 w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(state.in_check());
    assert!(moves.iter().all(|m| m.to != sq("e1") && m.to != sq("e3")));
    assert!(!moves.is_empty());
}

#[test]
fn test_en_passant_excluded_when_it_uncovers_rank_attack() {
    // Capturing d5 en passant would clear the fifth rank between the a5
    // king and the h5 rook.
    let mut state = GameState::from_fen("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_en_passant_allowed_without_rank_attacker() {
    let mut state = GameState::from_fen("4k3/8/8/K2pP3/8/8/8/8 w - d6 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(moves.iter().any(|m| m.is_en_passant && m.to == sq("d6")));
}

#[test]
fn test_en_passant_can_capture_checking_pawn() {
    // The d5 pawn has just double-pushed and checks the c4 king; exd6
    // (sic: exd5 en passant landing on d6) removes the checker.
    let mut state = GameState::from_fen("4k3/8/8/3pP3/2K5/8/8/8 w - d6 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(state.in_check());
    assert!(moves.iter().any(|m| m.is_en_passant && m.to == sq("d6")));
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut state = GameState::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        let from = sq(from);
        let to = sq(to);
        let mv = state
            .valid_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .expect("move should be legal");
        assert!(state.make_move(mv));
    }
    assert!(state.valid_moves().is_empty());
    assert!(state.in_check());
    assert!(state.is_checkmate());
    assert!(!state.is_stalemate());
}

#[test]
fn test_stalemate_flagged_without_check() {
    let mut state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(state.valid_moves().is_empty());
    assert!(!state.in_check());
    assert!(state.is_stalemate());
    assert!(!state.is_checkmate());
}

#[test]
fn test_flags_clear_when_moves_exist_again() {
    // Nearly stalemated, but the h5 pawn still has a push.
    let mut state = GameState::from_fen("7k/5Q2/6K1/7p/8/8/8/8 b - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert_eq!(moves.len(), 1);
    assert!(!state.is_stalemate());
    assert!(!state.is_checkmate());
}

#[test]
fn test_no_legal_move_leaves_own_king_attacked() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1",
        "2k1r3/8/8/8/8/3n4/8/4K3 w - - 0 1",
    ];
    for fen in fens {
        let mut state = GameState::from_fen(fen).unwrap();
        let mover = state.side_to_move();
        for mv in state.valid_moves() {
            assert!(state.make_move(mv));
            let king = state.king_square(mover);
            assert!(
                !state.square_under_attack(king, mover),
                "move {} in {fen} leaves the king attacked",
                mv.notation()
            );
            state.undo_move();
        }
    }
}
