//! End-to-end searches through the public API: mate-in-one positions the
//! engine must find at the default depth.

use gridchess::{find_best_move, GameState, Square, DEFAULT_DEPTH};

fn best_move(fen: &str) -> (GameState, gridchess::Move) {
    let mut state = GameState::from_fen(fen).expect("valid test position");
    let moves = state.valid_moves();
    let best = find_best_move(&mut state, &moves, DEFAULT_DEPTH).expect("position has moves");
    (state, best)
}

fn assert_mates(fen: &str, to: &str) {
    let (mut state, best) = best_move(fen);
    assert_eq!(
        best.to,
        Square::from_algebraic(to).unwrap(),
        "expected mate on {to}, engine chose {}",
        best.notation()
    );
    assert!(state.make_move(best));
    assert!(state.valid_moves().is_empty());
    assert!(state.is_checkmate());
}

#[test]
fn finds_rook_back_rank_mate() {
    assert_mates("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a8");
}

#[test]
fn finds_back_rank_mate_as_black() {
    assert_mates("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1", "a1");
}

#[test]
fn finds_queen_mate() {
    assert_mates("6k1/5ppp/8/8/8/8/Q7/6K1 w - - 0 1", "a8");
}

#[test]
fn avoids_stalemating_a_won_position() {
    // With a queen up, any reasonable move keeps the game going; the engine
    // must not pick one that stalemates the bare king.
    let (mut state, best) = best_move("7k/8/6QK/8/8/8/8/8 w - - 0 1");
    assert!(state.make_move(best));
    let _ = state.valid_moves();
    assert!(
        !state.is_stalemate(),
        "engine stalemated with {}",
        best.notation()
    );
}
