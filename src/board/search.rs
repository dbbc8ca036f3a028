//! Negamax search with alpha-beta pruning, plus the worker-thread handle
//! for callers that need the blocking search off their own thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

use log::debug;
use rand::seq::SliceRandom;

use super::eval::evaluate;
use super::{GameState, Move};

/// Checkmate score, far above any material total (~40 pawns).
pub const MATE: i32 = 100_000;

/// Stalemate and other dead-level scores.
pub const DRAW: i32 = 0;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Pick the best move for the side to move by fixed-depth negamax over
/// `moves` (the current legal set, from [`GameState::valid_moves`]).
///
/// Root moves are shuffled first so equal-strength siblings are chosen
/// without deterministic bias. Returns `None` only when `moves` is empty;
/// the caller decides the fallback ([`find_random_move`], or treating the
/// game as concluded).
pub fn find_best_move(state: &mut GameState, moves: &[Move], depth: u32) -> Option<Move> {
    let mut shuffled = moves.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    let cancelled = AtomicBool::new(false);
    search_root(state, &shuffled, depth, &cancelled)
}

/// Uniformly random legal move; the usual fallback when search yields none.
pub fn find_random_move(moves: &[Move]) -> Option<Move> {
    moves.choose(&mut rand::thread_rng()).copied()
}

/// Root of the search. The best move is threaded through this loop's return
/// value; recursion below only ever returns scores.
fn search_root(
    state: &mut GameState,
    moves: &[Move],
    depth: u32,
    cancelled: &AtomicBool,
) -> Option<Move> {
    let turn_multiplier = if state.white_to_move() { 1 } else { -1 };
    let mut alpha = -MATE;
    let beta = MATE;
    let mut best_score = -MATE - 1;
    let mut best_move = None;

    for &m in moves {
        if cancelled.load(Ordering::Relaxed) {
            return None;
        }
        state.make_move(m);
        let score = -negamax(state, depth.saturating_sub(1), -beta, -alpha, -turn_multiplier, cancelled);
        state.undo_move();
        if score > best_score {
            best_score = score;
            best_move = Some(m);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    if cancelled.load(Ordering::Relaxed) {
        return None;
    }
    if let Some(m) = best_move {
        debug!(
            "depth {depth}: best {} score {best_score}",
            m.notation()
        );
    }
    best_move
}

/// Negamax with an alpha-beta window, from the perspective of the side to
/// move at each node. Terminal positions are scored from the legality
/// filter's flags, never inferred from move counts elsewhere.
pub(crate) fn negamax(
    state: &mut GameState,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    turn_multiplier: i32,
    cancelled: &AtomicBool,
) -> i32 {
    if cancelled.load(Ordering::Relaxed) {
        return 0;
    }

    let moves = state.valid_moves();
    if moves.is_empty() {
        return if state.in_check() { -MATE } else { DRAW };
    }
    if depth == 0 {
        return turn_multiplier * evaluate(state);
    }

    let mut best = -MATE;
    for m in moves {
        state.make_move(m);
        let score = -negamax(state, depth - 1, -beta, -alpha, -turn_multiplier, cancelled);
        state.undo_move();
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// A search running on its own worker thread.
///
/// The worker owns a clone of the game state, so the caller's state stays
/// free for undo or reset while the search runs. `cancel` raises a stop flag
/// the search polls; a cancelled worker's result is withheld rather than
/// delivered stale.
pub struct SearchHandle {
    stop: Arc<AtomicBool>,
    receiver: mpsc::Receiver<Option<Move>>,
    worker: Option<JoinHandle<()>>,
}

/// Start a search for `state`'s side to move on a worker thread.
#[must_use]
pub fn spawn_search(state: &GameState, depth: u32) -> SearchHandle {
    let mut state = state.clone();
    let stop = Arc::new(AtomicBool::new(false));
    let worker_stop = Arc::clone(&stop);
    let (sender, receiver) = mpsc::channel();

    let worker = thread::spawn(move || {
        let mut moves = state.valid_moves();
        moves.shuffle(&mut rand::thread_rng());
        let best = search_root(&mut state, &moves, depth, &worker_stop);
        // The receiver may already be gone if the caller dropped the handle.
        let _ = sender.send(best);
    });

    SearchHandle {
        stop,
        receiver,
        worker: Some(worker),
    }
}

impl SearchHandle {
    /// Ask the worker to stop; its result (if any) will be `None`.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Non-blocking poll. `None` while the worker is still searching.
    pub fn try_result(&self) -> Option<Option<Move>> {
        self.receiver.try_recv().ok()
    }

    /// Block until the worker finishes and return its move.
    pub fn join(mut self) -> Option<Move> {
        let result = self.receiver.recv().ok().flatten();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        result
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
