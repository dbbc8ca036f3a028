//! Chess board representation and game logic.
//!
//! An 8x8 grid model with full legal-move generation (check, pin, castling,
//! en passant, promotion) under a strict make/undo history, plus a
//! fixed-depth negamax search with alpha-beta pruning.
//!
//! # Example
//! ```
//! use gridchess::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.valid_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod eval;
mod fen;
mod legality;
mod make_unmake;
mod movegen;
mod notation;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, SquareError};
pub use state::GameState;
pub use types::{CastlingRights, Color, Move, Piece, Square};

// Public API - evaluation and search
pub use eval::evaluate;
pub use search::{
    find_best_move, find_random_move, spawn_search, SearchHandle, DEFAULT_DEPTH, DRAW, MATE,
};

pub(crate) use types::{
    ALL_DIRECTIONS, BISHOP_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};
