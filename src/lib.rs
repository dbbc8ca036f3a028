pub mod board;

pub use board::{
    evaluate, find_best_move, find_random_move, spawn_search, CastlingRights, Color, GameState,
    Move, Piece, SearchHandle, Square, DEFAULT_DEPTH,
};
