//! Static evaluation: material plus piece-square tables.
//!
//! Scores are in millipawns (pawn = 1000), positive favoring White. The
//! positional tables already include their fractional weight, so the largest
//! positional term (80) stays far below a minor piece; positional play never
//! outweighs a material deficit. The search applies the turn multiplier to
//! read this from the mover's perspective.

use once_cell::sync::Lazy;

use super::{Color, GameState, Piece};

pub(crate) const MATERIAL: [i32; 6] = [1000, 3000, 3000, 5000, 9000, 0];

type PieceTable = [[i32; 8]; 8];

// Tables are written from White's point of view with row 0 at the top of the
// board (rank 8); Black reads them row-mirrored.
const PAWN_TABLE: PieceTable = [
    [80, 80, 80, 80, 80, 80, 80, 80],
    [70, 70, 70, 70, 70, 70, 70, 70],
    [30, 30, 40, 50, 50, 40, 30, 30],
    [25, 25, 30, 45, 45, 30, 25, 25],
    [20, 20, 20, 40, 40, 20, 20, 20],
    [25, 15, 10, 20, 20, 10, 15, 25],
    [25, 30, 30, 0, 0, 30, 30, 25],
    [20, 20, 20, 20, 20, 20, 20, 20],
];

const KNIGHT_TABLE: PieceTable = [
    [0, 10, 20, 20, 20, 20, 10, 0],
    [10, 30, 50, 50, 50, 50, 30, 10],
    [20, 50, 60, 65, 65, 60, 50, 20],
    [20, 55, 65, 70, 70, 65, 55, 20],
    [20, 50, 65, 70, 70, 65, 50, 20],
    [20, 55, 60, 65, 65, 60, 55, 20],
    [10, 30, 50, 55, 55, 50, 30, 10],
    [0, 10, 20, 20, 20, 20, 10, 0],
];

const BISHOP_TABLE: PieceTable = [
    [0, 20, 20, 20, 20, 20, 20, 0],
    [20, 40, 40, 40, 40, 40, 40, 20],
    [20, 40, 50, 60, 60, 50, 40, 20],
    [20, 50, 50, 60, 60, 50, 50, 20],
    [20, 40, 60, 60, 60, 60, 40, 20],
    [20, 60, 60, 60, 60, 60, 60, 20],
    [20, 50, 40, 40, 40, 40, 50, 20],
    [0, 20, 20, 20, 20, 20, 20, 0],
];

const ROOK_TABLE: PieceTable = [
    [25, 25, 25, 25, 25, 25, 25, 25],
    [50, 75, 75, 75, 75, 75, 75, 50],
    [0, 25, 25, 25, 25, 25, 25, 0],
    [0, 25, 25, 25, 25, 25, 25, 0],
    [0, 25, 25, 25, 25, 25, 25, 0],
    [0, 25, 25, 25, 25, 25, 25, 0],
    [0, 25, 25, 25, 25, 25, 25, 0],
    [25, 25, 25, 50, 50, 25, 25, 25],
];

const QUEEN_TABLE: PieceTable = [
    [0, 20, 20, 30, 30, 20, 20, 0],
    [20, 40, 40, 40, 40, 40, 40, 20],
    [20, 40, 50, 50, 50, 50, 40, 20],
    [30, 40, 50, 50, 50, 50, 40, 30],
    [40, 40, 50, 50, 50, 50, 40, 30],
    [20, 50, 50, 50, 50, 50, 40, 20],
    [20, 40, 50, 40, 40, 40, 40, 20],
    [0, 20, 20, 30, 30, 20, 20, 0],
];

const WHITE_TABLES: [PieceTable; 5] =
    [PAWN_TABLE, KNIGHT_TABLE, BISHOP_TABLE, ROOK_TABLE, QUEEN_TABLE];

/// Row-mirrored tables for Black, built once on first use.
static BLACK_TABLES: Lazy<[PieceTable; 5]> = Lazy::new(|| {
    let mut tables = WHITE_TABLES;
    for table in &mut tables {
        table.reverse();
    }
    tables
});

fn positional(color: Color, piece: Piece, row: usize, col: usize) -> i32 {
    if piece == Piece::King {
        return 0;
    }
    let tables = match color {
        Color::White => &WHITE_TABLES,
        Color::Black => &*BLACK_TABLES,
    };
    tables[piece.index()][row][col]
}

/// Material + positional score of the position, positive favoring White.
/// Pure lookup; terminal states are scored by the search from the legality
/// filter's flags, not here.
#[must_use]
pub fn evaluate(state: &GameState) -> i32 {
    let mut score = 0;
    for row in 0..8 {
        for col in 0..8 {
            if let Some((color, piece)) = state.grid[row][col] {
                let value = MATERIAL[piece.index()] + positional(color, piece, row, col);
                match color {
                    Color::White => score += value,
                    Color::Black => score -= value,
                }
            }
        }
    }
    score
}
