//! Pseudo-legal move generation, one routine per piece type.
//!
//! Every generator receives the pin list from the legality scan and drops
//! candidates that would slide a pinned piece off its pin axis. King moves
//! are not generated here; the legality filter validates king candidates by
//! relocation (see `legality.rs`).

use super::legality::Pin;
use super::{
    Color, GameState, Move, Piece, Square, ALL_DIRECTIONS, BISHOP_DIRECTIONS, KNIGHT_OFFSETS,
    ROOK_DIRECTIONS,
};

/// Pin axis of the piece on `sq`, if any.
fn pin_direction(pins: &[Pin], sq: Square) -> Option<(i32, i32)> {
    pins.iter().find(|p| p.square == sq).map(|p| p.dir)
}

/// A pinned piece may only move along its pin axis, in either direction.
fn allowed(pin: Option<(i32, i32)>, dir: (i32, i32)) -> bool {
    match pin {
        None => true,
        Some(axis) => axis == dir || axis == (-dir.0, -dir.1),
    }
}

impl GameState {
    /// All pseudo-legal moves for the side to move, excluding king moves and
    /// castling. Pinned pieces are already restricted to their pin axis.
    pub(crate) fn pseudo_legal_moves(&self, pins: &[Pin]) -> Vec<Move> {
        let color = self.side_to_move();
        let mut moves = Vec::with_capacity(48);
        for row in 0..8 {
            for col in 0..8 {
                let Some((piece_color, piece)) = self.grid[row][col] else {
                    continue;
                };
                if piece_color != color {
                    continue;
                }
                let from = Square(row, col);
                match piece {
                    Piece::Pawn => self.pawn_moves(from, pins, &mut moves),
                    Piece::Knight => self.knight_moves(from, pins, &mut moves),
                    Piece::Bishop => {
                        self.sliding_moves(from, Piece::Bishop, &BISHOP_DIRECTIONS, pins, &mut moves);
                    }
                    Piece::Rook => {
                        self.sliding_moves(from, Piece::Rook, &ROOK_DIRECTIONS, pins, &mut moves);
                    }
                    Piece::Queen => {
                        self.sliding_moves(from, Piece::Queen, &ALL_DIRECTIONS, pins, &mut moves);
                    }
                    Piece::King => {}
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, from: Square, pins: &[Pin], moves: &mut Vec<Move>) {
        let color = self.side_to_move();
        let enemy = color.opposite();
        let (dir, start_row, promo_row): (i32, usize, usize) = match color {
            Color::White => (-1, 6, 0),
            Color::Black => (1, 1, 7),
        };
        let pin = pin_direction(pins, from);

        // Forward pushes.
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) && allowed(pin, (dir, 0)) {
                if one.0 == promo_row {
                    moves.push(Move::promoting(from, one, color, None));
                } else {
                    moves.push(Move::new(from, one, (color, Piece::Pawn), None));
                }
                if from.0 == start_row {
                    let two = Square((from.0 as i32 + 2 * dir) as usize, from.1);
                    if self.is_empty(two) {
                        moves.push(Move::new(from, two, (color, Piece::Pawn), None));
                    }
                }
            }
        }

        // Diagonal captures and en passant.
        for dc in [-1, 1] {
            let Some(to) = from.offset(dir, dc) else {
                continue;
            };
            if !allowed(pin, (dir, dc)) {
                continue;
            }
            match self.piece_at(to) {
                Some((c, captured)) if c == enemy => {
                    if to.0 == promo_row {
                        moves.push(Move::promoting(from, to, color, Some((enemy, captured))));
                    } else {
                        moves.push(Move::new(
                            from,
                            to,
                            (color, Piece::Pawn),
                            Some((enemy, captured)),
                        ));
                    }
                }
                None if self.en_passant_target == Some(to) => {
                    if !self.en_passant_exposes_king(from, to, color) {
                        moves.push(Move::en_passant(from, to, color));
                    }
                }
                _ => {}
            }
        }
    }

    /// Capturing en passant removes two pawns from the capturing pawn's rank
    /// at once, which can uncover a rook or queen attack on the king along
    /// that rank. The ordinary pin scan cannot see this, so probe the rank
    /// directly with both pawns ignored.
    fn en_passant_exposes_king(&self, from: Square, to: Square, color: Color) -> bool {
        let king = self.king_square(color);
        if king.0 != from.0 {
            return false;
        }
        let captured_col = to.1;
        let step: i32 = if king.1 < from.1 { 1 } else { -1 };
        let mut col = king.1 as i32 + step;
        while (0..8).contains(&col) {
            let c = col as usize;
            if c != from.1 && c != captured_col {
                match self.grid[from.0][c] {
                    Some((pc, piece)) if pc != color => {
                        return piece == Piece::Rook || piece == Piece::Queen;
                    }
                    Some(_) => return false,
                    None => {}
                }
            }
            col += step;
        }
        false
    }

    fn knight_moves(&self, from: Square, pins: &[Pin], moves: &mut Vec<Move>) {
        // A pinned knight can never stay on its pin axis.
        if pin_direction(pins, from).is_some() {
            return;
        }
        let color = self.side_to_move();
        for (dr, dc) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some((c, _)) if c == color => {}
                captured => moves.push(Move::new(from, to, (color, Piece::Knight), captured)),
            }
        }
    }

    fn sliding_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(i32, i32)],
        pins: &[Pin],
        moves: &mut Vec<Move>,
    ) {
        let color = self.side_to_move();
        let pin = pin_direction(pins, from);
        for &dir in directions {
            if !allowed(pin, dir) {
                continue;
            }
            for i in 1..8 {
                let Some(to) = from.offset(dir.0 * i, dir.1 * i) else {
                    break;
                };
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, (color, piece), None)),
                    Some((c, _)) if c == color => break,
                    captured => {
                        moves.push(Move::new(from, to, (color, piece), captured));
                        break;
                    }
                }
            }
        }
    }

    /// Castling candidates. Callers only invoke this when the king is not in
    /// check; the transit and destination squares are verified here.
    pub(crate) fn castle_moves(&self, color: Color) -> Vec<Move> {
        let row = color.home_row();
        let king = self.king_square(color);
        let mut moves = Vec::new();

        if self.castling_rights.get(color, true)
            && self.piece_at(Square(row, 7)) == Some((color, Piece::Rook))
            && self.is_empty(Square(row, 5))
            && self.is_empty(Square(row, 6))
            && !self.square_under_attack(Square(row, 5), color)
            && !self.square_under_attack(Square(row, 6), color)
        {
            moves.push(Move::castle(king, Square(row, 6), color));
        }

        if self.castling_rights.get(color, false)
            && self.piece_at(Square(row, 0)) == Some((color, Piece::Rook))
            && self.is_empty(Square(row, 1))
            && self.is_empty(Square(row, 2))
            && self.is_empty(Square(row, 3))
            && !self.square_under_attack(Square(row, 2), color)
            && !self.square_under_attack(Square(row, 3), color)
        {
            moves.push(Move::castle(king, Square(row, 2), color));
        }

        moves
    }
}
