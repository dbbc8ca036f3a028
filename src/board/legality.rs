//! The legality filter: pin/check detection and the reduction of
//! pseudo-legal moves to fully legal ones.
//!
//! The scan walks all eight directions outward from the side-to-move's king.
//! The first friendly piece on a ray is a pin candidate; an enemy piece that
//! threatens along the ray turns the candidate into a pin, or records a
//! check when no candidate blocks. The friendly king itself is transparent
//! on rays, which makes king-retreat validation by relocation x-ray correct.

use log::debug;

use super::{Color, GameState, Move, Piece, Square, ALL_DIRECTIONS, KNIGHT_OFFSETS};

/// A friendly piece that cannot leave the line between its king and an
/// enemy slider. Produced per legality query, never stored.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Pin {
    pub(crate) square: Square,
    pub(crate) dir: (i32, i32),
}

/// An attack on the side-to-move's king: the attacker's square and the
/// direction from the king toward it (knight offsets included).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Check {
    pub(crate) square: Square,
    pub(crate) dir: (i32, i32),
}

impl GameState {
    /// All fully legal moves for the side to move. Also refreshes the
    /// `in_check`, `checkmate`, and `stalemate` flags: an empty result flags
    /// checkmate when in check and stalemate otherwise.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let (in_check, pins, checks) = self.check_for_pins_and_checks();
        self.in_check = in_check;
        let color = self.side_to_move();

        let mut moves = if !in_check {
            let mut moves = self.pseudo_legal_moves(&pins);
            moves.extend(self.castle_moves(color));
            moves
        } else if checks.len() == 1 {
            self.check_evasions(&pins, checks[0])
        } else {
            // Double check: only the king can move.
            Vec::new()
        };
        moves.extend(self.legal_king_moves(color));

        if moves.is_empty() {
            self.checkmate = in_check;
            self.stalemate = !in_check;
            debug!(
                "{:?} has no legal moves: {}",
                color,
                if in_check { "checkmate" } else { "stalemate" }
            );
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    /// Non-king responses to a single check: capture the checker or
    /// interpose on a sliding checker's ray. A knight (or adjacent) checker
    /// cannot be blocked, only captured.
    fn check_evasions(&self, pins: &[Pin], check: Check) -> Vec<Move> {
        let color = self.side_to_move();
        let king = self.king_square(color);
        let checker = self.piece_at(check.square).map(|(_, p)| p);

        let mut blocking: Vec<Square> = Vec::new();
        if checker == Some(Piece::Knight) {
            blocking.push(check.square);
        } else {
            for i in 1..8 {
                let Some(sq) = king.offset(check.dir.0 * i, check.dir.1 * i) else {
                    break;
                };
                blocking.push(sq);
                if sq == check.square {
                    break;
                }
            }
        }

        let mut moves = self.pseudo_legal_moves(pins);
        moves.retain(|m| {
            blocking.contains(&m.to)
                // An en-passant capture removes a checking pawn without
                // landing on its square.
                || (m.is_en_passant && Square(m.from.0, m.to.1) == check.square)
        });
        moves
    }

    /// King candidates validated by relocating the cached king square and
    /// re-running the check scan, then restoring it. The scan treats the
    /// king's old square as transparent, so retreating along a checker's ray
    /// is correctly rejected.
    fn legal_king_moves(&mut self, color: Color) -> Vec<Move> {
        let from = self.king_square(color);
        let mut moves = Vec::new();
        for (dr, dc) in ALL_DIRECTIONS {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            let captured = match self.piece_at(to) {
                Some((c, _)) if c == color => continue,
                other => other,
            };
            self.set_king_square(color, to);
            let (in_check, _, _) = self.check_for_pins_and_checks();
            self.set_king_square(color, from);
            if !in_check {
                moves.push(Move::new(from, to, (color, Piece::King), captured));
            }
        }
        moves
    }

    /// Scan outward from the side-to-move's king for pins and checks.
    pub(crate) fn check_for_pins_and_checks(&self) -> (bool, Vec<Pin>, Vec<Check>) {
        let color = self.side_to_move();
        let enemy = color.opposite();
        let king = self.king_square(color);
        let mut in_check = false;
        let mut pins = Vec::new();
        let mut checks = Vec::new();

        for (j, &dir) in ALL_DIRECTIONS.iter().enumerate() {
            let orthogonal = j < 4;
            let mut possible_pin: Option<Square> = None;
            for i in 1..8 {
                let Some(sq) = king.offset(dir.0 * i, dir.1 * i) else {
                    break;
                };
                match self.piece_at(sq) {
                    Some((c, piece)) if c == color => {
                        if piece == Piece::King {
                            // Phantom left by king-relocation validation.
                            continue;
                        }
                        if possible_pin.is_none() {
                            possible_pin = Some(sq);
                        } else {
                            break;
                        }
                    }
                    Some((_, piece)) => {
                        let threatens = match piece {
                            Piece::Rook => orthogonal,
                            Piece::Bishop => !orthogonal,
                            Piece::Queen => true,
                            Piece::King => i == 1,
                            Piece::Pawn => {
                                i == 1
                                    && match enemy {
                                        // White pawns attack toward row 0.
                                        Color::White => dir == (1, -1) || dir == (1, 1),
                                        Color::Black => dir == (-1, -1) || dir == (-1, 1),
                                    }
                            }
                            Piece::Knight => false,
                        };
                        if threatens {
                            match possible_pin {
                                None => {
                                    in_check = true;
                                    checks.push(Check { square: sq, dir });
                                }
                                Some(pinned) => pins.push(Pin {
                                    square: pinned,
                                    dir,
                                }),
                            }
                        }
                        break;
                    }
                    None => {}
                }
            }
        }

        for (dr, dc) in KNIGHT_OFFSETS {
            let Some(sq) = king.offset(dr, dc) else {
                continue;
            };
            if self.piece_at(sq) == Some((enemy, Piece::Knight)) {
                in_check = true;
                checks.push(Check {
                    square: sq,
                    dir: (dr, dc),
                });
            }
        }

        (in_check, pins, checks)
    }

    /// Whether any enemy piece attacks `sq`, probing outward along rays and
    /// knight offsets rather than generating the opponent's move list.
    /// Used for castling-path safety.
    pub(crate) fn square_under_attack(&self, sq: Square, defender: Color) -> bool {
        let enemy = defender.opposite();

        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(s) = sq.offset(dr, dc) {
                if self.piece_at(s) == Some((enemy, Piece::Knight)) {
                    return true;
                }
            }
        }

        for (j, &dir) in ALL_DIRECTIONS.iter().enumerate() {
            let orthogonal = j < 4;
            for i in 1..8 {
                let Some(s) = sq.offset(dir.0 * i, dir.1 * i) else {
                    break;
                };
                match self.piece_at(s) {
                    None => {}
                    Some((c, _)) if c == defender => break,
                    Some((_, piece)) => {
                        let threatens = match piece {
                            Piece::Rook => orthogonal,
                            Piece::Bishop => !orthogonal,
                            Piece::Queen => true,
                            Piece::King => i == 1,
                            Piece::Pawn => {
                                i == 1
                                    && match enemy {
                                        Color::White => dir == (1, -1) || dir == (1, 1),
                                        Color::Black => dir == (-1, -1) || dir == (-1, 1),
                                    }
                            }
                            Piece::Knight => false,
                        };
                        if threatens {
                            return true;
                        }
                        break;
                    }
                }
            }
        }

        false
    }
}
