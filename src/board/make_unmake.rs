//! Move application and undo.
//!
//! `make_move` pushes one entry on each of the three history logs and
//! `undo_move` pops one from each, so the logs stay in lockstep and a
//! make/undo pair restores the prior state exactly.

use log::trace;

use super::{GameState, Move, Piece, Square};

impl GameState {
    /// Apply a move. Returns `false` without mutating when the game is
    /// already over. The move must come from the current legal set (checked
    /// by the caller via [`GameState::valid_moves`]); passing anything else
    /// is a contract violation.
    pub fn make_move(&mut self, m: Move) -> bool {
        if self.checkmate || self.stalemate {
            return false;
        }
        debug_assert_eq!(
            self.piece_at(m.from),
            Some(m.piece_moved),
            "source square {} does not hold the moved piece",
            m.from.algebraic()
        );

        self.castling_log.push(self.castling_rights);
        self.ep_log.push(self.en_passant_target);

        let (color, piece) = m.piece_moved;
        self.grid[m.from.0][m.from.1] = None;
        let placed = if m.is_promotion {
            (color, m.promotion.unwrap_or(Piece::Queen))
        } else {
            (color, piece)
        };
        self.grid[m.to.0][m.to.1] = Some(placed);

        if piece == Piece::King {
            self.set_king_square(color, m.to);
        }

        if m.is_en_passant {
            // The bypassed pawn sits on the capturing pawn's own rank.
            self.grid[m.from.0][m.to.1] = None;
        }

        if m.is_castle {
            let row = m.from.0;
            if m.to.1 > m.from.1 {
                self.grid[row][5] = self.grid[row][7].take();
            } else {
                self.grid[row][3] = self.grid[row][0].take();
            }
        }

        self.en_passant_target =
            if piece == Piece::Pawn && (m.from.0 as i32 - m.to.0 as i32).abs() == 2 {
                Some(Square((m.from.0 + m.to.0) / 2, m.from.1))
            } else {
                None
            };

        self.update_castling_rights(&m);

        self.move_log.push(m);
        self.white_to_move = !self.white_to_move;
        trace!("made {}", m.notation());
        true
    }

    /// Undo the last move; no-op when the history is empty. Restores the
    /// position, turn, rights, and en-passant target exactly and clears the
    /// terminal flags.
    pub fn undo_move(&mut self) {
        let Some(m) = self.move_log.pop() else {
            return;
        };

        let (color, piece) = m.piece_moved;
        self.grid[m.from.0][m.from.1] = Some((color, piece));
        self.grid[m.to.0][m.to.1] = if m.is_en_passant { None } else { m.captured };
        if m.is_en_passant {
            self.grid[m.from.0][m.to.1] = m.captured;
        }

        if piece == Piece::King {
            self.set_king_square(color, m.from);
        }

        if m.is_castle {
            let row = m.from.0;
            if m.to.1 > m.from.1 {
                self.grid[row][7] = self.grid[row][5].take();
            } else {
                self.grid[row][0] = self.grid[row][3].take();
            }
        }

        // The logs move in lockstep with the move log.
        self.castling_rights = self
            .castling_log
            .pop()
            .expect("castling log out of sync with move log");
        self.en_passant_target = self.ep_log.pop().expect("en passant log out of sync");

        self.white_to_move = !self.white_to_move;
        self.checkmate = false;
        self.stalemate = false;
        trace!("undid {}", m.notation());
    }

    /// Rights are cleared by any king move, any rook move off its home
    /// corner, and any capture of a rook on its home corner; they are never
    /// re-enabled except by undo.
    fn update_castling_rights(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved;
        match piece {
            Piece::King => self.castling_rights.clear_side(color),
            Piece::Rook => {
                let home = color.home_row();
                if m.from == Square(home, 0) {
                    self.castling_rights.clear(color, false);
                } else if m.from == Square(home, 7) {
                    self.castling_rights.clear(color, true);
                }
            }
            _ => {}
        }

        if let Some((cap_color, Piece::Rook)) = m.captured {
            let home = cap_color.home_row();
            if m.to == Square(home, 0) {
                self.castling_rights.clear(cap_color, false);
            } else if m.to == Square(home, 7) {
                self.castling_rights.clear(cap_color, true);
            }
        }
    }
}
