//! Textual move notation.

use std::fmt;

use super::{Color, Move, Piece, Square};

impl Move {
    /// Compact notation: plain square-to-square for quiet moves ("e2e4"),
    /// piece letter + "x" + destination for captures ("Nxd5", pawn captures
    /// use "P"), "0-0"/"0-0-0" for castling, destination + promoted letter
    /// for promotions ("e8Q"), and a " e.p." suffix on en-passant captures.
    #[must_use]
    pub fn notation(&self) -> String {
        if self.is_castle {
            return if self.to.1 > self.from.1 {
                "0-0".to_string()
            } else {
                "0-0-0".to_string()
            };
        }
        if self.is_promotion {
            let target = self.promotion.unwrap_or(Piece::Queen);
            return format!("{}{}", self.to.algebraic(), target.letter());
        }
        if self.is_en_passant {
            return format!("Px{} e.p.", self.to.algebraic());
        }
        if self.captured.is_some() {
            let (_, piece) = self.piece_moved;
            return format!("{}x{}", piece.letter(), self.to.algebraic());
        }
        format!("{}{}", self.from.algebraic(), self.to.algebraic())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.algebraic())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
