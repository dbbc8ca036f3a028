//! FEN parsing and generation.
//!
//! Gameplay never needs FEN; it exists so tests and tooling can set up
//! arbitrary positions. The halfmove and fullmove fields are accepted and
//! ignored on input and emitted as "0 1".

use super::error::FenError;
use super::{CastlingRights, Color, GameState, Piece, Square};

fn piece_from_char(c: char) -> Option<(Color, Piece)> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let piece = match c.to_ascii_uppercase() {
        'P' => Piece::Pawn,
        'N' => Piece::Knight,
        'B' => Piece::Bishop,
        'R' => Piece::Rook,
        'Q' => Piece::Queen,
        'K' => Piece::King,
        _ => return None,
    };
    Some((color, piece))
}

fn piece_to_char(color: Color, piece: Piece) -> char {
    match color {
        Color::White => piece.letter(),
        Color::Black => piece.letter().to_ascii_lowercase(),
    }
}

impl GameState {
    /// Parse a FEN string into a game state with empty history.
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut state = GameState::empty();
        let mut kings = [Vec::new(), Vec::new()];

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let (color, piece) =
                    piece_from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: row,
                        files: col + 1,
                    });
                }
                state.grid[row][col] = Some((color, piece));
                if piece == Piece::King {
                    kings[color.index()].push(Square(row, col));
                }
                col += 1;
            }
            if col > 8 {
                return Err(FenError::TooManyFiles { rank: row, files: col });
            }
        }

        for color in [Color::White, Color::Black] {
            let found = &kings[color.index()];
            if found.len() != 1 {
                return Err(FenError::BadKingCount {
                    color,
                    found: found.len(),
                });
            }
            state.set_king_square(color, found[0]);
        }

        state.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => rights.white_kingside = true,
                    'Q' => rights.white_queenside = true,
                    'k' => rights.black_kingside = true,
                    'q' => rights.black_queenside = true,
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        // Drop any right whose king or rook is not on its canonical square,
        // so a sloppy FEN cannot make castle_moves launch from a stray king.
        for color in [Color::White, Color::Black] {
            let home = color.home_row();
            if state.king_square(color) != Square(home, 4) {
                rights.clear_side(color);
                continue;
            }
            if state.grid[home][7] != Some((color, Piece::Rook)) {
                rights.clear(color, true);
            }
            if state.grid[home][0] != Some((color, Piece::Rook)) {
                rights.clear(color, false);
            }
        }
        state.castling_rights = rights;

        state.en_passant_target = match parts[3] {
            "-" => None,
            target => Some(Square::from_algebraic(target).map_err(|_| {
                FenError::InvalidEnPassant {
                    found: target.to_string(),
                }
            })?),
        };

        Ok(state)
    }

    /// Render the position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.grid[row][col] {
                    None => empty += 1,
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece_to_char(color, piece));
                    }
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.white_to_move { 'w' } else { 'b' });

        fen.push(' ');
        let rights = self.castling_rights;
        if rights == CastlingRights::none() {
            fen.push('-');
        } else {
            if rights.white_kingside {
                fen.push('K');
            }
            if rights.white_queenside {
                fen.push('Q');
            }
            if rights.black_kingside {
                fen.push('k');
            }
            if rights.black_queenside {
                fen.push('q');
            }
        }

        fen.push(' ');
        match self.en_passant_target {
            None => fen.push('-'),
            Some(sq) => fen.push_str(&sq.algebraic()),
        }

        fen.push_str(" 0 1");
        fen
    }
}
