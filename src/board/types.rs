//! Core value types: colors, pieces, squares, castling rights, and moves.

use super::error::SquareError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank row for this color (row 0 is rank 8).
    pub(crate) fn home_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }
}

/// Board square as (row, col). Row 0 is rank 8 (black's back rank),
/// col 0 is the a-file, so `Square(7, 4)` is e1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8, "square ({row}, {col}) off the board");
        Square(row, col)
    }

    #[must_use]
    pub fn row(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn col(self) -> usize {
        self.1
    }

    /// Step by a signed offset, returning `None` when leaving the board.
    pub(crate) fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        let row = self.0 as i32 + dr;
        let col = self.1 as i32 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(notation: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidNotation {
            notation: notation.to_string(),
        };
        let mut chars = notation.chars();
        let file = chars.next().ok_or_else(invalid)?;
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let col = file as usize - 'a' as usize;
        let row = 8 - (rank as usize - '0' as usize);
        Ok(Square(row, col))
    }

    /// Algebraic name of this square ("a1".."h8").
    #[must_use]
    pub fn algebraic(self) -> String {
        format!("{}{}", (b'a' + self.1 as u8) as char, 8 - self.0)
    }
}

/// The four castling permissions, cleared monotonically during play and
/// restored only by `undo_move`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    #[must_use]
    pub fn all() -> Self {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    #[must_use]
    pub fn none() -> Self {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    #[must_use]
    pub fn get(self, color: Color, kingside: bool) -> bool {
        match (color, kingside) {
            (Color::White, true) => self.white_kingside,
            (Color::White, false) => self.white_queenside,
            (Color::Black, true) => self.black_kingside,
            (Color::Black, false) => self.black_queenside,
        }
    }

    pub(crate) fn clear(&mut self, color: Color, kingside: bool) {
        match (color, kingside) {
            (Color::White, true) => self.white_kingside = false,
            (Color::White, false) => self.white_queenside = false,
            (Color::Black, true) => self.black_kingside = false,
            (Color::Black, false) => self.black_queenside = false,
        }
    }

    pub(crate) fn clear_side(&mut self, color: Color) {
        self.clear(color, true);
        self.clear(color, false);
    }
}

/// One board transition plus the metadata needed to undo it.
///
/// Equality is derived solely from the coordinates and the move-kind flags;
/// the captured piece and promotion target do not participate, so a caller
/// can match a move it constructed against the generated legal set.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: (Color, Piece),
    pub captured: Option<(Color, Piece)>,
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub promotion: Option<Piece>,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.is_castle == other.is_castle
            && self.is_en_passant == other.is_en_passant
            && self.is_promotion == other.is_promotion
    }
}

impl Move {
    #[must_use]
    pub fn new(
        from: Square,
        to: Square,
        piece_moved: (Color, Piece),
        captured: Option<(Color, Piece)>,
    ) -> Self {
        Move {
            from,
            to,
            piece_moved,
            captured,
            is_castle: false,
            is_en_passant: false,
            is_promotion: false,
            promotion: None,
        }
    }

    pub(crate) fn castle(from: Square, to: Square, color: Color) -> Self {
        Move {
            is_castle: true,
            ..Move::new(from, to, (color, Piece::King), None)
        }
    }

    pub(crate) fn en_passant(from: Square, to: Square, color: Color) -> Self {
        Move {
            is_en_passant: true,
            ..Move::new(
                from,
                to,
                (color, Piece::Pawn),
                Some((color.opposite(), Piece::Pawn)),
            )
        }
    }

    /// Promotion move, defaulting to queen. Override with [`Move::with_promotion`].
    pub(crate) fn promoting(
        from: Square,
        to: Square,
        color: Color,
        captured: Option<(Color, Piece)>,
    ) -> Self {
        Move {
            is_promotion: true,
            promotion: Some(Piece::Queen),
            ..Move::new(from, to, (color, Piece::Pawn), captured)
        }
    }

    /// Replace the promotion target (for underpromotion).
    #[must_use]
    pub fn with_promotion(mut self, piece: Piece) -> Self {
        debug_assert!(self.is_promotion, "not a promotion move");
        self.promotion = Some(piece);
        self
    }

    #[must_use]
    pub fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The first four directions are orthogonal, the last four diagonal; the
/// pin/check scan relies on that ordering.
pub(crate) const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
