use super::{CastlingRights, Color, Move, Piece, Square};

/// One grid cell: empty, or a colored piece.
pub(crate) type Cell = Option<(Color, Piece)>;

/// Full game state: the position grid, side to move, cached king squares,
/// castling rights, en-passant target, the three lockstep history logs, and
/// the derived check/terminal flags.
///
/// Created once per game and mutated in place by `make_move`/`undo_move`.
/// The logs push exactly once per `make_move` and pop exactly once per
/// `undo_move`, so undoing N moves in reverse order restores the state from
/// N moves prior bit for bit.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub(crate) grid: [[Cell; 8]; 8],
    pub(crate) white_to_move: bool,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castling_log: Vec<CastlingRights>,
    pub(crate) ep_log: Vec<Option<Square>>,
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard initial position, white to move.
    #[must_use]
    pub fn new() -> Self {
        let mut state = GameState::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.into_iter().enumerate() {
            state.grid[0][col] = Some((Color::Black, piece));
            state.grid[1][col] = Some((Color::Black, Piece::Pawn));
            state.grid[6][col] = Some((Color::White, Piece::Pawn));
            state.grid[7][col] = Some((Color::White, piece));
        }
        state.castling_rights = CastlingRights::all();
        state
    }

    pub(crate) fn empty() -> Self {
        GameState {
            grid: [[None; 8]; 8],
            white_to_move: true,
            white_king: Square(7, 4),
            black_king: Square(0, 4),
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            move_log: Vec::new(),
            castling_log: Vec::new(),
            ep_log: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Whether the side to move is in check, as of the last `valid_moves` call.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.checkmate || self.stalemate
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid[sq.0][sq.1]
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Moves played so far, oldest first. Replaying them from the initial
    /// position reproduces this state.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().copied()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
