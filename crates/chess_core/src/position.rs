//! Concrete [`Board`] backed by cozy-chess.
//!
//! cozy-chess boards are immutable-by-value, so undo is a stack of the
//! boards that preceded each applied move.
//!
//! cozy-chess caps its half-move clock at 100, so `Position` keeps its own
//! count of reversible plies for the seventy-five-move rule.

use std::fmt;

use cozy_chess::{File, Move};

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::error::PositionError;
use crate::types::*;

/// Half-move clock at which the game ends automatically.
const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;

/// Largest half-move clock cozy-chess accepts in a FEN.
const COZY_MAX_CLOCK: u16 = 100;

/// Occurrences of one position that end the game automatically.
const FIVEFOLD: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: cozy_chess::Board,
    /// Reversible plies since the last capture or pawn move, uncapped.
    reversible_plies: u16,
    history: Vec<(cozy_chess::Board, u16)>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    /// Writes the position as FEN, with the uncapped half-move clock.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fen = self.board.to_string();
        let clock = self.reversible_plies.to_string();
        let mut fields: Vec<&str> = fen.split(' ').collect();
        if let Some(field) = fields.get_mut(4) {
            *field = &clock;
        }
        write!(f, "{}", fields.join(" "))
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(cozy_chess::Board::default())
    }

    /// Parses a FEN. Half-move clocks above 100 are accepted and kept.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let capped = COZY_MAX_CLOCK.to_string();
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        let clock = fields.get(4).and_then(|c| c.parse::<u16>().ok());
        if clock.is_some_and(|c| c > COZY_MAX_CLOCK) {
            fields[4] = &capped;
        }

        let board = cozy_chess::Board::from_fen(&fields.join(" "), false).map_err(|e| {
            PositionError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{e:?}"),
            }
        })?;
        let mut pos = Self::from_board(board);
        if let Some(clock) = clock {
            pos.reversible_plies = clock;
        }
        Ok(pos)
    }

    pub fn from_board(board: cozy_chess::Board) -> Self {
        Self {
            reversible_plies: board.halfmove_clock().into(),
            board,
            history: Vec::new(),
        }
    }

    /// The underlying cozy-chess board.
    pub fn inner(&self) -> &cozy_chess::Board {
        &self.board
    }

    /// Number of moves currently applied on top of the starting board.
    pub fn applied_moves(&self) -> usize {
        self.history.len()
    }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u16 {
        self.reversible_plies
    }

    /// Parses a UCI move and checks it is legal here.
    ///
    /// Accepts standard castling notation (`e1g1`) as well as cozy-chess's
    /// king-takes-rook encoding.
    pub fn parse_uci(&self, txt: &str) -> Result<Move, PositionError> {
        let mut mv: Move = txt
            .trim()
            .parse()
            .map_err(|_| PositionError::InvalidMove(txt.to_string()))?;

        let stm = self.board.side_to_move();
        let is_own_king = self.board.piece_on(mv.from) == Some(cozy_chess::Piece::King)
            && self.board.color_on(mv.from) == Some(stm);
        let from_file = mv.from.file() as usize;
        let to_file = mv.to.file() as usize;
        if is_own_king && mv.from.rank() == mv.to.rank() && from_file.abs_diff(to_file) == 2 {
            let rights = self.board.castle_rights(stm);
            let rook_file = if to_file > from_file {
                rights.short
            } else {
                rights.long
            };
            if let Some(rook_file) = rook_file {
                mv.to = cozy_chess::Square::new(rook_file, mv.from.rank());
            }
        }

        if self.board.is_legal(mv) {
            Ok(mv)
        } else {
            Err(PositionError::IllegalMove(txt.to_string()))
        }
    }

    /// Parses and applies a UCI move.
    pub fn play_uci(&mut self, txt: &str) -> Result<Move, PositionError> {
        let mv = self.parse_uci(txt)?;
        self.apply(mv);
        Ok(mv)
    }

    /// Renders a legal move of this position in standard UCI notation.
    pub fn move_to_uci(&self, mv: Move) -> String {
        let mut to = mv.to;
        let castles = self.board.piece_on(mv.from) == Some(cozy_chess::Piece::King)
            && self.board.color_on(mv.to) == self.board.color_on(mv.from);
        if castles {
            let file = if (mv.to.file() as usize) > (mv.from.file() as usize) {
                File::G
            } else {
                File::C
            };
            to = cozy_chess::Square::new(file, mv.from.rank());
        }

        let mut s = String::new();
        s.push_str(&sq_to_coord(from_cozy_square(mv.from)));
        s.push_str(&sq_to_coord(from_cozy_square(to)));
        if let Some(p) = mv.promotion {
            let ch = match p {
                cozy_chess::Piece::Queen => 'q',
                cozy_chess::Piece::Rook => 'r',
                cozy_chess::Piece::Bishop => 'b',
                cozy_chess::Piece::Knight => 'n',
                _ => 'q',
            };
            s.push(ch);
        }
        s
    }

    fn has_legal_moves(&self) -> bool {
        self.board
            .generate_moves(|moves| moves.into_iter().next().is_some())
    }

    /// Occurrences of the current position since the last irreversible move,
    /// counting the current one.
    fn repetitions(&self) -> usize {
        let key = self.board.hash();
        let reversible = self.reversible_plies as usize;
        1 + self
            .history
            .iter()
            .rev()
            .take(reversible)
            .filter(|(b, _)| b.hash() == key)
            .count()
    }
}

impl Board for Position {
    type Move = Move;

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply(&mut self, mv: Move) {
        assert!(self.board.is_legal(mv), "illegal move {mv:?} in {}", self.board);
        self.history.push((self.board.clone(), self.reversible_plies));
        self.board.play_unchecked(mv);
        self.reversible_plies = match self.board.halfmove_clock() {
            0 => 0,
            _ => self.reversible_plies.saturating_add(1),
        };
    }

    fn undo(&mut self) {
        (self.board, self.reversible_plies) = self
            .history
            .pop()
            .expect("undo called with no move applied");
    }

    fn is_game_over(&self) -> bool {
        !self.has_legal_moves()
            || self.is_insufficient_material()
            || self.reversible_plies >= SEVENTY_FIVE_MOVE_PLIES
            || self.repetitions() >= FIVEFOLD
    }

    fn is_checkmate(&self) -> bool {
        !self.board.checkers().is_empty() && !self.has_legal_moves()
    }

    fn is_stalemate(&self) -> bool {
        self.board.checkers().is_empty() && !self.has_legal_moves()
    }

    /// Neither side can mate: no pawns, rooks or queens, and at most one
    /// minor piece, or only bishops that all stand on one square colour.
    fn is_insufficient_material(&self) -> bool {
        use cozy_chess::Piece as P;

        let b = &self.board;
        let heavy = b.pieces(P::Pawn) | b.pieces(P::Rook) | b.pieces(P::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = b.pieces(P::Knight);
        let bishops = b.pieces(P::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let mut colours = bishops.into_iter().map(|s| is_dark(from_cozy_square(s)));
        match colours.next() {
            Some(first) => colours.all(|dark| dark == first),
            None => true,
        }
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        let s = to_cozy_square(sq);
        match (self.board.piece_on(s), self.board.color_on(s)) {
            (Some(kind), Some(color)) => Some(Piece {
                color: color.into(),
                kind: kind.into(),
            }),
            _ => None,
        }
    }

    fn color_at(&self, sq: Square) -> Option<Color> {
        self.board.color_on(to_cozy_square(sq)).map(Color::from)
    }

    fn is_attacked_by(&self, by: Color, sq: Square) -> bool {
        is_square_attacked(&self.board, to_cozy_square(sq), by.into())
    }

    fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn gives_check(&self, mv: Move) -> bool {
        let mut next = self.board.clone();
        next.play_unchecked(mv);
        !next.checkers().is_empty()
    }

    fn is_capture(&self, mv: Move) -> bool {
        let stm = self.board.side_to_move();
        match self.board.color_on(mv.to) {
            // cozy-chess encodes castling as the king capturing its own rook
            Some(color) => color != stm,
            None => {
                self.board.piece_on(mv.from) == Some(cozy_chess::Piece::Pawn)
                    && mv.from.file() != mv.to.file()
            }
        }
    }

    fn move_from(&self, mv: Move) -> Square {
        from_cozy_square(mv.from)
    }

    fn move_to(&self, mv: Move) -> Square {
        from_cozy_square(mv.to)
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
