//! Core board state representation.
//!
//! `GameState` is the central model for the engine: an 8×8 grid of pieces
//! held by value, the side to move, the en-passant target and the append-only
//! move log. It is a plain value type, so `clone()` is a complete deep copy and
//! simulations never alias the live board.
//!
//! The inherent methods below form the engine's public contract; they forward
//! to the free functions in `move_generation`, which do the actual work.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::game_end_checks::{
    is_checkmate, is_insufficient_material, is_stalemate,
};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_valid_move};
use crate::move_generation::legal_move_generator::{is_legal_move, valid_moves_from};
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::can_castle;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

pub type Grid = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Indexed `[row][col]`; row 0 is rank 1.
    pub board: Grid,
    pub current_turn: Color,
    /// Landing square for an en-passant capture, valid for the next move only.
    pub en_passant_target: Option<Square>,
    pub move_history: Vec<ChessMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            current_turn: Color::White,
            en_passant_target: None,
            move_history: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, White to move. Used to construct test positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game_state = Self::default();
        for color in [Color::White, Color::Black] {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let col = col as i8;
                game_state.set_piece_at(Square::new(back, col), Some(Piece::new(*kind, color)));
                game_state.set_piece_at(
                    Square::new(pawns, col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Whether this state is the untouched standard start.
    pub fn is_starting_position(&self) -> bool {
        self.move_history.is_empty() && self.get_fen() == STARTING_POSITION_FEN
    }

    /// Piece on `square`; off-board squares hold nothing.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.grid_index()?;
        self.board[row][col]
    }

    /// Writes a cell. Off-board writes are ignored.
    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Option<Piece>) {
        if let Some((row, col)) = square.grid_index() {
            self.board[row][col] = piece;
        }
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Every occupied square of `color`, rank by rank from a1.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    /// Every occupied square, rank by rank from a1.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    // --- Engine contract ---

    /// Pseudo-legal check: geometry and occupancy only, king safety ignored.
    #[inline]
    pub fn is_valid_move(&self, mv: &ChessMove) -> bool {
        is_valid_move(self, mv)
    }

    /// Authoritative legality: pseudo-legal and the mover's king is safe
    /// afterwards.
    #[inline]
    pub fn is_legal_move(&self, mv: &ChessMove) -> bool {
        is_legal_move(self, mv)
    }

    /// Applies `mv` without validating it and returns the completed record.
    #[inline]
    pub fn make_move(&mut self, mv: ChessMove) -> ChessResult<ChessMove> {
        apply_move(self, mv)
    }

    /// Castling eligibility for the side to move's king on `from` heading to
    /// `to`. Destination safety is left to `is_legal_move`.
    #[inline]
    pub fn can_castle(&self, from: Square, to: Square) -> bool {
        can_castle(self, from, to, self.current_turn)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    #[inline]
    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(self, color)
    }

    #[inline]
    pub fn is_stalemate(&self, color: Color) -> bool {
        is_stalemate(self, color)
    }

    #[inline]
    pub fn is_insufficient_material(&self) -> bool {
        is_insufficient_material(self)
    }

    /// Legal moves for the piece on `from`, one per reachable destination.
    #[inline]
    pub fn valid_moves_from(&self, from: Square) -> Vec<ChessMove> {
        valid_moves_from(self, from)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
