//! King geometry and castling eligibility.
//!
//! A king attacks with its one-step range only. The two-column castling move
//! is a movement rule, never an attack, and carries its own preconditions.

use tracing::trace;

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::{deltas, is_path_clear};

/// One step in any direction.
#[inline]
pub fn king_step_reaches(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    from != to && d_row.unsigned_abs() <= 1 && d_col.unsigned_abs() <= 1
}

/// Whether `from -> to` is shaped like a castling move: same row, two columns.
#[inline]
pub fn is_castling_shape(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row == 0 && d_col.unsigned_abs() == 2
}

/// Rook corner and rook landing square for a castling king move.
#[inline]
pub fn castling_rook_squares(from: Square, to: Square) -> (Square, Square) {
    if to.col > from.col {
        (Square::new(from.row, KINGSIDE_ROOK_COL), to.offset(0, -1))
    } else {
        (Square::new(from.row, QUEENSIDE_ROOK_COL), to.offset(0, 1))
    }
}

/// Pseudo-legal king move for `king` standing on `from`.
pub fn is_valid_king_move(game_state: &GameState, from: Square, to: Square, king: Piece) -> bool {
    if king_step_reaches(from, to) {
        return true;
    }

    if !king.has_moved && is_castling_shape(from, to) {
        return can_castle(game_state, from, to, king.color);
    }

    false
}

/// Castling eligibility, minus the destination's safety which the self-check
/// simulation covers.
pub fn can_castle(game_state: &GameState, from: Square, to: Square, color: Color) -> bool {
    if !from.is_on_board() || !to.is_on_board() || !is_castling_shape(from, to) {
        return false;
    }
    let (rook_square, _) = castling_rook_squares(from, to);

    let rook_ready = matches!(
        game_state.piece_at(rook_square),
        Some(rook) if rook.kind == PieceKind::Rook && !rook.has_moved
    );
    if !rook_ready {
        trace!(%from, %to, "castling refused: no unmoved rook on {rook_square}");
        return false;
    }

    if !is_path_clear(game_state, from, rook_square) {
        trace!(%from, %to, "castling refused: pieces between king and rook");
        return false;
    }

    if is_king_in_check(game_state, color) {
        trace!(%from, %to, "castling refused: king is in check");
        return false;
    }

    let crossed = Square::new(from.row, (from.col + to.col) / 2);
    if is_square_attacked(game_state, crossed, color.opposite()) {
        trace!(%from, %to, "castling refused: {crossed} is attacked");
        return false;
    }

    true
}
