//! Pawn geometry.
//!
//! Pawns are the one piece whose movement and attack patterns differ: they
//! advance straight into empty squares but attack diagonally, and the diagonal
//! attack holds whether or not the target square is occupied.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{deltas, enemy_piece_on};

/// Pseudo-legal pawn move for `pawn` standing on `from`.
///
/// The caller has already rejected same-color destinations.
pub fn is_valid_pawn_move(game_state: &GameState, from: Square, to: Square, pawn: Piece) -> bool {
    let direction = pawn.color.pawn_direction();
    let (d_row, d_col) = deltas(from, to);

    if d_col == 0 {
        if d_row == direction {
            return game_state.is_empty(to);
        }
        if d_row == 2 * direction && from.row == pawn.color.pawn_start_row() {
            let intermediate = from.offset(direction, 0);
            return game_state.is_empty(intermediate) && game_state.is_empty(to);
        }
        return false;
    }

    if d_col.unsigned_abs() == 1 && d_row == direction {
        if enemy_piece_on(game_state, to, pawn.color).is_some() {
            return true;
        }
        return game_state.en_passant_target == Some(to);
    }

    false
}

/// Whether a pawn of `color` on `from` attacks `target`.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (d_row, d_col) = deltas(from, target);
    d_row == color.pawn_direction() && d_col.unsigned_abs() == 1
}

/// Whether a pawn of `color` moving from `from` to `to` is a double step.
#[inline]
pub fn is_double_step(color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_col == 0 && d_row == 2 * color.pawn_direction()
}
