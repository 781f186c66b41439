//! Rook geometry.
//!
//! A rook reaches any square on its row or column when nothing stands in
//! between. The same rule serves move validation and attack detection.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::{deltas, is_path_clear};

#[inline]
pub fn is_rook_line(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    (d_row == 0) != (d_col == 0)
}

pub fn rook_reaches(game_state: &GameState, from: Square, to: Square) -> bool {
    is_rook_line(from, to) && is_path_clear(game_state, from, to)
}
