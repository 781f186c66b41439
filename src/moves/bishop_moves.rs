//! Bishop geometry: equal row and column distance with a clear diagonal.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::{deltas, is_path_clear};

#[inline]
pub fn is_bishop_line(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row != 0 && d_row.unsigned_abs() == d_col.unsigned_abs()
}

pub fn bishop_reaches(game_state: &GameState, from: Square, to: Square) -> bool {
    is_bishop_line(from, to) && is_path_clear(game_state, from, to)
}
