use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::deltas;

/// Knight jump: one of the eight (2,1)/(1,2) offsets. No path check.
#[inline]
pub fn knight_reaches(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.unsigned_abs(), d_col.unsigned_abs()), (2, 1) | (1, 2))
}
