use crate::game_state::{chess_types::*, game_state::GameState};

/// Row and column deltas from `from` to `to`. Wraps for squares far off the
/// board; callers compare magnitudes with `unsigned_abs`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (to.row.wrapping_sub(from.row), to.col.wrapping_sub(from.col))
}

/// Walks unit steps from `from` toward `to` and reports whether every square
/// strictly between them is empty. Neither endpoint is inspected.
///
/// Callers guarantee the two squares share a row, column or diagonal.
pub fn is_path_clear(game_state: &GameState, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut current = from.offset(step_row, step_col);
    while current != to {
        if !current.is_on_board() || !game_state.is_empty(current) {
            return false;
        }
        current = current.offset(step_row, step_col);
    }

    true
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square, color: Color) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color != color)
}
