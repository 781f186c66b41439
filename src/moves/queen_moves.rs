use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::rook_moves::rook_reaches;

/// Queen geometry: rook rule or bishop rule.
#[inline]
pub fn queen_reaches(game_state: &GameState, from: Square, to: Square) -> bool {
    rook_reaches(game_state, from, to) || bishop_reaches(game_state, from, to)
}
