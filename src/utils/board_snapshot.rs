//! JSON snapshots of a board and of move histories.
//!
//! Every field survives the round trip, `has_moved` flags and the en-passant
//! target included. A snapshot that does not decode is reported as corrupt;
//! callers never get a fresh board in its place.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub fn encode_game_state(game_state: &GameState) -> ChessResult<String> {
    serde_json::to_string(game_state)
        .map_err(|err| ChessError::CorruptState(format!("cannot encode board: {err}")))
}

/// Decodes a board. An en-passant target off the board or outside rows 2
/// and 5 is reported as corrupt, matching what the FEN parser accepts.
pub fn decode_game_state(snapshot: &str) -> ChessResult<GameState> {
    let game_state: GameState = serde_json::from_str(snapshot)
        .map_err(|err| ChessError::CorruptState(format!("cannot decode board: {err}")))?;

    if let Some(target) = game_state.en_passant_target {
        if !target.is_on_board() || (target.row != 2 && target.row != 5) {
            return Err(ChessError::CorruptState(format!(
                "en-passant target {target} is not on the third or sixth rank"
            )));
        }
    }
    Ok(game_state)
}

pub fn encode_history(history: &[ChessMove]) -> ChessResult<String> {
    serde_json::to_string(history)
        .map_err(|err| ChessError::CorruptState(format!("cannot encode history: {err}")))
}

pub fn decode_history(snapshot: &str) -> ChessResult<Vec<ChessMove>> {
    serde_json::from_str(snapshot)
        .map_err(|err| ChessError::CorruptState(format!("cannot decode history: {err}")))
}
