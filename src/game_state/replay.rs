//! Board reconstruction from a move history.
//!
//! No per-move snapshots are stored. The board after move `n` is rebuilt by
//! applying the first `n` records to a fresh start position.

use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::chess_move::ChessMove;

/// The board after a given number of moves, with the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub state: GameState,
    /// `None` for the frame before the first move.
    pub last_move: Option<ChessMove>,
}

/// Board after exactly `n` moves of `history`, starting from the standard
/// position.
pub fn replay_moves(history: &[ChessMove], n: usize) -> ChessResult<GameState> {
    replay_from(&GameState::new_game(), history, n)
}

/// Board after exactly `n` moves of `history`, starting from `start`.
pub fn replay_from(start: &GameState, history: &[ChessMove], n: usize) -> ChessResult<GameState> {
    if n > history.len() {
        return Err(ChessError::InvalidMoveIndex {
            index: n,
            len: history.len(),
        });
    }

    let mut game_state = start.clone();
    for (ply, record) in history[..n].iter().enumerate() {
        if !record.from.is_on_board() || !record.to.is_on_board() {
            return Err(ChessError::CorruptState(format!(
                "history move {} leaves the board: {} to {}",
                ply + 1,
                record.from,
                record.to
            )));
        }
        apply_move(&mut game_state, record.as_request()).map_err(|err| {
            ChessError::CorruptState(format!("history move {} ({record}) does not replay: {err}", ply + 1))
        })?;
    }
    Ok(game_state)
}

pub fn frame_at_move(start: &GameState, history: &[ChessMove], n: usize) -> ChessResult<ReplayFrame> {
    let state = replay_from(start, history, n)?;
    let last_move = n.checked_sub(1).map(|index| history[index]);
    Ok(ReplayFrame { state, last_move })
}
