//! Game-status classification layered on top of a board.
//!
//! The board itself never stores a status. `classify_game_status` looks at
//! the side to move and reports whether the game is still running or has
//! reached one of the terminal outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::game_end_checks::{
    is_checkmate, is_insufficient_material, is_stalemate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    /// Draw by insufficient material.
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw => write!(f, "draw by insufficient material"),
        }
    }
}

/// Status from the point of view of the side to move. Mate and stalemate take
/// precedence over the material draw.
pub fn classify_game_status(game_state: &GameState) -> GameStatus {
    let to_move = game_state.current_turn;

    let status = if is_checkmate(game_state, to_move) {
        GameStatus::Checkmate {
            winner: to_move.opposite(),
        }
    } else if is_stalemate(game_state, to_move) {
        GameStatus::Stalemate
    } else if is_insufficient_material(game_state) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };

    debug!(%to_move, %status, plies = game_state.move_history.len(), "classified position");
    status
}
