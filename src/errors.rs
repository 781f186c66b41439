//! Errors used throughout the engine.
//!
//! Legality questions are answered with booleans; `ChessError` covers the
//! remaining failure modes: notation that does not parse, application from an
//! empty square, moves against a finished game, replay indices past the end
//! of a history and stored snapshots that no longer decode.

use thiserror::Error;

use crate::game_state::chess_types::Square;
use crate::game_state::game_status::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A move was applied from a square holding no piece (or off the board).
    #[error("no piece on {0}")]
    NoPieceOnSquare(Square),

    /// A move request failed the legality check. The payload is meant for
    /// end users.
    #[error("{0}")]
    IllegalMove(String),

    /// A move was attempted after the game reached a terminal status.
    #[error("game is over: {0}")]
    GameOver(GameStatus),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    #[error("move index {index} is out of range for a history of {len} moves")]
    InvalidMoveIndex { index: usize, len: usize },

    /// A stored board or history failed to decode. Never papered over with a
    /// fresh board.
    #[error("stored game state is corrupt: {0}")]
    CorruptState(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
