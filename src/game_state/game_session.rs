//! A refereed game: one board plus its cached status.
//!
//! `GameSession` is the checked front door to the engine. Every move goes
//! through the legality pipeline before it touches the board, and the status
//! is recomputed for the side to move after each applied move.

use tracing::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::{classify_game_status, GameStatus};
use crate::game_state::replay::{frame_at_move, replay_from, ReplayFrame};
use crate::move_generation::legal_move_generator::simulate_legal_move;
use crate::moves::chess_move::ChessMove;
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone)]
pub struct GameSession {
    initial: GameState,
    game_state: GameState,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session on the standard starting position.
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    /// Session continuing from an arbitrary position.
    ///
    /// A state without history (a FEN position) is the replay base itself. A
    /// state that carries a history, such as a decoded snapshot, is replayed
    /// from the standard start, so index 0 is always the board before the
    /// first recorded move.
    pub fn from_state(game_state: GameState) -> Self {
        let status = classify_game_status(&game_state);
        let initial = if game_state.move_history.is_empty() {
            game_state.clone()
        } else {
            GameState::new_game()
        };
        Self {
            initial,
            game_state,
            status,
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_state(GameState::from_fen(fen)?))
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.game_state.current_turn
    }

    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.game_state.move_history
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.game_state.is_in_check(self.game_state.current_turn)
    }

    /// Legal moves for the piece on `from`. Empty once the game is over.
    pub fn valid_moves_from(&self, from: Square) -> Vec<ChessMove> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.game_state.valid_moves_from(from)
    }

    /// Checks and applies `mv`, returning the history record.
    pub fn play_move(&mut self, mv: ChessMove) -> ChessResult<ChessMove> {
        if self.status.is_terminal() {
            return Err(ChessError::GameOver(self.status));
        }

        let mover = self.game_state.current_turn;
        let Some(generated) = simulate_legal_move(&self.game_state, &mv) else {
            debug!(mv = %mv, %mover, "refused illegal move");
            return Err(ChessError::IllegalMove(format!(
                "{mv} is not a legal move for {mover}"
            )));
        };

        self.game_state = generated.game_after_move;
        self.status = classify_game_status(&self.game_state);

        if self.status.is_terminal() {
            info!(
                status = %self.status,
                plies = self.game_state.move_history.len(),
                "game finished"
            );
        }

        Ok(generated.record)
    }

    /// `play_move` for a long algebraic string such as "e2e4" or "e7e8n".
    pub fn play_long_algebraic(&mut self, long_algebraic: &str) -> ChessResult<ChessMove> {
        let mv = long_algebraic_to_move(long_algebraic)?;
        self.play_move(mv)
    }

    /// Board after the first `n` moves of this session.
    pub fn board_at_move(&self, n: usize) -> ChessResult<GameState> {
        replay_from(&self.initial, self.history(), n)
    }

    pub fn frame_at_move(&self, n: usize) -> ChessResult<ReplayFrame> {
        frame_at_move(&self.initial, self.history(), n)
    }
}
