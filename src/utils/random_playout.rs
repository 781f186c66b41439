//! Seeded random playouts.
//!
//! Plays uniformly random legal moves until the game ends or a ply cap is
//! hit. The same seed always produces the same game, which makes playouts
//! usable as a fixture generator for whole-game properties.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::game_state::game_status::{classify_game_status, GameStatus};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub seed: u64,
    /// Stop after this many plies even if the game is still running.
    pub max_plies: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            max_plies: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub game_state: GameState,
    pub status: GameStatus,
}

pub fn random_playout(start: &GameState, config: &PlayoutConfig) -> PlayoutResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game_state = start.clone();
    let mut plies = 0usize;

    loop {
        let status = classify_game_status(&game_state);
        if status.is_terminal() || plies >= config.max_plies {
            debug!(seed = config.seed, plies, %status, "playout finished");
            return PlayoutResult { game_state, status };
        }

        let legal = generate_legal_moves(&game_state);
        let Some(chosen) = legal.choose(&mut rng) else {
            return PlayoutResult { game_state, status };
        };
        game_state = chosen.game_after_move.clone();
        plies += 1;
    }
}
