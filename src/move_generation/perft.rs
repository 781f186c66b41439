//! Perft: exhaustive legal-move tree walk used to verify move generation
//! against published node counts.
//!
//! Leaf statistics describe the move that reached the leaf. A promotion is
//! enumerated once (as a queen), so depths that contain promotions count
//! fewer nodes than the published tables.

use std::thread;

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, has_legal_move, GeneratedMove,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;

        let record = &mv.record;
        if record.is_capture() {
            self.captures += 1;
        }
        if record.is_en_passant {
            self.en_passant += 1;
        }
        if record.is_castling {
            self.castles += 1;
        }
        if record.promotion_piece.is_some() {
            self.promotions += 1;
        }

        let after = &mv.game_after_move;
        if is_king_in_check(after, after.current_turn) {
            self.checks += 1;
            if !has_legal_move(after) {
                self.checkmates += 1;
            }
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        perft_recurse(&mv, depth, 1, &mut total);
    }

    debug!(depth, nodes = total.nodes, "perft finished");
    total
}

/// Same counts as [`perft`], with the root moves shared out over `threads`
/// scoped worker threads.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8, threads: usize) -> PerftCounts {
    if depth == 0 {
        return perft(game_state, 0);
    }

    let root_moves = generate_legal_moves(game_state);
    if root_moves.is_empty() {
        return PerftCounts::default();
    }
    let chunk_size = root_moves.len().div_ceil(threads.max(1));

    let total = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    for mv in chunk {
                        perft_recurse(mv, depth, 1, &mut local);
                    }
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        total
    });

    debug!(depth, threads, nodes = total.nodes, "multi-threaded perft finished");
    total
}

fn perft_recurse(mv: &GeneratedMove, search_depth: u8, current_depth: u8, counts: &mut PerftCounts) {
    if current_depth == search_depth {
        counts.record_leaf(mv);
        return;
    }

    for child in generate_legal_moves(&mv.game_after_move) {
        perft_recurse(&child, search_depth, current_depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::game_state::GameState;

    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&GameState::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth_three = perft(&game, 3);
        assert_eq!(
            depth_three,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn position_three_node_counts() {
        let game = GameState::from_fen(POSITION_3).expect("FEN should parse");

        let depth_one = perft(&game, 1);
        assert_eq!(depth_one.nodes, 14);
        assert_eq!(depth_one.captures, 1);
        assert_eq!(depth_one.checks, 2);

        assert_eq!(perft(&game, 2).nodes, 191);

        let depth_three = perft(&game, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.captures, 209);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn kiwipete_counts_castles_and_en_passant() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");

        let depth_one = perft(&game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&game, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let game = GameState::from_fen(POSITION_3).expect("FEN should parse");
        let single = perft(&game, 3);
        for threads in [1, 3, 64] {
            assert_eq!(perft_multi_threaded(&game, 3, threads), single, "threads={threads}");
        }
        assert_eq!(perft_multi_threaded(&game, 0, 4).nodes, 1);
    }
}
