//! Full legality pipeline.
//!
//! A candidate is legal when it passes the pseudo-legal check and, after being
//! applied to a private copy of the board with the same routine used for real
//! moves, the mover's king is not attacked. The live board is only ever read.
//!
//! Enumeration tries every one of the 64 destinations for each piece of the
//! side to move, so a promotion shows up once, with the default queen.

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_valid_move};
use crate::moves::chess_move::ChessMove;

/// A legal move together with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub record: ChessMove,
    pub game_after_move: GameState,
}

/// Runs the legality simulation for `mv`, returning the completed record and
/// resulting position when the move is legal.
pub fn simulate_legal_move(game_state: &GameState, mv: &ChessMove) -> Option<GeneratedMove> {
    if !is_valid_move(game_state, mv) {
        return None;
    }

    let mover = game_state.current_turn;
    let mut next = game_state.clone();
    let record = apply_move(&mut next, mv.as_request()).ok()?;

    if is_king_in_check(&next, mover) {
        trace!(mv = %mv, "rejected: leaves {mover} king in check");
        return None;
    }

    Some(GeneratedMove {
        record,
        game_after_move: next,
    })
}

#[inline]
pub fn is_legal_move(game_state: &GameState, mv: &ChessMove) -> bool {
    simulate_legal_move(game_state, mv).is_some()
}

/// Legal moves for the piece on `from`, as completed records.
pub fn valid_moves_from(game_state: &GameState, from: Square) -> Vec<ChessMove> {
    Square::all()
        .filter_map(|to| simulate_legal_move(game_state, &ChessMove::new(from, to)))
        .map(|generated| generated.record)
        .collect()
}

/// Every legal move for the side to move.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<GeneratedMove> {
    let mut legal = Vec::<GeneratedMove>::with_capacity(64);
    for (from, _) in game_state.pieces_of(game_state.current_turn) {
        for to in Square::all() {
            if let Some(generated) = simulate_legal_move(game_state, &ChessMove::new(from, to)) {
                legal.push(generated);
            }
        }
    }
    legal
}

/// Whether the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(game_state: &GameState) -> bool {
    game_state.pieces_of(game_state.current_turn).any(|(from, _)| {
        Square::all().any(|to| is_legal_move(game_state, &ChessMove::new(from, to)))
    })
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, has_legal_move, is_legal_move, valid_moves_from};
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::moves::chess_move::ChessMove;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game_state = GameState::new_game();
        assert_eq!(generate_legal_moves(&game_state).len(), 20);
        assert!(has_legal_move(&game_state));
    }

    #[test]
    fn valid_moves_from_knight_and_pawn() {
        let game_state = GameState::new_game();
        let knight: Vec<Square> = valid_moves_from(&game_state, sq("g1")).iter().map(|m| m.to).collect();
        assert_eq!(knight, vec![sq("f3"), sq("h3")]);

        let pawn = valid_moves_from(&game_state, sq("e2"));
        assert_eq!(pawn.len(), 2);
        assert!(pawn.iter().all(|m| m.piece.map(|p| p.kind) == Some(PieceKind::Pawn)));

        assert!(valid_moves_from(&game_state, sq("e4")).is_empty());
        assert!(valid_moves_from(&game_state, sq("e7")).is_empty());
    }

    #[test]
    fn pinned_piece_cannot_move() {
        let game_state =
            GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_move(&game_state, &ChessMove::new(sq("e2"), sq("f4"))));
        assert!(valid_moves_from(&game_state, sq("e2")).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game_state =
            GameState::from_fen("4k3/8/8/8/8/8/5r2/4K3 w - - 0 1").expect("FEN should parse");
        // The f2 rook covers its rank and file; the rook itself is undefended.
        assert!(!is_legal_move(&game_state, &ChessMove::new(sq("e1"), sq("d2"))));
        assert!(!is_legal_move(&game_state, &ChessMove::new(sq("e1"), sq("f1"))));
        assert!(is_legal_move(&game_state, &ChessMove::new(sq("e1"), sq("f2"))));
        assert!(is_legal_move(&game_state, &ChessMove::new(sq("e1"), sq("d1"))));
    }

    #[test]
    fn castling_into_check_is_illegal() {
        // The g8 rook covers g1 while f1 stays free.
        let game_state =
            GameState::from_fen("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(!is_legal_move(&game_state, &ChessMove::new(sq("e1"), sq("g1"))));
    }

    #[test]
    fn castling_through_attacked_midpoint_is_illegal() {
        let game_state =
            GameState::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        let castle = ChessMove::new(sq("e1"), sq("g1"));
        assert!(!is_legal_move(&game_state, &castle));
        assert!(valid_moves_from(&game_state, sq("e1"))
            .iter()
            .all(|m| !m.is_castling));
    }

    #[test]
    fn castling_out_of_check_is_illegal() {
        let game_state =
            GameState::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(!is_legal_move(&game_state, &ChessMove::new(sq("e1"), sq("g1"))));
        assert!(!is_legal_move(&game_state, &ChessMove::new(sq("e1"), sq("c1"))));
    }

    #[test]
    fn legal_castling_is_listed_with_flag() {
        let game_state =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castles: Vec<Square> = valid_moves_from(&game_state, sq("e1"))
            .into_iter()
            .filter(|m| m.is_castling)
            .map(|m| m.to)
            .collect();
        assert_eq!(castles, vec![sq("c1"), sq("g1")]);
    }

    #[test]
    fn en_passant_that_exposes_king_is_illegal() {
        // Capturing d6 would empty the fifth rank between the a5 king and h5 rook.
        let game_state =
            GameState::from_fen("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1").expect("FEN should parse");
        let capture = ChessMove::new(sq("e5"), sq("d6"));
        assert!(game_state.is_valid_move(&capture));
        assert!(!is_legal_move(&game_state, &capture));
    }

    #[test]
    fn moves_out_of_turn_are_never_legal() {
        let game_state = GameState::new_game();
        for (from, _) in game_state.pieces_of(Color::Black) {
            for to in Square::all() {
                assert!(!is_legal_move(&game_state, &ChessMove::new(from, to)));
            }
        }
    }

    #[test]
    fn no_generated_move_leaves_own_king_in_check() {
        let game_state = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let moves = generate_legal_moves(&game_state);
        assert_eq!(moves.len(), 48);
        for generated in moves {
            assert!(!is_king_in_check(&generated.game_after_move, Color::White));
        }
    }
}
