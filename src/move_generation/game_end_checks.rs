//! Checkmate, stalemate and insufficient-material detection.
//!
//! Mate and stalemate are asked about a specific color. Legality is always
//! judged for the side to move, so a query about the other color runs on a
//! copy where that color has the move. The copy drops the en-passant target,
//! which only ever belongs to the side whose turn it really is.

use std::borrow::Cow;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

fn with_turn(game_state: &GameState, color: Color) -> Cow<'_, GameState> {
    if game_state.current_turn == color {
        Cow::Borrowed(game_state)
    } else {
        let mut view = game_state.clone();
        view.current_turn = color;
        view.en_passant_target = None;
        Cow::Owned(view)
    }
}

pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(game_state, color) && !has_legal_move(&with_turn(game_state, color))
}

pub fn is_stalemate(game_state: &GameState, color: Color) -> bool {
    !is_king_in_check(game_state, color) && !has_legal_move(&with_turn(game_state, color))
}

/// Dead positions recognised: K v K, K+minor v K, and K+B v K+B with both
/// bishops on squares of the same color.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let others: Vec<(Square, Piece)> = game_state
        .occupied()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .collect();

    match others.as_slice() {
        [] => true,
        [(_, piece)] => piece.kind.is_minor(),
        [(sq_a, a), (sq_b, b)] => {
            a.kind == PieceKind::Bishop
                && b.kind == PieceKind::Bishop
                && a.color != b.color
                && sq_a.is_dark() == sq_b.is_dark()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_checkmate, is_insufficient_material, is_stalemate};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(game_state: &mut GameState, moves: &[&str]) {
        for lan in moves {
            let mv = long_algebraic_to_move(lan).expect("move should parse");
            assert!(game_state.is_legal_move(&mv), "{lan} should be legal");
            game_state.make_move(mv).expect("move should apply");
        }
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game_state = GameState::new_game();
        play(&mut game_state, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        assert!(game_state.is_in_check(Color::White));
        assert!(is_checkmate(&game_state, Color::White));
        assert!(!is_stalemate(&game_state, Color::White));
        assert!(!is_checkmate(&game_state, Color::Black));
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        let mut game_state = GameState::new_game();
        play(&mut game_state, &["e2e4", "f7f6", "d1h5"]);
        assert!(game_state.is_in_check(Color::Black));
        assert!(!is_checkmate(&game_state, Color::Black));
    }

    #[test]
    fn kings_only_stalemate() {
        // One white king cannot cover a7, b7 and b8 at once without touching a8,
        // so this constructed position uses two. The engine does not police the
        // king count.
        let mut game_state = GameState::new_empty();
        game_state.set_piece_at(Square::new(7, 0), Some(Piece::moved(PieceKind::King, Color::Black)));
        game_state.set_piece_at(Square::new(5, 1), Some(Piece::moved(PieceKind::King, Color::White)));
        game_state.set_piece_at(Square::new(6, 2), Some(Piece::moved(PieceKind::King, Color::White)));
        game_state.current_turn = Color::Black;

        assert!(!game_state.is_in_check(Color::Black));
        assert!(game_state.valid_moves_from(Square::new(7, 0)).is_empty());
        assert!(is_stalemate(&game_state, Color::Black));
        assert!(!is_checkmate(&game_state, Color::Black));
    }

    #[test]
    fn lone_kings_with_a_free_square_are_not_stalemate() {
        let game_state = GameState::from_fen("k7/8/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!is_stalemate(&game_state, Color::Black));
        assert_eq!(
            game_state.valid_moves_from(Square::new(7, 0)).iter().map(|m| m.to).collect::<Vec<_>>(),
            vec![Square::new(7, 1)]
        );
    }

    #[test]
    fn query_for_side_not_to_move_uses_its_own_moves() {
        // White to move; Black is not in check and has king moves available.
        let game_state = GameState::new_game();
        assert!(!is_stalemate(&game_state, Color::Black));
        assert!(!is_checkmate(&game_state, Color::Black));
    }

    #[test]
    fn stalemate_with_queen() {
        let game_state =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(is_stalemate(&game_state, Color::Black));
        assert!(!is_checkmate(&game_state, Color::Black));
        assert!(!game_state.is_in_check(Color::Black));
    }

    #[test]
    fn insufficient_material_configurations() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/8/1NN1K3 w - - 0 1", false),
        ];
        for (fen, expected) in cases {
            let game_state = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(is_insufficient_material(&game_state), expected, "{fen}");
        }
    }

    #[test]
    fn bishops_on_same_color_squares_are_a_draw() {
        // c1 and f8 are both dark squares.
        let same = GameState::from_fen("4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1").expect("FEN should parse");
        assert!(Square::new(0, 2).is_dark() && Square::new(7, 5).is_dark());
        assert!(is_insufficient_material(&same));

        // c8 is light, c1 is dark.
        let opposite =
            GameState::from_fen("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_insufficient_material(&opposite));
    }
}
