//! Long algebraic move notation ("e2e4", "e7e8n").
//!
//! Parsing yields a move request; it does not look at a board. Whether the
//! move is legal, and whether it castles or captures en passant, is decided
//! when the request is checked and applied.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<ChessMove> {
    let trimmed = long_algebraic.trim();
    if !trimmed.is_ascii() || (trimmed.len() != 4 && trimmed.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&trimmed[0..2])?;
    let to = algebraic_to_square(&trimmed[2..4])?;

    match trimmed[4..].chars().next() {
        None => Ok(ChessMove::new(from, to)),
        Some(ch) => Ok(ChessMove::with_promotion(from, to, char_to_promotion(ch)?)),
    }
}

/// Request form of `mv`. The promotion suffix is written only when a
/// promotion was requested or recorded.
pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    let mut out = format!("{}{}", mv.from, mv.to);
    if let Some(ch) = mv.promotion_piece.and_then(promotion_to_char) {
        out.push(ch);
    }
    out
}

fn promotion_to_char(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        _ => None,
    }
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessError::InvalidAlgebraic(format!(
            "invalid promotion piece character: {ch}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let mv = long_algebraic_to_move("e2e4").expect("move should parse");
        assert_eq!(mv.from, Square::new(1, 4));
        assert_eq!(mv.to, Square::new(3, 4));
        assert_eq!(mv.promotion_piece, None);

        let promo = long_algebraic_to_move("a7a8N").expect("promotion should parse");
        assert_eq!(promo.promotion_piece, Some(PieceKind::Knight));
        assert_eq!(move_to_long_algebraic(&promo), "a7a8n");
    }

    #[test]
    fn rejects_bad_moves() {
        for bad in ["", "e2", "e2e9", "e2e4k", "e2e4qq", "z1a1"] {
            assert!(
                matches!(long_algebraic_to_move(bad), Err(ChessError::InvalidAlgebraic(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn records_render_with_their_placed_promotion() {
        let mut game_state =
            GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let record = game_state
            .make_move(long_algebraic_to_move("a7a8").expect("move should parse"))
            .expect("move should apply");
        assert_eq!(move_to_long_algebraic(&record), "a7a8q");

        let castle_state =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = long_algebraic_to_move("e1g1").expect("castle should parse");
        assert!(castle_state.is_legal_move(&castle));
        assert_eq!(move_to_long_algebraic(&castle), "e1g1");
    }
}
