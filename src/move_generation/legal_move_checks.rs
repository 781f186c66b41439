//! Pseudo-legal move validation and the square-attack oracle.
//!
//! Both walk the same per-piece geometry from `crate::moves`; they differ only
//! for pawns (attacks are diagonal regardless of occupancy) and kings (attacks
//! never include the castling range).

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::{is_valid_king_move, king_step_reaches};
use crate::moves::knight_moves::knight_reaches;
use crate::moves::pawn_moves::{is_valid_pawn_move, pawn_attacks};
use crate::moves::queen_moves::queen_reaches;
use crate::moves::rook_moves::rook_reaches;

/// Geometric legality of `mv` for the side to move. Ignores whether the move
/// leaves the mover's own king in check.
pub fn is_valid_move(game_state: &GameState, mv: &ChessMove) -> bool {
    let (from, to) = (mv.from, mv.to);

    let Some(piece) = game_state.piece_at(from) else {
        return false;
    };
    if piece.color != game_state.current_turn {
        trace!(%from, %to, "rejected: {} piece moving on {}'s turn", piece.color, game_state.current_turn);
        return false;
    }
    if !to.is_on_board() || from == to {
        return false;
    }
    if matches!(game_state.piece_at(to), Some(target) if target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(game_state, from, to, piece),
        PieceKind::Rook => rook_reaches(game_state, from, to),
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => bishop_reaches(game_state, from, to),
        PieceKind::Queen => queen_reaches(game_state, from, to),
        PieceKind::King => is_valid_king_move(game_state, from, to, piece),
    }
}

/// Whether `piece` standing on `from` attacks `target`.
pub fn piece_attacks_square(game_state: &GameState, from: Square, piece: Piece, target: Square) -> bool {
    if from == target {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, target),
        PieceKind::Rook => rook_reaches(game_state, from, target),
        PieceKind::Knight => knight_reaches(from, target),
        PieceKind::Bishop => bishop_reaches(game_state, from, target),
        PieceKind::Queen => queen_reaches(game_state, from, target),
        PieceKind::King => king_step_reaches(from, target),
    }
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    game_state
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks_square(game_state, from, piece, square))
}

pub fn attackers_to_square(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    game_state
        .pieces_of(attacker_color)
        .filter(|(from, piece)| piece_attacks_square(game_state, *from, *piece, square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// A color without a king on the board is never in check.
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}
