//! Move application.
//!
//! `apply_move` trusts its caller: it performs no legality validation and
//! applies en passant, promotion and castling purely from the shape of the
//! move and the current board. It refuses a move from an empty square and a
//! move off the board, both before touching any state.

use tracing::{debug, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::{castling_rook_squares, is_castling_shape};
use crate::moves::pawn_moves::is_double_step;

/// Applies `mv` to `game_state` and returns the completed history record.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) -> ChessResult<ChessMove> {
    let (from, to) = (mv.from, mv.to);
    let Some(mut piece) = game_state.piece_at(from) else {
        return Err(ChessError::NoPieceOnSquare(from));
    };
    if !to.is_on_board() {
        return Err(ChessError::IllegalMove(format!("{from} to {to} leaves the board")));
    }

    let mut record = mv.as_request();
    record.piece = Some(piece);
    record.captured_piece = game_state.piece_at(to);

    // En passant: a pawn landing diagonally on the empty target square takes
    // the pawn that sits one row behind the target.
    if piece.kind == PieceKind::Pawn
        && (to.col - from.col).unsigned_abs() == 1
        && game_state.en_passant_target == Some(to)
        && game_state.is_empty(to)
    {
        let captured_square = to.offset(-piece.color.pawn_direction(), 0);
        record.captured_piece = game_state.piece_at(captured_square);
        record.is_en_passant = true;
        game_state.set_piece_at(captured_square, None);
    }

    game_state.en_passant_target =
        if piece.kind == PieceKind::Pawn && is_double_step(piece.color, from, to) {
            Some(to.offset(-piece.color.pawn_direction(), 0))
        } else {
            None
        };

    if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
        let promoted = mv
            .promotion_piece
            .filter(|kind| kind.is_promotion_target())
            .unwrap_or(PieceKind::Queen);
        piece.kind = promoted;
        record.promotion_piece = Some(promoted);
    } else {
        record.promotion_piece = None;
    }

    if piece.kind == PieceKind::King && is_castling_shape(from, to) {
        record.is_castling = true;
        let (rook_from, rook_to) = castling_rook_squares(from, to);
        match game_state.piece_at(rook_from) {
            Some(mut rook) => {
                rook.has_moved = true;
                game_state.set_piece_at(rook_from, None);
                game_state.set_piece_at(rook_to, Some(rook));
            }
            None => warn!(%from, %to, "castling move applied with no rook on {rook_from}"),
        }
    }

    piece.has_moved = true;
    game_state.set_piece_at(from, None);
    game_state.set_piece_at(to, Some(piece));

    debug!(
        mv = %record,
        piece = %piece.kind,
        color = %piece.color,
        capture = record.is_capture(),
        castling = record.is_castling,
        en_passant = record.is_en_passant,
        "applied move"
    );

    game_state.move_history.push(record);
    game_state.current_turn = game_state.current_turn.opposite();

    Ok(record)
}

/// Clone-and-apply, leaving `game_state` untouched.
pub fn apply_move_to_copy(game_state: &GameState, mv: ChessMove) -> ChessResult<GameState> {
    let mut next = game_state.clone();
    apply_move(&mut next, mv)?;
    Ok(next)
}
