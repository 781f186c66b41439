//! Canonical chess-rule constants.
//!
//! Static literals used to set up and validate game state: the standard
//! starting position and the back-rank piece order.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from file a to file h, shared by both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_START_COL: i8 = 4;
/// Rook corner column for king-side castling.
pub const KINGSIDE_ROOK_COL: i8 = 7;
/// Rook corner column for queen-side castling.
pub const QUEENSIDE_ROOK_COL: i8 = 0;
