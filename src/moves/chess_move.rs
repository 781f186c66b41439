//! Move requests and move records.
//!
//! A `ChessMove` built by a caller is a request: only `from`, `to` and
//! optionally `promotion_piece` matter. Once applied, the engine fills in the
//! moving piece, the captured piece and the special-move flags, and the same
//! value becomes the history record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    /// The mover as it stood before the move.
    pub piece: Option<Piece>,
    pub captured_piece: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    /// Requested promotion; on a record, the kind actually placed.
    pub promotion_piece: Option<PieceKind>,
}

impl ChessMove {
    /// Plain request from `from` to `to`.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            piece: None,
            captured_piece: None,
            is_castling: false,
            is_en_passant: false,
            promotion_piece: None,
        }
    }

    /// Request carrying a promotion choice.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        let mut mv = Self::new(from, to);
        mv.promotion_piece = Some(promotion);
        mv
    }

    /// Strips engine-filled fields, keeping what a caller would send.
    #[inline]
    pub const fn as_request(&self) -> Self {
        let mut mv = Self::new(self.from, self.to);
        mv.promotion_piece = self.promotion_piece;
        mv
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// True for a record whose mover was a pawn that changed kind.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self.piece, Some(piece) if piece.kind == PieceKind::Pawn)
            && self.promotion_piece.is_some()
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion_piece {
            let ch = match kind {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                PieceKind::Queen => 'q',
                PieceKind::King => 'k',
                PieceKind::Pawn => 'p',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
