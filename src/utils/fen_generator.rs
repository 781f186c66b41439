use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::ChessMove;

/// FEN for `game_state`. Castling rights come from the `has_moved` flags, the
/// clocks from the move history.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.current_turn {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state);
    let en_passant = game_state
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock(&game_state.move_history),
        fullmove_number(&game_state.move_history),
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in (0..8).rev() {
        let mut empty_count = 0u8;

        for col in 0..8 {
            if let Some(piece) = game_state.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece.color, piece.kind));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

pub(crate) fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn unmoved(game_state: &GameState, square: Square, kind: PieceKind, color: Color) -> bool {
    matches!(
        game_state.piece_at(square),
        Some(piece) if piece.kind == kind && piece.color == color && !piece.has_moved
    )
}

fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        let back = color.back_row();
        if !unmoved(game_state, Square::new(back, KING_START_COL), PieceKind::King, color) {
            continue;
        }
        for (rook_col, symbol) in [(KINGSIDE_ROOK_COL, 'k'), (QUEENSIDE_ROOK_COL, 'q')] {
            if unmoved(game_state, Square::new(back, rook_col), PieceKind::Rook, color) {
                out.push(match color {
                    Color::White => symbol.to_ascii_uppercase(),
                    Color::Black => symbol,
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

/// Plies since the last pawn move or capture in the recorded history.
fn halfmove_clock(history: &[ChessMove]) -> usize {
    history
        .iter()
        .rev()
        .take_while(|record| {
            !record.is_capture() && record.piece.map(|p| p.kind) != Some(PieceKind::Pawn)
        })
        .count()
}

fn fullmove_number(history: &[ChessMove]) -> usize {
    1 + history.len() / 2
}
