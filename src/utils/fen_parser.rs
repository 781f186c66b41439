//! FEN-to-GameState parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string. FEN carries no
//! per-piece movement history, so `has_moved` is derived: a king or corner
//! rook counts as unmoved only when a matching castling right is present, and
//! a pawn counts as moved once it has left its start row. The halfmove and
//! fullmove fields are validated but not kept.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

/// Castling rights as listed in the FEN castling field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingField {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingField {
    fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }
}

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(message.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.current_turn = parse_side_to_move(side_part)?;
    let castling = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid fullmove number: {fullmove_part}")))?;
    if fullmove == 0 {
        return Err(invalid("fullmove number starts at 1"));
    }

    restore_unmoved_castling_pieces(&mut game_state, castling);

    Ok(game_state)
}

/// Places every piece, marking all non-pawns as moved and pawns as moved
/// when off their start row. Castling pieces are restored afterwards.
fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as i8;
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as i8;
                if col > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            let has_moved = match kind {
                PieceKind::Pawn => row != color.pawn_start_row(),
                PieceKind::King | PieceKind::Rook => true,
                _ => false,
            };
            game_state.set_piece_at(Square::new(row, col), Some(Piece { kind, color, has_moved }));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn restore_unmoved_castling_pieces(game_state: &mut GameState, castling: CastlingField) {
    for color in [Color::White, Color::Black] {
        let back = color.back_row();
        let sides = [
            (castling.kingside(color), KINGSIDE_ROOK_COL),
            (castling.queenside(color), QUEENSIDE_ROOK_COL),
        ];

        for (right, rook_col) in sides {
            if !right {
                continue;
            }
            for (col, kind) in [(KING_START_COL, PieceKind::King), (rook_col, PieceKind::Rook)] {
                let square = Square::new(back, col);
                if let Some(piece) = game_state.piece_at(square) {
                    if piece.kind == kind && piece.color == color {
                        game_state.set_piece_at(square, Some(Piece::new(kind, color)));
                    }
                }
            }
        }
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingField> {
    let mut rights = CastlingField::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;
    if square.row != 2 && square.row != 5 {
        return Err(invalid(format!("en-passant square on wrong rank: {en_passant_part}")));
    }
    Ok(Some(square))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn parse_starting_fen_matches_new_game() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{game_state}");

        assert_eq!(game_state, GameState::new_game());
        assert_eq!(game_state.current_turn, Color::White);
    }

    #[test]
    fn castling_rights_decide_king_and_rook_flags() {
        let game_state =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");

        let flag = |row, col| game_state.piece_at(Square::new(row, col)).map(|p| p.has_moved);
        assert_eq!(flag(0, 4), Some(false));
        assert_eq!(flag(0, 7), Some(false));
        assert_eq!(flag(0, 0), Some(true));
        assert_eq!(flag(7, 4), Some(false));
        assert_eq!(flag(7, 0), Some(false));
        assert_eq!(flag(7, 7), Some(true));
    }

    #[test]
    fn pawns_off_start_row_are_moved() {
        let game_state =
            parse_fen("4k3/p7/8/1p6/4P3/8/3P4/4K3 b - e3 0 1").expect("FEN should parse");
        let pawn = |row, col| game_state.piece_at(Square::new(row, col));

        assert_eq!(pawn(6, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(pawn(4, 1), Some(Piece::moved(PieceKind::Pawn, Color::Black)));
        assert_eq!(pawn(3, 4), Some(Piece::moved(PieceKind::Pawn, Color::White)));
        assert_eq!(pawn(1, 3), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(game_state.en_passant_target, Some(Square::new(2, 4)));
        assert_eq!(game_state.current_turn, Color::Black);
    }

    #[test]
    fn rejects_malformed_fen() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }
}
