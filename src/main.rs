//! Interactive referee.
//!
//! Reads one command per line from stdin:
//! - a long algebraic move (`e2e4`, `e7e8n`) plays it for the side to move
//! - `moves <square>` lists the legal destinations from a square
//! - `fen` prints the current position
//! - `board <n>` shows the board after the first `n` moves
//! - `quit` exits

use std::io::{self, BufRead, Write};

use schach_engine::game_state::game_session::GameSession;
use schach_engine::utils::algebraic::algebraic_to_square;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn handle_command(session: &mut GameSession, line: &str) -> String {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("fen"), None) => session.game_state().get_fen(),
        (Some("moves"), Some(square)) => match algebraic_to_square(square) {
            Ok(from) => {
                let moves: Vec<String> = session
                    .valid_moves_from(from)
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect();
                if moves.is_empty() {
                    format!("no legal moves from {from}")
                } else {
                    moves.join(" ")
                }
            }
            Err(err) => err.to_string(),
        },
        (Some("board"), Some(index)) => match index.parse::<usize>() {
            Ok(n) => match session.board_at_move(n) {
                Ok(board) => board.to_string(),
                Err(err) => err.to_string(),
            },
            Err(_) => format!("not a move index: {index}"),
        },
        (Some(lan), None) => match session.play_long_algebraic(lan) {
            Ok(_) => {
                let mut out = format!("{}\n{}", session.game_state(), session.status());
                if session.is_check() && !session.status().is_terminal() {
                    out.push_str(&format!(", {} is in check", session.current_turn()));
                }
                out
            }
            Err(err) => err.to_string(),
        },
        _ => format!("unknown command: {line}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("schach_engine=info".parse()?))
        .init();

    let mut session = GameSession::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.game_state())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }
        writeln!(out, "{}", handle_command(&mut session, trimmed))?;
        out.flush()?;
    }

    Ok(())
}
