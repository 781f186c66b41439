//! Perft runner.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 4 --threads 8`
//! `cargo run --release --bin perft_runner -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"`

use std::time::Instant;

use schach_engine::game_state::game_state::GameState;
use schach_engine::move_generation::perft::{perft, perft_multi_threaded};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    arg_value(args, flag)
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("schach_engine=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let depth: u8 = parse_arg(&args, "--depth", 3u8);
    let threads: usize = parse_arg(&args, "--threads", 1usize).max(1);
    let game = match arg_value(&args, "--fen") {
        Some(fen) => GameState::from_fen(&fen)?,
        None => GameState::new_game(),
    };

    println!("{game}");
    println!("fen={} depth={depth} threads={threads}", game.get_fen());

    for d in 1..=depth {
        let start = Instant::now();
        let counts = if threads > 1 {
            perft_multi_threaded(&game, d, threads)
        } else {
            perft(&game, d)
        };
        let elapsed = start.elapsed();
        let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "depth={d} nodes={} captures={} ep={} castles={} promotions={} checks={} mates={} elapsed_ms={} nps={nps:.0}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates,
            elapsed.as_millis(),
        );
    }

    Ok(())
}
