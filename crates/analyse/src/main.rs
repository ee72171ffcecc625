use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::{Board, Position};
use clap::Parser;
use pvs_engine::{EvalConfig, PvsEngine};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Ask the PVS engine for its move in a given position.
#[derive(Debug, Parser)]
#[command(name = "analyse", version)]
struct Args {
    /// Starting position in FEN; the standard start position if omitted.
    #[arg(long)]
    fen: Option<String>,

    /// Moves in UCI notation applied to the starting position, in order.
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,

    /// Search depth in plies.
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// TOML file with evaluation weights.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of engine moves to play in a row, alternating sides.
    #[arg(long, default_value_t = 1)]
    plies: u32,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EvalConfig::load(path)
            .with_context(|| format!("loading evaluation config {}", path.display()))?,
        None => EvalConfig::default(),
    };
    let engine = PvsEngine::new(config);

    let mut pos = match &args.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("parsing --fen {fen}"))?,
        None => Position::startpos(),
    };
    for mv in &args.moves {
        pos.play_uci(mv)
            .with_context(|| format!("applying move {mv} to {pos}"))?;
    }

    for ply in 0..args.plies {
        let outcome = engine
            .analyse(&mut pos, args.depth)
            .context("engine search failed")?;

        let Some(mv) = outcome.best_move else {
            warn!(fen = %pos, "no legal moves, game over");
            println!("bestmove 0000");
            break;
        };

        println!("bestmove {}", pos.move_to_uci(mv));
        info!(ply, score = ?outcome.score, nodes = outcome.nodes, "engine moved");
        pos.apply(mv);

        if pos.is_game_over() {
            info!(fen = %pos, "game over");
            break;
        }
    }

    Ok(())
}
