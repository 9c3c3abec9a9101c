use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tileterm::cli::Args;
use tileterm::core::terminal::TerminalFrontend;
use tileterm::{Board, Engine};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    // 1. Resolve the board settings before touching the terminal
    let config = args.game_config()?;
    let board = match args.seed {
        Some(seed) => Board::with_rng(&config, StdRng::seed_from_u64(seed)),
        None => Board::new(&config),
    };
    info!(height = config.height, width = config.width, win_value = config.win_value, "starting");

    // 2. Play until the player exits
    let terminal = ratatui::init();
    let result = Engine::new(board, TerminalFrontend::new(terminal)).run();
    ratatui::restore();

    let board = result?;
    println!("Final score: {}  Best score: {}", board.score(), board.best_score());
    Ok(())
}

/// The game owns the screen, so logs only go to a file when one is requested.
fn init_tracing(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
