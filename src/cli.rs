use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "tileterm")]
#[command(about = "Slide and merge numbered tiles in your terminal")]
#[command(version)]
pub struct Args {
    /// JSON file with `height`, `width` and `win_value`.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of rows (default 4).
    #[arg(long)]
    pub height: Option<usize>,
    /// Number of columns (default 4).
    #[arg(long)]
    pub width: Option<usize>,
    /// Tile value that wins the game (default 2048).
    #[arg(long)]
    pub win_value: Option<u32>,
    /// Seed for tile spawns, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the config file, then individual flags.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(win_value) = self.win_value {
            config.win_value = win_value;
        }

        config.validate()?;
        Ok(config)
    }
}
