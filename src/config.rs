use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

/// Construction-time settings of a game field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub win_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 4,
            width: 4,
            win_value: 2048,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config; missing fields fall back to the defaults.
    ///
    /// Values are not validated here so that command line flags can still
    /// override them; call [`GameConfig::validate`] once they are final.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid game config")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.height >= 1 && self.width >= 1,
            "board dimensions must be at least 1x1, got {}x{}",
            self.height,
            self.width
        );
        // reset spawns two tiles
        ensure!(
            self.height * self.width >= 2,
            "board needs at least two cells"
        );
        check_win_value(self.win_value)
    }
}

pub(crate) fn check_win_value(win_value: u32) -> Result<()> {
    ensure!(
        win_value >= 4 && win_value.is_power_of_two(),
        "win value must be a power of two of at least 4, got {win_value}"
    );
    Ok(())
}
