use anyhow::{bail, ensure, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use super::grid::{self, Direction, Grid, Reorientation, MAX_TILE};
use crate::config::{self, GameConfig};

/// A tile written by [`Board::spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Grid, score and high score of one game field.
///
/// The high score survives [`Board::reset`], so one `Board` is kept for the
/// whole process run. Randomness comes from the injected `R`.
#[derive(Debug, Clone)]
pub struct Board<R = StdRng> {
    grid: Grid,
    score: u64,
    high_score: u64,
    win_value: u32,
    height: usize,
    width: usize,
    rng: R,
}

impl Board<StdRng> {
    /// Fresh board with an OS-seeded generator.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Board<R> {
    /// Fresh board holding two spawned tiles.
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        let mut board = Self {
            grid: vec![vec![0; config.width]; config.height],
            score: 0,
            high_score: 0,
            win_value: config.win_value,
            height: config.height,
            width: config.width,
            rng,
        };
        board.reset();
        board
    }

    /// Board with fixed tile positions and no spawned tiles.
    ///
    /// Every cell must be empty or a power of two no larger than
    /// [`MAX_TILE`], and the win value follows the config rules.
    pub fn from_rows(rows: Vec<Vec<u32>>, win_value: u32, rng: R) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        ensure!(height > 0 && width > 0, "board needs at least one row and one column");
        ensure!(
            rows.iter().all(|row| row.len() == width),
            "every row must have {width} cells"
        );
        if let Some(&bad) = rows
            .iter()
            .flatten()
            .find(|&&v| v != 0 && (v == 1 || !v.is_power_of_two()))
        {
            bail!("tile {bad} is not a power of two between 2 and {MAX_TILE}");
        }
        config::check_win_value(win_value)?;

        Ok(Self {
            grid: rows,
            score: 0,
            high_score: 0,
            win_value,
            height,
            width,
            rng,
        })
    }

    /// Start a new game, carrying the best score forward.
    pub fn reset(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.score = 0;
        for row in self.grid.iter_mut() {
            row.fill(0);
        }
        self.spawn();
        self.spawn();
    }

    /// Write a 2 (90%) or a 4 (10%) into a uniformly chosen empty cell.
    ///
    /// Callers only spawn after a reset or a board-changing move, so an empty
    /// cell exists. A full grid is left untouched and `None` is returned.
    pub fn spawn(&mut self) -> Option<Spawn> {
        let value = if self.rng.random_range(0..100) >= 90 { 4 } else { 2 };
        let empty = self.empty_cells();
        let Some(&(row, col)) = empty.choose(&mut self.rng) else {
            warn!("spawn requested on a full grid");
            return None;
        };

        self.grid[row][col] = value;
        trace!(row, col, value, "spawned tile");
        Some(Spawn { row, col, value })
    }

    /// Slide towards `direction`, spawning a tile when anything moved.
    ///
    /// Returns whether the grid changed.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let changed = self.collapse(direction);
        if changed {
            self.spawn();
        }
        debug!(?direction, changed, score = self.score, "slide");
        changed
    }

    /// Slide and merge towards `direction` without spawning.
    pub fn collapse(&mut self, direction: Direction) -> bool {
        let Reorientation { forward, inverse } = direction.reorientation();
        let before = self.grid.clone();

        let mut oriented = forward(std::mem::take(&mut self.grid));
        let gained = grid::collapse_left(&mut oriented);
        self.grid = inverse(oriented);
        self.score += gained;

        self.grid != before
    }
}

impl<R> Board<R> {
    pub fn is_win(&self) -> bool {
        self.grid.iter().flatten().any(|&v| v >= self.win_value)
    }

    /// Deadlock check.
    ///
    /// Any empty cell means false. On a board holding at least one tile that
    /// is exact, since a tile next to an empty cell can always slide into it.
    pub fn is_gameover(&self) -> bool {
        grid::is_deadlocked(&self.grid)
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Best score seen so far, including the game in progress.
    pub fn best_score(&self) -> u64 {
        self.high_score.max(self.score)
    }

    pub fn win_value(&self) -> u32 {
        self.win_value
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &v)| v == 0)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    /// Everything a renderer is allowed to see.
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            rows: &self.grid,
            score: self.score,
            high_score: self.high_score,
            is_win: self.is_win(),
            is_gameover: self.is_gameover(),
        }
    }
}

/// Read-only snapshot passed to a [`crate::Frontend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub rows: &'a [Vec<u32>],
    pub score: u64,
    pub high_score: u64,
    pub is_win: bool,
    pub is_gameover: bool,
}
