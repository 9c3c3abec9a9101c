pub mod board;
pub mod cli;
pub mod config;

pub mod core {
	pub mod engine;
	pub mod game;
	pub mod keymap;
	pub mod renderer;
	pub mod terminal;
}

// Re-export for convenience
pub use crate::board::{Board, BoardView, Direction};
pub use crate::config::GameConfig;
pub use crate::core::engine::{Engine, GameState};
pub use crate::core::game::{Action, Frontend};
