/// Player actions and the interface the game loop talks to
use anyhow::Result;

use crate::board::BoardView;

/// A decoded player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Restart,
    Exit,
}

/// Rendering and input collaborator driven by the game loop
pub trait Frontend {
    /// Draw the current board
    fn render(&mut self, view: &BoardView<'_>) -> Result<()>;

    /// Block until the player issues a recognised action
    fn next_action(&mut self) -> Result<Action>;
}
