pub mod grid;
pub mod state;

pub use grid::{Direction, Grid, Reorientation};
pub use state::{Board, BoardView, Spawn};
