use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use crate::board::{Board, Direction};
use crate::core::game::{Action, Frontend};

/// States of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Init,
    Game,
    Win,
    Gameover,
    Exit,
}

/// Drives one board through render, input and update until the player exits
pub struct Engine<F: Frontend, R = StdRng> {
    board: Board<R>,
    frontend: F,
    state: GameState,
}

impl<F: Frontend, R: Rng> Engine<F, R> {
    pub fn new(board: Board<R>, frontend: F) -> Self {
        Self {
            board,
            frontend,
            state: GameState::Init,
        }
    }

    /// Continue an existing board without resetting it first.
    pub fn resume(board: Board<R>, frontend: F) -> Self {
        Self {
            board,
            frontend,
            state: GameState::Game,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Run until Exit, handing the board (and its high score) back.
    pub fn run(mut self) -> Result<Board<R>> {
        while self.state != GameState::Exit {
            self.step()?;
        }
        Ok(self.board)
    }

    /// Perform one transition and return the new state.
    pub fn step(&mut self) -> Result<GameState> {
        let next = match self.state {
            GameState::Init => {
                let finished = self.board.score();
                self.board.reset();
                info!(
                    finished,
                    high_score = self.board.high_score(),
                    "new game"
                );
                GameState::Game
            }
            GameState::Game => {
                self.frontend.render(&self.board.view())?;
                let action = self.frontend.next_action()?;
                self.play(action)
            }
            GameState::Win | GameState::Gameover => {
                self.frontend.render(&self.board.view())?;
                match self.frontend.next_action()? {
                    Action::Restart => GameState::Init,
                    Action::Exit => GameState::Exit,
                    _ => self.state,
                }
            }
            GameState::Exit => GameState::Exit,
        };

        if next != self.state {
            match next {
                GameState::Win => info!(score = self.board.score(), "reached win tile"),
                GameState::Gameover => info!(score = self.board.score(), "no moves left"),
                GameState::Exit => info!(best = self.board.best_score(), "exit"),
                _ => {}
            }
        }

        self.state = next;
        Ok(next)
    }

    fn play(&mut self, action: Action) -> GameState {
        let direction = match action {
            Action::Restart => return GameState::Init,
            Action::Exit => return GameState::Exit,
            Action::Up => Direction::Up,
            Action::Down => Direction::Down,
            Action::Left => Direction::Left,
            Action::Right => Direction::Right,
        };

        if !self.board.slide(direction) {
            GameState::Game
        } else if self.board.is_win() {
            GameState::Win
        } else if self.board.is_gameover() {
            GameState::Gameover
        } else {
            GameState::Game
        }
    }
}
