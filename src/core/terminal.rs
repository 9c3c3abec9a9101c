/// Terminal frontend: ratatui for drawing, blocking crossterm reads for input
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::trace;

use crate::board::BoardView;
use crate::core::game::{Action, Frontend};
use crate::core::{keymap, renderer};

pub struct TerminalFrontend {
    terminal: DefaultTerminal,
}

impl TerminalFrontend {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self { terminal }
    }
}

impl Frontend for TerminalFrontend {
    fn render(&mut self, view: &BoardView<'_>) -> Result<()> {
        self.terminal.draw(|frame| renderer::draw(frame, view))?;
        Ok(())
    }

    fn next_action(&mut self) -> Result<Action> {
        loop {
            // Resize, mouse and focus events fall through and are ignored
            if let Event::Key(key) = event::read()? {
                match keymap::decode(&key) {
                    Some(action) => return Ok(action),
                    None => trace!(code = ?key.code, "ignored key"),
                }
            }
        }
    }
}
