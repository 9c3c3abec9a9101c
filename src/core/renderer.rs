/// Board drawing, shared by the terminal frontend and tests
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::board::BoardView;

pub const WIN_BANNER: &str = "YOU WIN!!!";
pub const GAMEOVER_BANNER: &str = "GAME OVER";
pub const MOVE_HELP: &str = "(W)Up (S)Down (A)Left (D)Right";
pub const MENU_HELP: &str = "(R)Restart  (Q)Exit";

const CELL_WIDTH: usize = 6;

/// Banner shown under the grid; a win outranks a deadlock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Win,
    Gameover,
    Playing,
}

impl Banner {
    pub fn of(view: &BoardView<'_>) -> Self {
        if view.is_win {
            Banner::Win
        } else if view.is_gameover {
            Banner::Gameover
        } else {
            Banner::Playing
        }
    }

    fn text(self) -> &'static str {
        match self {
            Banner::Win => WIN_BANNER,
            Banner::Gameover => GAMEOVER_BANNER,
            Banner::Playing => MOVE_HELP,
        }
    }

    fn style(self) -> Style {
        match self {
            Banner::Win => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            Banner::Gameover => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Banner::Playing => Style::default(),
        }
    }
}

/// Score lines followed by the boxed grid
pub fn board_lines(view: &BoardView<'_>) -> Vec<String> {
    let width = view.rows.first().map_or(0, Vec::len);
    let separator = format!("+{}", "------+".repeat(width));

    let mut lines = vec![format!("SCORE: {}", view.score)];
    if view.high_score != 0 {
        lines.push(format!("HIGHSCORE: {}", view.high_score));
    }

    for row in view.rows {
        lines.push(separator.clone());
        let cells: String = row
            .iter()
            .map(|&value| {
                if value > 0 {
                    format!("|{:^width$}", value, width = CELL_WIDTH)
                } else {
                    format!("|{}", " ".repeat(CELL_WIDTH))
                }
            })
            .collect();
        lines.push(format!("{cells}|"));
    }
    lines.push(separator);

    lines
}

/// Full screen text: board, banner, then the restart/exit help
pub fn screen_lines(view: &BoardView<'_>) -> Vec<String> {
    let mut lines = board_lines(view);
    lines.push(Banner::of(view).text().to_string());
    lines.push(MENU_HELP.to_string());
    lines
}

pub fn draw(frame: &mut Frame, view: &BoardView<'_>) {
    let banner = Banner::of(view);
    let mut lines: Vec<Line> = board_lines(view).into_iter().map(Line::from).collect();
    lines.push(Line::from(Span::styled(banner.text(), banner.style())));
    lines.push(Line::from(MENU_HELP));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" 2048 "))
        .alignment(Alignment::Left);
    frame.render_widget(widget, frame.area());
}
