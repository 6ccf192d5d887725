use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::text::{CELL_WIDTH, SEPARATOR};
use crate::game::{GameController, GameState, SIZE};

/// Rows taken by the board: one separator per row, the rows, a closing separator
const BOARD_HEIGHT: u16 = (2 * SIZE + 1) as u16;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &GameController) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Header
                Constraint::Min(BOARD_HEIGHT + 2), // Board
                Constraint::Length(3),             // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(game);
        frame.render_widget(stats, chunks[0]);

        let board_area = centered(chunks[1], SEPARATOR.len() as u16 + 4, BOARD_HEIGHT + 2);
        let board = self.render_board(game);
        frame.render_widget(board, board_area);

        let footer = self.render_footer(game.state());
        frame.render_widget(footer, chunks[2]);
    }

    fn render_board(&self, game: &GameController) -> Paragraph<'_> {
        let border_color = match game.state() {
            GameState::Won => Color::Green,
            GameState::Lost => Color::Red,
            _ => Color::White,
        };
        let separator = Line::from(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));

        let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
        for row in game.grid().cells().chunks(SIZE) {
            lines.push(separator.clone());

            let mut spans = Vec::with_capacity(2 * SIZE + 1);
            for &value in row {
                spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
                let label = if value == 0 {
                    " ".repeat(CELL_WIDTH)
                } else {
                    format!("{:>width$}", value, width = CELL_WIDTH)
                };
                spans.push(Span::styled(label, tile_style(value)));
            }
            spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
            lines.push(Line::from(spans));
        }
        lines.push(separator);

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(" 2048 "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, game: &GameController) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(game.best_score().to_string(), Style::default().fg(Color::White)),
        ];

        let gained = game.last_move().score_gained;
        if gained > 0 && game.state() == GameState::Playing {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                format!("+{}", gained),
                Style::default().fg(Color::Green),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_footer(&self, state: GameState) -> Paragraph<'_> {
        let line = match state {
            GameState::Playing => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
            GameState::Won | GameState::Lost | GameState::ConfirmRestart | GameState::ConfirmQuit => {
                Line::from(vec![
                    Span::styled(
                        status_text(state),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled("Y/Enter", Style::default().fg(Color::Green)),
                    Span::raw(" yes | "),
                    Span::styled("N/Esc", Style::default().fg(Color::Red)),
                    Span::raw(" no"),
                ])
            }
            GameState::Quit => Line::from(status_text(state)),
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Message shown to the player for a state
pub fn status_text(state: GameState) -> &'static str {
    match state {
        GameState::Playing => "Playing",
        GameState::Won => "You won! Play again?",
        GameState::Lost => "Game over! Play again?",
        GameState::ConfirmRestart => "Restart the game?",
        GameState::ConfirmQuit => "Quit the game?",
        GameState::Quit => "Bye!",
    }
}

/// Colour for a tile, keyed by its value
pub fn tile_style(value: u32) -> Style {
    let color = match value {
        0 => return Style::default(),
        2 => Color::White,
        4 => Color::LightYellow,
        8 => Color::Yellow,
        16 => Color::LightRed,
        32 => Color::Red,
        64 => Color::LightMagenta,
        128 => Color::Magenta,
        256 => Color::LightBlue,
        512 => Color::Blue,
        1024 => Color::LightCyan,
        _ => Color::LightGreen,
    };
    let style = Style::default().fg(color);
    if value >= 128 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
