//! # SnakeView Component
//!
//! Draws the game board cell by cell (two columns per cell so the board
//! looks square) with a one-line status bar underneath.
//!
//! ```text
//! ┌ Snake ───────────────────────┐
//! │ · · · · · · · · · · · · · ·  │
//! │ · · · ██████▓▓· · · ◆ · · ·  │
//! │ · · · · · · · · · · · · · ·  │
//! │Score: 3   Arrows/WASD  M: mute  Esc: exit │
//! └──────────────────────────────┘
//! ```
//!
//! Cells outside the visible area are clipped; the board never shrinks
//! below its minimum size.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::snake::{CELL_HEIGHT, CELL_WIDTH, Point, SnakeGame};
use crate::tui::component::Component;

const EMPTY: &str = "· ";
const BODY: &str = "██";
const HEAD: &str = "▓▓";
const FOOD: &str = "◆ ";

/// Where the board goes inside the panel: everything but the status row.
pub fn board_area(area: Rect) -> Rect {
    let [board, _status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    board
}

pub struct SnakeView<'a> {
    pub game: &'a SnakeGame,
    pub muted: bool,
}

impl SnakeView<'_> {
    fn cell_origin(area: Rect, p: Point) -> Option<(u16, u16)> {
        let x = area.x.checked_add(p.x.checked_mul(CELL_WIDTH)?)?;
        let y = area.y.checked_add(p.y.checked_mul(CELL_HEIGHT)?)?;
        (x + CELL_WIDTH <= area.right() && y < area.bottom()).then_some((x, y))
    }
}

impl Component for SnakeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let board = board_area(area);
        let [_, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let grid = self.game.grid();

        let buf = frame.buffer_mut();
        let dim = Style::default().fg(Color::DarkGray);
        for y in 0..grid.rows {
            for x in 0..grid.cols {
                if let Some((cx, cy)) = Self::cell_origin(board, Point::new(x, y)) {
                    buf.set_string(cx, cy, EMPTY, dim);
                }
            }
        }

        if !grid.is_empty()
            && let Some((cx, cy)) = Self::cell_origin(board, self.game.food())
        {
            buf.set_string(cx, cy, FOOD, Style::default().fg(Color::Red));
        }

        let head = self.game.head();
        for p in self.game.snake() {
            if let Some((cx, cy)) = Self::cell_origin(board, p) {
                let (glyph, color) = if Some(p) == head {
                    (HEAD, Color::LightGreen)
                } else {
                    (BODY, Color::Green)
                };
                buf.set_string(cx, cy, glyph, Style::default().fg(color));
            }
        }

        let status_line = Line::from(vec![
            Span::styled(
                format!("Score: {}", self.game.score()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   Arrows/WASD  M: {}  Esc: exit",
                    if self.muted { "unmute" } else { "mute" }
                ),
                dim,
            ),
        ]);
        frame.render_widget(Paragraph::new(status_line), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::snake::Grid;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(game: &SnakeGame, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                SnakeView { game, muted: false }.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_initial_snake_is_drawn() {
        let game = SnakeGame::seeded(Grid::new(16, 14), 1);
        let rows = render(&game, 32, 15);
        // tail (4,6), body (5,6), head (6,6): columns 8..14
        let row: Vec<char> = rows[6].chars().collect();
        assert_eq!(row[8..14].iter().collect::<String>(), "████▓▓");
        assert!(rows[14].starts_with("Score: 0"));
    }

    #[test]
    fn test_food_is_drawn() {
        let game = SnakeGame::seeded(Grid::new(16, 14), 3);
        let rows = render(&game, 32, 15);
        let food = game.food();
        assert!(rows[food.y as usize].contains('◆'));
    }

    #[test]
    fn test_board_larger_than_area_is_clipped() {
        let game = SnakeGame::seeded(Grid::new(16, 14), 1);
        // too small for the full board; must not panic
        let rows = render(&game, 10, 5);
        assert!(rows[4].starts_with("Score"));
    }

    #[test]
    fn test_board_area_reserves_status_row() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(board_area(area), Rect::new(0, 0, 40, 19));
    }
}
