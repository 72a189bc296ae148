//! # Cover Page Component
//!
//! Full-screen intro drawn over the page: a desk lamp, a hint, and once
//! the lamp is on, a block progress bar. During the slide the cover is
//! drawn shifted up so the page underneath shows through from the bottom.
//!
//! The bulb's screen rectangle is reported back through `bulb_hit` so the
//! event loop can hit-test clicks.

use std::time::Instant;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::cover::{Cover, TOTAL_BLOCKS};
use crate::tui::component::Component;

const SHADE: [&str; 3] = ["   _________   ", "  /         \\  ", " /___________\\ "];
const BULB_OFF: [&str; 2] = ["     (   )     ", "      \\_/      "];
const BULB_ON: [&str; 2] = ["     (***)     ", "      \\_/      "];
const STAND: [&str; 3] = ["       |       ", "       |       ", "    ___|___    "];
/// Rows above the bulb within the lamp drawing.
const BULB_ROW: u16 = SHADE.len() as u16;
const LAMP_WIDTH: u16 = 15;

pub const HINT: &str = "Click The Bulb To Enter";

/// `[█████░░░░░]` with `TOTAL_BLOCKS` cells.
pub fn progress_bar(filled: usize) -> String {
    let filled = filled.min(TOTAL_BLOCKS);
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(TOTAL_BLOCKS - filled)
    )
}

pub struct CoverPage<'a> {
    pub cover: &'a Cover,
    pub now: Instant,
    /// Set to the bulb's screen area while it can be clicked
    pub bulb_hit: &'a mut Option<Rect>,
}

impl CoverPage<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let lit = self.cover.lamp_on();
        let lamp_style = if lit {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let bulb = if lit { BULB_ON } else { BULB_OFF };

        let mut lines: Vec<Line> = SHADE
            .iter()
            .chain(bulb.iter())
            .chain(STAND.iter())
            .map(|s| Line::from(Span::styled(*s, lamp_style)))
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            HINT,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
        if lit {
            lines.push(Line::from(Span::styled(
                progress_bar(self.cover.filled_blocks()),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(format!("Loading... {}%", self.cover.progress())));
        }
        lines
    }
}

impl Component for CoverPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        *self.bulb_hit = None;
        if !self.cover.is_visible() || area.is_empty() {
            return;
        }

        let lines = self.lines();
        let height = lines.len() as u16;
        let [content] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        // draw off-screen, then copy in shifted up by the slide distance
        let mut cover_buf = Buffer::empty(area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content, &mut cover_buf);

        let shift = (self.cover.slide_offset(self.now) * f64::from(area.height)).round() as u16;
        let buf = frame.buffer_mut();
        for y in area.top()..area.bottom().saturating_sub(shift) {
            for x in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (cover_buf.cell((x, y + shift)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }

        if shift == 0 {
            let lamp_x = content.x + content.width.saturating_sub(LAMP_WIDTH) / 2;
            *self.bulb_hit = Some(Rect::new(lamp_x + 3, content.y + BULB_ROW, 9, 2).intersection(area));
        }
    }
}
