//! # Footer Component
//!
//! Bottom line: the prompt text on the left, a live clock on the right.
//! The clock string is formatted by the caller once per second.

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// `M/D/YYYY, H:MM:SS AM`
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub struct Footer<'a> {
    pub prompt: &'a str,
    pub clock: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(prompt: &'a str, clock: &'a str) -> Self {
        Self { prompt, clock }
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray);
        let clock_width = self.clock.width() as u16;
        let [prompt_area, clock_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(clock_width)]).areas(area);
        frame.render_widget(Span::styled(self.prompt.trim_end(), style), prompt_area);
        frame.render_widget(
            Paragraph::new(Span::styled(self.clock, style)).alignment(Alignment::Right),
            clock_area,
        );
    }
}
