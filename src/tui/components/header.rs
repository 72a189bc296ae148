//! # Header Component
//!
//! Top of the page: the owner's name and a one-line subtitle.
//!
//! Stateless. Both props come from the `Profile`:
//!
//! ```rust,ignore
//! let mut header = Header::new(&app.profile.name, &app.profile.subtitle);
//! header.render(frame, header_area);
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Header<'a> {
    pub name: &'a str,
    pub subtitle: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(name: &'a str, subtitle: &'a str) -> Self {
        Self { name, subtitle }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.name,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.subtitle,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_header_renders_name_and_subtitle() {
        let backend = TestBackend::new(60, 2);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                Header::new("Vaibhav Patel", "Networking and Cyber Security Student")
                    .render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Vaibhav Patel"));
        assert!(text.contains("Networking and Cyber Security Student"));
    }
}
