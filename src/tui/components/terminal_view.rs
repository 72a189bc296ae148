//! # TerminalView Component
//!
//! Renders the session's scrollback inside a `ScrollView`, pinned to the
//! bottom while new output arrives. Scrolling up unpins; scrolling back to
//! the end re-pins.
//!
//! Lines are not wrapped: the boxed command tables rely on fixed columns,
//! so anything wider than the panel is clipped.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::screen::{Cell, Scrollback, Tint};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the terminal panel.
/// Must be persisted in the parent TuiState.
pub struct TerminalViewState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new output
    pub stick_to_bottom: bool,
    /// Line count at the last render
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for TerminalViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            content_height: 0,
            viewport_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Re-engage auto-scroll once the user has reached the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }
}

impl EventHandler for TerminalViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

pub fn tint_style(tint: Tint) -> Style {
    match tint {
        Tint::Header => Style::default().fg(Color::Cyan),
        Tint::Prompt => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tint::Echo => Style::default().fg(Color::White),
        Tint::Body => Style::default().fg(Color::Gray),
    }
}

/// Group consecutive cells of the same tint into spans.
fn to_line(cells: &[Cell]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut tint = None;
    for cell in cells {
        if tint != Some(cell.tint) {
            if let Some(t) = tint {
                spans.push(Span::styled(std::mem::take(&mut run), tint_style(t)));
            }
            tint = Some(cell.tint);
        }
        run.push(cell.ch);
    }
    if let Some(t) = tint {
        spans.push(Span::styled(run, tint_style(t)));
    }
    Line::from(spans)
}

pub struct TerminalView<'a> {
    pub screen: &'a Scrollback,
    /// Draw the block cursor (session accepting input)
    pub show_cursor: bool,
    pub state: &'a mut TerminalViewState,
}

impl Component for TerminalView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // -1 for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let line_count = u16::try_from(self.screen.line_count()).unwrap_or(u16::MAX);
        let canvas_height = line_count.max(area.height);

        self.state.content_height = line_count;
        self.state.viewport_height = area.height;

        let lines: Vec<Line> = self.screen.lines().map(to_line).collect();
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, line_count),
        );

        let (row, col) = self.screen.cursor();
        if self.show_cursor
            && let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col))
            && col < content_width
        {
            scroll_view.render_widget(
                Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
                Rect::new(col, row, 1, 1),
            );
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        } else if self.state.scroll_state.offset().y > self.state.max_offset() {
            let max_y = self.state.max_offset();
            self.state.scroll_state.set_offset(Position { x: 0, y: max_y });
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
