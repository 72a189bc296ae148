use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use super::TuiState;
use super::component::Component;
use super::components::snake_view::board_area;
use super::components::{CoverPage, Footer, Header, IdCard, SnakeView, TerminalView};
use crate::core::console::ConsoleMode;
use crate::core::state::App;
use crate::core::terminal::SessionState;

/// Screen regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub header: Rect,
    pub card: Rect,
    pub console: Rect,
    pub footer: Rect,
}

/// Header on top, footer at the bottom, card (40%) and console (60%) between.
pub fn page_layout(area: Rect) -> PageAreas {
    use Constraint::{Length, Min, Percentage};
    let [header, main, footer] = Layout::vertical([Length(2), Min(0), Length(1)]).areas(area);
    let [card, console] = Layout::horizontal([Percentage(40), Percentage(60)]).areas(main);
    PageAreas {
        header,
        card,
        console,
        footer,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant, clock: &str) {
    let page = page_layout(frame.area());
    tui.console_area = Some(page.console);

    Header::new(&app.profile.name, &app.profile.subtitle).render(frame, page.header);

    IdCard {
        profile: &app.profile.card,
        tilt: &app.card,
        hits: &mut tui.card_hits,
    }
    .render(frame, page.card);

    draw_console(frame, page.console, app, tui);

    Footer::new(&app.profile.prompt, clock).render(frame, page.footer);

    // the cover goes last so it sits over everything
    CoverPage {
        cover: &app.cover,
        now,
        bulb_hit: &mut tui.bulb_hit,
    }
    .render(frame, frame.area());
}

fn draw_console(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let console = &app.console;
    let title = if console.in_game() { " Snake " } else { " Terminal " };
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = board_area(inner);
    tui.game_surface = (board.width, board.height);

    match console.mode() {
        ConsoleMode::Game(game) => {
            SnakeView {
                game,
                muted: console.is_muted(),
            }
            .render(frame, inner);
        }
        ConsoleMode::Terminal | ConsoleMode::Launching { .. } => {
            let session = console.session();
            let show_cursor = matches!(
                session.state(),
                SessionState::Idle | SessionState::Accumulating
            );
            TerminalView {
                screen: session.screen(),
                show_cursor,
                state: &mut tui.terminal_view,
            }
            .render(frame, inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Key, update};
    use crate::core::commands::Variant;
    use crate::test_support::{test_app, test_app_with_cover};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, app.last_frame, "3/7/2024, 2:30:00 PM"))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_page_layout_splits_main_area() {
        let page = page_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(page.header, Rect::new(0, 0, 100, 2));
        assert_eq!(page.footer, Rect::new(0, 29, 100, 1));
        assert_eq!(page.card.width, 40);
        assert_eq!(page.console.width, 60);
        assert_eq!(page.console.height, 27);
    }

    #[test]
    fn test_draw_ui_shows_page() {
        let app = test_app(Variant::Arcade);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Vaibhav Patel"));
        assert!(text.contains("Terminal"));
        assert!(text.contains("3/7/2024, 2:30:00 PM"));
        assert!(tui.card_hits.card.is_some());
        assert!(tui.bulb_hit.is_none());
        // 60 wide panel minus borders, 27 tall minus borders and status row
        assert_eq!(tui.game_surface, (58, 24));
    }

    #[test]
    fn test_draw_ui_with_cover() {
        let app = test_app_with_cover(Variant::Arcade);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Click The Bulb To Enter"));
        assert!(tui.bulb_hit.is_some());
    }

    #[test]
    fn test_draw_ui_shows_game() {
        let mut app = test_app(Variant::Arcade);
        for ch in "game".chars() {
            update(&mut app, Action::Key(Key::Char(ch)));
        }
        update(&mut app, Action::Key(Key::Enter));
        let later = app.last_frame + Duration::from_millis(100);
        update(&mut app, Action::Frame(later));
        update(&mut app, Action::Frame(later + Duration::from_millis(100)));
        assert!(app.console.in_game());

        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Snake"));
        assert!(text.contains("Score: 0"));
    }
}
