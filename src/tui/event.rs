use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::action::Key;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit,
    Key(Key),

    // TUI-local events (handled directly in TUI)
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseMove(u16, u16),
    MouseDown(u16, u16),
    MouseUp(u16, u16),
    Resize,
}

/// Translate a raw crossterm event. Key releases and unmapped input yield `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                    Some(TuiEvent::MouseMove(col, row))
                }
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        // other chords are not text
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::Key(Key::Char(c))),
        (_, KeyCode::Enter) => Some(TuiEvent::Key(Key::Enter)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Key(Key::Backspace)),
        (_, KeyCode::Esc) => Some(TuiEvent::Key(Key::Esc)),
        (_, KeyCode::Up) => Some(TuiEvent::Key(Key::Up)),
        (_, KeyCode::Down) => Some(TuiEvent::Key(Key::Down)),
        (_, KeyCode::Left) => Some(TuiEvent::Key(Key::Left)),
        (_, KeyCode::Right) => Some(TuiEvent::Key(Key::Right)),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}
