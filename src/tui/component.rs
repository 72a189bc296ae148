use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the page that draws itself into an area.
///
/// Data comes in through struct fields; anything the component needs to
/// remember between frames (scroll offsets, hit areas) is borrowed as
/// `&mut` from `TuiState`. `render` takes `&mut self` so those can be
/// updated during the render pass, the same way Ratatui's
/// `StatefulWidget` does.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
