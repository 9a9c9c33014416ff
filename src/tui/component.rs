use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the form that can draw itself.
///
/// Props arrive as struct fields; `render` takes `&mut self` so components
/// can update caches (scroll offsets, last known width) during the draw pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent`, optionally producing a high-level one.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
