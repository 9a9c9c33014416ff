//! # Response Panel Component
//!
//! Shows the webhook's reply, whitespace preserved, in a scrollable view.
//! Only drawn when there is a reply.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResponsePanelState` lives in `TuiState` (scroll position survives frames)
//! - `ResponsePanel` is created each frame with the text and borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Default)]
pub struct ResponsePanelState {
    pub scroll_state: ScrollViewState,
    /// Wrapped content height from the last render
    content_height: u16,
    /// Viewport height from the last render
    viewport_height: u16,
}

impl ResponsePanelState {
    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn clamp(&mut self) {
        let offset = self.scroll_state.offset();
        let max = self.max_offset();
        if offset.y > max {
            self.scroll_state.set_offset(Position { x: offset.x, y: max });
        }
    }
}

impl EventHandler for ResponsePanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp();
            }
            _ => {}
        }
        None
    }
}

pub struct ResponsePanel<'a> {
    text: &'a str,
    state: &'a mut ResponsePanelState,
}

impl<'a> ResponsePanel<'a> {
    pub fn new(text: &'a str, state: &'a mut ResponsePanelState) -> Self {
        Self { text, state }
    }
}

impl Component for ResponsePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(Span::styled(
                "Generated Reply",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // -1 keeps a column free for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(text: &str, state: &mut ResponsePanelState, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(30, height)).unwrap();
        terminal
            .draw(|f| ResponsePanel::new(text, state).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..30).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_renders_title_and_text() {
        let mut state = ResponsePanelState::default();
        let rows = draw("Hello there", &mut state, 5);
        assert!(rows[0].contains("Generated Reply"));
        assert!(rows[1].contains("Hello there"));
    }

    #[test]
    fn test_preserves_line_breaks() {
        let mut state = ResponsePanelState::default();
        let rows = draw("first\nsecond", &mut state, 5);
        assert!(rows[1].contains("first"));
        assert!(rows[2].contains("second"));
    }

    #[test]
    fn test_scroll_down_is_clamped_to_content() {
        let mut state = ResponsePanelState::default();
        let text = (1..=10).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        draw(&text, &mut state, 5); // 3 visible rows, 10 content rows

        for _ in 0..50 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(state.scroll_state.offset().y, 7);

        let rows = draw(&text, &mut state, 5);
        assert!(rows[3].contains("line 10"));
    }
}
