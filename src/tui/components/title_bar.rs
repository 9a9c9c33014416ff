//! # TitleBar Component
//!
//! Single line at the top: application name, tagline, and a status segment
//! while a request is in flight.
//!
//! 1. **Busy**: `"Retort · AI Response Generator | Generating..."`
//! 2. **Idle**: `"Retort · AI Response Generator | Replies in the tone you choose"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const APP_TITLE: &str = "Retort · AI Response Generator";
const TAGLINE: &str = "Replies in the tone you choose";

pub struct TitleBar {
    /// Shown instead of the tagline when non-empty
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (right, right_style) = if self.status_message.is_empty() {
            (TAGLINE, Style::default().fg(Color::Gray))
        } else {
            (self.status_message.as_str(), Style::default().fg(Color::Cyan))
        };
        let line = Line::from(vec![
            Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(right, right_style),
        ]);
        frame.render_widget(line, area);
    }
}
