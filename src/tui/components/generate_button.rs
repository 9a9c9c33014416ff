//! # GenerateButton Component
//!
//! The submit affordance. Disabled (dimmed, spinner) while a request is in
//! flight; the parent also refuses to submit in that state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::view::ButtonView;
use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SEND_GLYPH: &str = "➤";

pub struct GenerateButton {
    pub view: ButtonView,
    pub focused: bool,
    pub spinner_frame: usize,
}

impl GenerateButton {
    pub fn new(view: ButtonView, focused: bool, spinner_frame: usize) -> Self {
        Self {
            view,
            focused,
            spinner_frame,
        }
    }

    fn glyph(&self) -> &'static str {
        if self.view.busy {
            SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
        } else {
            SEND_GLYPH
        }
    }
}

impl Component for GenerateButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if !self.view.enabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        };

        let label = format!("[ {} {} ]", self.glyph(), self.view.label);
        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}
