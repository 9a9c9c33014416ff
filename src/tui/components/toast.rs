//! # Toast Component
//!
//! Transient notification drawn over the top-right corner of the form.
//! Red border for errors, green for success. Purely presentational: expiry
//! and dismissal are handled by the core reducer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::notify::NotificationKind;
use crate::core::view::NotificationView;
use crate::tui::component::Component;

const TOAST_WIDTH: u16 = 44;

pub struct Toast<'a> {
    view: &'a NotificationView,
}

impl<'a> Toast<'a> {
    pub fn new(view: &'a NotificationView) -> Self {
        Self { view }
    }

    /// Area in the top-right corner of `outer`, sized to the wrapped text.
    pub fn area(&self, outer: Rect) -> Rect {
        let width = TOAST_WIDTH.min(outer.width);
        let inner_width = width.saturating_sub(2).max(1) as usize;
        let text_lines = textwrap::wrap(self.view.description, inner_width).len() as u16;
        let height = (text_lines + 2).min(outer.height);
        Rect {
            x: outer.x + outer.width - width,
            y: outer.y,
            width,
            height,
        }
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = self.area(area);
        let color = match self.view.kind {
            NotificationKind::Error => Color::Red,
            NotificationKind::Success => Color::Green,
        };

        frame.render_widget(Clear, overlay);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.view.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        let body = Paragraph::new(self.view.description)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn failure() -> NotificationView {
        NotificationView {
            kind: NotificationKind::Error,
            title: "Error",
            description: "Failed to generate a reply. Check the webhook URL and try again.",
        }
    }

    #[test]
    fn test_area_is_top_right() {
        let view = failure();
        let toast = Toast::new(&view);
        let area = toast.area(Rect::new(0, 0, 100, 30));
        assert_eq!(area.x + area.width, 100);
        assert_eq!(area.y, 0);
        assert_eq!(area.width, TOAST_WIDTH);
        assert!(area.height >= 3);
    }

    #[test]
    fn test_area_fits_narrow_terminal() {
        let view = failure();
        let area = Toast::new(&view).area(Rect::new(0, 0, 20, 4));
        assert_eq!(area.width, 20);
        assert!(area.height <= 4);
    }

    #[test]
    fn test_renders_title_and_description() {
        let view = failure();
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal.draw(|f| Toast::new(&view).render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Error"));
        assert!(text.contains("Failed to generate"));
    }
}
