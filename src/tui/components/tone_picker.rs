//! # Tone Picker Component
//!
//! Radio list of the six tones with their descriptions. Stateless: the
//! selection lives in `App`, arrives here as `ToneRow::selected`, and changes
//! go back out as [`ToneEvent::Select`].
//!
//! Up/Down (or k/j) move the selection with wrap-around; digits 1–6 jump
//! straight to a tone; Enter confirms and moves focus to the button.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::tone::Tone;
use crate::core::view::ToneRow;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneEvent {
    Select(Tone),
    /// Enter pressed; parent moves focus on.
    Confirm,
}

pub struct TonePicker {
    pub rows: Vec<ToneRow>,
    pub focused: bool,
}

impl TonePicker {
    pub fn new(rows: Vec<ToneRow>, focused: bool) -> Self {
        Self { rows, focused }
    }

    /// One line per tone plus borders.
    pub fn height(&self) -> u16 {
        self.rows.len() as u16 + 2
    }

    fn current(&self) -> Tone {
        self.rows
            .iter()
            .find(|row| row.selected)
            .map(|row| row.tone)
            .unwrap_or_default()
    }
}

impl Component for TonePicker {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled("Reply Tone", Style::default().fg(Color::White)));

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let marker = if row.selected { "(•)" } else { "( )" };
                let label_style = if row.selected {
                    let base = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
                    if self.focused {
                        base.add_modifier(Modifier::REVERSED)
                    } else {
                        base
                    }
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{} {} ", i + 1, marker), label_style),
                    Span::styled(format!("{:<12}", row.label), label_style),
                    Span::styled(
                        format!("  {}", row.description),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl EventHandler for TonePicker {
    type Event = ToneEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let current = self.current();
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => Some(ToneEvent::Select(current.prev())),
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                Some(ToneEvent::Select(current.next()))
            }
            TuiEvent::InputChar(c @ '1'..='6') => {
                let index = (*c as u8 - b'1') as usize;
                Tone::ALL.get(index).map(|&tone| ToneEvent::Select(tone))
            }
            TuiEvent::InputChar(' ') => Some(ToneEvent::Select(current)),
            TuiEvent::Submit => Some(ToneEvent::Confirm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rows(selected: Tone) -> Vec<ToneRow> {
        Tone::ALL
            .into_iter()
            .map(|tone| ToneRow {
                tone,
                label: tone.label(),
                description: tone.description(),
                selected: tone == selected,
            })
            .collect()
    }

    #[test]
    fn test_arrow_keys_cycle() {
        let mut picker = TonePicker::new(rows(Tone::Formal), true);
        assert_eq!(
            picker.handle_event(&TuiEvent::CursorDown),
            Some(ToneEvent::Select(Tone::Informal))
        );
        assert_eq!(
            picker.handle_event(&TuiEvent::CursorUp),
            Some(ToneEvent::Select(Tone::Diplomatic))
        );
    }

    #[test]
    fn test_digit_jumps() {
        let mut picker = TonePicker::new(rows(Tone::Formal), true);
        assert_eq!(
            picker.handle_event(&TuiEvent::InputChar('5')),
            Some(ToneEvent::Select(Tone::Sarcastic))
        );
        assert_eq!(picker.handle_event(&TuiEvent::InputChar('7')), None);
    }

    #[test]
    fn test_enter_confirms() {
        let mut picker = TonePicker::new(rows(Tone::Humor), true);
        assert_eq!(picker.handle_event(&TuiEvent::Submit), Some(ToneEvent::Confirm));
    }

    #[test]
    fn test_render_marks_selection() {
        let mut picker = TonePicker::new(rows(Tone::Exaggerated), false);
        let mut terminal = Terminal::new(TestBackend::new(70, picker.height())).unwrap();
        terminal.draw(|f| picker.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let line = |y: u16| -> String {
            (0..70).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };
        assert!(line(0).contains("Reply Tone"));
        assert!(line(4).contains("(•) Exaggerated"));
        assert!(line(1).contains("( ) Formal"));
        assert!(line(6).contains("Balanced and careful reply"));
    }
}
