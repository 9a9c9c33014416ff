//! # TextField Component
//!
//! Bordered, editable text with a placeholder. Used twice on the form:
//!
//! - **single-line** for the webhook URL: scrolls horizontally, Enter advances
//!   focus, pasted newlines are dropped;
//! - **multi-line** for the received text: soft-wraps, Enter and Ctrl+J insert
//!   a newline, grows up to `max_visible_lines` then scrolls.
//!
//! The buffer is internal state mirrored into `App` by the parent whenever
//! the field reports [`FieldEvent::Changed`]. `focused` is a prop.

mod layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use layout::{
    BORDER_OFFSET, VERTICAL_OVERHEAD, byte_offset_of_char, cursor_cell, inner_width,
    next_char_boundary, prev_char_boundary, wrapped_lines,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Buffer content changed; parent should sync it.
    Changed,
    /// Enter in a single-line field: move focus on.
    Advance,
}

pub struct TextField {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub buffer: String,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
    multiline: bool,
    max_visible_lines: u16,
    /// Caret as byte offset into `buffer`
    cursor: usize,
    /// Vertical line offset (multi-line) or horizontal column offset (single-line)
    scroll: u16,
}

impl TextField {
    pub fn single_line(title: &'static str, placeholder: &'static str, text: String) -> Self {
        Self::build(title, placeholder, text, false, 1)
    }

    pub fn multiline(
        title: &'static str,
        placeholder: &'static str,
        text: String,
        max_visible_lines: u16,
    ) -> Self {
        Self::build(title, placeholder, text, true, max_visible_lines.max(1))
    }

    fn build(
        title: &'static str,
        placeholder: &'static str,
        text: String,
        multiline: bool,
        max_visible_lines: u16,
    ) -> Self {
        let cursor = text.len();
        Self {
            title,
            placeholder,
            buffer: text,
            focused: false,
            multiline,
            max_visible_lines,
            cursor,
            scroll: 0,
        }
    }

    /// Height needed for the current content at the given width, borders included.
    pub fn height(&self, area_width: u16) -> u16 {
        if !self.multiline {
            return 1 + VERTICAL_OVERHEAD;
        }
        let lines = wrapped_lines(&self.buffer, inner_width(area_width)).len() as u16;
        lines.clamp(1, self.max_visible_lines) + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) -> Option<FieldEvent> {
        let text = if self.multiline {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text.replace(['\r', '\n'], "")
        };
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
        Some(FieldEvent::Changed)
    }

    /// Moves the caret to the same column of the previous/next logical line.
    fn move_line(&mut self, up: bool) -> bool {
        let line_start = self.buffer[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
        let column = self.buffer[line_start..self.cursor].chars().count();

        let (target_start, target_end) = if up {
            if line_start == 0 {
                return false;
            }
            let prev_end = line_start - 1;
            let prev_start = self.buffer[..prev_end].rfind('\n').map_or(0, |i| i + 1);
            (prev_start, prev_end)
        } else {
            let Some(offset) = self.buffer[self.cursor..].find('\n') else {
                return false;
            };
            let next_start = self.cursor + offset + 1;
            let next_end = self.buffer[next_start..]
                .find('\n')
                .map_or(self.buffer.len(), |i| next_start + i);
            (next_start, next_end)
        };

        let line = &self.buffer[target_start..target_end];
        self.cursor = target_start + byte_offset_of_char(line, column);
        true
    }

    /// Keeps the caret inside the visible window; returns the caret cell
    /// relative to the content origin after scrolling.
    fn scroll_to_cursor(&mut self, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if self.multiline {
            let visible = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1);
            let (col, row) = cursor_cell(&self.buffer, self.cursor, width);
            if row < self.scroll {
                self.scroll = row;
            } else if row >= self.scroll + visible {
                self.scroll = row + 1 - visible;
            }
            (col, row - self.scroll)
        } else {
            let col = self.buffer[..self.cursor].width() as u16;
            let last_visible = width.saturating_sub(1);
            if col < self.scroll {
                self.scroll = col;
            } else if col > self.scroll + last_visible {
                self.scroll = col - last_visible;
            }
            (col - self.scroll, 0)
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(self.title, Style::default().fg(Color::White)));

        let (col, row) = self.scroll_to_cursor(area);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else if self.multiline {
            let lines = wrapped_lines(&self.buffer, inner_width(area.width));
            Paragraph::new(lines.join("\n")).scroll((self.scroll, 0))
        } else {
            Paragraph::new(self.buffer.as_str()).scroll((0, self.scroll))
        };

        frame.render_widget(paragraph.block(block).style(Style::default().fg(Color::White)), area);

        if self.focused {
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + col,
                area.y + BORDER_OFFSET + row,
            ));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert(c.encode_utf8(&mut tmp))
            }
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Submit if self.multiline => self.insert("\n"),
            TuiEvent::Submit => Some(FieldEvent::Advance),
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::Changed)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = self.buffer[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer[self.cursor..]
                    .find('\n')
                    .map_or(self.buffer.len(), |i| self.cursor + i);
                None
            }
            TuiEvent::CursorUp if self.multiline => {
                self.move_line(true);
                None
            }
            TuiEvent::CursorDown if self.multiline => {
                self.move_line(false);
                None
            }
            _ => None,
        }
    }
}
