//! Pure wrapping and cursor-placement helpers for `TextField`.
//!
//! Rendering and cursor math both go through [`wrapped_lines`] so the
//! caret always lands on the glyph it belongs to.

use unicode_width::UnicodeWidthStr;

/// Left + right border
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom border
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wraps one logical line (no `\n`) and returns each visual line with its
/// byte offset into `logical`. Never empty.
fn wrap_logical(logical: &str, width: u16) -> Vec<(usize, String)> {
    let mut segments = Vec::new();
    let mut from = 0;
    for line in textwrap::wrap(logical, wrap_options(width)) {
        let start = logical[from..].find(line.as_ref()).map_or(from, |i| from + i);
        from = start + line.len();
        segments.push((start, line.into_owned()));
    }
    if segments.is_empty() {
        segments.push((0, String::new()));
    }
    segments
}

/// Soft-wraps `text` to `width` columns. Always returns at least one line,
/// and a trailing newline always yields a trailing empty line.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    text.split('\n')
        .flat_map(|logical| wrap_logical(logical, width))
        .map(|(_, line)| line)
        .collect()
}

/// (column, row) of the caret within the wrapped content, zero-based.
///
/// The caret belongs to the last visual line starting at or before it, so a
/// word pushed to the next line takes the caret with it.
pub(super) fn cursor_cell(text: &str, pos: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let mut row = 0usize;
    let mut line_start = 0;
    for logical in text.split('\n') {
        let segments = wrap_logical(logical, width);
        let line_end = line_start + logical.len();
        if pos <= line_end {
            let local = pos - line_start;
            let index = segments
                .iter()
                .rposition(|(start, _)| *start <= local)
                .unwrap_or(0);
            let col = logical[segments[index].0..local]
                .width()
                .min(width.saturating_sub(1) as usize);
            return (col as u16, (row + index) as u16);
        }
        row += segments.len();
        line_start = line_end + 1;
    }
    (0, row.saturating_sub(1) as u16)
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Byte offset of the `n`th char of `s`, clamped to `s.len()`.
pub(super) fn byte_offset_of_char(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_lines_empty_is_one_line() {
        assert_eq!(wrapped_lines("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrapped_lines_breaks_long_words() {
        let lines = wrapped_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let lines = wrapped_lines("hello\n", 10);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_cursor_cell_simple() {
        assert_eq!(cursor_cell("hello", 5, 20), (5, 0));
        assert_eq!(cursor_cell("hello", 0, 20), (0, 0));
    }

    #[test]
    fn test_cursor_cell_after_newline() {
        assert_eq!(cursor_cell("hi\n", 3, 20), (0, 1));
        assert_eq!(cursor_cell("hi\nthere", 8, 20), (5, 1));
    }

    #[test]
    fn test_cursor_cell_counts_trailing_spaces() {
        assert_eq!(cursor_cell("hi  ", 4, 20), (4, 0));
    }

    #[test]
    fn test_cursor_follows_word_moved_to_next_line() {
        let text = "aaaa bbbbbb";
        assert_eq!(wrapped_lines(text, 8), vec!["aaaa", "bbbbbb"]);
        assert_eq!(cursor_cell(text, 7, 8), (2, 1));
        assert_eq!(cursor_cell(text, text.len(), 8), (6, 1));
        assert_eq!(cursor_cell(text, 4, 8), (4, 0));
    }

    #[test]
    fn test_cursor_rows_match_wrapped_lines() {
        let text = "one two three\n\nfour five six seven";
        let rows = wrapped_lines(text, 6).len() as u16;
        assert_eq!(cursor_cell(text, text.len(), 6).1, rows - 1);
        assert_eq!(cursor_cell(text, 14, 6), (0, 3));
    }

    #[test]
    fn test_char_boundaries_multibyte() {
        let s = "aé";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(byte_offset_of_char(s, 5), 3);
    }
}
