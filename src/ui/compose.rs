//! Compose box widget: a bordered one-line input with a block cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown when the buffer is empty.
const PLACEHOLDER: &str = "Send a message...";

/// Compose input widget.
pub struct ComposeBox<'a> {
    /// Current buffer contents
    text: &'a str,
    /// Cursor position as a char index
    cursor: usize,
    /// Whether the compose box has keyboard focus
    focused: bool,
}

impl<'a> ComposeBox<'a> {
    /// Create a new compose box widget.
    pub fn new(text: &'a str, cursor: usize, focused: bool) -> Self {
        Self {
            text,
            cursor,
            focused,
        }
    }
}

impl Widget for ComposeBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.text.is_empty() && !self.focused {
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
            .render(inner, buf);
            return;
        }

        let line = if self.focused {
            input_line_with_cursor(self.text, self.cursor, inner.width as usize)
        } else {
            Line::from(Span::raw(window_around_cursor(
                self.text,
                self.cursor,
                inner.width as usize,
            )))
        };

        Paragraph::new(line).render(inner, buf);
    }
}

/// Build the input line with a block cursor, scrolling horizontally so the
/// cursor stays visible.
fn input_line_with_cursor(text: &str, cursor: usize, width: usize) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let (start, cursor_offset) = visible_window(chars.len(), cursor, width);
    let visible = &chars[start..(start + width).min(chars.len())];

    let mut spans = Vec::with_capacity(visible.len() + 1);
    for (i, c) in visible.iter().enumerate() {
        if i == cursor_offset {
            spans.push(Span::styled(
                c.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }
    // Block cursor past the end of the text
    if cursor_offset >= visible.len() {
        spans.push(Span::styled(" ", Style::default().bg(Color::White)));
    }

    Line::from(spans)
}

/// Text window around the cursor for an unfocused render (no cursor shown).
fn window_around_cursor(text: &str, cursor: usize, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let (start, _) = visible_window(chars.len(), cursor, width);
    chars[start..(start + width).min(chars.len())].iter().collect()
}

/// Compute the first visible char index and the cursor's offset within the
/// visible window, keeping one cell free for the end-of-text cursor.
fn visible_window(len: usize, cursor: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    if len < width {
        return (0, cursor.min(len));
    }
    let start = if cursor >= width { cursor - width + 1 } else { 0 };
    (start, cursor - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_fully_visible() {
        let (start, offset) = visible_window(5, 3, 20);
        assert_eq!(start, 0);
        assert_eq!(offset, 3);
    }

    #[test]
    fn window_scrolls_to_keep_cursor_visible() {
        // 30 chars, cursor at the end, 10 wide: show the tail
        let (start, offset) = visible_window(30, 30, 10);
        assert_eq!(start, 21);
        assert_eq!(offset, 9);
    }

    #[test]
    fn window_stays_at_origin_for_early_cursor() {
        let (start, offset) = visible_window(30, 4, 10);
        assert_eq!(start, 0);
        assert_eq!(offset, 4);
    }

    #[test]
    fn cursor_line_highlights_the_cursor_cell() {
        let line = input_line_with_cursor("abc", 1, 20);
        assert_eq!(line.spans[1].content.as_ref(), "b");
        assert_eq!(line.spans[1].style.bg, Some(Color::White));
        assert_eq!(line.spans[0].style.bg, None);
    }

    #[test]
    fn cursor_at_end_renders_block_after_text() {
        let line = input_line_with_cursor("ab", 2, 20);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[2].content.as_ref(), " ");
        assert_eq!(line.spans[2].style.bg, Some(Color::White));
    }

    #[test]
    fn unfocused_window_clips_to_width() {
        let text: String = "abcdefghij".into();
        assert_eq!(window_around_cursor(&text, 0, 4), "abcd");
        assert_eq!(window_around_cursor(&text, 10, 4), "hij");
    }
}
