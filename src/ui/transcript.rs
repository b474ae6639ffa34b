//! Transcript widget: the message list of the active session.
//!
//! Scrolling is anchored to the bottom, the live position. Content is
//! wrapped by the widget itself (rather than ratatui's `Wrap`) so the
//! total line count is known and the scroll range can be clamped exactly.

use chrono::{Local, TimeZone};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::app::TranscriptScroll;
use crate::chat::{ChatSession, Message, Role};

/// Transcript widget for the active session's messages.
pub struct Transcript<'a> {
    session: &'a ChatSession,
}

impl<'a> Transcript<'a> {
    /// Create a transcript over the given session.
    pub fn new(session: &'a ChatSession) -> Self {
        Self { session }
    }
}

impl StatefulWidget for Transcript<'_> {
    type State = TranscriptScroll;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .title(format!(" {} ", self.session.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.session.messages.is_empty() {
            state.max_offset = 0;
            state.snap_to_bottom();
            render_welcome(inner, buf);
            return;
        }

        let lines = build_message_lines(&self.session.messages, inner.width as usize);
        let viewport = inner.height as usize;

        state.max_offset = lines.len().saturating_sub(viewport);
        if state.offset > state.max_offset {
            state.offset = state.max_offset;
        }

        // Bottom-anchored: skip everything above the visible window
        let top = state.max_offset - state.offset;
        Paragraph::new(lines)
            .scroll((top as u16, 0))
            .render(inner, buf);
    }
}

/// Centered welcome screen shown for a session without messages.
fn render_welcome(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            "monochat",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            "A clean, minimal chat for distraction-free writing.",
            Style::default().fg(Color::Gray),
        ))
        .centered(),
        Line::from(Span::styled(
            "Messages are local echoes and are not persisted.",
            Style::default().fg(Color::Gray),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            "Type below and press Enter to start.",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];

    let top_pad = (area.height as usize).saturating_sub(lines.len()) / 2;
    let area = Rect {
        y: area.y + top_pad as u16,
        height: area.height.saturating_sub(top_pad as u16),
        ..area
    };
    Paragraph::new(lines).render(area, buf);
}

/// Flatten messages into display lines: a header per message, wrapped
/// content, and a blank separator line.
fn build_message_lines(messages: &[Message], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for message in messages {
        lines.push(message_header(message));
        for row in wrap_text(&message.content, width) {
            lines.push(Line::from(Span::raw(row)));
        }
        lines.push(Line::default());
    }

    // Drop the trailing separator so the last content line sits at the bottom
    lines.pop();
    lines
}

/// Header line for a message: role label and local send time.
fn message_header(message: &Message) -> Line<'static> {
    let (label, color) = match message.role {
        Role::User => ("You", Color::Cyan),
        Role::Assistant => ("Assistant", Color::Green),
        Role::System => ("System", Color::Yellow),
    };

    Line::from(vec![
        Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", format_time(message.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Format an epoch-millis timestamp as local wall-clock time.
fn format_time(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}

/// Greedy word wrap to `width` characters per line. Words longer than the
/// width are broken mid-word. Explicit newlines in the content are kept.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            rows.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let sep = usize::from(current_len > 0);

            if current_len + sep + word_len <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len += sep + word_len;
            } else if word_len > width {
                // Flush the current row, then hard-break the long word
                if current_len > 0 {
                    rows.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let mut chunk = String::new();
                let mut chunk_len = 0;
                for c in word.chars() {
                    if chunk_len == width {
                        rows.push(std::mem::take(&mut chunk));
                        chunk_len = 0;
                    }
                    chunk.push(c);
                    chunk_len += 1;
                }
                current = chunk;
                current_len = chunk_len;
            } else {
                rows.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }
        rows.push(current);
    }

    rows
}
