//! Sidebar widget listing chat sessions, newest first.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::chat::ChatSession;

/// Sidebar widget for displaying and selecting sessions.
pub struct Sidebar<'a> {
    /// Sessions to display, newest first
    sessions: &'a [ChatSession],
    /// Id of the active session (gets a marker)
    active_id: &'a str,
    /// Whether the sidebar has keyboard focus
    focused: bool,
}

impl<'a> Sidebar<'a> {
    /// Create a new sidebar widget.
    pub fn new(sessions: &'a [ChatSession], active_id: &'a str, focused: bool) -> Self {
        Self {
            sessions,
            active_id,
            focused,
        }
    }
}

impl StatefulWidget for Sidebar<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(" Sessions ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner_area = block.inner(area);
        block.render(area, buf);

        if inner_area.height == 0 {
            return;
        }

        // "New chat" action row pinned at the top, list below
        let action_area = Rect {
            height: 1,
            ..inner_area
        };
        let list_area = Rect {
            y: inner_area.y + 1,
            height: inner_area.height.saturating_sub(1),
            ..inner_area
        };

        Paragraph::new(Line::from(vec![
            Span::styled("+ New chat", Style::default().fg(Color::White)),
            Span::styled("  n", Style::default().fg(Color::DarkGray)),
        ]))
        .render(action_area, buf);

        let width = list_area.width as usize;
        let items: Vec<ListItem> = self
            .sessions
            .iter()
            .map(|session| {
                ListItem::new(session_line(session, session.id == self.active_id, width))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(list, list_area, buf, state);
    }
}

/// Build the display line for one session row.
fn session_line(session: &ChatSession, is_active: bool, width: usize) -> Line<'static> {
    let marker = if is_active { "● " } else { "  " };
    let count = format!(" ({})", session.messages.len());

    // Leave room for highlight symbol, marker, and the message count
    let budget = width.saturating_sub(2 + marker.len() + count.len()).max(4);
    let title = truncate_to_width(&session.title, budget);

    let title_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(title, title_style),
        Span::styled(count, Style::default().fg(Color::DarkGray)),
    ])
}

/// Truncate a string to at most `max_chars` characters, char-safe.
fn truncate_to_width(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars.saturating_sub(1)).collect::<String>() + "…"
    }
}
