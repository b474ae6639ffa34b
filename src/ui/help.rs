//! Help menu overlay showing all keybindings.
//!
//! Toggled by `?` when the sidebar has focus. Closed by any key.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// A single keybinding entry for display
struct HelpEntry {
    key: &'static str,
    label: &'static str,
}

/// Widget that renders the help menu overlay
#[derive(Default)]
pub struct HelpMenuWidget;

impl HelpMenuWidget {
    /// Create a new help menu widget
    pub fn new() -> Self {
        Self
    }

    /// Calculate the area for the help menu popup.
    /// Positioned at the bottom of the screen, above the hint bar.
    pub fn calculate_area(screen: Rect) -> Rect {
        let entries = Self::entries();
        let commands_per_row = 5;
        let row_count = entries.len().div_ceil(commands_per_row);
        let height = (row_count as u16 + 2).min(screen.height); // +2 for border + padding
        let y = screen.height.saturating_sub(height + 1); // +1 for hint bar

        Rect {
            x: 0,
            y,
            width: screen.width,
            height,
        }
    }

    /// All keybinding entries
    fn entries() -> Vec<HelpEntry> {
        vec![
            HelpEntry { key: "j/k", label: "nav" },
            HelpEntry { key: "g", label: "first" },
            HelpEntry { key: "G", label: "last" },
            HelpEntry { key: "Enter", label: "open" },
            HelpEntry { key: "n", label: "new chat" },
            HelpEntry { key: "d", label: "delete" },
            HelpEntry { key: "i", label: "compose" },
            HelpEntry { key: "p", label: "move bar" },
            HelpEntry { key: "Esc", label: "sessions" },
            HelpEntry { key: "Tab", label: "focus" },
            HelpEntry { key: "C-b", label: "sidebar" },
            HelpEntry { key: "PgUp/PgDn", label: "scroll" },
            HelpEntry { key: "q", label: "quit" },
            HelpEntry { key: "C-c", label: "quit" },
        ]
    }

    /// Build command display lines grouped into rows
    fn build_command_lines() -> Vec<Line<'static>> {
        let entries = Self::entries();
        let commands_per_row = 5;
        let mut lines = Vec::new();

        for chunk in entries.chunks(commands_per_row) {
            let spans: Vec<Span> = chunk
                .iter()
                .flat_map(|entry| {
                    vec![
                        Span::styled(
                            format!(" {} ", entry.key),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("{} ", entry.label),
                            Style::default().fg(Color::White),
                        ),
                    ]
                })
                .collect();

            lines.push(Line::from(spans));
        }

        lines
    }
}

impl Widget for HelpMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first (overlay effect)
        Clear.render(area, buf);

        let command_lines = Self::build_command_lines();

        let block = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ? | Keybindings ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        let paragraph = Paragraph::new(command_lines)
            .block(block)
            .style(Style::default().bg(Color::Black));

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_cover_the_core_intents() {
        let keys: Vec<&str> = HelpMenuWidget::entries().iter().map(|e| e.key).collect();
        assert!(keys.contains(&"n"));
        assert!(keys.contains(&"d"));
        assert!(keys.contains(&"Enter"));
        assert!(keys.contains(&"Tab"));
    }

    #[test]
    fn area_fits_within_the_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = HelpMenuWidget::calculate_area(screen);
        assert!(area.y + area.height <= screen.height);
        assert_eq!(area.width, screen.width);
    }

    #[test]
    fn command_lines_group_entries_into_rows() {
        let lines = HelpMenuWidget::build_command_lines();
        assert_eq!(lines.len(), HelpMenuWidget::entries().len().div_ceil(5));
    }
}
