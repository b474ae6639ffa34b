//! Top-level screen layout: sidebar + main pane with a key-hint bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::{LayoutConfig, SidebarPosition};

/// Height of the compose box including its borders.
pub const COMPOSE_HEIGHT: u16 = 3;

/// Computed screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Sidebar column; `None` when the sidebar is hidden
    pub sidebar: Option<Rect>,
    /// Message transcript region
    pub transcript: Rect,
    /// Compose input region
    pub compose: Rect,
    /// One-line key-hint bar at the bottom
    pub hint_bar: Rect,
}

/// Split the screen according to the layout config and sidebar visibility.
pub fn create_layout(area: Rect, config: &LayoutConfig, sidebar_visible: bool) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let main_area = vertical[0];
    let hint_bar = vertical[1];

    let (sidebar, content) = if sidebar_visible {
        let pct = u16::from(config.sidebar_width_pct);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(match config.sidebar_position {
                SidebarPosition::Left => {
                    [Constraint::Percentage(pct), Constraint::Percentage(100 - pct)]
                }
                SidebarPosition::Right => {
                    [Constraint::Percentage(100 - pct), Constraint::Percentage(pct)]
                }
            })
            .split(main_area);

        match config.sidebar_position {
            SidebarPosition::Left => (Some(horizontal[0]), horizontal[1]),
            SidebarPosition::Right => (Some(horizontal[1]), horizontal[0]),
        }
    } else {
        (None, main_area)
    };

    let content_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(COMPOSE_HEIGHT)])
        .split(content);

    AppLayout {
        sidebar,
        transcript: content_split[0],
        compose: content_split[1],
        hint_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn hint_bar_is_one_line_at_the_bottom() {
        let layout = create_layout(screen(), &LayoutConfig::default(), true);
        assert_eq!(layout.hint_bar.height, 1);
        assert_eq!(layout.hint_bar.y, 39);
        assert_eq!(layout.hint_bar.width, 100);
    }

    #[test]
    fn sidebar_takes_configured_width_on_the_left() {
        let layout = create_layout(screen(), &LayoutConfig::default(), true);
        let sidebar = layout.sidebar.unwrap();
        assert_eq!(sidebar.x, 0);
        assert_eq!(sidebar.width, 25);
        assert_eq!(layout.transcript.x, 25);
    }

    #[test]
    fn sidebar_moves_to_the_right_when_configured() {
        let config = LayoutConfig {
            sidebar_position: SidebarPosition::Right,
            ..Default::default()
        };
        let layout = create_layout(screen(), &config, true);
        let sidebar = layout.sidebar.unwrap();
        assert_eq!(layout.transcript.x, 0);
        assert!(sidebar.x > 0);
        assert_eq!(sidebar.width, 25);
    }

    #[test]
    fn hidden_sidebar_gives_main_pane_the_full_width() {
        let layout = create_layout(screen(), &LayoutConfig::default(), false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.transcript.width, 100);
        assert_eq!(layout.compose.width, 100);
    }

    #[test]
    fn compose_sits_below_transcript_at_fixed_height() {
        let layout = create_layout(screen(), &LayoutConfig::default(), true);
        assert_eq!(layout.compose.height, COMPOSE_HEIGHT);
        assert_eq!(
            layout.compose.y,
            layout.transcript.y + layout.transcript.height
        );
    }
}
