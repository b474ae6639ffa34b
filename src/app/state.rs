//! Independent type definitions used by App.

/// Terminal width below which the sidebar auto-hides (columns).
pub const NARROW_WIDTH_COLS: u16 = 80;

/// Which UI pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Sidebar session list has focus
    Sidebar,
    /// Compose input box has focus
    #[default]
    Compose,
}

impl Focus {
    /// Cycle to the other pane
    pub fn toggle(&self) -> Self {
        match self {
            Focus::Sidebar => Focus::Compose,
            Focus::Compose => Focus::Sidebar,
        }
    }
}

/// Scroll state of the transcript pane, measured from the bottom
/// (0 = pinned to the latest message).
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptScroll {
    /// Lines scrolled up from the bottom
    pub offset: usize,
    /// Maximum offset observed at the last render (content minus viewport)
    pub max_offset: usize,
}

impl TranscriptScroll {
    /// Scroll up by `lines`, clamped to the last known content height.
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset);
    }

    /// Scroll down by `lines`, toward the live bottom position.
    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Snap back to the live bottom position.
    pub fn snap_to_bottom(&mut self) {
        self.offset = 0;
    }

    /// Whether the view is pinned to the latest message.
    pub fn at_bottom(&self) -> bool {
        self.offset == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_toggle_cycles_between_panes() {
        assert_eq!(Focus::Sidebar.toggle(), Focus::Compose);
        assert_eq!(Focus::Compose.toggle(), Focus::Sidebar);
    }

    #[test]
    fn scroll_up_clamps_to_max_offset() {
        let mut scroll = TranscriptScroll {
            offset: 0,
            max_offset: 5,
        };
        scroll.scroll_up(3);
        assert_eq!(scroll.offset, 3);
        scroll.scroll_up(10);
        assert_eq!(scroll.offset, 5);
    }

    #[test]
    fn scroll_down_saturates_at_bottom() {
        let mut scroll = TranscriptScroll {
            offset: 2,
            max_offset: 5,
        };
        scroll.scroll_down(10);
        assert_eq!(scroll.offset, 0);
        assert!(scroll.at_bottom());
    }

    #[test]
    fn snap_to_bottom_resets_offset() {
        let mut scroll = TranscriptScroll {
            offset: 4,
            max_offset: 9,
        };
        scroll.snap_to_bottom();
        assert!(scroll.at_bottom());
    }
}
