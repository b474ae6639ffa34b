//! Application state and intent handling for monochat.
//!
//! `App` owns the session store and every piece of presentation-side state.
//! Each intent method is a synchronous state transition that runs to
//! completion before the next event is processed; there is no background
//! work anywhere.

mod state;

use anyhow::Result;
use ratatui::widgets::ListState;

use crate::chat::SessionStore;
use crate::config::Config;
use crate::input::ComposeState;

pub use state::{Focus, TranscriptScroll, NARROW_WIDTH_COLS};

/// Application state
pub struct App {
    /// All chat sessions and the active id
    pub store: SessionStore,
    /// Application configuration (layout preferences)
    pub config: Config,
    /// Which pane receives keys
    pub focus: Focus,
    /// Sidebar cursor over the session list
    pub sidebar_list: ListState,
    /// Whether the sidebar is currently shown
    pub sidebar_visible: bool,
    /// Compose input buffer
    pub compose: ComposeState,
    /// Transcript scroll position
    pub transcript_scroll: TranscriptScroll,
    /// Whether the help overlay is open (toggled by '?')
    pub help_open: bool,
    /// Terminal size (cols, rows)
    pub term_size: (u16, u16),
    /// Should quit
    pub should_quit: bool,
    /// Set when the user collapses the sidebar explicitly, so a resize back
    /// to a wide terminal does not re-open it against their wishes
    user_collapsed_sidebar: bool,
}

impl App {
    /// Create a new application instance from the on-disk configuration
    pub fn new() -> Result<Self> {
        // Use defaults when no config file exists or it fails to parse
        let mut config = Config::load().unwrap_or_default();
        config.layout.validate();
        Ok(Self::with_config(config))
    }

    /// Create an application instance from an explicit configuration,
    /// without touching the filesystem.
    pub fn with_config(config: Config) -> Self {
        let sidebar_visible = config.layout.sidebar_visible;
        let mut sidebar_list = ListState::default();
        sidebar_list.select(Some(0));

        Self {
            store: SessionStore::new(),
            config,
            focus: Focus::default(),
            sidebar_list,
            sidebar_visible,
            compose: ComposeState::new(),
            transcript_scroll: TranscriptScroll::default(),
            help_open: false,
            term_size: (80, 24),
            should_quit: false,
            user_collapsed_sidebar: !sidebar_visible,
        }
    }

    /// Whether the terminal is too narrow to keep the sidebar open.
    pub fn is_narrow(&self) -> bool {
        self.term_size.0 < NARROW_WIDTH_COLS
    }

    /// Id of the session under the sidebar cursor, if any.
    pub fn session_under_cursor(&self) -> Option<&str> {
        let idx = self.sidebar_list.selected()?;
        self.store.sessions().get(idx).map(|s| s.id.as_str())
    }

    /// Move the sidebar cursor to the active session.
    pub fn sync_sidebar_to_active(&mut self) {
        self.sidebar_list.select(Some(self.store.active_position()));
    }

    /// Start a new chat and focus the compose box.
    pub fn new_chat(&mut self) {
        self.store.new_chat();
        self.after_session_switch();
    }

    /// Select the session under the sidebar cursor.
    pub fn select_under_cursor(&mut self) {
        let Some(id) = self.session_under_cursor().map(str::to_string) else {
            return;
        };
        self.store.select(&id);
        self.after_session_switch();
    }

    /// Delete the session under the sidebar cursor. The store repairs the
    /// active id; the cursor follows it.
    pub fn delete_under_cursor(&mut self) {
        let Some(id) = self.session_under_cursor().map(str::to_string) else {
            return;
        };
        self.store.delete(&id);
        self.sync_sidebar_to_active();
        self.transcript_scroll.snap_to_bottom();
    }

    /// Send the composed message to the active session. A blank buffer is
    /// a rejected intent: nothing changes.
    pub fn send_message(&mut self) {
        if self.compose.is_blank() {
            return;
        }
        let content = self.compose.take();
        self.store.append_user_message(&content);
        self.transcript_scroll.snap_to_bottom();
        self.sync_sidebar_to_active();
    }

    /// Move the sidebar cursor down one session.
    pub fn sidebar_cursor_down(&mut self) {
        let last = self.store.len().saturating_sub(1);
        let next = match self.sidebar_list.selected() {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        };
        self.sidebar_list.select(Some(next));
    }

    /// Move the sidebar cursor up one session.
    pub fn sidebar_cursor_up(&mut self) {
        let next = self
            .sidebar_list
            .selected()
            .map_or(0, |idx| idx.saturating_sub(1));
        self.sidebar_list.select(Some(next));
    }

    /// Jump the sidebar cursor to the first session.
    pub fn sidebar_cursor_first(&mut self) {
        self.sidebar_list.select(Some(0));
    }

    /// Jump the sidebar cursor to the last session.
    pub fn sidebar_cursor_last(&mut self) {
        self.sidebar_list
            .select(Some(self.store.len().saturating_sub(1)));
    }

    /// Move the sidebar to the other side of the screen.
    pub fn toggle_sidebar_position(&mut self) {
        self.config.layout.sidebar_position = self.config.layout.sidebar_position.toggle();
    }

    /// Toggle sidebar visibility as an explicit user preference.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
        self.user_collapsed_sidebar = !self.sidebar_visible;
        self.config.layout.sidebar_visible = self.sidebar_visible;
        if !self.sidebar_visible && self.focus == Focus::Sidebar {
            self.focus = Focus::Compose;
        }
    }

    /// Switch keyboard focus to the other pane. Focusing a hidden sidebar
    /// re-opens it.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        if self.focus == Focus::Sidebar && !self.sidebar_visible {
            self.sidebar_visible = true;
        }
    }

    /// Focus the sidebar, re-opening it if hidden.
    pub fn focus_sidebar(&mut self) {
        self.sidebar_visible = true;
        self.focus = Focus::Sidebar;
        self.sync_sidebar_to_active();
    }

    /// Focus the compose box.
    pub fn focus_compose(&mut self) {
        self.focus = Focus::Compose;
    }

    /// Handle a terminal resize: below [`NARROW_WIDTH_COLS`] the sidebar
    /// auto-hides; back at full width it re-opens unless the user collapsed
    /// it explicitly.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.term_size = (width, height);
        if self.is_narrow() {
            if self.sidebar_visible {
                self.sidebar_visible = false;
                if self.focus == Focus::Sidebar {
                    self.focus = Focus::Compose;
                }
            }
        } else {
            self.sidebar_visible = !self.user_collapsed_sidebar;
        }
    }

    /// Shared tail of every intent that switches the displayed session:
    /// snap the transcript to the bottom, sync the cursor, and on a narrow
    /// terminal close the sidebar drawer and go straight to composing.
    fn after_session_switch(&mut self) {
        self.transcript_scroll.snap_to_bottom();
        self.sync_sidebar_to_active();
        if self.is_narrow() {
            self.sidebar_visible = false;
        }
        self.focus = Focus::Compose;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;

    fn test_app() -> App {
        let mut app = App::with_config(Config::default());
        app.term_size = (120, 40);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.compose.insert_char(c);
        }
    }

    #[test]
    fn send_message_appends_to_active_session_and_clears_compose() {
        let mut app = test_app();
        type_text(&mut app, "Hi");
        app.send_message();

        let session = app.store.active_session();
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages.last().unwrap().role, Role::User);
        assert_eq!(session.messages.last().unwrap().content, "Hi");
        assert_eq!(session.title, "Hi");
        assert_eq!(app.compose.text(), "");
    }

    #[test]
    fn send_with_blank_compose_changes_nothing() {
        let mut app = test_app();
        type_text(&mut app, "   ");
        app.send_message();
        assert_eq!(app.store.active_session().messages.len(), 1);
        // The rejected intent leaves the buffer alone
        assert_eq!(app.compose.text(), "   ");
    }

    #[test]
    fn new_chat_focuses_compose_and_selects_new_session() {
        let mut app = test_app();
        app.focus = Focus::Sidebar;
        app.new_chat();

        assert_eq!(app.focus, Focus::Compose);
        assert_eq!(app.sidebar_list.selected(), Some(0));
        assert_eq!(app.store.len(), 2);
        assert!(app.store.active_session().messages.is_empty());
    }

    #[test]
    fn select_under_cursor_activates_that_session() {
        let mut app = test_app();
        app.new_chat();
        app.focus_sidebar();
        app.sidebar_cursor_down();
        app.select_under_cursor();

        assert_eq!(app.store.active_position(), 1);
        assert_eq!(app.sidebar_list.selected(), Some(1));
    }

    #[test]
    fn delete_under_cursor_follows_repaired_active_session() {
        let mut app = test_app();
        app.new_chat();
        app.focus_sidebar();
        // Cursor sits on the new active session at index 0; delete it
        app.delete_under_cursor();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.sidebar_list.selected(), Some(0));
        assert_eq!(app.store.active_position(), 0);
    }

    #[test]
    fn delete_last_session_leaves_fresh_session_selected() {
        let mut app = test_app();
        app.focus_sidebar();
        app.delete_under_cursor();

        assert_eq!(app.store.len(), 1);
        assert!(app.store.active_session().messages.is_empty());
        assert_eq!(app.sidebar_list.selected(), Some(0));
    }

    #[test]
    fn sidebar_cursor_clamps_to_session_count() {
        let mut app = test_app();
        app.new_chat();
        app.new_chat();
        app.focus_sidebar();

        app.sidebar_cursor_last();
        assert_eq!(app.sidebar_list.selected(), Some(2));
        app.sidebar_cursor_down();
        assert_eq!(app.sidebar_list.selected(), Some(2));

        app.sidebar_cursor_first();
        app.sidebar_cursor_up();
        assert_eq!(app.sidebar_list.selected(), Some(0));
    }

    #[test]
    fn resize_below_narrow_width_hides_sidebar() {
        let mut app = test_app();
        app.resize(79, 24);
        assert!(!app.sidebar_visible);

        app.resize(120, 24);
        assert!(app.sidebar_visible);
    }

    #[test]
    fn resize_respects_explicit_collapse() {
        let mut app = test_app();
        app.toggle_sidebar();
        assert!(!app.sidebar_visible);

        app.resize(79, 24);
        app.resize(120, 24);
        assert!(!app.sidebar_visible);
    }

    #[test]
    fn narrow_select_closes_sidebar_drawer() {
        let mut app = test_app();
        app.resize(79, 24);
        app.focus_sidebar();
        assert!(app.sidebar_visible);

        app.select_under_cursor();
        assert!(!app.sidebar_visible);
        assert_eq!(app.focus, Focus::Compose);
    }

    #[test]
    fn hiding_sidebar_moves_focus_to_compose() {
        let mut app = test_app();
        app.focus_sidebar();
        app.toggle_sidebar();
        assert_eq!(app.focus, Focus::Compose);
    }

    #[test]
    fn with_config_honors_explicit_layout_preferences() {
        let mut config = Config::default();
        config.layout.sidebar_visible = false;
        let mut app = App::with_config(config);

        assert!(!app.sidebar_visible);
        // The saved preference counts as an explicit collapse
        app.resize(120, 40);
        assert!(!app.sidebar_visible);
    }

    #[test]
    fn toggle_sidebar_position_flips_config() {
        use crate::config::SidebarPosition;

        let mut app = test_app();
        assert_eq!(app.config.layout.sidebar_position, SidebarPosition::Left);
        app.toggle_sidebar_position();
        assert_eq!(app.config.layout.sidebar_position, SidebarPosition::Right);
        app.toggle_sidebar_position();
        assert_eq!(app.config.layout.sidebar_position, SidebarPosition::Left);
    }

    #[test]
    fn toggle_focus_reopens_hidden_sidebar() {
        let mut app = test_app();
        app.toggle_sidebar();
        assert!(!app.sidebar_visible);

        app.toggle_focus();
        assert_eq!(app.focus, Focus::Sidebar);
        assert!(app.sidebar_visible);
    }
}
