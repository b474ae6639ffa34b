//! Keyboard handling: maps key events to App intents based on focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};

/// Action returned from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Process a key event against the current application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyAction {
    // Ignore key release/repeat events (reported on some platforms)
    if key.kind != KeyEventKind::Press {
        return KeyAction::Continue;
    }

    // Any key closes the help overlay
    if app.help_open {
        app.help_open = false;
        return KeyAction::Continue;
    }

    // Global bindings, regardless of focus
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return KeyAction::Quit,
            KeyCode::Char('b') => {
                app.toggle_sidebar();
                return KeyAction::Continue;
            }
            _ => {}
        }
    }
    if key.code == KeyCode::Tab {
        app.toggle_focus();
        return KeyAction::Continue;
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Compose => handle_compose_key(app, key),
    }
}

/// Keys while the sidebar session list has focus.
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.sidebar_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.sidebar_cursor_up(),
        KeyCode::Char('g') => app.sidebar_cursor_first(),
        KeyCode::Char('G') => app.sidebar_cursor_last(),
        KeyCode::Enter => app.select_under_cursor(),
        KeyCode::Char('n') => app.new_chat(),
        KeyCode::Char('d') => app.delete_under_cursor(),
        KeyCode::Char('i') => app.focus_compose(),
        KeyCode::Char('p') => app.toggle_sidebar_position(),
        KeyCode::Char('?') => app.help_open = true,
        _ => {}
    }
    KeyAction::Continue
}

/// Keys while the compose input has focus.
fn handle_compose_key(app: &mut App, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => app.send_message(),
        KeyCode::Esc => app.focus_sidebar(),
        KeyCode::Backspace => app.compose.backspace(),
        KeyCode::Delete => app.compose.delete(),
        KeyCode::Left => app.compose.move_left(),
        KeyCode::Right => app.compose.move_right(),
        KeyCode::Home => app.compose.move_home(),
        KeyCode::End => app.compose.move_end(),
        KeyCode::PageUp => app.transcript_scroll.scroll_up(10),
        KeyCode::PageDown => app.transcript_scroll.scroll_down(10),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.compose.insert_char(c);
        }
        _ => {}
    }
    KeyAction::Continue
}
