//! The draw/read/dispatch loop.
//!
//! monochat is purely reactive: there is no background work, so the loop
//! blocks on the next terminal event rather than polling on a tick.

use std::io;

use anyhow::Result;
use crossterm::event::{read, Event};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};

use crate::app::{App, Focus};
use crate::handlers::keyboard::{handle_key_event, KeyAction};
use crate::ui::layout::create_layout;
use crate::ui::{ComposeBox, HelpMenuWidget, Sidebar, Transcript};

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        match read()? {
            Event::Key(key) => match handle_key_event(app, key) {
                KeyAction::Continue => {}
                KeyAction::Quit => return Ok(()),
            },
            Event::Resize(w, h) => {
                app.resize(w, h);
            }
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Render one frame from the current application state.
fn draw_ui(f: &mut Frame, app: &mut App) {
    let layout = create_layout(f.area(), &app.config.layout, app.sidebar_visible);

    if let Some(sidebar_area) = layout.sidebar {
        let sidebar = Sidebar::new(
            app.store.sessions(),
            app.store.active_id(),
            app.focus == Focus::Sidebar,
        );
        f.render_stateful_widget(sidebar, sidebar_area, &mut app.sidebar_list);
    }

    let transcript = Transcript::new(app.store.active_session());
    f.render_stateful_widget(transcript, layout.transcript, &mut app.transcript_scroll);

    let compose = ComposeBox::new(
        app.compose.text(),
        app.compose.cursor(),
        app.focus == Focus::Compose,
    );
    f.render_widget(compose, layout.compose);

    render_hint_bar(f, layout.hint_bar, app);

    if app.help_open {
        let area = HelpMenuWidget::calculate_area(f.area());
        f.render_widget(HelpMenuWidget::new(), area);
    }
}

/// One-line key hints at the bottom, tailored to the focused pane.
fn render_hint_bar(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Sidebar => &[
            ("j/k", "nav"),
            ("Enter", "open"),
            ("n", "new"),
            ("d", "delete"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Focus::Compose => &[
            ("Enter", "send"),
            ("Esc", "sessions"),
            ("Tab", "focus"),
            ("C-b", "sidebar"),
            ("C-c", "quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Paragraph::new(Line::from(spans)).render(area, f.buffer_mut());
}
