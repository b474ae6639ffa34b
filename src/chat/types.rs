//! Data model for chat sessions and messages.

use chrono::Utc;
use uuid::Uuid;

/// Maximum number of characters a derived session title keeps before truncation.
pub const TITLE_MAX_CHARS: usize = 30;

/// Default title for a session before its first user message.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    /// Opaque unique identifier
    pub id: String,
    /// Message author
    pub role: Role,
    /// Message text
    pub content: String,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Message {
    /// Create a message with a fresh id and the current timestamp.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// A conversation thread holding messages in chronological order.
///
/// Messages are only ever appended; they are never reordered or removed
/// individually.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Opaque unique identifier
    pub id: String,
    /// Display title shown in the sidebar
    pub title: String,
    /// Messages in insertion (= chronological) order
    pub messages: Vec<Message>,
    /// Creation time, milliseconds since the Unix epoch
    pub created_at: i64,
}

impl ChatSession {
    /// Create an empty session with a fresh id and the default title.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Create the seed session shown on startup, holding a single
    /// assistant welcome message.
    pub fn with_welcome() -> Self {
        let mut session = Self::new();
        session.messages.push(Message::new(
            Role::Assistant,
            "Hello! This is a minimalist chat interface. \
             Type anything to chat with yourself or test the UI.",
        ));
        session
    }

    /// Whether this session still carries its auto-derived default title
    /// slot: no messages, or only the seed/welcome message.
    pub fn awaiting_title(&self) -> bool {
        self.messages.len() <= 1
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a session title from the first user message: the first
/// [`TITLE_MAX_CHARS`] characters, with `...` appended when truncated.
/// Truncation happens on char boundaries, never inside a UTF-8 scalar.
pub fn derive_title(content: &str) -> String {
    let mut chars = content.char_indices().skip(TITLE_MAX_CHARS);
    match chars.next() {
        Some((byte_idx, _)) => format!("{}...", &content[..byte_idx]),
        None => content.to_string(),
    }
}
