//! The session store: an owned, single-threaded container for every chat
//! session plus the identifier of the active one.
//!
//! All operations are synchronous and infallible. Invalid intents (empty
//! message text, unknown ids) are absorbed as no-ops rather than surfaced
//! as errors. Every mutating operation ends by restoring the active-id
//! invariant, so the active id always resolves once a call returns.

use super::types::{derive_title, ChatSession, Message, Role};

/// Ordered collection of chat sessions (newest first) with an active id.
///
/// Invariants upheld by every operation:
/// - the collection is never empty
/// - the active id refers to a session present in the collection
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    active_id: String,
}

impl SessionStore {
    /// Create a store seeded with the startup welcome session.
    pub fn new() -> Self {
        let seed = ChatSession::with_welcome();
        let active_id = seed.id.clone();
        Self {
            sessions: vec![seed],
            active_id,
        }
    }

    /// Create a store with a single empty session (no welcome message).
    pub fn empty() -> Self {
        let seed = ChatSession::new();
        let active_id = seed.id.clone();
        Self {
            sessions: vec![seed],
            active_id,
        }
    }

    /// All sessions, newest first.
    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    /// Number of sessions. Always at least 1.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Identifier of the active session.
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// The active session. Falls back to the first session if the active
    /// id were ever stale, per the cooperative-consistency contract.
    pub fn active_session(&self) -> &ChatSession {
        self.sessions
            .iter()
            .find(|s| s.id == self.active_id)
            .unwrap_or(&self.sessions[0])
    }

    /// Position of a session in the collection, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sessions.iter().position(|s| s.id == id)
    }

    /// Position of the active session (0 after repair fallback).
    pub fn active_position(&self) -> usize {
        self.position(&self.active_id).unwrap_or(0)
    }

    /// Start a new chat: prepend a fresh empty session and make it active.
    /// Returns the new session's id.
    pub fn new_chat(&mut self) -> String {
        let session = ChatSession::new();
        let id = session.id.clone();
        self.sessions.insert(0, session);
        self.active_id = id.clone();
        self.ensure_active();
        id
    }

    /// Set the active session. An id not present in the collection is
    /// tolerated: the repair step reassigns to the first session.
    pub fn select(&mut self, id: &str) {
        self.active_id = id.to_string();
        self.ensure_active();
    }

    /// Append a user message to the active session.
    ///
    /// Content that is empty after trimming is a silent no-op. The first
    /// user message into an empty or welcome-only session also sets the
    /// session title. Only the active session is touched.
    pub fn append_user_message(&mut self, content: &str) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }
        self.ensure_active();
        let idx = self.active_position();
        let session = &mut self.sessions[idx];
        if session.awaiting_title() {
            session.title = derive_title(content);
        }
        session.messages.push(Message::new(Role::User, content));
    }

    /// Delete the session with the given id. Unknown ids are a no-op.
    /// Deleting the last session synthesizes a fresh empty one in its
    /// place, so the collection is never empty.
    pub fn delete(&mut self, id: &str) {
        self.sessions.retain(|s| s.id != id);
        if self.sessions.is_empty() {
            let replacement = ChatSession::new();
            self.active_id = replacement.id.clone();
            self.sessions.push(replacement);
        }
        self.ensure_active();
    }

    /// Restore the active-id invariant: if the active id matches no
    /// session, fall back to the first session in the collection.
    fn ensure_active(&mut self) {
        if !self.sessions.iter().any(|s| s.id == self.active_id) {
            self.active_id = self.sessions[0].id.clone();
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
