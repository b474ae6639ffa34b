//! In-memory chat session state: data model and the session store.

mod store;
mod types;

pub use store::SessionStore;
pub use types::{derive_title, ChatSession, Message, Role, TITLE_MAX_CHARS};
