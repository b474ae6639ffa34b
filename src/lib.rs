//! monochat library crate.
//!
//! This library provides the core functionality for monochat, including:
//! - In-memory chat session and message state
//! - Application state and intent handling
//! - Terminal UI components

pub mod app;
pub mod chat;
pub mod config;
pub mod event_loop;
pub mod handlers;
pub mod input;
pub mod ui;
