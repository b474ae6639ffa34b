//! Event handlers translating terminal input into application intents.

pub mod keyboard;
