//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values for the
//! main loop, plus the two shell-level controls (quit, restart) that never
//! reach the engine.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, wants_restart};
