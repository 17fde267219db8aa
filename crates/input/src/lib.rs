//! Direction-request helpers for presentation layers.
//!
//! This crate turns already-captured input into engine requests. It owns no
//! event loop and reads no device: a presentation layer feeds it `crossterm`
//! key events or raw touch coordinates and forwards the resulting
//! [`crate::types::GameAction`] / [`crate::types::Direction`] to the engine.

pub mod map;
pub mod swipe;

pub use slide_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{classify_swipe, SwipeTracker};
