//! slide-2048 (workspace facade crate).
//!
//! Re-exports the member crates as `slide_2048::{core, input, types}` and hosts
//! the headless [`autoplay`] runner used by the `slide-2048` binary.

pub mod autoplay;

pub use slide_2048_core as core;
pub use slide_2048_input as input;
pub use slide_2048_types as types;
