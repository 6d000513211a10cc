//! Disc Dodger - dodge the falling discs.
//!
//! Core modules:
//! - `geometry`: circle overlap and text rectangles
//! - `entities`: player and enemy discs
//! - `difficulty`: per-level spawn tuning
//! - `compute`: the per-frame simulation engine
//! - `screen`: menu / playing / game-over state machine
//! - `display` and `input`: the terminal presentation shim

pub mod compute;
pub mod config;
pub mod difficulty;
pub mod display;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod screen;

pub use error::Error;
