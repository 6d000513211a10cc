//! Play-field and tuning constants.
//!
//! Everything is expressed in logical units of the 800×600 play field; the
//! terminal back-end scales them onto whatever grid it has.

use std::time::Duration;

use crate::entities::Rgb;

// ── Play field ────────────────────────────────────────────────────────────────

pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

/// Target loop rate.
pub const FPS: u32 = 60;
pub const FRAME: Duration = Duration::from_micros(1_000_000 / FPS as u64);

// ── Colours ───────────────────────────────────────────────────────────────────

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const TEXT_COLOR: Rgb = Rgb(255, 255, 255);
pub const PLAYER_COLOR: Rgb = Rgb(0, 0, 255);
pub const ENEMY_COLOR: Rgb = Rgb(255, 0, 0);

// ── Entities ──────────────────────────────────────────────────────────────────

pub const PLAYER_RADIUS: f32 = 25.0;
/// Horizontal distance covered by one move command.
pub const PLAYER_SPEED: f32 = 10.0;
pub const ENEMY_RADIUS: f32 = 25.0;

// ── Scoring & ramp-up ─────────────────────────────────────────────────────────

/// Flat score for every spawn batch, whatever its size.
pub const SCORE_PER_SPAWN: u32 = 100;
/// Added to the engine's enemy speed after each batch.
pub const SPEED_STEP: f32 = 0.1;
/// Hard mode grows its batch size once per this many frames of play.
pub const HARD_GROWTH_PERIOD: u64 = 300;
pub const MAX_SPAWN_COUNT: u32 = 4;

/// Bounds of the play field that entities are clamped and culled against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
