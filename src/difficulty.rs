//! Difficulty tables.

use crate::entities::Level;

/// Spawn tuning picked once when a match starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    /// Enemies per spawn batch.
    pub spawn_count: u32,
    /// Fall speed of the first batch.
    pub speed: f32,
    /// Frames between spawn batches.
    pub spawn_interval: u64,
    /// Whether the batch size keeps growing during the match.
    pub grows: bool,
}

impl Profile {
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Easy => Self {
                spawn_count: 1,
                speed: 5.0,
                spawn_interval: 120,
                grows: false,
            },
            Level::Medium => Self {
                spawn_count: 1,
                speed: 10.0,
                spawn_interval: 60,
                grows: false,
            },
            Level::Hard => Self {
                spawn_count: 2,
                speed: 10.0,
                spawn_interval: 30,
                grows: true,
            },
        }
    }
}

impl From<Level> for Profile {
    fn from(level: Level) -> Self {
        Self::for_level(level)
    }
}
