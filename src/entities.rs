//! Game entity types — the player disc and the falling enemy discs.

use glam::Vec2;

use crate::config::{
    Arena, ENEMY_COLOR, ENEMY_RADIUS, PLAYER_COLOR, PLAYER_RADIUS, PLAYER_SPEED,
};
use crate::geometry::collides;

/// 24-bit colour, independent of any rendering back-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Horizontal distance per move command.
    pub speed: f32,
}

impl Player {
    /// A player resting on the bottom of `arena`, horizontally centred.
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(arena.width / 2.0, arena.height - 1.5 * PLAYER_RADIUS),
            radius: PLAYER_RADIUS,
            color: PLAYER_COLOR,
            speed: PLAYER_SPEED,
        }
    }

    /// Step left unless that would push the disc past the left wall.
    pub fn move_left(&mut self, arena: &Arena) {
        let x = self.pos.x - self.speed;
        if self.fits(x, arena) {
            self.pos.x = x;
        }
    }

    /// Step right unless that would push the disc past the right wall.
    pub fn move_right(&mut self, arena: &Arena) {
        let x = self.pos.x + self.speed;
        if self.fits(x, arena) {
            self.pos.x = x;
        }
    }

    fn fits(&self, x: f32, arena: &Arena) -> bool {
        x >= self.radius && x <= arena.width - self.radius
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Vertical distance fallen per frame, fixed when the enemy spawns.
    pub speed: f32,
}

impl Enemy {
    /// A fresh enemy whose top edge touches the top of the play field.
    pub fn spawn(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, ENEMY_RADIUS),
            radius: ENEMY_RADIUS,
            color: ENEMY_COLOR,
            speed,
        }
    }

    /// Fall one frame. Returns `true` once the whole disc is below `arena`.
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.pos.y += self.speed;
        self.pos.y - self.radius > arena.height
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        collides(self.pos, self.radius, player.pos, player.radius)
    }
}
