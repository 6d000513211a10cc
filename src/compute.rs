//! The simulation engine.
//!
//! `Game` owns the enemies, score and frame counters of one match and
//! advances them once per frame. All randomness comes through an injected
//! `Rng`, so callers control determinism (tests use a seeded RNG).

use log::debug;
use rand::Rng;

use crate::config::{
    Arena, ENEMY_RADIUS, HARD_GROWTH_PERIOD, MAX_SPAWN_COUNT, SCORE_PER_SPAWN, SPEED_STEP,
};
use crate::difficulty::Profile;
use crate::entities::{Enemy, Level, Player};

#[derive(Clone, Debug)]
pub struct Game {
    pub level: Level,
    pub profile: Profile,
    pub arena: Arena,
    pub score: u32,
    /// Frames since the last spawn batch.
    pub frame_count: u64,
    /// Frames since the match started; never reset.
    pub elapsed_frames: u64,
    pub enemies: Vec<Enemy>,
    /// Current batch size. Only grows on levels whose profile allows it.
    pub spawn_count: u32,
    /// Speed handed to the next enemy spawned.
    pub enemy_speed: f32,
}

impl Game {
    pub fn new(level: Level, arena: Arena) -> Self {
        let profile = Profile::for_level(level);
        Self {
            level,
            profile,
            arena,
            score: 0,
            frame_count: 0,
            elapsed_frames: 0,
            enemies: Vec::new(),
            spawn_count: profile.spawn_count,
            enemy_speed: profile.speed,
        }
    }

    /// Advance the match by one frame. Returns `true` if the player was hit.
    pub fn update(&mut self, player: &Player, rng: &mut impl Rng) -> bool {
        self.frame_count += 1;
        self.elapsed_frames += 1;

        // ── 1. Spawn on interval ──────────────────────────────────────────────
        if self.frame_count >= self.profile.spawn_interval {
            self.spawn_batch(rng);
        }

        // ── 2. Batch growth (counted on elapsed play, not the spawn counter) ──
        if self.profile.grows && self.elapsed_frames % HARD_GROWTH_PERIOD == 0 {
            let grown = (self.spawn_count + 1).min(MAX_SPAWN_COUNT);
            if grown != self.spawn_count {
                debug!("spawn count {} -> {} at frame {}", self.spawn_count, grown, self.elapsed_frames);
                self.spawn_count = grown;
            }
        }

        // ── 3. Fall, dropping enemies that left the field ─────────────────────
        let arena = self.arena;
        self.enemies.retain_mut(|enemy| !enemy.advance(&arena));

        // ── 4. Collision ──────────────────────────────────────────────────────
        self.enemies.iter().any(|enemy| enemy.collides_with(player))
    }

    /// Spawn `spawn_count` enemies along the top edge, award the batch score
    /// and speed up the following batches.
    pub fn spawn_batch(&mut self, rng: &mut impl Rng) {
        for _ in 0..self.spawn_count {
            let x = self.random_spawn_x(rng);
            self.enemies.push(Enemy::spawn(x, self.enemy_speed));
        }
        debug!(
            "spawned {} enemies at speed {:.1}, {} on field",
            self.spawn_count,
            self.enemy_speed,
            self.enemies.len()
        );
        self.score += SCORE_PER_SPAWN;
        self.enemy_speed += SPEED_STEP;
        self.frame_count = 0;
    }

    /// Uniform over every x that keeps a fresh enemy fully on the field.
    fn random_spawn_x(&self, rng: &mut impl Rng) -> f32 {
        let (lo, hi) = (ENEMY_RADIUS, self.arena.width - ENEMY_RADIUS);
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            self.arena.width / 2.0
        }
    }
}
