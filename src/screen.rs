//! Screen state machine: Menu → Playing → GameOver → Menu.
//!
//! Exactly one `Screen` is active. Each frame the active screen's handler
//! draws it, reads the input and returns the screen to show next; a
//! transition therefore takes effect within the frame that triggered it.

use glam::Vec2;
use log::info;
use rand::Rng;

use crate::compute::Game;
use crate::config::{Arena, BACKGROUND, TEXT_COLOR};
use crate::display::{draw_enemy, draw_player, Canvas, TextPainter};
use crate::entities::{Level, Player};
use crate::geometry::Rect;
use crate::input::InputState;

pub const RESTART_LABEL: &str = "Click here to Restart";

#[derive(Clone, Debug)]
pub enum Screen {
    Menu,
    Playing(Game),
    GameOver { level: Level, score: u32 },
}

pub fn menu_label(level: Level) -> &'static str {
    match level {
        Level::Easy => "New Game (Easy)",
        Level::Medium => "New Game (Medium)",
        Level::Hard => "New Game (Hard) !Recommended!",
    }
}

/// Where a level's menu label is centred.
pub fn menu_label_center(level: Level, arena: &Arena) -> Vec2 {
    let offset = match level {
        Level::Easy => -60.0,
        Level::Medium => 0.0,
        Level::Hard => 60.0,
    };
    Vec2::new(arena.width / 2.0, arena.height / 2.0 + offset)
}

pub fn restart_label_center(arena: &Arena) -> Vec2 {
    Vec2::new(arena.width / 2.0, arena.height / 2.0 + 50.0)
}

pub struct App {
    screen: Screen,
    player: Player,
    arena: Arena,
    /// Cleared by a click that changes screens and re-set once the button is
    /// released, so a held press cannot also hit whatever label lies under
    /// the pointer on the next screen.
    click_armed: bool,
}

impl App {
    pub fn new(arena: Arena) -> Self {
        Self {
            screen: Screen::Menu,
            player: Player::spawn(&arena),
            arena,
            click_armed: true,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Run one frame of whichever screen is active.
    pub fn frame<S, R>(&mut self, input: &InputState, surface: &mut S, rng: &mut R)
    where
        S: Canvas + TextPainter,
        R: Rng,
    {
        if !input.primary_pressed {
            self.click_armed = true;
        }
        surface.clear(BACKGROUND);

        let screen = std::mem::replace(&mut self.screen, Screen::Menu);
        self.screen = match screen {
            Screen::Menu => self.menu(input, surface),
            Screen::Playing(game) => self.playing(game, input, surface, rng),
            Screen::GameOver { level, score } => self.game_over(level, score, input, surface),
        };
    }

    fn clicked(&self, rect: &Rect, input: &InputState) -> bool {
        self.click_armed && input.primary_pressed && rect.contains(input.pointer)
    }

    fn menu<S: Canvas + TextPainter>(&mut self, input: &InputState, surface: &mut S) -> Screen {
        let labels = Level::ALL.map(|level| {
            let center = menu_label_center(level, &self.arena);
            (level, surface.draw_text(menu_label(level), center, TEXT_COLOR))
        });

        match labels.iter().find(|(_, rect)| self.clicked(rect, input)) {
            Some(&(level, _)) => {
                info!("starting {level:?} match");
                self.click_armed = false;
                self.player = Player::spawn(&self.arena);
                Screen::Playing(Game::new(level, self.arena))
            }
            None => Screen::Menu,
        }
    }

    fn playing<S, R>(&mut self, mut game: Game, input: &InputState, surface: &mut S, rng: &mut R) -> Screen
    where
        S: Canvas + TextPainter,
        R: Rng,
    {
        if input.left {
            self.player.move_left(&self.arena);
        }
        if input.right {
            self.player.move_right(&self.arena);
        }
        let hit = game.update(&self.player, rng);

        draw_player(surface, &self.player);
        for enemy in &game.enemies {
            draw_enemy(surface, enemy);
        }
        surface.draw_text(&format!("Score: {}", game.score), Vec2::new(80.0, 50.0), TEXT_COLOR);

        if hit {
            info!(
                "hit after {} frames on {:?}, final score {}",
                game.elapsed_frames, game.level, game.score
            );
            Screen::GameOver {
                level: game.level,
                score: game.score,
            }
        } else {
            Screen::Playing(game)
        }
    }

    fn game_over<S: Canvas + TextPainter>(
        &mut self,
        level: Level,
        score: u32,
        input: &InputState,
        surface: &mut S,
    ) -> Screen {
        let center = Vec2::new(self.arena.width / 2.0, self.arena.height / 2.0);
        surface.draw_text("Game Over", center - Vec2::new(0.0, 50.0), TEXT_COLOR);
        surface.draw_text(&format!("Final Score: {score}"), center, TEXT_COLOR);
        let restart = surface.draw_text(RESTART_LABEL, restart_label_center(&self.arena), TEXT_COLOR);

        if self.clicked(&restart, input) {
            info!("back to menu");
            self.click_armed = false;
            Screen::Menu
        } else {
            Screen::GameOver { level, score }
        }
    }
}
