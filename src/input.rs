//! Input sampling.
//!
//! Terminals deliver discrete key and mouse events; the game wants level
//! state ("is Left held right now?"). `InputSampler` folds the event stream
//! into an `InputState` snapshot once per frame.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
//!   `Repeat` / `Release` events. Once the first `Release` arrives the
//!   sampler trusts them, and a key stays held until its own release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows up as
//!   repeated presses). Keys expire after `HOLD_WINDOW` frames of silence,
//!   which is shorter than any OS repeat interval, so a key stays live while
//!   it keeps generating repeats.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use glam::Vec2;

use crate::display::Viewport;

/// A key counts as held if its last press/repeat arrived within this many
/// frames (≈133 ms at 60 FPS).
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Direction {
    Left,
    Right,
}

/// What the game sees of the player's hands in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Pointer position in logical units.
    pub pointer: Vec2,
    pub primary_pressed: bool,
    pub quit: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: false,
            right: false,
            pointer: Vec2::NEG_ONE,
            primary_pressed: false,
            quit: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct InputSampler {
    /// Frame on which each held direction was last seen.
    key_frame: HashMap<Direction, u64>,
    pointer: Option<Vec2>,
    primary_pressed: bool,
    quit: bool,
    resize: Option<(u16, u16)>,
    frame: u64,
    /// Set by the first `Release` event; disables the hold window.
    reports_release: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame; call before feeding that frame's events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn handle(&mut self, event: &Event, viewport: &Viewport) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, viewport),
            Event::Resize(cols, rows) => self.resize = Some((*cols, *rows)),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind == KeyEventKind::Release {
            self.reports_release = true;
        }
        if key.kind == KeyEventKind::Press {
            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                self.quit = true;
                return;
            }
        }

        let direction = match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,
            _ => return,
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(direction, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&direction);
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, viewport: &Viewport) {
        self.pointer = Some(viewport.to_logical(mouse.column, mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.primary_pressed = true;
            }
            MouseEventKind::Up(MouseButton::Left) => self.primary_pressed = false,
            _ => {}
        }
    }

    fn is_held(&self, direction: Direction) -> bool {
        self.key_frame.get(&direction).is_some_and(|&last| {
            self.reports_release || self.frame.saturating_sub(last) <= HOLD_WINDOW
        })
    }

    /// Level state as of the current frame.
    pub fn snapshot(&self) -> InputState {
        InputState {
            left: self.is_held(Direction::Left),
            right: self.is_held(Direction::Right),
            pointer: self.pointer.unwrap_or(Vec2::NEG_ONE),
            primary_pressed: self.primary_pressed,
            quit: self.quit,
        }
    }

    /// Whether the terminal has shown it sends key releases.
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Most recent terminal size reported since the last call.
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resize.take()
    }
}
