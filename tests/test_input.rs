use disc_dodger::config::Arena;
use disc_dodger::display::Viewport;
use disc_dodger::input::*;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use glam::Vec2;

fn viewport() -> Viewport {
    Viewport::new(80, 24, Arena::default()).unwrap()
}

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn sampler() -> InputSampler {
    let mut s = InputSampler::new();
    s.begin_frame();
    s
}

// ── Keys ──────────────────────────────────────────────────────────────────────

#[test]
fn starts_idle() {
    let state = sampler().snapshot();
    assert_eq!(state, InputState::default());
    assert!(!state.left && !state.right && !state.quit);
}

#[test]
fn press_is_held_until_hold_window_expires() {
    let mut s = sampler();
    s.handle(&key(KeyCode::Left, KeyEventKind::Press), &viewport());
    assert!(s.snapshot().left);

    for _ in 0..HOLD_WINDOW {
        s.begin_frame();
    }
    assert!(s.snapshot().left);

    s.begin_frame();
    assert!(!s.snapshot().left);
}

#[test]
fn repeat_refreshes_hold() {
    let mut s = sampler();
    s.handle(&key(KeyCode::Char('d'), KeyEventKind::Press), &viewport());
    for _ in 0..3 {
        for _ in 0..HOLD_WINDOW {
            s.begin_frame();
        }
        s.handle(&key(KeyCode::Char('d'), KeyEventKind::Repeat), &viewport());
    }
    assert!(s.snapshot().right);
}

#[test]
fn release_drops_key_immediately() {
    let mut s = sampler();
    s.handle(&key(KeyCode::Right, KeyEventKind::Press), &viewport());
    s.handle(&key(KeyCode::Left, KeyEventKind::Press), &viewport());
    s.handle(&key(KeyCode::Right, KeyEventKind::Release), &viewport());
    let state = s.snapshot();
    assert!(!state.right);
    assert!(state.left);
}

#[test]
fn release_reporting_terminal_holds_until_release() {
    let mut s = sampler();
    s.handle(&key(KeyCode::Right, KeyEventKind::Press), &viewport());
    s.handle(&key(KeyCode::Right, KeyEventKind::Release), &viewport());
    assert!(s.reports_release());

    s.handle(&key(KeyCode::Left, KeyEventKind::Press), &viewport());
    for frame in 0..(HOLD_WINDOW * 4) {
        s.begin_frame();
        assert!(s.snapshot().left, "dropped {frame} frames after press");
    }

    s.handle(&key(KeyCode::Left, KeyEventKind::Release), &viewport());
    assert!(!s.snapshot().left);
    s.begin_frame();
    assert!(!s.snapshot().left);
}

#[test]
fn press_only_terminal_keeps_hold_window() {
    let mut s = sampler();
    s.handle(&key(KeyCode::Left, KeyEventKind::Press), &viewport());
    assert!(!s.reports_release());
    for _ in 0..=HOLD_WINDOW {
        s.begin_frame();
    }
    assert!(!s.snapshot().left);
}

#[test]
fn quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
        let mut s = sampler();
        s.handle(&key(code, KeyEventKind::Press), &viewport());
        assert!(s.snapshot().quit, "{code:?}");
    }

    let mut s = sampler();
    s.handle(&key(KeyCode::Char('c'), KeyEventKind::Press), &viewport());
    assert!(!s.snapshot().quit);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    s.handle(&ctrl_c, &viewport());
    assert!(s.snapshot().quit);
}

// ── Mouse ─────────────────────────────────────────────────────────────────────

#[test]
fn mouse_press_and_release() {
    let mut s = sampler();
    s.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 40, 12), &viewport());
    let state = s.snapshot();
    assert!(state.primary_pressed);
    assert_eq!(state.pointer, Vec2::new(405.0, 312.5));

    s.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 40, 12), &viewport());
    assert!(!s.snapshot().primary_pressed);
}

#[test]
fn pointer_follows_movement_and_ignores_other_buttons() {
    let mut s = sampler();
    s.handle(&mouse(MouseEventKind::Moved, 0, 0), &viewport());
    assert_eq!(s.snapshot().pointer, Vec2::new(5.0, 12.5));

    s.handle(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), &viewport());
    let state = s.snapshot();
    assert!(!state.primary_pressed);
    assert_eq!(state.pointer, Vec2::new(15.0, 37.5));
}

#[test]
fn resize_is_reported_once() {
    let mut s = sampler();
    s.handle(&Event::Resize(100, 40), &viewport());
    assert_eq!(s.take_resize(), Some((100, 40)));
    assert_eq!(s.take_resize(), None);
}
