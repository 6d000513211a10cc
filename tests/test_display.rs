use disc_dodger::config::{Arena, PLAYER_COLOR, TEXT_COLOR};
use disc_dodger::display::*;
use disc_dodger::entities::{Player, Rgb};
use disc_dodger::Error;

use glam::Vec2;

/// 80×24 grid: each cell covers 10×25 logical units.
fn viewport() -> Viewport {
    Viewport::new(80, 24, Arena::default()).unwrap()
}

fn surface() -> TerminalSurface<Vec<u8>> {
    TerminalSurface::new(Vec::new(), viewport())
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn viewport_rejects_tiny_terminal() {
    let err = Viewport::new(20, 10, Arena::default()).unwrap_err();
    assert!(matches!(err, Error::TerminalTooSmall { cols: 20, rows: 10, .. }));
}

#[test]
fn viewport_maps_cells_both_ways() {
    let vp = viewport();
    assert_eq!(vp.cell_size(), Vec2::new(10.0, 25.0));
    assert_eq!(vp.to_logical(0, 0), Vec2::new(5.0, 12.5));
    assert_eq!(vp.to_cell(Vec2::new(799.0, 599.0)), Some((79, 23)));
    assert_eq!(vp.to_cell(vp.to_logical(40, 12)), Some((40, 12)));
    assert_eq!(vp.to_cell(Vec2::new(800.0, 0.0)), None);
    assert_eq!(vp.to_cell(Vec2::new(-1.0, 0.0)), None);
}

// ── Drawing ───────────────────────────────────────────────────────────────────

#[test]
fn text_is_centred_and_reports_its_rect() {
    let mut s = surface();
    let rect = s.draw_text("Score: 0", Vec2::new(80.0, 50.0), TEXT_COLOR);
    assert_eq!(rect.min, Vec2::new(40.0, 50.0));
    assert_eq!(rect.max, Vec2::new(120.0, 75.0));
    assert_eq!(&s.row_text(2)[4..12], "Score: 0");
    assert_eq!(s.color_at(4, 2), Some(TEXT_COLOR));
}

#[test]
fn text_rect_contains_label_centre() {
    let mut s = surface();
    let center = Vec2::new(400.0, 360.0);
    let rect = s.draw_text("New Game (Hard) !Recommended!", center, TEXT_COLOR);
    assert!(rect.contains(center));
}

#[test]
fn text_off_the_left_edge_is_clipped() {
    let mut s = surface();
    s.draw_text("abcdef", Vec2::new(0.0, 12.5), TEXT_COLOR);
    assert!(s.row_text(0).starts_with("def"));
}

#[test]
fn player_disc_fills_cells_inside_radius() {
    let mut s = surface();
    let mut player = Player::spawn(&Arena::default());
    player.pos = Vec2::new(400.0, 300.0);
    draw_player(&mut s, &player);

    for col in 38..=41 {
        for row in 11..=12 {
            assert_eq!(s.glyph_at(col, row), Some('█'), "cell {col},{row}");
            assert_eq!(s.color_at(col, row), Some(PLAYER_COLOR));
        }
    }
    assert_eq!(s.glyph_at(37, 11), Some(' '));
    assert_eq!(s.glyph_at(39, 10), Some(' '));
}

#[test]
fn tiny_disc_still_shows_one_cell() {
    let mut s = surface();
    s.fill_circle(Vec2::new(1.0, 1.0), 1.0, Rgb(1, 2, 3));
    assert_eq!(s.glyph_at(0, 0), Some('█'));
    assert_eq!(s.color_at(0, 0), Some(Rgb(1, 2, 3)));
}

#[test]
fn disc_below_field_draws_nothing() {
    let mut s = surface();
    s.fill_circle(Vec2::new(400.0, 700.0), 25.0, Rgb(255, 0, 0));
    assert!((0..24).all(|row| s.row_text(row).trim().is_empty()));
}

#[test]
fn clear_wipes_buffer() {
    let mut s = surface();
    s.draw_text("Game Over", Vec2::new(400.0, 250.0), TEXT_COLOR);
    s.clear(Rgb(0, 0, 0));
    assert!(s.row_text(10).trim().is_empty());
}

// ── Output ────────────────────────────────────────────────────────────────────

#[test]
fn present_writes_buffered_text() {
    let mut s = surface();
    s.draw_text("Final Score: 300", Vec2::new(400.0, 300.0), TEXT_COLOR);
    s.present().unwrap();
    let written = String::from_utf8_lossy(s.writer());
    assert!(written.contains("Final Score: 300"));
}

#[test]
fn resize_rejects_tiny_terminal_and_keeps_layout() {
    let mut s = surface();
    assert!(s.resize(10, 5).is_err());
    assert_eq!(s.viewport(), viewport());

    s.resize(100, 30).unwrap();
    assert_eq!(s.viewport().cols, 100);
    assert_eq!(s.row_text(29).chars().count(), 100);
}
