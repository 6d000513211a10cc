//! Rendering layer — all terminal output lives here.
//!
//! The game draws through two context objects: a `Canvas` for filled shapes
//! and a `TextPainter` for labels. `TerminalSurface` implements both by
//! scaling the 800×600 logical field onto the terminal grid; nothing is
//! written to the terminal until `present` is called.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use glam::Vec2;

use crate::config::{Arena, BACKGROUND};
use crate::entities::{Enemy, Player, Rgb};
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Smallest grid the menu labels fit on.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 15;

const DISC_GLYPH: char = '█';

// ── Drawing contexts ──────────────────────────────────────────────────────────

pub trait Canvas {
    /// Wipe the whole surface to `color`.
    fn clear(&mut self, color: Rgb);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
}

pub trait TextPainter {
    /// Draw `text` centred on `center` and return the area it covers, in
    /// logical units.
    fn draw_text(&mut self, text: &str, center: Vec2, color: Rgb) -> Rect;
}

pub fn draw_player(canvas: &mut impl Canvas, player: &Player) {
    canvas.fill_circle(player.pos, player.radius, player.color);
}

pub fn draw_enemy(canvas: &mut impl Canvas, enemy: &Enemy) {
    canvas.fill_circle(enemy.pos, enemy.radius, enemy.color);
}

// ── Logical ↔ cell mapping ────────────────────────────────────────────────────

/// Maps the logical play field onto a `cols`×`rows` character grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub arena: Arena,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, arena: Arena) -> Result<Self> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(Error::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }
        Ok(Self { cols, rows, arena })
    }

    /// Logical size of one character cell.
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.arena.width / f32::from(self.cols),
            self.arena.height / f32::from(self.rows),
        )
    }

    /// Logical position of the centre of a cell.
    pub fn to_logical(&self, col: u16, row: u16) -> Vec2 {
        (Vec2::new(f32::from(col), f32::from(row)) + 0.5) * self.cell_size()
    }

    /// Cell containing a logical point, or `None` off the grid.
    pub fn to_cell(&self, point: Vec2) -> Option<(u16, u16)> {
        let cell = (point / self.cell_size()).floor();
        let in_grid = cell.x >= 0.0
            && cell.y >= 0.0
            && cell.x < f32::from(self.cols)
            && cell.y < f32::from(self.rows);
        in_grid.then(|| (cell.x as u16, cell.y as u16))
    }
}

// ── Terminal back-end ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    glyph: char,
    fg: Rgb,
    bg: Rgb,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Self { glyph: ' ', fg: bg, bg }
    }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    viewport: Viewport,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        let len = usize::from(viewport.cols) * usize::from(viewport.rows);
        Self {
            out,
            viewport,
            cells: vec![Cell::blank(BACKGROUND); len],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new terminal size. The buffer is blank until the next frame draws.
    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        self.viewport = Viewport::new(cols, rows, self.viewport.arena)?;
        let len = usize::from(cols) * usize::from(rows);
        self.cells = vec![Cell::blank(BACKGROUND); len];
        Ok(())
    }

    /// Glyph currently buffered at a cell.
    pub fn glyph_at(&self, col: u16, row: u16) -> Option<char> {
        self.index(col, row).map(|i| self.cells[i].glyph)
    }

    /// Foreground colour currently buffered at a cell.
    pub fn color_at(&self, col: u16, row: u16) -> Option<Rgb> {
        self.index(col, row).map(|i| self.cells[i].fg)
    }

    /// The text of one buffered row, trailing blanks included.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.viewport.cols)
            .filter_map(|col| self.glyph_at(col, row))
            .collect()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Write the buffered frame to the terminal.
    pub fn present(&mut self) -> Result<()> {
        let cols = usize::from(self.viewport.cols);
        let mut current: Option<(Rgb, Rgb)> = None;

        for (row, line) in self.cells.chunks(cols).enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            for cell in line {
                if current != Some((cell.fg, cell.bg)) {
                    self.out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                    self.out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                    current = Some((cell.fg, cell.bg));
                }
                self.out.queue(Print(cell.glyph))?;
            }
        }

        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.viewport.cols && row < self.viewport.rows)
            .then(|| usize::from(row) * usize::from(self.viewport.cols) + usize::from(col))
    }
}

impl<W: Write> Canvas for TerminalSurface<W> {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Cell::blank(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        let vp = self.viewport;
        let cell = vp.cell_size();
        let min = ((center - radius) / cell).floor().max(Vec2::ZERO);
        let max = ((center + radius) / cell)
            .ceil()
            .min(Vec2::new(f32::from(vp.cols), f32::from(vp.rows)));

        let mut painted = false;
        for row in min.y as u16..max.y as u16 {
            for col in min.x as u16..max.x as u16 {
                if vp.to_logical(col, row).distance(center) <= radius {
                    if let Some(i) = self.index(col, row) {
                        self.cells[i].glyph = DISC_GLYPH;
                        self.cells[i].fg = color;
                        painted = true;
                    }
                }
            }
        }

        // Discs smaller than a cell still show up as one block.
        if !painted {
            if let Some(i) = vp.to_cell(center).and_then(|(c, r)| self.index(c, r)) {
                self.cells[i].glyph = DISC_GLYPH;
                self.cells[i].fg = color;
            }
        }
    }
}

impl<W: Write> TextPainter for TerminalSurface<W> {
    fn draw_text(&mut self, text: &str, center: Vec2, color: Rgb) -> Rect {
        let vp = self.viewport;
        let cell = vp.cell_size();
        let len = text.chars().count() as i32;
        let row = (center.y / cell.y).floor() as i32;
        let first_col = (center.x / cell.x).floor() as i32 - len / 2;

        if row >= 0 {
            for (offset, ch) in text.chars().enumerate() {
                let col = first_col + offset as i32;
                if col < 0 {
                    continue;
                }
                if let Some(i) = self.index(col as u16, row as u16) {
                    self.cells[i].glyph = ch;
                    self.cells[i].fg = color;
                }
            }
        }

        Rect {
            min: Vec2::new(first_col as f32 * cell.x, row as f32 * cell.y),
            max: Vec2::new((first_col + len) as f32 * cell.x, (row + 1) as f32 * cell.y),
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}
