use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use disc_dodger::config::{Arena, FRAME};
use disc_dodger::display::{TerminalSurface, Viewport};
use disc_dodger::input::InputSampler;
use disc_dodger::screen::App;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames at a fixed rate until the player quits.
///
/// Input is drained without blocking at the top of every frame, so the loop
/// never waits on the terminal; the frame clock only caps the rate.
fn run<W: Write>(surface: &mut TerminalSurface<W>) -> disc_dodger::error::Result<()> {
    let mut rng = thread_rng();
    let mut app = App::new(surface.viewport().arena);
    let mut sampler = InputSampler::new();

    loop {
        let frame_start = Instant::now();
        sampler.begin_frame();

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            sampler.handle(&ev, &surface.viewport());
        }

        if let Some((cols, rows)) = sampler.take_resize() {
            if let Err(e) = surface.resize(cols, rows) {
                warn!("keeping previous layout: {e}");
            }
        }

        let input = sampler.snapshot();
        if input.quit {
            info!("quit requested");
            return Ok(());
        }

        app.frame(&input, surface, &mut rng);
        surface.present()?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Put the terminal into game mode. Returns whether key-release reporting
/// was requested, so teardown knows to pop it.
fn enter_terminal(out: &mut impl Write) -> std::io::Result<bool> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Ask for key-release events; terminals without the kitty protocol fall
    // back to the hold window in `InputSampler`.
    Ok(out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok())
}

/// Undo `enter_terminal`, ignoring failures so every step gets a chance.
fn restore_terminal(out: &mut impl Write, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let viewport = Viewport::new(cols, rows, Arena::default())?;

    let mut out = stdout();
    let keyboard_enhanced = match enter_terminal(&mut out) {
        Ok(enhanced) => enhanced,
        Err(e) => {
            restore_terminal(&mut out, false);
            return Err(e).context("preparing terminal");
        }
    };
    info!("terminal {cols}x{rows}, key release events requested: {keyboard_enhanced}");

    let mut surface = TerminalSurface::new(BufWriter::new(stdout()), viewport);
    let result = run(&mut surface);

    // Always restore the terminal
    restore_terminal(&mut out, keyboard_enhanced);

    result.context("game loop failed")
}
