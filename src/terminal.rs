//! Interactive terminal runtime.
//!
//! Owns the crossterm session: raw mode, the alternate screen, mouse capture
//! and a hidden cursor, all restored by [`TerminalGuard`] when it drops.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use tracing::{debug, info};

use crate::config::DeckConfig;
use crate::error::Result;
use crate::nav::InputEvent;
use crate::renderers::Frame;
use crate::renderers::canvas::Tone;
use crate::shell::Shell;

/// Restores the terminal on drop, including during a panic unwind.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            ResetColor,
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

fn color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Grey,
        Tone::Dim => Color::DarkGrey,
        Tone::Accent => Color::Cyan,
        Tone::Bright => Color::White,
        Tone::Flame => Color::DarkYellow,
    }
}

/// Queue every row of `frame` and flush once.
fn draw(out: &mut impl Write, frame: &Frame) -> Result<()> {
    let canvas = &frame.canvas;
    for row in 0..canvas.height {
        queue!(out, MoveTo(0, row as u16))?;
        for (tone, text) in canvas.runs(row) {
            if tone == Tone::Bright {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, SetForegroundColor(color(tone)), Print(text))?;
            if tone == Tone::Bright {
                queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            }
        }
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

fn terminal_size() -> Result<(usize, usize)> {
    let (w, h) = terminal::size()?;
    Ok((usize::from(w), usize::from(h)))
}

/// Run the deck until the user quits.
pub fn run(config: DeckConfig) -> Result<()> {
    let tick = config.tick();
    let mut shell = Shell::new(config, Instant::now())?;

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All))?;
    info!("interactive session started");

    let (mut width, mut height) = terminal_size()?;
    while !shell.should_quit() {
        let timeout = shell
            .next_cue_in(Instant::now())
            .map_or(tick, |due| due.min(tick));
        if event::poll(timeout)? {
            let raw = event::read()?;
            if let Some(input) = InputEvent::from_crossterm(&raw) {
                if let InputEvent::Resize { width: w, height: h } = input {
                    width = w;
                    height = h;
                    execute!(stdout, Clear(ClearType::All))?;
                }
                if shell.handle(input, Instant::now()) {
                    debug!(?input, "input handled");
                }
            }
        }
        let now = Instant::now();
        shell.tick(now);
        // The starfield never stops moving, so every tick repaints.
        let frame = shell.frame(width, height, now);
        draw(&mut stdout, &frame)?;
    }

    info!("interactive session ended");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/rust/test_terminal.rs"]
mod tests;
