//! launchdeck: a terminal slideshow of SpaceX's history and organization.
//!
//! Public API: [`render_slide`] for static output, [`terminal::run`] for the
//! interactive deck, and [`shell::Shell`] for driving the deck directly.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod nav;
pub mod org;
pub mod renderers;
pub mod shell;
pub mod terminal;
pub mod timeline;

use std::time::Instant;

pub use config::DeckConfig;
pub use content::Slide;
pub use error::{Error, Result};
pub use shell::Shell;

/// Render `slide` with every animation completed, as plain text.
pub fn render_slide(slide: Slide, width: usize, height: usize, config: &DeckConfig) -> Result<String> {
    let now = Instant::now();
    let mut shell = Shell::new(config.clone(), now)?;
    shell.show_settled(slide, now);
    let frame = shell.frame(width, height, now);
    Ok(frame.canvas.render_to_string())
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
