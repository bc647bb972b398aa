//! Renderers: the canvas, glyph sets, decorative layers and one view per slide.

pub mod canvas;
pub mod charset;
pub mod chrome;
pub mod credits;
pub mod figures;
pub mod hero;
pub mod orgchart;
pub mod starfield;

use canvas::{Canvas, Rect};
use charset::{CharSet, Glyphs};

/// What a click on a hit target asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    GoTo(usize),
    /// Expand or collapse the org card with this member id.
    Toggle(String),
}

/// A clickable rectangle recorded while painting a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitTarget {
    pub rect: Rect,
    pub action: Action,
}

/// A painted frame plus the click targets it exposes.
#[derive(Debug, Clone)]
pub struct Frame {
    pub canvas: Canvas,
    pub hits: Vec<HitTarget>,
}

impl Frame {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            canvas: Canvas::new(width, height, charset),
            hits: Vec::new(),
        }
    }

    /// The topmost target under a cell. Later targets are painted over
    /// earlier ones, so the search runs back to front.
    pub fn hit_at(&self, column: usize, row: usize) -> Option<&Action> {
        self.hits
            .iter()
            .rev()
            .find(|h| h.rect.contains(column, row))
            .map(|h| &h.action)
    }
}

/// Per-frame inputs shared by every slide view.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// The region the slide may paint into.
    pub area: Rect,
    pub glyphs: Glyphs,
    pub hits: &'a mut Vec<HitTarget>,
}

impl<'a> RenderContext<'a> {
    pub fn new(area: Rect, charset: CharSet, hits: &'a mut Vec<HitTarget>) -> Self {
        Self {
            area,
            glyphs: Glyphs::for_charset(charset),
            hits,
        }
    }

    pub fn hit(&mut self, rect: Rect, action: Action) {
        self.hits.push(HitTarget { rect, action });
    }
}

/// One slide's view. Views are cheap snapshots of shell state built per frame.
pub trait SlideRenderer {
    fn render(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas);
}
