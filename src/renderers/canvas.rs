//! Canvas: a 2D grid of styled character cells.
//!
//! Every slide paints into one canvas per frame. The terminal runtime turns
//! it into colored runs; static rendering flattens it to plain text.

use super::charset::{Arms, BoxChars, CharSet, Glyphs};

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> usize {
        self.x + self.width
    }

    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }

    /// Shrink by `dx` columns and `dy` rows on every side.
    pub fn inset(&self, dx: usize, dy: usize) -> Self {
        let width = self.width.saturating_sub(dx * 2);
        let height = self.height.saturating_sub(dy * 2);
        Self::new(self.x + dx.min(self.width), self.y + dy.min(self.height), width, height)
    }
}

// ─── Tone ────────────────────────────────────────────────────────────────────

/// Semantic color of a cell. The terminal maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Tone {
    #[default]
    Plain,
    /// Secondary text, disabled controls, faint stars.
    Dim,
    /// Brand color: the X in SPACEX, highlighted indicator, focused card.
    Accent,
    /// Headlines and bright stars.
    Bright,
    /// Exhaust and landing effects.
    Flame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    tone: Tone,
    /// Set by every write, including spaces. Untouched cells stay
    /// transparent when blitted.
    opaque: bool,
}

const BLANK: Cell = Cell {
    ch: ' ',
    tone: Tone::Plain,
    opaque: false,
};

// ─── Canvas ───────────────────────────────────────────────────────────────────

/// A 2D character grid used as a painting surface. Writes outside the grid
/// are clipped silently.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![BLANK; width]; height],
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        self.cell(col, row).map_or(' ', |c| c.ch)
    }

    pub fn tone_at(&self, col: usize, row: usize) -> Tone {
        self.cell(col, row).map_or(Tone::Plain, |c| c.tone)
    }

    fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char, tone: Tone) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Cell {
                ch,
                tone,
                opaque: true,
            };
        }
    }

    /// Set a cell, merging junctions when both the old and new characters
    /// are line-drawing characters.
    pub fn set_merge(&mut self, col: usize, row: usize, ch: char, tone: Tone) {
        let merged = match (Arms::from_char(self.get(col, row)), Arms::from_char(ch)) {
            (Some(old), Some(new)) => old.merge(new).to_char(self.charset),
            _ => ch,
        };
        self.set(col, row, merged, tone);
    }

    /// Horizontal line from x1 to x2 (inclusive) at row y.
    pub fn hline(&mut self, y: usize, x1: usize, x2: usize, tone: Tone) {
        let ch = Arms::HORIZONTAL.to_char(self.charset);
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for col in lo..=hi {
            self.set_merge(col, y, ch, tone);
        }
    }

    /// Vertical line from y1 to y2 (inclusive) at column x.
    pub fn vline(&mut self, x: usize, y1: usize, y2: usize, tone: Tone) {
        let ch = Arms::VERTICAL.to_char(self.charset);
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for row in lo..=hi {
            self.set_merge(x, row, ch, tone);
        }
    }

    /// Draw a box with a blank interior. Boxes smaller than 2x2 are skipped.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars, tone: Tone) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        self.clear(rect.inset(1, 1));
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        self.set(x0, y0, bc.top_left, tone);
        self.set(x1, y0, bc.top_right, tone);
        self.set(x0, y1, bc.bottom_left, tone);
        self.set(x1, y1, bc.bottom_right, tone);
        for col in (x0 + 1)..x1 {
            self.set(col, y0, bc.horizontal, tone);
            self.set(col, y1, bc.horizontal, tone);
        }
        for row in (y0 + 1)..y1 {
            self.set(x0, row, bc.vertical, tone);
            self.set(x1, row, bc.vertical, tone);
        }
    }

    /// Blank out a rectangle. Cleared cells are opaque.
    pub fn clear(&mut self, rect: Rect) {
        for row in rect.y..rect.bottom() {
            for col in rect.x..rect.right() {
                self.set(col, row, ' ', Tone::Plain);
            }
        }
    }

    /// Write a string starting at (col, row). Returns the column after the
    /// last character written.
    pub fn write_str(&mut self, col: usize, row: usize, s: &str, tone: Tone) -> usize {
        let mut c = col;
        for ch in s.chars() {
            self.set(c, row, ch, tone);
            c += 1;
        }
        c
    }

    /// Write a string centered within `rect` on `row`. Text wider than the
    /// rect is truncated. Returns the starting column.
    pub fn write_centered(&mut self, rect: Rect, row: usize, s: &str, tone: Tone) -> usize {
        let text = truncate(s, rect.width, Glyphs::for_charset(self.charset).ellipsis);
        let len = text.chars().count();
        let col = rect.x + (rect.width.saturating_sub(len)) / 2;
        self.write_str(col, row, &text, tone);
        col
    }

    /// Copy the written cells of `src` rows `src_y..` into `dest`.
    /// Cells never written are transparent, so a slide can be laid over a
    /// starfield while its own spaces stay solid.
    pub fn blit(&mut self, src: &Canvas, src_y: usize, dest: Rect) {
        for dy in 0..dest.height {
            let Some(row) = src.cells.get(src_y + dy) else {
                break;
            };
            for (dx, cell) in row.iter().take(dest.width).enumerate() {
                if cell.opaque {
                    self.set(dest.x + dx, dest.y + dy, cell.ch, cell.tone);
                }
            }
        }
    }

    /// Plain text, trailing whitespace trimmed per line, trailing blank lines
    /// dropped, always newline-terminated.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().map(|c| c.ch).collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Split one row into runs of equal tone, for colored terminal output.
    pub fn runs(&self, row: usize) -> Vec<(Tone, String)> {
        let mut runs: Vec<(Tone, String)> = Vec::new();
        let Some(cells) = self.cells.get(row) else {
            return runs;
        };
        for cell in cells {
            match runs.last_mut() {
                Some((tone, text)) if *tone == cell.tone => text.push(cell.ch),
                _ => runs.push((cell.tone, cell.ch.to_string())),
            }
        }
        runs
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

// ─── Text helpers ────────────────────────────────────────────────────────────

/// Cut `s` to at most `width` characters, marking the cut with `marker`.
pub fn truncate(s: &str, width: usize, marker: char) -> String {
    let len = s.chars().count();
    if len <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push(marker);
    out
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
