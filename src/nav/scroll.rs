//! ScrollRegion: an inner scrollable viewport with edge detection.

/// Vertical scroll state of a region, measured in text rows.
///
/// The offset is kept within `[0, content_height - viewport_height]`
/// whenever either height changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRegion {
    offset: usize,
    content_height: usize,
    viewport_height: usize,
}

impl ScrollRegion {
    pub fn new(content_height: usize, viewport_height: usize) -> Self {
        Self {
            offset: 0,
            content_height,
            viewport_height,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// True when the content does not fit and can move at all.
    pub fn is_scrollable(&self) -> bool {
        self.max_offset() > 0
    }

    /// Whether a scroll by `delta` rows would hit the edge it moves toward.
    /// Positive deltas move toward the bottom.
    pub fn at_edge_toward(&self, delta: i32) -> bool {
        if delta > 0 { self.at_bottom() } else { self.at_top() }
    }

    /// Move by `delta` rows, clamped. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let before = self.offset;
        let step = delta.unsigned_abs() as usize;
        self.offset = if delta >= 0 {
            self.offset.saturating_add(step).min(self.max_offset())
        } else {
            self.offset.saturating_sub(step)
        };
        self.offset != before
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    /// Scroll the minimum amount that brings `[top, top + height)` into view.
    pub fn reveal(&mut self, top: usize, height: usize) {
        if top < self.offset {
            self.offset = top;
        } else if top + height > self.offset + self.viewport_height {
            self.scroll_to((top + height).saturating_sub(self.viewport_height));
        }
    }

    pub fn set_content_height(&mut self, height: usize) {
        self.content_height = height;
        self.clamp();
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.clamp();
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_nav_scroll.rs"]
mod tests;
