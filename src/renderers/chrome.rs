//! Deck chrome: previous/next arrows, one indicator dot per slide and a
//! status line. Every control records a hit target.

use super::canvas::{Canvas, Rect, Tone};
use super::{Action, RenderContext};

/// Columns reserved on each side for the indicator and arrow rails.
pub const SIDE_MARGIN: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct ChromeView<'a> {
    pub current: usize,
    pub count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub title: &'a str,
}

/// The part of `area` left for the slide once the chrome is drawn.
pub fn content_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(SIDE_MARGIN * 2);
    Rect::new(
        area.x + SIDE_MARGIN.min(area.width),
        area.y,
        width,
        area.height.saturating_sub(1),
    )
}

impl ChromeView<'_> {
    pub fn render(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas) {
        let area = ctx.area;
        if area.width < SIDE_MARGIN * 2 || area.height < 3 {
            return;
        }
        let mid = area.y + area.height.saturating_sub(1) / 2;

        // Arrows on the right rail.
        let arrow_col = area.right() - 3;
        let up_row = mid.saturating_sub(1).max(area.y);
        let down_row = mid + 1;
        let up_tone = if self.can_go_previous { Tone::Bright } else { Tone::Dim };
        let down_tone = if self.can_go_next { Tone::Bright } else { Tone::Dim };
        canvas.set(arrow_col, up_row, ctx.glyphs.arrow_up, up_tone);
        canvas.set(arrow_col, down_row, ctx.glyphs.arrow_down, down_tone);
        if self.can_go_previous {
            ctx.hit(Rect::new(arrow_col - 1, up_row, 3, 1), Action::Previous);
        }
        if self.can_go_next {
            ctx.hit(Rect::new(arrow_col - 1, down_row, 3, 1), Action::Next);
        }

        // Indicators on the left rail, two rows apart, centered.
        let span = (self.count * 2).saturating_sub(1);
        let top = mid.saturating_sub(span / 2).max(area.y);
        for i in 0..self.count {
            let row = top + i * 2;
            let (ch, tone) = if i == self.current {
                (ctx.glyphs.indicator_on, Tone::Accent)
            } else {
                (ctx.glyphs.indicator_off, Tone::Dim)
            };
            canvas.set(area.x + 2, row, ch, tone);
            ctx.hit(Rect::new(area.x + 1, row, 3, 1), Action::GoTo(i));
        }

        // Status line.
        let row = area.bottom() - 1;
        let left = format!(" {}/{} {} {}", self.current + 1, self.count, ctx.glyphs.bullet, self.title);
        canvas.write_str(area.x, row, &left, Tone::Dim);
        let help = format!(
            "{}/{} navigate {b} f fullscreen {b} q quit ",
            ctx.glyphs.arrow_up,
            ctx.glyphs.arrow_down,
            b = ctx.glyphs.bullet
        );
        let help_len = help.chars().count();
        if help_len + left.chars().count() < area.width {
            canvas.write_str(area.right() - help_len, row, &help, Tone::Dim);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_chrome.rs"]
mod tests;
