//! Org chart slide: the visible rows of the org tree as an indented
//! connector tree of cards.
//!
//! The tree is painted into an off-screen canvas as tall as the whole
//! outline, then the slice under the scroll offset is copied into the body
//! area. The shell sizes its scroll region from `content_height` and
//! `body_area`.

use super::canvas::{Canvas, Rect, Tone, truncate};
use super::charset::{Arms, BoxChars, Glyphs};
use super::{Action, RenderContext, SlideRenderer};
use crate::content::ORG_SUBTITLE;
use crate::org::{Expansion, OrgTree, VisibleRow};

/// Rows per card, borders included.
pub const ROW_HEIGHT: usize = 3;
const INDENT: usize = 4;
/// Rows above the scrolling body: title, subtitle, blank.
const HEADER_HEIGHT: usize = 4;
const CARD_MAX_WIDTH: usize = 64;

/// The scrolling part of the slide within `area`. The last row is kept for
/// the "more below" hint.
pub fn body_area(area: Rect) -> Rect {
    let top = HEADER_HEIGHT.min(area.height);
    Rect::new(
        area.x,
        area.y + top,
        area.width,
        area.height.saturating_sub(top + 1),
    )
}

/// Top row of visible row `index`, in outline coordinates.
pub fn row_top(index: usize) -> usize {
    index * ROW_HEIGHT
}

#[derive(Debug, Clone, Copy)]
pub struct OrgChartView<'a> {
    pub tree: &'a OrgTree,
    pub expansion: &'a Expansion,
    /// Member id of the keyboard-focused card.
    pub focus: Option<&'a str>,
    pub scroll_offset: usize,
}

impl<'a> OrgChartView<'a> {
    pub fn rows(&self) -> Vec<VisibleRow<'a>> {
        self.tree.visible_rows(self.expansion)
    }

    /// Height of the full outline in rows.
    pub fn content_height(&self) -> usize {
        self.rows().len() * ROW_HEIGHT
    }
}

impl SlideRenderer for OrgChartView<'_> {
    fn render(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas) {
        let area = ctx.area;
        if area.width < INDENT * 3 || area.height <= HEADER_HEIGHT {
            return;
        }

        let col = canvas.write_centered(area, area.y + 1, "SpaceX Organization", Tone::Bright);
        canvas.write_str(col + 7, area.y + 1, "Organization", Tone::Accent);
        canvas.write_centered(area, area.y + 2, ORG_SUBTITLE, Tone::Dim);

        let body = body_area(area);
        let rows = self.rows();
        let content_height = rows.len() * ROW_HEIGHT;
        let mut outline = Canvas::new(body.width, content_height, canvas.charset);
        for (i, row) in rows.iter().enumerate() {
            let card = self.paint_row(&mut outline, row, row_top(i), body.width);
            self.record_hit(ctx, row, card, body);
        }
        canvas.blit(&outline, self.scroll_offset, body);

        if self.scroll_offset > 0 {
            let hint = format!("{} more", ctx.glyphs.arrow_up);
            canvas.write_str(body.right().saturating_sub(hint.chars().count() + 1), area.y + 3, &hint, Tone::Dim);
        }
        if self.scroll_offset + body.height < content_height {
            let hint = format!("{} more", ctx.glyphs.arrow_down);
            canvas.write_str(body.right().saturating_sub(hint.chars().count() + 1), body.bottom(), &hint, Tone::Dim);
        }
    }
}

impl OrgChartView<'_> {
    /// Paint one card and its connectors at outline row `top`. Returns the
    /// card's rectangle in outline coordinates.
    fn paint_row(&self, outline: &mut Canvas, row: &VisibleRow<'_>, top: usize, width: usize) -> Rect {
        let cs = outline.charset;
        let x = row.depth * INDENT;
        let card = Rect::new(x, top, width.saturating_sub(x).min(CARD_MAX_WIDTH), ROW_HEIGHT);
        let vertical = Arms::VERTICAL.to_char(cs);

        for (j, &rail) in row.rails.iter().enumerate() {
            if rail {
                let c = j * INDENT + 2;
                for dy in 0..ROW_HEIGHT {
                    outline.set_merge(c, top + dy, vertical, Tone::Dim);
                }
            }
        }

        if row.depth > 0 {
            let c = (row.depth - 1) * INDENT + 2;
            outline.set_merge(c, top, vertical, Tone::Dim);
            let elbow = Arms::new(true, !row.last_sibling, false, true).to_char(cs);
            outline.set(c, top + 1, elbow, Tone::Dim);
            outline.hline(top + 1, c + 1, x.saturating_sub(1), Tone::Dim);
            if !row.last_sibling {
                outline.set_merge(c, top + 2, vertical, Tone::Dim);
            }
        }

        let focused = self.focus == Some(row.member.id.as_str());
        let (bc, border_tone) = if focused {
            (BoxChars::heavy(cs), Tone::Accent)
        } else {
            (BoxChars::rounded(cs), Tone::Dim)
        };
        outline.draw_box(card, &bc, border_tone);
        if row.expanded && row.child_count > 0 {
            let tee = Arms::new(false, true, true, true).to_char(cs);
            outline.set(x + 2, card.bottom() - 1, tee, Tone::Dim);
        }

        let glyphs = Glyphs::for_charset(cs);
        let marker = match (row.child_count > 0, row.expanded) {
            (false, _) => glyphs.bullet,
            (true, true) => glyphs.expanded,
            (true, false) => glyphs.collapsed,
        };
        let inner = card.inset(2, 1);
        outline.set(inner.x, inner.y, marker, Tone::Accent);

        let reports = row
            .member
            .report_count
            .map(|n| format!("{n} reports"))
            .unwrap_or_default();
        let text_width = inner.width.saturating_sub(2 + reports.len() + 1);
        let name = truncate(&row.member.name, text_width, glyphs.ellipsis);
        let name_end = outline.write_str(inner.x + 2, inner.y, &name, Tone::Bright);
        let role_width = text_width.saturating_sub(name.chars().count() + 3);
        if role_width > 3 {
            let role = truncate(&row.member.role, role_width, glyphs.ellipsis);
            outline.write_str(name_end, inner.y, &format!(" {} {role}", glyphs.bullet), Tone::Dim);
        }
        if !reports.is_empty() && inner.width > reports.len() {
            outline.write_str(inner.right() - reports.len(), inner.y, &reports, Tone::Dim);
        }
        card
    }

    /// Record a toggle target for the visible part of an expandable card.
    fn record_hit(&self, ctx: &mut RenderContext<'_>, row: &VisibleRow<'_>, card: Rect, body: Rect) {
        if row.child_count == 0 {
            return;
        }
        let view_top = self.scroll_offset;
        let view_bottom = self.scroll_offset + body.height;
        let top = card.y.max(view_top);
        let bottom = card.bottom().min(view_bottom);
        if top >= bottom {
            return;
        }
        let rect = Rect::new(body.x + card.x, body.y + top - view_top, card.width, bottom - top);
        ctx.hit(rect, Action::Toggle(row.member.id.clone()));
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_orgchart.rs"]
mod tests;
