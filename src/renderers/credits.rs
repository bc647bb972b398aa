//! Credits slide: presentation details over a sparse starfield.

use std::time::Duration;

use super::canvas::{Canvas, Rect, Tone, wrap};
use super::charset::BoxChars;
use super::starfield::Starfield;
use super::{RenderContext, SlideRenderer};
use crate::content::{CREDITS, CREDITS_FOOTER, Credit};

/// Stars in the credits backdrop.
pub const CREDITS_STAR_COUNT: usize = 30;

const CARD_MAX_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct CreditsView<'a> {
    pub stars: &'a Starfield,
    pub elapsed: Duration,
}

fn value_lines(credit: &Credit, width: usize) -> Vec<String> {
    let mut lines = wrap(credit.value, width);
    if let Some(note) = credit.note {
        lines.push(format!("({note})"));
    }
    lines
}

impl SlideRenderer for CreditsView<'_> {
    fn render(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas) {
        let area = ctx.area;
        self.stars.paint(canvas, area, self.elapsed);
        if area.width < LABEL_WIDTH + 12 || area.height < 4 {
            return;
        }

        let card_width = area.width.saturating_sub(4).min(CARD_MAX_WIDTH);
        let value_width = card_width - LABEL_WIDTH - 6;
        let cards: Vec<(&Credit, Vec<String>)> = CREDITS
            .iter()
            .map(|c| (c, value_lines(c, value_width)))
            .collect();

        // title, gap, divider, gap, cards, gap, footer
        let cards_height: usize = cards.iter().map(|(_, lines)| lines.len() + 2).sum();
        let block = 4 + cards_height + 2;
        let mut row = area.y + area.height.saturating_sub(block) / 2;

        canvas.write_centered(area, row, "About This Presentation", Tone::Bright);
        row += 2;
        let divider = card_width.min(40);
        let left = area.x + (area.width - divider) / 2;
        canvas.hline(row, left, left + divider - 1, Tone::Accent);
        row += 2;

        let x = area.x + (area.width - card_width) / 2;
        let bc = BoxChars::rounded(canvas.charset);
        for (credit, lines) in &cards {
            let card = Rect::new(x, row, card_width, lines.len() + 2);
            canvas.draw_box(card, &bc, Tone::Dim);
            let label = format!("{:>width$}", credit.label.to_uppercase(), width = LABEL_WIDTH);
            canvas.write_str(x + 2, row + 1, &label, Tone::Dim);
            for (i, line) in lines.iter().enumerate() {
                let tone = if credit.note.is_some() && i + 1 == lines.len() {
                    Tone::Dim
                } else {
                    Tone::Bright
                };
                canvas.write_str(x + 4 + LABEL_WIDTH, row + 1 + i, line, tone);
            }
            row += card.height;
        }

        row += 1;
        canvas.write_centered(area, row, &CREDITS_FOOTER.to_uppercase(), Tone::Dim);
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_credits.rs"]
mod tests;
