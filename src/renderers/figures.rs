//! Key figures slide: one card per figure, each delivered by a small rocket.
//!
//! A figure's rocket launches on a staggered schedule, touches down on its
//! card slot, and the card is revealed shortly after. The value then counts
//! up from zero.

use std::time::Duration;

use super::canvas::{Canvas, Rect, Tone, wrap};
use super::charset::BoxChars;
use super::{RenderContext, SlideRenderer};
use crate::content::{FIGURES_SUBTITLE, KEY_FIGURES, KeyFigure};
use crate::timeline::Timeline;

const FLIGHT: Duration = Duration::from_millis(1000);
const COUNT_DURATION: Duration = Duration::from_millis(2000);
const COUNT_STEPS: u64 = 60;
const SMOKE_AFTER_REVEAL: Duration = Duration::from_millis(600);

const CARD_HEIGHT: usize = 4;
/// Rows above each card where its rocket lands.
const LANE_HEIGHT: usize = 2;
const CARD_MIN_WIDTH: usize = 22;
const CARD_MAX_WIDTH: usize = 30;
const GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureCue {
    Touchdown(usize),
    Reveal(usize),
}

/// Where one figure is in its landing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigureStage {
    #[default]
    InFlight,
    TouchedDown,
    Revealed,
}

impl FigureStage {
    /// Advance on a cue. Stages only move forward.
    pub fn apply(&mut self, cue: FigureCue) {
        *self = match (cue, *self) {
            (FigureCue::Reveal(_), _) => FigureStage::Revealed,
            (FigureCue::Touchdown(_), FigureStage::InFlight) => FigureStage::TouchedDown,
            (_, stage) => stage,
        };
    }
}

pub fn launch_at(index: usize) -> Duration {
    Duration::from_millis(300 + index as u64 * 250)
}

pub fn touchdown_at(index: usize) -> Duration {
    launch_at(index) + FLIGHT + Duration::from_millis(200)
}

pub fn reveal_at(index: usize) -> Duration {
    touchdown_at(index) + Duration::from_millis(200)
}

/// Touchdown and reveal cues for every key figure.
pub fn timeline() -> Timeline<FigureCue> {
    Timeline::new((0..KEY_FIGURES.len()).flat_map(|i| {
        [
            (touchdown_at(i), FigureCue::Touchdown(i)),
            (reveal_at(i), FigureCue::Reveal(i)),
        ]
    }))
}

/// The counter value `since_reveal` into the count-up. It climbs in
/// `COUNT_STEPS` equal steps and lands exactly on `value`.
pub fn count_up(value: u64, since_reveal: Duration) -> u64 {
    let step_ms = COUNT_DURATION.as_millis() as u64 / COUNT_STEPS;
    let step = (since_reveal.as_millis() as u64 / step_ms.max(1)).min(COUNT_STEPS);
    value * step / COUNT_STEPS
}

/// `13000` → `"13,000"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub struct FiguresView<'a> {
    /// Time since the slide was mounted.
    pub elapsed: Duration,
    pub stages: &'a [FigureStage],
}

impl SlideRenderer for FiguresView<'_> {
    fn render(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas) {
        let area = ctx.area;
        if area.width < CARD_MIN_WIDTH || area.height < 4 {
            return;
        }

        let mut row = area.y + 1;
        let col = canvas.write_centered(area, row, "Key Figures", Tone::Bright);
        canvas.write_str(col + 4, row, "Figures", Tone::Accent);
        row += 2;
        for line in wrap(FIGURES_SUBTITLE, area.width.saturating_sub(4)) {
            canvas.write_centered(area, row, &line, Tone::Dim);
            row += 1;
        }
        row += 1;

        let cols = if area.width >= CARD_MIN_WIDTH * 3 + GAP * 2 {
            3
        } else if area.width >= CARD_MIN_WIDTH * 2 + GAP {
            2
        } else {
            1
        };
        let card_width = ((area.width - GAP * (cols - 1)) / cols).min(CARD_MAX_WIDTH);
        let grid_width = card_width * cols + GAP * (cols - 1);
        let left = area.x + (area.width - grid_width) / 2;
        let slot = LANE_HEIGHT + CARD_HEIGHT;

        for (i, figure) in KEY_FIGURES.iter().enumerate() {
            let x = left + (i % cols) * (card_width + GAP);
            let lane_top = row + (i / cols) * slot;
            let card = Rect::new(x, lane_top + LANE_HEIGHT, card_width, CARD_HEIGHT);
            let stage = self.stages.get(i).copied().unwrap_or_default();
            self.paint_figure(ctx, canvas, i, figure, stage, card);
        }
    }
}

impl FiguresView<'_> {
    fn paint_figure(
        &self,
        ctx: &RenderContext<'_>,
        canvas: &mut Canvas,
        index: usize,
        figure: &KeyFigure,
        stage: FigureStage,
        card: Rect,
    ) {
        let center = card.x + card.width / 2;
        let landed_row = card.y.saturating_sub(1);

        match stage {
            FigureStage::InFlight => {
                let start = launch_at(index);
                if self.elapsed < start {
                    return;
                }
                let p = ((self.elapsed - start).as_secs_f32() / FLIGHT.as_secs_f32()).min(1.0);
                let eased = 1.0 - (1.0 - p) * (1.0 - p);
                let top = ctx.area.y;
                let row = top + (eased * landed_row.saturating_sub(top) as f32).round() as usize;
                paint_rocket(canvas, center, row, true);
            }
            FigureStage::TouchedDown => {
                paint_rocket(canvas, center, landed_row, false);
                paint_smoke(canvas, center, card.y.saturating_sub(1));
            }
            FigureStage::Revealed => {
                canvas.set(center, landed_row, ctx.glyphs.arrow_up, Tone::Plain);
                let since = self.elapsed.saturating_sub(reveal_at(index));
                if since < SMOKE_AFTER_REVEAL {
                    paint_smoke(canvas, center, landed_row);
                }
                canvas.draw_box(card, &BoxChars::rounded(canvas.charset), Tone::Dim);
                let value = format!("{}{}", format_count(count_up(figure.value, since)), figure.suffix);
                canvas.write_centered(card, card.y + 1, &value, Tone::Accent);
                canvas.write_centered(card.inset(1, 0), card.y + 2, figure.label, Tone::Dim);
            }
        }
    }
}

/// Two-row rocket with its nose at `row - 1` and body at `row`.
fn paint_rocket(canvas: &mut Canvas, center: usize, row: usize, thrust: bool) {
    canvas.write_str(center.saturating_sub(1), row.saturating_sub(1), "/\\", Tone::Bright);
    canvas.write_str(center.saturating_sub(1), row, "||", Tone::Bright);
    if thrust {
        canvas.write_str(center.saturating_sub(1), row + 1, "''", Tone::Flame);
    }
}

fn paint_smoke(canvas: &mut Canvas, center: usize, row: usize) {
    canvas.set(center.saturating_sub(3), row, '~', Tone::Dim);
    canvas.set(center + 3, row, '~', Tone::Dim);
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_figures.rs"]
mod tests;
