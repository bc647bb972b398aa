//! Hero slide: the SPACEX title over three scripted scenes.
//!
//! The scenes advance through four phases driven by the hero timeline:
//! a lunar landing at the bottom left, a Starship landing on Mars at the
//! bottom right, and an asteroid deflection at the top right. The copy block
//! keeps its layout from the first frame so later beats do not shift it.

use std::time::Duration;

use super::canvas::{Canvas, Rect, Tone, wrap};
use super::charset::BoxChars;
use super::{RenderContext, SlideRenderer};
use crate::content::{HERO_DESCRIPTION, HERO_FACTS, HERO_TAGLINE, NAVIGATION_HINT};
use crate::timeline::Timeline;

/// The lunar module finishes its descent at this offset.
pub const LUNAR_TOUCHDOWN: Duration = Duration::from_millis(2500);

/// Phase changes, as `(offset, phase)`.
pub const PHASE_CUES: [(Duration, u8); 4] = [
    (Duration::from_millis(3000), 1),
    (Duration::from_millis(5500), 2),
    (Duration::from_millis(9000), 3),
    (Duration::from_millis(11500), 4),
];

/// The last phase. A static render shows the slide in this state.
pub const FINAL_PHASE: u8 = 4;

const TEXT_MAX_WIDTH: usize = 64;
const LOGO: &str = "S P A C E X";

/// Timeline that yields each new phase number at its offset.
pub fn timeline() -> Timeline<u8> {
    Timeline::new(PHASE_CUES)
}

fn offset_of(phase: u8) -> Duration {
    PHASE_CUES
        .iter()
        .find(|(_, p)| *p == phase)
        .map(|(offset, _)| *offset)
        .unwrap_or_default()
}

/// Ease-out progress of `elapsed` through `start..start + span`, in 0.0..=1.0.
fn progress(elapsed: Duration, start: Duration, span: Duration) -> f32 {
    let into = elapsed.saturating_sub(start).as_secs_f32();
    let p = (into / span.as_secs_f32()).clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

#[derive(Debug, Clone, Copy)]
pub struct HeroView {
    pub phase: u8,
    /// Time since the slide was mounted.
    pub elapsed: Duration,
}

impl SlideRenderer for HeroView {
    fn render(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas) {
        let area = ctx.area;
        if area.width < LOGO.len() || area.height < 3 {
            return;
        }
        self.paint_moon(canvas, area);
        if self.phase >= 2 {
            self.paint_mars(canvas, area);
        }
        if self.phase >= 4 {
            self.paint_asteroid(canvas, area);
        }
        self.paint_copy(ctx, canvas);
    }
}

impl HeroView {
    fn surface_row(area: Rect) -> usize {
        area.bottom().saturating_sub(2).max(area.y)
    }

    fn paint_moon(&self, canvas: &mut Canvas, area: Rect) {
        let surface = Self::surface_row(area);
        canvas.write_str(area.x, surface, "._.-~-._.-~-._.-~-._.", Tone::Dim);

        // Lunar module, dropping in from the top during the first beat.
        const LANDER: [&str; 3] = [" _|_ ", "[o_o]", "/   \\"];
        let col = area.x + 8;
        let landed_top = surface.saturating_sub(LANDER.len());
        let drop = landed_top.saturating_sub(area.y) as f32;
        let p = progress(self.elapsed, Duration::ZERO, LUNAR_TOUCHDOWN);
        let top = landed_top - ((1.0 - p) * drop).round() as usize;
        for (i, line) in LANDER.iter().enumerate() {
            canvas.write_str(col, top + i, line, Tone::Bright);
        }
        let dust_from = LUNAR_TOUCHDOWN - Duration::from_millis(500);
        if self.elapsed >= dust_from && self.elapsed < dust_from + Duration::from_millis(1500) {
            canvas.write_str(col.saturating_sub(1), surface, "~ . . ~", Tone::Plain);
        }

        if self.phase >= 1 {
            let pole = area.x + 2;
            canvas.write_str(pole, surface.saturating_sub(3), "|#=", Tone::Plain);
            canvas.set(pole + 1, surface.saturating_sub(3), '#', Tone::Accent);
            canvas.set(pole + 2, surface.saturating_sub(3), '=', Tone::Flame);
            canvas.set(pole, surface.saturating_sub(2), '|', Tone::Plain);
            canvas.set(pole, surface.saturating_sub(1), '|', Tone::Plain);
            canvas.write_str(area.x, area.bottom() - 1, "MOON LANDING", Tone::Dim);
        }
    }

    fn paint_mars(&self, canvas: &mut Canvas, area: Rect) {
        const SCENE_WIDTH: usize = 22;
        const SHIP: [&str; 4] = [" /\\ ", " || ", " || ", "/||\\"];
        let surface = Self::surface_row(area);
        let x0 = area.right().saturating_sub(SCENE_WIDTH).max(area.x);
        canvas.write_str(x0, surface, ".:^:.:::^::.::::^:.:::", Tone::Flame);

        let col = x0 + 9;
        let landed_top = surface.saturating_sub(SHIP.len());
        let descent = if self.phase >= 3 {
            1.0
        } else {
            let start = offset_of(2);
            progress(self.elapsed, start, offset_of(3) - start)
        };
        let top = landed_top - ((1.0 - descent) * landed_top.saturating_sub(area.y) as f32).round() as usize;
        for (i, line) in SHIP.iter().enumerate() {
            canvas.write_str(col, top + i, line, Tone::Bright);
        }

        if self.phase == 2 {
            let flicker = (self.elapsed.as_millis() / 80) % 2 == 0;
            let flame = if flicker { " ** " } else { " '' " };
            canvas.write_str(col, top + SHIP.len(), flame, Tone::Flame);
        }
        if self.phase >= 3 {
            let landed = offset_of(3);
            if self.elapsed < landed + Duration::from_millis(1500) {
                canvas.write_str(col.saturating_sub(2), surface, "~~ ~~ ~~", Tone::Flame);
            }
            let label = "MARS COLONY";
            canvas.write_str(area.right().saturating_sub(label.len()), area.bottom() - 1, label, Tone::Dim);
        }
    }

    fn paint_asteroid(&self, canvas: &mut Canvas, area: Rect) {
        const ROCK: [&str; 3] = ["  .-\"\"-.", " ( o  . )", "  '-..-'"];
        let x0 = area.right().saturating_sub(26).max(area.x);
        let y0 = area.y;
        for (i, line) in ROCK.iter().enumerate() {
            canvas.write_str(x0 + 8, y0 + i, line, Tone::Plain);
        }

        let start = offset_of(4);
        let impact = start + Duration::from_millis(1000);
        let clear = impact + Duration::from_millis(1500);
        if self.elapsed < impact {
            // The impactor closes in from the left.
            let p = progress(self.elapsed, start, impact - start);
            let col = x0 + (p * 8.0).round() as usize;
            canvas.write_str(col, y0 + 1, "=>", Tone::Bright);
        } else if self.elapsed < clear {
            canvas.write_str(x0 + 7, y0, "\\|/", Tone::Flame);
            canvas.write_str(x0 + 7, y0 + 1, "-*-", Tone::Flame);
            canvas.write_str(x0 + 7, y0 + 2, "/|\\", Tone::Flame);
        } else {
            for (dx, dy) in [(4, 0), (6, 2), (2, 1), (18, 0), (19, 2)] {
                canvas.set(x0 + dx, y0 + dy, '.', Tone::Dim);
            }
        }
        canvas.write_str(x0 + 7, y0 + 3, "ASTEROID DEFENSE", Tone::Dim);
    }

    fn paint_copy(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas) {
        let area = ctx.area;
        let width = area.width.saturating_sub(4).min(TEXT_MAX_WIDTH);
        let tagline = wrap(HERO_TAGLINE, width);
        let description = wrap(HERO_DESCRIPTION, width);
        let cards = FactCards::layout(area.width);

        // logo, gap, tagline, gap, description, gap, cards
        let block = 1 + 1 + tagline.len() + 1 + description.len() + 1 + cards.height();
        let mut row = area.y + area.height.saturating_sub(block + 3) / 2;

        let col = canvas.write_centered(area, row, LOGO, Tone::Bright);
        canvas.set(col + LOGO.len() - 1, row, 'X', Tone::Accent);
        row += 2;

        if self.phase >= 1 {
            for (i, line) in tagline.iter().enumerate() {
                canvas.write_centered(area, row + i, line, Tone::Plain);
            }
        }
        row += tagline.len() + 1;

        if self.phase >= 3 {
            for (i, line) in description.iter().enumerate() {
                canvas.write_centered(area, row + i, line, Tone::Dim);
            }
            cards.paint(canvas, area, row + description.len() + 1);

            let hint = format!(
                "{}  [{}] [{}]",
                NAVIGATION_HINT.to_uppercase(),
                ctx.glyphs.arrow_up,
                ctx.glyphs.arrow_down
            );
            canvas.write_centered(area, area.bottom() - 1, &hint, Tone::Dim);
        }
    }
}

/// The founding facts as boxed cards, or as plain lines when the row is too
/// narrow for boxes.
enum FactCards {
    Boxed { width: usize },
    Lines,
}

impl FactCards {
    const GAP: usize = 2;

    fn card_width(label: &str, value: &str) -> usize {
        label.len().max(value.len()) + 4
    }

    fn layout(available: usize) -> Self {
        let width: usize = HERO_FACTS
            .iter()
            .map(|(label, value)| Self::card_width(label, value))
            .sum::<usize>()
            + Self::GAP * (HERO_FACTS.len() - 1);
        if width <= available {
            FactCards::Boxed { width }
        } else {
            FactCards::Lines
        }
    }

    fn height(&self) -> usize {
        match self {
            FactCards::Boxed { .. } => 4,
            FactCards::Lines => HERO_FACTS.len(),
        }
    }

    fn paint(&self, canvas: &mut Canvas, area: Rect, row: usize) {
        match *self {
            FactCards::Boxed { width } => {
                let bc = BoxChars::rounded(canvas.charset);
                let mut col = area.x + (area.width - width) / 2;
                for (label, value) in HERO_FACTS {
                    let w = Self::card_width(label, value);
                    canvas.draw_box(Rect::new(col, row, w, 4), &bc, Tone::Dim);
                    canvas.write_str(col + 2, row + 1, &label.to_uppercase(), Tone::Dim);
                    canvas.write_str(col + 2, row + 2, value, Tone::Bright);
                    col += w + Self::GAP;
                }
            }
            FactCards::Lines => {
                for (i, (label, value)) in HERO_FACTS.iter().enumerate() {
                    canvas.write_centered(area, row + i, &format!("{label}: {value}"), Tone::Plain);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_hero.rs"]
mod tests;
