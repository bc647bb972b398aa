//! Starfield: twinkling stars and periodic shooting stars behind the slides.
//!
//! Star positions are fractions of the painted area, so one field survives
//! terminal resizes. Every instance owns its own RNG draw; passing a seed
//! makes the layout reproducible.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::canvas::{Canvas, Rect, Tone};
use super::charset::Glyphs;

/// Length of one shooting-star flight.
pub const SHOOTING_STAR_FLIGHT: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position, 0.0..1.0 of the area width.
    pub x: f32,
    /// Vertical position, 0.0..1.0 of the area height.
    pub y: f32,
    /// Apparent size, 0.5..3.0.
    pub size: f32,
    /// Twinkle period in seconds, 2.0..6.0.
    pub period: f32,
    /// Seconds before the first twinkle, 0.0..5.0.
    pub delay: f32,
    /// Peak opacity, 0.5..1.0.
    pub brightness: f32,
}

impl Star {
    /// Opacity at `t` seconds: a triangle wave between 30% and 100% of
    /// `brightness`, held at the low point until `delay` has passed.
    pub fn opacity(&self, t: f32) -> f32 {
        let low = self.brightness * 0.3;
        if t < self.delay || self.period <= 0.0 {
            return low;
        }
        let phase = ((t - self.delay) % self.period) / self.period;
        let wave = 1.0 - (2.0 * phase - 1.0).abs();
        low + (self.brightness - low) * wave
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    /// Start position as fractions of the area.
    pub start_x: f32,
    pub start_y: f32,
    /// Streak angle in degrees, 15..45.
    pub angle: f32,
    /// Pause between flights in seconds.
    pub repeat_delay: f32,
}

impl ShootingStar {
    /// Flight progress 0.0..=1.0 at `t` seconds, or `None` between flights.
    pub fn progress(&self, t: f32) -> Option<f32> {
        let flight = SHOOTING_STAR_FLIGHT.as_secs_f32();
        let cycle = flight + self.repeat_delay;
        let into = t % cycle;
        (into <= flight).then(|| into / flight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(star_count: usize, shooting_count: usize, rng: &mut R) -> Self {
        let stars = (0..star_count)
            .map(|_| Star {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(0.0..1.0),
                size: rng.random_range(0.5..3.0),
                period: rng.random_range(2.0..6.0),
                delay: rng.random_range(0.0..5.0),
                brightness: rng.random_range(0.5..1.0),
            })
            .collect();
        let shooting = (0..shooting_count)
            .map(|i| ShootingStar {
                start_x: rng.random_range(0.1..0.9),
                start_y: rng.random_range(0.0..0.3),
                angle: rng.random_range(15.0..45.0),
                repeat_delay: rng.random_range(0.0..15.0) + i as f32 * 8.0,
            })
            .collect();
        Self { stars, shooting }
    }

    /// Reproducible field for a given seed.
    pub fn seeded(star_count: usize, shooting_count: usize, seed: u64) -> Self {
        Self::generate(star_count, shooting_count, &mut StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, otherwise drawn from OS entropy.
    pub fn with_seed(star_count: usize, shooting_count: usize, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(star_count, shooting_count, seed),
            None => Self::generate(star_count, shooting_count, &mut StdRng::from_os_rng()),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }

    /// Paint the field into `area` as it looks `elapsed` after mount.
    pub fn paint(&self, canvas: &mut Canvas, area: Rect, elapsed: Duration) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let glyphs = Glyphs::for_charset(canvas.charset);
        let t = elapsed.as_secs_f32();

        for star in &self.stars {
            let (col, row) = place(area, star.x, star.y);
            let opacity = star.opacity(t);
            let (ch, tone) = if opacity > 0.75 && star.size >= 2.0 {
                (glyphs.star_bright, Tone::Bright)
            } else if opacity > 0.45 {
                (glyphs.star_dim, Tone::Plain)
            } else {
                (glyphs.star_dim, Tone::Dim)
            };
            canvas.set(col, row, ch, tone);
        }

        for streak in &self.shooting {
            let Some(p) = streak.progress(t) else {
                continue;
            };
            // Fade in over the first tenth of the flight and out over the last.
            if !(0.1..=0.9).contains(&p) {
                continue;
            }
            let x = streak.start_x + 0.25 * p;
            let y = streak.start_y + 0.3 * p;
            let (col, row) = place(area, x.min(0.999), y.min(0.999));
            canvas.set(col, row, glyphs.shooting_head, Tone::Bright);
            // Tail trails up and to the left, sloped by the streak angle.
            // Terminal cells are about twice as tall as they are wide.
            let slope = streak.angle.to_radians().tan() * 0.5;
            for k in 1..=2usize {
                let rise = (k as f32 * slope).round() as usize;
                if let (Some(c), Some(r)) = (col.checked_sub(k), row.checked_sub(rise)) {
                    if area.contains(c, r) {
                        canvas.set(c, r, glyphs.shooting_tail, Tone::Dim);
                    }
                }
            }
        }
    }
}

fn place(area: Rect, fx: f32, fy: f32) -> (usize, usize) {
    let col = ((fx * area.width as f32) as usize).min(area.width - 1);
    let row = ((fy * area.height as f32) as usize).min(area.height - 1);
    (area.x + col, area.y + row)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_starfield.rs"]
mod tests;
