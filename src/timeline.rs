//! Timeline: an ordered list of `(offset, effect)` cues driven by one clock.
//!
//! Slides with scripted beats (the hero launch sequence, the key-figure
//! landings) own one timeline each. The shell starts it when the slide is
//! mounted, polls it every tick, and cancels it on unmount.

use std::time::{Duration, Instant};

/// A scheduled effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue<E> {
    pub offset: Duration,
    pub effect: E,
}

#[derive(Debug, Clone)]
pub struct Timeline<E> {
    cues: Vec<Cue<E>>,
    started: Option<Instant>,
    /// Index of the next cue to fire.
    cursor: usize,
}

impl<E: Clone> Timeline<E> {
    /// Cues are ordered by offset; equal offsets keep their given order.
    pub fn new(cues: impl IntoIterator<Item = (Duration, E)>) -> Self {
        let mut cues: Vec<Cue<E>> = cues
            .into_iter()
            .map(|(offset, effect)| Cue { offset, effect })
            .collect();
        cues.sort_by_key(|c| c.offset);
        Self {
            cues,
            started: None,
            cursor: 0,
        }
    }

    /// Arm (or re-arm) the timeline with `now` as offset zero.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.cursor = 0;
    }

    /// Drop every pending cue. Nothing fires until the next `start`.
    pub fn cancel(&mut self) {
        self.started = None;
        self.cursor = self.cues.len();
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.cursor < self.cues.len()
    }

    /// Effects whose offset has been reached since the last poll, in order.
    pub fn poll(&mut self, now: Instant) -> Vec<E> {
        let Some(started) = self.started else {
            return Vec::new();
        };
        let elapsed = now.saturating_duration_since(started);
        let mut fired = Vec::new();
        while let Some(cue) = self.cues.get(self.cursor) {
            if cue.offset > elapsed {
                break;
            }
            fired.push(cue.effect.clone());
            self.cursor += 1;
        }
        fired
    }

    /// Time until the next cue fires, if one is pending.
    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        let started = self.started?;
        let cue = self.cues.get(self.cursor)?;
        Some(cue.offset.saturating_sub(now.saturating_duration_since(started)))
    }

    /// Fire everything at once, as a static render does.
    pub fn finish(&mut self) -> Vec<E> {
        let fired = self.cues[self.cursor.min(self.cues.len())..]
            .iter()
            .map(|c| c.effect.clone())
            .collect();
        self.cursor = self.cues.len();
        fired
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_timeline.rs"]
mod tests;
