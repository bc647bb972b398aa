//! NavigationController: the slide index and its transition lock.
//!
//! Keyboard, wheel and direct selection all funnel into `request_advance` /
//! `request_go_to`, which accept at most one transition per cooldown window.
//! Requests that arrive while the lock is held are dropped, not queued.
//!
//! Time is passed in explicitly so the state machine is deterministic.

use std::time::{Duration, Instant};

use super::input::Key;
use super::scroll::ScrollRegion;

/// Step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// `Idle(index)` or `Transitioning(from, to)` until the cooldown elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle { index: usize },
    Transitioning { from: usize, to: usize, until: Instant },
}

/// What a wheel event turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The inner region consumed the event and moved.
    ScrolledInner,
    /// The event changed the slide.
    Advanced,
    /// The event was ignored (lock held, range edge, or zero delta).
    Dropped,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    state: NavState,
    slide_count: usize,
    cooldown: Duration,
}

impl NavigationController {
    /// Start idle on slide 0. `slide_count` must be at least 1.
    pub fn new(slide_count: usize, cooldown: Duration) -> Self {
        debug_assert!(slide_count > 0);
        Self {
            state: NavState::Idle { index: 0 },
            slide_count,
            cooldown,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// The slide being shown. During a transition this is already the
    /// destination.
    pub fn current_slide(&self) -> usize {
        match self.state {
            NavState::Idle { index } => index,
            NavState::Transitioning { to, .. } => to,
        }
    }

    /// True strictly before the cooldown deadline.
    pub fn is_transitioning(&self, now: Instant) -> bool {
        matches!(self.state, NavState::Transitioning { until, .. } if now < until)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_slide() > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_slide() + 1 < self.slide_count
    }

    /// Release the lock once the cooldown has elapsed. Returns the index the
    /// controller settled on when a transition completed on this call.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        match self.state {
            NavState::Transitioning { to, until, .. } if now >= until => {
                self.state = NavState::Idle { index: to };
                tracing::trace!(index = to, "transition settled");
                Some(to)
            }
            _ => None,
        }
    }

    /// Move one slide. No-op while locked or at the end of the range.
    pub fn request_advance(&mut self, direction: Direction, now: Instant) -> bool {
        let current = self.current_slide();
        let target = match direction {
            Direction::Next => current.checked_add(1).filter(|&t| t < self.slide_count),
            Direction::Previous => current.checked_sub(1),
        };
        match target {
            Some(target) => self.begin(target, now),
            None => {
                tracing::trace!(?direction, current, "advance ignored: range edge");
                false
            }
        }
    }

    /// Jump to `index`. Ignored while locked, when out of range, or when
    /// already there (a redundant jump does not take the lock).
    pub fn request_go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.slide_count || index == self.current_slide() {
            tracing::trace!(index, "go-to ignored");
            return false;
        }
        self.begin(index, now)
    }

    /// Keyboard always drives slides directly; it never consults an inner
    /// scroll region. Returns whether the slide changed.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> bool {
        match key {
            Key::Down | Key::Right => self.request_advance(Direction::Next, now),
            Key::Up | Key::Left => self.request_advance(Direction::Previous, now),
            Key::Home => self.request_go_to(0, now),
            Key::End => self.request_go_to(self.slide_count - 1, now),
            _ => false,
        }
    }

    /// Arbitrate a wheel event between the active slide's inner scroll
    /// region (if any) and slide navigation.
    ///
    /// While the region can still move toward `delta`, it takes the event.
    /// Only at the matching edge does the wheel change slides.
    pub fn handle_wheel(
        &mut self,
        delta: i32,
        scroll: Option<&mut ScrollRegion>,
        now: Instant,
    ) -> WheelOutcome {
        if delta == 0 {
            return WheelOutcome::Dropped;
        }
        if let Some(region) = scroll {
            if region.is_scrollable() && !region.at_edge_toward(delta) {
                region.scroll_by(delta);
                return WheelOutcome::ScrolledInner;
            }
        }
        let direction = if delta > 0 {
            Direction::Next
        } else {
            Direction::Previous
        };
        if self.request_advance(direction, now) {
            WheelOutcome::Advanced
        } else {
            WheelOutcome::Dropped
        }
    }

    fn begin(&mut self, to: usize, now: Instant) -> bool {
        self.tick(now);
        if let NavState::Transitioning { from, to: pending, .. } = self.state {
            tracing::trace!(from, to = pending, requested = to, "request dropped: transition in flight");
            return false;
        }
        let from = self.current_slide();
        self.state = NavState::Transitioning {
            from,
            to,
            until: now + self.cooldown,
        };
        tracing::debug!(from, to, "slide transition started");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_nav_controller.rs"]
mod tests;
