//! Shell: owns the navigation controller, the slide state and the
//! decorative layers, routes input to them and composes frames.
//!
//! The shell mounts whichever slide the controller reports as current. A
//! mount restarts that slide's timeline and resets its transient state;
//! the slide being left has its timeline cancelled.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::DeckConfig;
use crate::content::{KEY_FIGURES, Slide, org_members};
use crate::error::Result;
use crate::nav::{Direction, InputEvent, Key, NavState, NavigationController, ScrollRegion, WheelOutcome};
use crate::org::{Expansion, OrgTree};
use crate::renderers::canvas::{Canvas, Rect};
use crate::renderers::charset::CharSet;
use crate::renderers::chrome::{self, ChromeView};
use crate::renderers::credits::{CREDITS_STAR_COUNT, CreditsView};
use crate::renderers::figures::{self, FigureCue, FigureStage, FiguresView};
use crate::renderers::hero::{self, HeroView};
use crate::renderers::orgchart::{self, OrgChartView};
use crate::renderers::starfield::Starfield;
use crate::renderers::{Action, Frame, HitTarget, RenderContext, SlideRenderer};
use crate::timeline::Timeline;

/// Elapsed time reported to views once animations are settled. Every
/// scripted beat has finished well before this.
const SETTLED_ELAPSED: Duration = Duration::from_secs(20);

/// Rows a slide slides up from while its transition runs.
const ENTER_OFFSET_ROWS: f32 = 3.0;

/// Mixed into the seed for the credits backdrop so it differs from the
/// main field.
const CREDITS_SEED_SALT: u64 = 0x5EED_C4ED_175;

const DEFAULT_SIZE: (usize, usize) = (80, 24);

// ─── Fullscreen ──────────────────────────────────────────────────────────────

/// Platform hook for entering and leaving fullscreen.
pub trait FullscreenToggle {
    fn set_fullscreen(&mut self, on: bool) -> Result<()>;
}

/// Fullscreen that only hides the deck chrome.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChromeOnly;

impl FullscreenToggle for ChromeOnly {
    fn set_fullscreen(&mut self, _on: bool) -> Result<()> {
        Ok(())
    }
}

// ─── Shell ───────────────────────────────────────────────────────────────────

pub struct Shell {
    config: DeckConfig,
    charset: CharSet,
    nav: NavigationController,
    started: Instant,

    mounted: Slide,
    mounted_at: Instant,
    /// Animations are complete and time no longer moves the views.
    settled: bool,

    hero_timeline: Timeline<u8>,
    hero_phase: u8,
    figures_timeline: Timeline<FigureCue>,
    figure_stages: Vec<FigureStage>,

    org: OrgTree,
    expansion: Expansion,
    scroll: ScrollRegion,
    focus: Option<String>,

    background: Starfield,
    credits_stars: Starfield,

    fullscreen: bool,
    fullscreen_toggle: Box<dyn FullscreenToggle>,
    size: (usize, usize),
    hits: Vec<HitTarget>,
    quit: bool,
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("mounted", &self.mounted)
            .field("nav", &self.nav.state())
            .field("fullscreen", &self.fullscreen)
            .field("quit", &self.quit)
            .finish_non_exhaustive()
    }
}

impl Shell {
    /// Build the deck with the hero slide mounted at `now`.
    pub fn new(config: DeckConfig, now: Instant) -> Result<Self> {
        config.validate()?;
        let org = OrgTree::build(org_members())?;
        let background = Starfield::with_seed(config.star_count, config.shooting_stars, config.seed);
        let credits_stars = Self::credits_field(config.seed);
        let mut shell = Self {
            charset: config.charset(),
            nav: NavigationController::new(Slide::COUNT, config.cooldown()),
            started: now,
            mounted: Slide::Hero,
            mounted_at: now,
            settled: false,
            hero_timeline: hero::timeline(),
            hero_phase: 0,
            figures_timeline: figures::timeline(),
            figure_stages: vec![FigureStage::default(); KEY_FIGURES.len()],
            org,
            expansion: Expansion::new(),
            scroll: ScrollRegion::default(),
            focus: None,
            background,
            credits_stars,
            fullscreen: false,
            fullscreen_toggle: Box::new(ChromeOnly),
            size: DEFAULT_SIZE,
            hits: Vec::new(),
            quit: false,
            config,
        };
        shell.mount(Slide::Hero, now);
        debug!(slides = Slide::COUNT, members = shell.org.len(), "deck ready");
        Ok(shell)
    }

    pub fn with_fullscreen(mut self, toggle: Box<dyn FullscreenToggle>) -> Self {
        self.fullscreen_toggle = toggle;
        self
    }

    fn credits_field(seed: Option<u64>) -> Starfield {
        Starfield::with_seed(CREDITS_STAR_COUNT, 0, seed.map(|s| s ^ CREDITS_SEED_SALT))
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn nav(&self) -> &NavigationController {
        &self.nav
    }

    /// The slide currently mounted.
    pub fn current_slide(&self) -> Slide {
        self.mounted
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn hero_phase(&self) -> u8 {
        self.hero_phase
    }

    pub fn figure_stages(&self) -> &[FigureStage] {
        &self.figure_stages
    }

    pub fn org(&self) -> &OrgTree {
        &self.org
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn scroll(&self) -> &ScrollRegion {
        &self.scroll
    }

    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Hit targets recorded by the last frame.
    pub fn hits(&self) -> &[HitTarget] {
        &self.hits
    }

    // ── Input ───────────────────────────────────────────────────────────────

    /// Route one input event. Returns whether visible state changed.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> bool {
        let changed = match event {
            InputEvent::Key(key) => self.handle_key(key, now),
            InputEvent::Wheel(delta) => {
                let delta = delta.saturating_mul(i32::from(self.config.scroll_step));
                let region = (self.mounted == Slide::OrgChart).then_some(&mut self.scroll);
                let outcome = self.nav.handle_wheel(delta, region, now);
                debug!(delta, ?outcome, "wheel");
                outcome != WheelOutcome::Dropped
            }
            InputEvent::Click { column, row } => self.handle_click(column, row, now),
            InputEvent::Resize { width, height } => {
                self.size = (width, height);
                self.sync_scroll_geometry();
                true
            }
            InputEvent::ToggleFullscreen => self.toggle_fullscreen(),
            InputEvent::Quit => {
                info!("quit requested");
                self.quit = true;
                true
            }
        };
        self.sync_mount(now);
        changed
    }

    fn handle_key(&mut self, key: Key, now: Instant) -> bool {
        if self.mounted == Slide::OrgChart {
            match key {
                Key::PageDown => return self.scroll_page(1),
                Key::PageUp => return self.scroll_page(-1),
                Key::Tab => return self.move_focus(true),
                Key::BackTab => return self.move_focus(false),
                Key::Enter | Key::Space => return self.toggle_focused(),
                _ => {}
            }
        }
        self.nav.handle_key(key, now)
    }

    fn handle_click(&mut self, column: usize, row: usize, now: Instant) -> bool {
        let Some(action) = self
            .hits
            .iter()
            .rev()
            .find(|h| h.rect.contains(column, row))
            .map(|h| h.action.clone())
        else {
            return false;
        };
        debug!(column, row, ?action, "click");
        match action {
            Action::Previous => self.nav.request_advance(Direction::Previous, now),
            Action::Next => self.nav.request_advance(Direction::Next, now),
            Action::GoTo(index) => self.nav.request_go_to(index, now),
            Action::Toggle(_) if self.mounted != Slide::OrgChart => false,
            Action::Toggle(id) => {
                self.focus = Some(id.clone());
                self.toggle_member(&id)
            }
        }
    }

    fn toggle_fullscreen(&mut self) -> bool {
        let target = !self.fullscreen;
        match self.fullscreen_toggle.set_fullscreen(target) {
            Ok(()) => {
                self.fullscreen = target;
                self.sync_scroll_geometry();
                debug!(fullscreen = target, "fullscreen toggled");
                true
            }
            Err(e) => {
                warn!(error = %e, "fullscreen toggle failed");
                false
            }
        }
    }

    // ── Org chart ───────────────────────────────────────────────────────────

    fn scroll_page(&mut self, direction: i32) -> bool {
        let page = self.scroll.viewport_height().max(1) as i32;
        self.scroll.scroll_by(direction * page)
    }

    fn move_focus(&mut self, forward: bool) -> bool {
        let ids: Vec<String> = self
            .org
            .visible_rows(&self.expansion)
            .iter()
            .map(|r| r.member.id.clone())
            .collect();
        if ids.is_empty() {
            return false;
        }
        let current = self.focus.as_deref().and_then(|f| ids.iter().position(|id| id == f));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => ids.len() - 1,
            (Some(i), true) => (i + 1) % ids.len(),
            (Some(i), false) => (i + ids.len() - 1) % ids.len(),
        };
        self.focus = Some(ids[next].clone());
        self.scroll.reveal(orgchart::row_top(next), orgchart::ROW_HEIGHT);
        true
    }

    fn toggle_focused(&mut self) -> bool {
        match self.focus.clone() {
            Some(id) => self.toggle_member(&id),
            None => {
                self.focus = Some(self.org.root().id.clone());
                true
            }
        }
    }

    fn toggle_member(&mut self, id: &str) -> bool {
        let toggled = self.expansion.toggle(&self.org, id);
        if toggled {
            self.sync_scroll_geometry();
        }
        toggled
    }

    /// Size the org-chart scroll region from the terminal size and the
    /// current outline.
    fn sync_scroll_geometry(&mut self) {
        let body = orgchart::body_area(self.slide_area(self.size.0, self.size.1));
        let view = OrgChartView {
            tree: &self.org,
            expansion: &self.expansion,
            focus: None,
            scroll_offset: 0,
        };
        let content = view.content_height();
        self.scroll.set_viewport_height(body.height);
        self.scroll.set_content_height(content);
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Settle the controller, follow slide changes and advance the active
    /// timeline.
    pub fn tick(&mut self, now: Instant) {
        self.nav.tick(now);
        self.sync_mount(now);
        match self.mounted {
            Slide::Hero => {
                for phase in self.hero_timeline.poll(now) {
                    self.hero_phase = phase;
                    debug!(phase, "hero phase");
                }
            }
            Slide::Figures => {
                for cue in self.figures_timeline.poll(now) {
                    self.apply_figure_cue(cue);
                }
            }
            Slide::OrgChart | Slide::Credits => {}
        }
    }

    fn apply_figure_cue(&mut self, cue: FigureCue) {
        let (FigureCue::Touchdown(i) | FigureCue::Reveal(i)) = cue;
        if let Some(stage) = self.figure_stages.get_mut(i) {
            stage.apply(cue);
        }
    }

    fn sync_mount(&mut self, now: Instant) {
        let target = Slide::from_index(self.nav.current_slide()).unwrap_or(self.mounted);
        if target != self.mounted {
            self.unmount();
            self.mount(target, now);
        }
    }

    fn unmount(&mut self) {
        let interrupted = match self.mounted {
            Slide::Hero => self.hero_timeline.is_running(),
            Slide::Figures => self.figures_timeline.is_running(),
            Slide::OrgChart | Slide::Credits => false,
        };
        match self.mounted {
            Slide::Hero => self.hero_timeline.cancel(),
            Slide::Figures => self.figures_timeline.cancel(),
            Slide::OrgChart | Slide::Credits => {}
        }
        debug!(slide = %self.mounted, interrupted, "unmounted");
    }

    /// Time until the mounted slide's next scripted cue, if one is pending.
    pub fn next_cue_in(&self, now: Instant) -> Option<Duration> {
        match self.mounted {
            Slide::Hero => self.hero_timeline.next_due(now),
            Slide::Figures => self.figures_timeline.next_due(now),
            Slide::OrgChart | Slide::Credits => None,
        }
    }

    fn mount(&mut self, slide: Slide, now: Instant) {
        self.mounted = slide;
        self.mounted_at = now;
        match slide {
            Slide::Hero => {
                self.hero_phase = 0;
                self.hero_timeline.start(now);
            }
            Slide::Figures => {
                self.figure_stages.fill(FigureStage::default());
                self.figures_timeline.start(now);
            }
            Slide::OrgChart => {
                self.expansion.reset();
                self.scroll.reset();
                self.focus = None;
                self.sync_scroll_geometry();
            }
            Slide::Credits => {
                self.credits_stars = Self::credits_field(self.config.seed);
            }
        }
        if self.settled {
            self.finish_animations();
        }
        debug!(%slide, "mounted");
    }

    /// Jump straight to `slide` and complete every animation, as a static
    /// render shows it.
    pub fn show_settled(&mut self, slide: Slide, now: Instant) {
        self.settled = true;
        self.nav.request_go_to(slide.index(), now);
        self.sync_mount(now);
        self.finish_animations();
    }

    fn finish_animations(&mut self) {
        if let Some(&phase) = self.hero_timeline.finish().last() {
            self.hero_phase = phase;
        }
        for cue in self.figures_timeline.finish() {
            self.apply_figure_cue(cue);
        }
    }

    fn slide_elapsed(&self, now: Instant) -> Duration {
        if self.settled {
            SETTLED_ELAPSED
        } else {
            now.saturating_duration_since(self.mounted_at)
        }
    }

    // ── Frame ───────────────────────────────────────────────────────────────

    fn slide_area(&self, width: usize, height: usize) -> Rect {
        let full = Rect::new(0, 0, width, height);
        if self.fullscreen {
            full
        } else {
            chrome::content_area(full)
        }
    }

    /// Rows the incoming slide is still offset by during its transition.
    fn enter_offset(&self, now: Instant) -> usize {
        if self.settled {
            return 0;
        }
        match self.nav.state() {
            NavState::Transitioning { until, .. } if now < until => {
                let cooldown = self.nav.cooldown().as_secs_f32();
                if cooldown <= 0.0 {
                    return 0;
                }
                let remaining = (until - now).as_secs_f32() / cooldown;
                (remaining.clamp(0.0, 1.0) * ENTER_OFFSET_ROWS).round() as usize
            }
            _ => 0,
        }
    }

    /// Paint the background, the mounted slide and, outside fullscreen, the
    /// chrome. The frame's hit targets are kept for click routing.
    pub fn frame(&mut self, width: usize, height: usize, now: Instant) -> Frame {
        if (width, height) != self.size {
            self.size = (width, height);
            self.sync_scroll_geometry();
        }
        let mut frame = Frame::new(width, height, self.charset);
        let full = frame.canvas.area();
        let background_time = if self.settled {
            SETTLED_ELAPSED
        } else {
            now.saturating_duration_since(self.started)
        };
        self.background.paint(&mut frame.canvas, full, background_time);

        let area = self.slide_area(width, height);
        let dy = self.enter_offset(now).min(area.height);
        let mut slide_canvas = Canvas::new(area.width, area.height, self.charset);
        let mut slide_hits = Vec::new();
        {
            let mut ctx = RenderContext::new(slide_canvas.area(), self.charset, &mut slide_hits);
            self.render_slide(&mut ctx, &mut slide_canvas, now);
        }
        let dest = Rect::new(area.x, area.y + dy, area.width, area.height - dy);
        frame.canvas.blit(&slide_canvas, 0, dest);
        for mut hit in slide_hits {
            hit.rect.x += dest.x;
            hit.rect.y += dest.y;
            frame.hits.push(hit);
        }

        if !self.fullscreen {
            let current = self.nav.current_slide();
            let view = ChromeView {
                current,
                count: self.nav.slide_count(),
                can_go_previous: self.nav.can_go_previous(),
                can_go_next: self.nav.can_go_next(),
                title: self.mounted.title(),
            };
            let mut ctx = RenderContext::new(full, self.charset, &mut frame.hits);
            view.render(&mut ctx, &mut frame.canvas);
        }

        self.hits = frame.hits.clone();
        frame
    }

    fn render_slide(&self, ctx: &mut RenderContext<'_>, canvas: &mut Canvas, now: Instant) {
        let elapsed = self.slide_elapsed(now);
        match self.mounted {
            Slide::Hero => HeroView {
                phase: self.hero_phase,
                elapsed,
            }
            .render(ctx, canvas),
            Slide::Figures => FiguresView {
                elapsed,
                stages: &self.figure_stages,
            }
            .render(ctx, canvas),
            Slide::OrgChart => OrgChartView {
                tree: &self.org,
                expansion: &self.expansion,
                focus: self.focus.as_deref(),
                scroll_offset: self.scroll.offset(),
            }
            .render(ctx, canvas),
            Slide::Credits => CreditsView {
                stars: &self.credits_stars,
                elapsed,
            }
            .render(ctx, canvas),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_shell.rs"]
mod tests;
