use super::*;
use crate::renderers::charset::CharSet;

fn draw(phase: u8, elapsed_ms: u64, charset: CharSet) -> Canvas {
    let mut canvas = Canvas::new(80, 30, charset);
    let mut hits = Vec::new();
    let mut ctx = RenderContext::new(canvas.area(), charset, &mut hits);
    HeroView {
        phase,
        elapsed: Duration::from_millis(elapsed_ms),
    }
    .render(&mut ctx, &mut canvas);
    assert!(hits.is_empty());
    canvas
}

#[test]
fn test_timeline_yields_phases_in_order() {
    let mut tl = timeline();
    let t0 = std::time::Instant::now();
    tl.start(t0);
    assert!(tl.poll(t0 + Duration::from_millis(2999)).is_empty());
    assert_eq!(tl.poll(t0 + Duration::from_millis(3000)), vec![1]);
    assert_eq!(tl.poll(t0 + Duration::from_millis(12000)), vec![2, 3, 4]);
}

#[test]
fn test_logo_always_visible_with_accent_x() {
    let canvas = draw(0, 0, CharSet::Unicode);
    let text = canvas.render_to_string();
    assert!(text.contains("S P A C E X"));
    let (row, line) = text
        .lines()
        .enumerate()
        .find(|(_, l)| l.contains("S P A C E X"))
        .unwrap();
    let col = line.chars().position(|c| c == 'X').unwrap();
    assert_eq!(canvas.tone_at(col, row), Tone::Accent);
    assert_eq!(canvas.tone_at(col - 2, row), Tone::Bright);
}

#[test]
fn test_copy_appears_by_phase() {
    let start = draw(0, 100, CharSet::Unicode).render_to_string();
    assert!(!start.contains("Revolutionizing"));
    assert!(!start.contains("MOON LANDING"));

    let one = draw(1, 3100, CharSet::Unicode).render_to_string();
    assert!(one.contains("Revolutionizing"));
    assert!(one.contains("MOON LANDING"));
    assert!(!one.contains("Founded in 2002"));

    let three = draw(3, 9100, CharSet::Unicode).render_to_string();
    assert!(three.contains("Founded in 2002"));
    assert!(three.contains("HEADQUARTERS"));
    assert!(three.contains("Hawthorne, CA"));
    assert!(three.contains("NAVIGATE WITH ARROWS"));
    assert!(three.contains("MARS COLONY"));
    assert!(!three.contains("ASTEROID DEFENSE"));
}

#[test]
fn test_final_phase_shows_every_scene() {
    let text = draw(FINAL_PHASE, 20_000, CharSet::Unicode).render_to_string();
    for label in ["MOON LANDING", "MARS COLONY", "ASTEROID DEFENSE"] {
        assert!(text.contains(label), "missing {label}");
    }
}

#[test]
fn test_starship_descends_during_phase_two() {
    let find_nose = |c: &Canvas| {
        (0..c.height).find(|&r| c.render_to_string().lines().nth(r).is_some_and(|l| l.contains("/||\\")))
    };
    let early = draw(2, 5600, CharSet::Unicode);
    let late = draw(2, 8900, CharSet::Unicode);
    let early_row = find_nose(&early).unwrap();
    let late_row = find_nose(&late).unwrap();
    assert!(early_row < late_row);
}

#[test]
fn test_ascii_render_is_plain_ascii() {
    let text = draw(FINAL_PHASE, 20_000, CharSet::Ascii).render_to_string();
    assert!(text.chars().all(|c| c.is_ascii()));
}

#[test]
fn test_narrow_area_stacks_facts() {
    let mut canvas = Canvas::new(30, 40, CharSet::Unicode);
    let mut hits = Vec::new();
    let mut ctx = RenderContext::new(canvas.area(), CharSet::Unicode, &mut hits);
    HeroView {
        phase: 3,
        elapsed: Duration::from_millis(9500),
    }
    .render(&mut ctx, &mut canvas);
    let text = canvas.render_to_string();
    assert!(text.contains("Founder: Elon Musk"));
}
