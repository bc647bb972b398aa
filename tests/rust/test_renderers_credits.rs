use super::*;
use crate::renderers::charset::CharSet;

fn draw(width: usize, height: usize, charset: CharSet) -> Canvas {
    let stars = Starfield::seeded(CREDITS_STAR_COUNT, 0, 11);
    let mut canvas = Canvas::new(width, height, charset);
    let mut hits = Vec::new();
    let mut ctx = RenderContext::new(canvas.area(), charset, &mut hits);
    CreditsView {
        stars: &stars,
        elapsed: Duration::from_secs(4),
    }
    .render(&mut ctx, &mut canvas);
    canvas
}

#[test]
fn test_credits_show_every_entry() {
    let text = draw(80, 30, CharSet::Unicode).render_to_string();
    assert!(text.contains("About This Presentation"));
    for label in ["AUTHOR", "TEACHER", "CREATED", "EVALUATION", "PURPOSE"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert!(text.contains("Mrs. PORET GILBERT"));
    assert!(text.contains("(English Teacher)"));
    assert!(text.contains("SPACEX ORGANIZATIONAL CHART PRESENTATION"));
}

#[test]
fn test_long_value_wraps_inside_card() {
    let canvas = draw(50, 40, CharSet::Unicode);
    let text = canvas.render_to_string();
    assert!(text.contains("Oral presentation"));
    for line in text.lines() {
        assert!(line.chars().count() <= 50);
    }
}

#[test]
fn test_ascii_credits() {
    let text = draw(80, 30, CharSet::Ascii).render_to_string();
    assert!(text.chars().all(|c| c.is_ascii()));
    assert!(text.contains("BJeff17"));
}

#[test]
fn test_tiny_area_shows_only_stars() {
    let text = draw(10, 3, CharSet::Unicode).render_to_string();
    assert!(!text.contains("About"));
}
