use super::*;
use crate::renderers::charset::CharSet;

#[test]
fn test_generate_counts_and_ranges() {
    let field = Starfield::seeded(200, 5, 7);
    assert_eq!(field.stars().len(), 200);
    assert_eq!(field.shooting_stars().len(), 5);
    for s in field.stars() {
        assert!((0.0..1.0).contains(&s.x));
        assert!((0.0..1.0).contains(&s.y));
        assert!((0.5..3.0).contains(&s.size));
        assert!((2.0..6.0).contains(&s.period));
        assert!((0.0..5.0).contains(&s.delay));
        assert!((0.5..1.0).contains(&s.brightness));
    }
    for (i, s) in field.shooting_stars().iter().enumerate() {
        assert!((0.1..0.9).contains(&s.start_x));
        assert!((0.0..0.3).contains(&s.start_y));
        assert!((15.0..45.0).contains(&s.angle));
        assert!(s.repeat_delay >= i as f32 * 8.0);
    }
}

#[test]
fn test_same_seed_same_field() {
    assert_eq!(Starfield::seeded(50, 3, 42), Starfield::seeded(50, 3, 42));
    assert_ne!(Starfield::seeded(50, 3, 42), Starfield::seeded(50, 3, 43));
}

#[test]
fn test_star_opacity_twinkles_between_bounds() {
    let star = Star {
        x: 0.5,
        y: 0.5,
        size: 1.0,
        period: 4.0,
        delay: 1.0,
        brightness: 1.0,
    };
    assert!((star.opacity(0.0) - 0.3).abs() < 1e-6);
    assert!((star.opacity(1.0) - 0.3).abs() < 1e-6);
    assert!((star.opacity(3.0) - 1.0).abs() < 1e-6);
    assert!((star.opacity(5.0) - 0.3).abs() < 1e-6);
    for i in 0..100 {
        let o = star.opacity(i as f32 * 0.13);
        assert!((0.3 - 1e-6..=1.0 + 1e-6).contains(&o));
    }
}

#[test]
fn test_shooting_star_flies_then_waits() {
    let streak = ShootingStar {
        start_x: 0.5,
        start_y: 0.1,
        angle: 30.0,
        repeat_delay: 10.0,
    };
    assert_eq!(streak.progress(0.0), Some(0.0));
    assert!(streak.progress(0.75).is_some());
    assert_eq!(streak.progress(5.0), None);
    // Next flight starts after 1.5 s of flight and 10 s of rest.
    assert_eq!(streak.progress(11.5), Some(0.0));
}

#[test]
fn test_paint_stays_inside_area() {
    let field = Starfield::seeded(300, 5, 1);
    let mut canvas = Canvas::new(40, 20, CharSet::Unicode);
    let area = Rect::new(5, 5, 10, 5);
    field.paint(&mut canvas, area, Duration::from_millis(700));
    for row in 0..20 {
        for col in 0..40 {
            if canvas.get(col, row) != ' ' {
                assert!(area.contains(col, row), "star outside area at {col},{row}");
            }
        }
    }
}

#[test]
fn test_paint_ascii_uses_ascii_glyphs() {
    let field = Starfield::seeded(100, 0, 3);
    let mut canvas = Canvas::new(30, 10, CharSet::Ascii);
    let area = canvas.area();
    field.paint(&mut canvas, area, Duration::from_secs(3));
    assert!(canvas.render_to_string().chars().all(|c| c.is_ascii()));
}

#[test]
fn test_paint_empty_area_is_noop() {
    let field = Starfield::seeded(10, 1, 3);
    let mut canvas = Canvas::new(5, 5, CharSet::Unicode);
    field.paint(&mut canvas, Rect::new(0, 0, 0, 0), Duration::ZERO);
    assert_eq!(canvas.render_to_string(), "\n");
}
