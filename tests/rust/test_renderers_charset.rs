use super::*;

#[test]
fn test_arms_from_char_horizontal() {
    let a = Arms::from_char('─').unwrap();
    assert_eq!(a, Arms::HORIZONTAL);
}

#[test]
fn test_arms_from_char_ignores_card_corners() {
    assert!(Arms::from_char('╭').is_none());
    assert!(Arms::from_char('┏').is_none());
    assert!(Arms::from_char('X').is_none());
}

#[test]
fn test_arms_merge_makes_tee() {
    let elbow = Arms::from_char('└').unwrap();
    let merged = elbow.merge(Arms::VERTICAL);
    assert_eq!(merged.to_char(CharSet::Unicode), '├');
}

#[test]
fn test_arms_to_char_unicode() {
    assert_eq!(Arms::new(true, true, true, true).to_char(CharSet::Unicode), '┼');
    assert_eq!(Arms::new(false, false, true, false).to_char(CharSet::Unicode), '─');
    assert_eq!(Arms::new(true, false, false, false).to_char(CharSet::Unicode), '│');
    assert_eq!(Arms::new(false, false, false, false).to_char(CharSet::Unicode), ' ');
}

#[test]
fn test_arms_to_char_ascii() {
    assert_eq!(Arms::VERTICAL.to_char(CharSet::Ascii), '|');
    assert_eq!(Arms::HORIZONTAL.to_char(CharSet::Ascii), '-');
    assert_eq!(Arms::new(true, false, false, true).to_char(CharSet::Ascii), '`');
    assert_eq!(Arms::new(true, true, false, true).to_char(CharSet::Ascii), '+');
}

#[test]
fn test_box_chars_variants() {
    assert_eq!(BoxChars::square(CharSet::Unicode).top_left, '┌');
    assert_eq!(BoxChars::rounded(CharSet::Unicode).top_left, '╭');
    assert_eq!(BoxChars::heavy(CharSet::Unicode).horizontal, '━');
    assert_eq!(BoxChars::rounded(CharSet::Ascii).top_left, '+');
    assert_eq!(BoxChars::heavy(CharSet::Ascii).vertical, '#');
}

#[test]
fn test_glyphs_ascii_are_ascii() {
    let g = Glyphs::for_charset(CharSet::Ascii);
    for c in [
        g.arrow_up,
        g.arrow_down,
        g.indicator_on,
        g.indicator_off,
        g.expanded,
        g.collapsed,
        g.star_dim,
        g.star_bright,
        g.bullet,
    ] {
        assert!(c.is_ascii(), "{c:?} is not ascii");
    }
}
