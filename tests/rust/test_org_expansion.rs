use super::*;
use crate::content::org_members;
use crate::org::OrgMember;

fn tree() -> OrgTree {
    OrgTree::build(org_members()).unwrap()
}

#[test]
fn test_default_is_expanded() {
    let e = Expansion::new();
    assert!(e.is_expanded("elon-musk"));
    assert!(e.is_expanded("not-a-member"));
    assert_eq!(e.touched(), 0);
}

#[test]
fn test_toggle_flips_only_that_member() {
    let t = tree();
    let mut e = Expansion::new();
    assert!(e.toggle(&t, "gwynne-shotwell"));
    assert!(!e.is_expanded("gwynne-shotwell"));
    assert!(e.is_expanded("elon-musk"));
    assert!(e.is_expanded("mark-juncosa"));
    assert!(e.toggle(&t, "gwynne-shotwell"));
    assert!(e.is_expanded("gwynne-shotwell"));
}

#[test]
fn test_collapsing_root_does_not_cascade() {
    let t = tree();
    let mut e = Expansion::new();
    e.toggle(&t, "elon-musk");
    assert!(!e.is_expanded("elon-musk"));
    assert!(e.is_expanded("gwynne-shotwell"));
    assert_eq!(e.touched(), 1);
}

#[test]
fn test_toggle_leaf_is_noop() {
    let t = tree();
    let mut e = Expansion::new();
    let before = t.visible_rows(&e).len();
    assert!(!e.toggle(&t, "michael-zou"));
    assert!(e.is_expanded("michael-zou"));
    assert_eq!(e.touched(), 0);
    assert_eq!(t.visible_rows(&e).len(), before);
}

#[test]
fn test_toggle_unknown_is_noop() {
    let t = tree();
    let mut e = Expansion::new();
    assert!(!e.toggle(&t, "ghost"));
    assert_eq!(e.touched(), 0);
}

#[test]
fn test_reset_restores_defaults() {
    let t = tree();
    let mut e = Expansion::new();
    e.toggle(&t, "bret-johnsen");
    e.reset();
    assert!(e.is_expanded("bret-johnsen"));
    assert_eq!(e.touched(), 0);
}

#[test]
fn test_leaf_toggle_leaves_custom_tree_untouched() {
    let t = OrgTree::build(vec![
        OrgMember::new("ceo", "CEO", "Chief"),
        OrgMember::new("cto", "CTO", "Tech").reports_to("ceo", 1).with_reports(3),
    ])
    .unwrap();
    let mut e = Expansion::new();
    assert!(!e.toggle(&t, "cto"));
    assert!(e.toggle(&t, "ceo"));
    assert_eq!(t.visible_rows(&e).len(), 1);
}
