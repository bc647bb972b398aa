use super::*;
use crate::content::org_members;

fn member(id: &str, parent: Option<&str>) -> OrgMember {
    let m = OrgMember::new(id, id.to_uppercase(), "role");
    match parent {
        Some(p) => m.reports_to(p, 1),
        None => m,
    }
}

fn small_tree() -> OrgTree {
    OrgTree::build(vec![
        member("ceo", None),
        member("a", Some("ceo")),
        member("b", Some("ceo")),
        member("a1", Some("a")),
        member("a2", Some("a")),
        member("b1", Some("b")),
    ])
    .unwrap()
}

fn ids<'a>(members: impl IntoIterator<Item = &'a OrgMember>) -> Vec<&'a str> {
    members.into_iter().map(|m| m.id.as_str()).collect()
}

// ── Construction ─────────────────────────────────────────────────────────────

#[test]
fn test_build_static_chart() {
    let tree = OrgTree::build(org_members()).unwrap();
    assert_eq!(tree.len(), 15);
    assert_eq!(tree.root().name, "Elon Musk");
    assert_eq!(tree.child_count("elon-musk"), 4);
    assert_eq!(tree.child_count("mark-juncosa"), 4);
    assert_eq!(
        ids(tree.children_of("mark-juncosa")),
        vec!["alexander-wojcicki", "craig-remillard", "andy-borrell", "michael-zou"]
    );
}

#[test]
fn test_build_rejects_duplicate_ids() {
    let err = OrgTree::build(vec![member("ceo", None), member("ceo", None)]).unwrap_err();
    assert!(err.to_string().contains("duplicate member id 'ceo'"));
}

#[test]
fn test_build_rejects_dangling_parent() {
    let err = OrgTree::build(vec![member("ceo", None), member("x", Some("ghost"))]).unwrap_err();
    assert!(err.to_string().contains("unknown member 'ghost'"));
}

#[test]
fn test_build_rejects_multiple_roots() {
    let err = OrgTree::build(vec![member("ceo", None), member("coo", None)]).unwrap_err();
    assert!(err.to_string().contains("multiple root members: ceo, coo"));
}

#[test]
fn test_build_rejects_missing_root() {
    let err = OrgTree::build(vec![member("a", Some("b")), member("b", Some("a"))]).unwrap_err();
    assert!(err.to_string().contains("no root member"));
}

#[test]
fn test_build_rejects_detached_cycle() {
    let err = OrgTree::build(vec![
        member("ceo", None),
        member("a", Some("b")),
        member("b", Some("a")),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn test_build_rejects_empty_list() {
    assert!(OrgTree::build(vec![]).is_err());
}

// ── children_of ──────────────────────────────────────────────────────────────

#[test]
fn test_children_of_keeps_input_order() {
    let tree = small_tree();
    assert_eq!(ids(tree.children_of("ceo")), vec!["a", "b"]);
    assert_eq!(ids(tree.children_of("a")), vec!["a1", "a2"]);
}

#[test]
fn test_children_of_leaf_is_empty() {
    let tree = small_tree();
    assert!(tree.children_of("a1").is_empty());
    assert!(!tree.has_children("a1"));
}

#[test]
fn test_children_of_unknown_is_empty() {
    let tree = small_tree();
    assert!(tree.children_of("nobody").is_empty());
    assert_eq!(tree.child_count("nobody"), 0);
}

#[test]
fn test_static_chart_is_connected_from_root() {
    // children_of closed over the root reaches every member exactly once.
    let tree = OrgTree::build(org_members()).unwrap();
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![tree.root()];
    while let Some(m) = stack.pop() {
        assert!(seen.insert(m.id.clone()), "{} visited twice", m.id);
        stack.extend(tree.children_of(&m.id));
    }
    assert_eq!(seen.len(), tree.len());
    for m in org_members() {
        assert!(seen.contains(&m.id));
    }
}

// ── Walks ────────────────────────────────────────────────────────────────────

#[test]
fn test_visible_rows_all_expanded() {
    let tree = small_tree();
    let rows = tree.visible_rows(&Expansion::new());
    assert_eq!(rows.len(), 6);
    let a2 = &rows[3];
    assert_eq!(a2.member.id, "a2");
    assert!(a2.last_sibling);
    // "a" has a later sibling, so its rail continues past a2.
    assert_eq!(a2.rails, vec![true]);
    let b1 = &rows[5];
    assert_eq!(b1.rails, vec![false]);
    assert_eq!(rows[0].child_count, 2);
}

#[test]
fn test_visible_rows_skip_collapsed_subtree() {
    let tree = small_tree();
    let mut expansion = Expansion::new();
    assert!(expansion.toggle(&tree, "a"));
    let rows = tree.visible_rows(&expansion);
    assert_eq!(ids(rows.iter().map(|r| r.member)), vec!["ceo", "a", "b", "b1"]);
    assert!(!rows[1].expanded);
    assert_eq!(rows[1].child_count, 2);
}
