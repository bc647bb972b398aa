//! OrgTree: the parent→children index over a flat member list.
//!
//! The children index is built once, in a single group-by pass over the
//! members. A petgraph DiGraph (manager → report) is used at build time to
//! reject cycles and unreachable members.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use super::OrgMember;
use super::expansion::Expansion;
use crate::error::{Error, Result};

/// A validated org hierarchy rooted at exactly one parentless member.
#[derive(Debug, Clone)]
pub struct OrgTree {
    members: Vec<OrgMember>,
    /// Maps member id → position in `members`.
    index: HashMap<String, usize>,
    /// Maps manager id → direct reports, in input order.
    children: HashMap<String, Vec<usize>>,
    root: usize,
}

/// One line of the rendered outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub member: &'a OrgMember,
    pub depth: usize,
    /// Whether this member is the last report of its manager.
    pub last_sibling: bool,
    /// For each ancestor level below the root, whether a connector line must
    /// continue past this row (the ancestor has later siblings).
    pub rails: Vec<bool>,
    pub child_count: usize,
    pub expanded: bool,
}

impl OrgTree {
    /// Build and validate the hierarchy.
    ///
    /// Fails when ids repeat, a parent reference dangles, there is not exactly
    /// one root, or the parent links form a cycle.
    pub fn build(members: Vec<OrgMember>) -> Result<Self> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(members.len());
        for (i, m) in members.iter().enumerate() {
            if index.insert(m.id.clone(), i).is_some() {
                return Err(Error::org(format!("duplicate member id '{}'", m.id)));
            }
        }

        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (i, m) in members.iter().enumerate() {
            match &m.parent_id {
                None => roots.push(i),
                Some(parent) if !index.contains_key(parent) => {
                    return Err(Error::org(format!(
                        "member '{}' reports to unknown member '{}'",
                        m.id, parent
                    )));
                }
                Some(parent) => children.entry(parent.clone()).or_default().push(i),
            }
        }

        let root = match roots.as_slice() {
            [only] => *only,
            [] => return Err(Error::org("no root member (every member has a parent)")),
            many => {
                let ids: Vec<&str> = many.iter().map(|&i| members[i].id.as_str()).collect();
                return Err(Error::org(format!("multiple root members: {}", ids.join(", "))));
            }
        };

        check_tree_shape(&members, &index, root)?;

        tracing::debug!(
            members = members.len(),
            managers = children.len(),
            root = %members[root].id,
            "org tree built"
        );
        Ok(Self {
            members,
            index,
            children,
            root,
        })
    }

    pub fn root(&self) -> &OrgMember {
        &self.members[self.root]
    }

    pub fn get(&self, id: &str) -> Option<&OrgMember> {
        self.index.get(id).map(|&i| &self.members[i])
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Direct reports of `id`, in input order. Empty for leaves and for
    /// unknown ids.
    pub fn children_of(&self, id: &str) -> Vec<&OrgMember> {
        self.children
            .get(id)
            .map(|kids| kids.iter().map(|&i| &self.members[i]).collect())
            .unwrap_or_default()
    }

    pub fn child_count(&self, id: &str) -> usize {
        self.children.get(id).map_or(0, Vec::len)
    }

    pub fn has_children(&self, id: &str) -> bool {
        self.child_count(id) > 0
    }

    /// Pre-order walk that skips the reports of collapsed members.
    pub fn visible_rows(&self, expansion: &Expansion) -> Vec<VisibleRow<'_>> {
        let mut out = Vec::new();
        let mut rails = Vec::new();
        self.walk_visible(self.root, 0, true, &mut rails, expansion, &mut out);
        out
    }

    fn walk_visible<'a>(
        &'a self,
        i: usize,
        depth: usize,
        last_sibling: bool,
        rails: &mut Vec<bool>,
        expansion: &Expansion,
        out: &mut Vec<VisibleRow<'a>>,
    ) {
        let member = &self.members[i];
        let kids = self.children.get(&member.id);
        let expanded = expansion.is_expanded(&member.id);
        out.push(VisibleRow {
            member,
            depth,
            last_sibling,
            rails: rails.clone(),
            child_count: kids.map_or(0, Vec::len),
            expanded,
        });
        let Some(kids) = kids.filter(|_| expanded) else {
            return;
        };
        if depth > 0 {
            rails.push(!last_sibling);
        }
        for (n, &k) in kids.iter().enumerate() {
            self.walk_visible(k, depth + 1, n + 1 == kids.len(), rails, expansion, out);
        }
        if depth > 0 {
            rails.pop();
        }
    }
}

/// Reject parent cycles and members the root cannot reach.
fn check_tree_shape(members: &[OrgMember], index: &HashMap<String, usize>, root: usize) -> Result<()> {
    let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(members.len(), members.len());
    let nodes: Vec<NodeIndex> = (0..members.len()).map(|i| graph.add_node(i)).collect();
    for (i, m) in members.iter().enumerate() {
        if let Some(&p) = m.parent_id.as_ref().and_then(|p| index.get(p)) {
            graph.add_edge(nodes[p], nodes[i], ());
        }
    }

    if is_cyclic_directed(&graph) {
        return Err(Error::org("reporting lines form a cycle"));
    }

    let mut reached = vec![false; members.len()];
    let mut dfs = Dfs::new(&graph, nodes[root]);
    while let Some(n) = dfs.next(&graph) {
        reached[graph[n]] = true;
    }
    if let Some(stray) = reached.iter().position(|r| !r) {
        return Err(Error::org(format!(
            "member '{}' is not connected to '{}'",
            members[stray].id, members[root].id
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_org_tree.rs"]
mod tests;
