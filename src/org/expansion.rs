//! Per-member expand/collapse state.

use std::collections::HashMap;

use super::tree::OrgTree;

/// Expansion flags keyed by member id. Members default to expanded; an entry
/// is only created the first time a member is toggled.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    states: HashMap<String, bool>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.states.get(id).copied().unwrap_or(true)
    }

    /// Flip one member. Members without reports (and unknown ids) have
    /// nothing to expand, so the call is a no-op returning false. Other
    /// members' state is never touched.
    pub fn toggle(&mut self, tree: &OrgTree, id: &str) -> bool {
        if !tree.has_children(id) {
            tracing::trace!(member = id, "toggle ignored: no reports");
            return false;
        }
        let state = self.states.entry(id.to_string()).or_insert(true);
        *state = !*state;
        tracing::debug!(member = id, expanded = *state, "member toggled");
        true
    }

    /// Forget all toggles (the chart was remounted).
    pub fn reset(&mut self) {
        self.states.clear();
    }

    /// Number of members that have been toggled at least once.
    pub fn touched(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_org_expansion.rs"]
mod tests;
