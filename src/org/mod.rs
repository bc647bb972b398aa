//! Organizational hierarchy: flat member records, the derived tree, and the
//! per-member expand/collapse state.

pub mod expansion;
pub mod tree;

pub use expansion::Expansion;
pub use tree::{OrgTree, VisibleRow};

/// One person in the org chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgMember {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Depth below the CEO as recorded in the source data.
    pub level: u32,
    /// Manager's id. None only for the root.
    pub parent_id: Option<String>,
    /// Headcount reporting into this member, when known.
    pub report_count: Option<u32>,
}

impl OrgMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            level: 0,
            parent_id: None,
            report_count: None,
        }
    }

    /// Builder-style setter for the manager reference.
    pub fn reports_to(mut self, parent_id: impl Into<String>, level: u32) -> Self {
        self.parent_id = Some(parent_id.into());
        self.level = level;
        self
    }

    pub fn with_reports(mut self, count: u32) -> Self {
        self.report_count = Some(count);
        self
    }
}
