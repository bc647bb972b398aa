//! Static presentation content: the slide sequence and the constant tables
//! each slide draws from.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::org::OrgMember;

// ─── Slide ───────────────────────────────────────────────────────────────────

/// One full-screen view. Identity is the position in [`Slide::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Hero,
    Figures,
    OrgChart,
    Credits,
}

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Hero, Slide::Figures, Slide::OrgChart, Slide::Credits];
    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Slide::Hero => 0,
            Slide::Figures => 1,
            Slide::OrgChart => 2,
            Slide::Credits => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Slide> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Slide::Hero => "hero",
            Slide::Figures => "figures",
            Slide::OrgChart => "orgchart",
            Slide::Credits => "credits",
        }
    }

    /// Title shown in the status line.
    pub fn title(self) -> &'static str {
        match self {
            Slide::Hero => "SpaceX",
            Slide::Figures => "Key Figures",
            Slide::OrgChart => "Organizational Chart",
            Slide::Credits => "About This Presentation",
        }
    }

    /// Whether the slide hosts an inner scroll region that competes with
    /// slide navigation for wheel input.
    pub fn has_inner_scroll(self) -> bool {
        matches!(self, Slide::OrgChart)
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a slide name (`orgchart`, `org-chart`, `org` ...) or its
/// 1-based position.
impl FromStr for Slide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Ok(n) = key.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(Slide::from_index)
                .ok_or_else(|| Error::UnknownSlide(s.to_string()));
        }
        match key.replace(['-', '_'], "").as_str() {
            "hero" | "intro" => Ok(Slide::Hero),
            "figures" | "keyfigures" => Ok(Slide::Figures),
            "orgchart" | "org" => Ok(Slide::OrgChart),
            "credits" | "about" => Ok(Slide::Credits),
            _ => Err(Error::UnknownSlide(s.to_string())),
        }
    }
}

// ─── Hero ────────────────────────────────────────────────────────────────────

pub const HERO_TAGLINE: &str = "Revolutionizing the space industry to make life multiplanetary";

pub const HERO_DESCRIPTION: &str = "Founded in 2002 by Elon Musk, SpaceX designs, manufactures, \
and launches advanced rockets and spacecraft. The company has revolutionized the space industry \
with reusable rockets and historic missions to the ISS and beyond.";

/// Label / value cards shown once the rocket has landed.
pub const HERO_FACTS: [(&str, &str); 3] = [
    ("Founded", "2002"),
    ("Headquarters", "Hawthorne, CA"),
    ("Founder", "Elon Musk"),
];

pub const NAVIGATION_HINT: &str = "Navigate with arrows";

// ─── Key figures ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFigure {
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const KEY_FIGURES: [KeyFigure; 6] = [
    KeyFigure { value: 300, suffix: "+", label: "Successful Launches" },
    KeyFigure { value: 6000, suffix: "+", label: "Starlink Satellites" },
    KeyFigure { value: 13000, suffix: "+", label: "Employees" },
    KeyFigure { value: 60, suffix: "+", label: "Countries Served" },
    KeyFigure { value: 210, suffix: "B", label: "Valuation ($)" },
    KeyFigure { value: 22, suffix: "", label: "Years of Innovation" },
];

pub const FIGURES_SUBTITLE: &str = "The achievements that make SpaceX a leader in the space industry";

// ─── Org chart ───────────────────────────────────────────────────────────────

pub const ORG_SUBTITLE: &str =
    "Discover the hierarchical structure of SpaceX with clear reporting relationships";

// (id, name, role, level, parent id, report count)
type MemberRow = (&'static str, &'static str, &'static str, u32, Option<&'static str>, Option<u32>);

const ORG_ROWS: [MemberRow; 15] = [
    ("elon-musk", "Elon Musk", "Founder, CEO & CTO", 0, None, Some(301)),
    ("gwynne-shotwell", "Gwynne Shotwell", "President & COO", 1, Some("elon-musk"), Some(70)),
    ("bret-johnsen", "Bret Johnsen", "CFO & President, Strategic Acquisitions", 1, Some("elon-musk"), Some(28)),
    ("mark-juncosa", "Mark Juncosa", "VP, Vehicle Engineering", 1, Some("elon-musk"), Some(52)),
    ("charles-kuehmann", "Charles Kuehmann", "VP, Materials Engineering", 1, Some("elon-musk"), Some(35)),
    ("joe-petrzelka", "Joe Petrzelka", "VP, Spacecraft Engineering", 2, Some("gwynne-shotwell"), Some(60)),
    ("jonathan-greenhill", "Jonathan Greenhill", "Chief Government Officer", 2, Some("gwynne-shotwell"), None),
    ("jason-fritch", "Jason Fritch", "VP, WW Enterprise Sales", 2, Some("bret-johnsen"), Some(2)),
    ("jessica-jensen", "Jessica Jensen", "VP, Customer Operations", 2, Some("gwynne-shotwell"), Some(10)),
    ("alexander-wojcicki", "Alexander Wojcicki", "Principal Propulsion Engineer", 2, Some("mark-juncosa"), Some(11)),
    ("craig-remillard", "Craig Remillard", "Principal Engineer", 2, Some("mark-juncosa"), Some(14)),
    ("ali-sajjadi", "Ali Sajjadi", "Principal RF Engineer", 2, Some("charles-kuehmann"), None),
    ("anthony-geoffron", "Anthony Geoffron", "Principal System Engineer", 2, Some("charles-kuehmann"), None),
    ("andy-borrell", "Andy Borrell", "Senior Software Engineer", 2, Some("mark-juncosa"), None),
    ("michael-zou", "Michael Zou", "Senior Software Engineer", 2, Some("mark-juncosa"), None),
];

/// The org chart as a flat list of members with parent references.
pub fn org_members() -> Vec<OrgMember> {
    ORG_ROWS
        .iter()
        .map(|&(id, name, role, level, parent, reports)| OrgMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            level,
            parent_id: parent.map(str::to_string),
            report_count: reports,
        })
        .collect()
}

// ─── Credits ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credit {
    pub label: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
}

pub const CREDITS: [Credit; 5] = [
    Credit { label: "Author", value: "BJeff17", note: None },
    Credit { label: "Teacher", value: "Mrs. PORET GILBERT", note: Some("English Teacher") },
    Credit { label: "Created", value: "December 6, 2025", note: None },
    Credit { label: "Evaluation", value: "December 12, 2025", note: None },
    Credit {
        label: "Purpose",
        value: "Oral presentation exploring SpaceX's corporate organizational chart",
        note: None,
    },
];

pub const CREDITS_FOOTER: &str = "SpaceX Organizational Chart Presentation";

#[cfg(test)]
#[path = "../tests/rust/test_content.rs"]
mod tests;
