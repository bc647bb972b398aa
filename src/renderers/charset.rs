//! Glyph sets: box corners, junction merging, tree connectors, chrome.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which glyph family to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// Corner and edge characters for a box outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    pub fn square(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            CharSet::Ascii => Self::ascii(),
        }
    }

    /// Rounded corners, used for cards.
    pub fn rounded(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            CharSet::Ascii => Self::ascii(),
        }
    }

    /// Heavy outline, used for the highlighted card.
    pub fn heavy(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
            },
            CharSet::Ascii => Self {
                top_left: '#',
                top_right: '#',
                bottom_left: '#',
                bottom_right: '#',
                horizontal: '=',
                vertical: '#',
            },
        }
    }

    fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }
}

// ─── Glyphs ──────────────────────────────────────────────────────────────────

/// Single-character glyphs for the deck chrome and decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub arrow_up: char,
    pub arrow_down: char,
    pub indicator_on: char,
    pub indicator_off: char,
    pub expanded: char,
    pub collapsed: char,
    pub star_dim: char,
    pub star_bright: char,
    pub shooting_head: char,
    pub shooting_tail: char,
    pub bullet: char,
    pub ellipsis: char,
}

impl Glyphs {
    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self {
                arrow_up: '▲',
                arrow_down: '▼',
                indicator_on: '●',
                indicator_off: '○',
                expanded: '▾',
                collapsed: '▸',
                star_dim: '·',
                star_bright: '✦',
                shooting_head: '✶',
                shooting_tail: '╲',
                bullet: '•',
                ellipsis: '…',
            },
            CharSet::Ascii => Self {
                arrow_up: '^',
                arrow_down: 'v',
                indicator_on: '@',
                indicator_off: 'o',
                expanded: '-',
                collapsed: '+',
                star_dim: '.',
                star_bright: '*',
                shooting_head: '*',
                shooting_tail: '\\',
                bullet: '*',
                ellipsis: '.',
            },
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Active arms of a line-drawing cell. Used to merge tree connectors that
/// cross or meet into the right junction character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Arms {
    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    pub const HORIZONTAL: Self = Self::new(false, false, true, true);
    pub const VERTICAL: Self = Self::new(true, true, false, false);

    /// Decode a line-drawing character. Returns None for anything else,
    /// including rounded and heavy corners, which are never merged.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '─' | '-' => Some(Self::HORIZONTAL),
            '│' | '|' => Some(Self::VERTICAL),
            '┌' => Some(Self::new(false, true, false, true)),
            '┐' => Some(Self::new(false, true, true, false)),
            '└' | '`' => Some(Self::new(true, false, false, true)),
            '┘' => Some(Self::new(true, false, true, false)),
            '├' => Some(Self::new(true, true, false, true)),
            '┤' => Some(Self::new(true, true, true, false)),
            '┬' => Some(Self::new(false, true, true, true)),
            '┴' => Some(Self::new(true, false, true, true)),
            '┼' | '+' => Some(Self::new(true, true, true, true)),
            _ => None,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    pub fn to_char(self, cs: CharSet) -> char {
        if cs == CharSet::Ascii {
            return match (self.up || self.down, self.left || self.right) {
                (false, false) => ' ',
                (true, false) => '|',
                (false, true) => '-',
                (true, true) if self.up && !self.down && !self.left => '`',
                (true, true) => '+',
            };
        }
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => ' ',
            (false, false, _, _) => '─',
            (_, _, false, false) => '│',
            (false, true, false, true) => '┌',
            (false, true, true, false) => '┐',
            (true, false, false, true) => '└',
            (true, false, true, false) => '┘',
            (true, true, false, true) => '├',
            (true, true, true, false) => '┤',
            (false, true, true, true) => '┬',
            (true, false, true, true) => '┴',
            (true, true, true, true) => '┼',
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
