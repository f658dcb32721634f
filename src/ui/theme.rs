use crossterm::style::Color;

/// Design tokens for the fluxtree UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and tree connectors must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const HEALTHY: &str = "●";
    pub const BLOCKED: &str = "◌";
    pub const FAILED: &str = "✗";
    pub const WARNING: &str = "⚠";
}

pub mod icons_ascii {
    pub const HEALTHY: &str = "[OK]";
    pub const BLOCKED: &str = "[..]";
    pub const FAILED: &str = "[X]";
    pub const WARNING: &str = "[!]";
}

pub mod tree {
    pub const BRANCH: &str = "├── ";
    pub const LAST: &str = "└── ";
    pub const PIPE: &str = "│   ";
    pub const GAP: &str = "    ";
}

pub mod tree_ascii {
    pub const BRANCH: &str = "|-- ";
    pub const LAST: &str = "`-- ";
    pub const PIPE: &str = "|   ";
    pub const GAP: &str = "    ";
}
