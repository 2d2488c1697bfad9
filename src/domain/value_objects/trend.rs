use serde::{Deserialize, Serialize};

/// Short-window directional classification of a value series
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl Trend {
    /// Arrow glyph used in tables and the TUI.
    #[must_use]
    pub const fn arrow(&self) -> &str {
        match self {
            Self::Increasing => "\u{2197}",
            Self::Decreasing => "\u{2198}",
            Self::Stable => "\u{2192}",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Decreasing => write!(f, "decreasing"),
            Self::Stable => write!(f, "stable"),
        }
    }
}
