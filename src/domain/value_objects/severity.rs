use serde::{Deserialize, Serialize};

/// Severity level for dispatched alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Severity {
    #[must_use]
    pub const fn emoji(&self) -> &str {
        match self {
            Self::Info => "\u{2139}\u{fe0f}",
            Self::Warning => "\u{26a0}\u{fe0f}",
            Self::Critical => "\u{1f534}",
        }
    }

    #[must_use]
    pub const fn color(&self) -> &str {
        match self {
            Self::Info => "blue",
            Self::Warning => "yellow",
            Self::Critical => "red",
        }
    }
}
