use serde::{Deserialize, Serialize};

/// Display classification of a parameter reading relative to its thresholds.
///
/// Produced by the threshold evaluator; `Critical` wins over `Warning`,
/// which wins over `Normal`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl std::fmt::Display for ParameterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}
