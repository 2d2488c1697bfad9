use serde::{Deserialize, Serialize};

/// Category tag for a monitored parameter. Closed set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParameterCategory {
    Physical,
    Chemical,
    Biological,
}

impl std::fmt::Display for ParameterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Chemical => write!(f, "chemical"),
            Self::Biological => write!(f, "biological"),
        }
    }
}

/// Normal operating range of a parameter. The trend classifier scales its
/// stability band to this span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    #[must_use]
    pub const fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A monitored water-quality parameter.
///
/// `min_value ≤ critical_threshold ≤ warning_threshold ≤ max_value` is
/// expected but not enforced; the evaluator tolerates any ordering.
/// Constructed from the station's seed catalogue and mutated only by the
/// sampler's random-walk updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub warning_threshold: f64,
    pub critical_threshold: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub category: ParameterCategory,
    /// Recent readings, oldest first. `value` duplicates the last entry.
    pub history: Vec<f64>,
}

impl Parameter {
    #[must_use]
    pub const fn normal_range(&self) -> NormalRange {
        NormalRange {
            min: self.min_value,
            max: self.max_value,
        }
    }
}
