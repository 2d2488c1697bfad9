use serde::Serialize;

use crate::domain::value_objects::status::ParameterStatus;

/// Result of evaluating a reading against its thresholds and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdEvaluation {
    pub is_warning: bool,
    pub is_critical: bool,
    /// Position of the reading within [min, max], scaled to 0–100.
    /// Unclamped: out-of-bounds readings land outside 0–100 and a zero-width
    /// range produces ±Infinity/NaN. Display layers clamp at render time.
    pub progress: f64,
    pub status: ParameterStatus,
}

/// Evaluate a reading against its warning/critical thresholds.
///
/// Crossings use falling semantics: a reading triggers a threshold when it
/// drops to or below it, so `critical_threshold ≤ warning_threshold` is the
/// expected ordering. Status precedence is critical, then warning, then
/// normal.
#[must_use]
pub fn evaluate(
    value: f64,
    warning_threshold: f64,
    critical_threshold: f64,
    min_value: f64,
    max_value: f64,
) -> ThresholdEvaluation {
    let is_warning = value <= warning_threshold;
    let is_critical = value <= critical_threshold;
    let progress = (value - min_value) / (max_value - min_value) * 100.0;

    let status = if is_critical {
        ParameterStatus::Critical
    } else if is_warning {
        ParameterStatus::Warning
    } else {
        ParameterStatus::Normal
    };

    ThresholdEvaluation {
        is_warning,
        is_critical,
        progress,
        status,
    }
}
