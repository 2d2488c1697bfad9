use crate::domain::analysis::threshold;
use crate::domain::entities::alert::AlertDraft;
use crate::domain::entities::snapshot::StationSnapshot;
use crate::domain::value_objects::severity::Severity;

use super::Rule;

/// Fires when a reading sits in the warning band: at or below the warning
/// threshold but still above the critical one.
pub struct WarningCrossingRule;

impl Rule for WarningCrossingRule {
    fn name(&self) -> &'static str {
        "warning_crossing"
    }

    fn evaluate(&self, snapshot: &StationSnapshot) -> Vec<AlertDraft> {
        snapshot
            .parameters
            .iter()
            .filter_map(|param| {
                let eval = threshold::evaluate(
                    param.value,
                    param.warning_threshold,
                    param.critical_threshold,
                    param.min_value,
                    param.max_value,
                );
                (eval.is_warning && !eval.is_critical).then(|| AlertDraft {
                    title: format!("{} low: {:.1} {}", param.name, param.value, param.unit),
                    message: format!(
                        "Reading at or below warning threshold ({:.1} {})",
                        param.warning_threshold, param.unit
                    ),
                    severity: Severity::Warning,
                    parameter_id: param.id.clone(),
                    observed_value: param.value,
                    threshold_crossed: param.warning_threshold,
                })
            })
            .collect()
    }
}

/// Fires when a reading is at or below the critical threshold.
pub struct CriticalCrossingRule;

impl Rule for CriticalCrossingRule {
    fn name(&self) -> &'static str {
        "critical_crossing"
    }

    fn evaluate(&self, snapshot: &StationSnapshot) -> Vec<AlertDraft> {
        snapshot
            .parameters
            .iter()
            .filter_map(|param| {
                let eval = threshold::evaluate(
                    param.value,
                    param.warning_threshold,
                    param.critical_threshold,
                    param.min_value,
                    param.max_value,
                );
                eval.is_critical.then(|| AlertDraft {
                    title: format!(
                        "{} critically low: {:.1} {}",
                        param.name, param.value, param.unit
                    ),
                    message: format!(
                        "Reading at or below critical threshold ({:.1} {})",
                        param.critical_threshold, param.unit
                    ),
                    severity: Severity::Critical,
                    parameter_id: param.id.clone(),
                    observed_value: param.value,
                    threshold_crossed: param.critical_threshold,
                })
            })
            .collect()
    }
}
