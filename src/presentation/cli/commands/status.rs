use serde::Serialize;

use crate::domain::analysis::{threshold, trend};
use crate::domain::entities::snapshot::StationSnapshot;
use crate::domain::ports::sampler::Sampler;
use crate::domain::value_objects::status::ParameterStatus;
use crate::domain::value_objects::trend::Trend;
use crate::infrastructure::compute::{NumericWorker, WorkerRequest};
use crate::presentation::cli::formatters::status_fmt;

/// One row of the status report.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterReport {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub status: ParameterStatus,
    pub trend: Trend,
    pub progress: f64,
    pub history_mean: Option<f64>,
    pub history_min: Option<f64>,
    pub history_max: Option<f64>,
}

/// Evaluate every parameter of the snapshot: threshold status, trend, and
/// history summary statistics (computed by the numeric worker).
#[must_use]
pub fn build_report(snapshot: &StationSnapshot, worker: &NumericWorker) -> Vec<ParameterReport> {
    snapshot
        .parameters
        .iter()
        .map(|param| {
            let eval = threshold::evaluate(
                param.value,
                param.warning_threshold,
                param.critical_threshold,
                param.min_value,
                param.max_value,
            );
            let direction = trend::classify(param.normal_range(), &param.history);

            let stats = worker
                .request(WorkerRequest::calculate_stats(&param.history))
                .ok()
                .filter(|response| response.success)
                .and_then(|response| response.result);
            let field = |name: &str| stats.as_ref().and_then(|s| s[name].as_f64());

            ParameterReport {
                id: param.id.clone(),
                name: param.name.clone(),
                value: param.value,
                unit: param.unit.clone(),
                status: eval.status,
                trend: direction,
                progress: eval.progress,
                history_mean: field("mean"),
                history_min: field("min"),
                history_max: field("max"),
            }
        })
        .collect()
}

/// Run a one-shot status report.
///
/// # Errors
///
/// Returns an error if sampling fails or JSON serialization fails.
pub fn run_status(sampler: &dyn Sampler, worker: &NumericWorker, json: bool) -> anyhow::Result<()> {
    let snapshot = sampler.sample()?;
    let report = build_report(&snapshot, worker);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", status_fmt::render_table(snapshot.timestamp, &report));
    }

    Ok(())
}
