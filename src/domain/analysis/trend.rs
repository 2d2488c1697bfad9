use crate::domain::entities::parameter::NormalRange;
use crate::domain::value_objects::trend::Trend;

/// Number of most recent readings the classifier looks at.
const TREND_WINDOW: usize = 5;

/// Fraction of the normal-range span below which the latest reading counts
/// as stable.
const STABILITY_FRACTION: f64 = 0.1;

/// Classify the recent direction of a value series, oldest to newest.
///
/// A smoothing heuristic, not a statistical trend test: the latest reading
/// is compared against the mean of the last [`TREND_WINDOW`] readings, and
/// deviations under [`STABILITY_FRACTION`] of the normal-range span read as
/// stable. Both constants are part of the contract with existing dashboards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn classify(range: NormalRange, history: &[f64]) -> Trend {
    if history.len() < 2 {
        return Trend::Stable;
    }

    let window = &history[history.len().saturating_sub(TREND_WINDOW)..];
    let mean = window.iter().sum::<f64>() / window.len() as f64;
    let latest = window[window.len() - 1];
    let deviation = (latest - mean).abs();
    let threshold = STABILITY_FRACTION * range.span();

    if deviation < threshold {
        Trend::Stable
    } else if latest > mean {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}
