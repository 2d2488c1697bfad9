use crate::domain::analysis::trend;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::sampler::Sampler;
use crate::domain::rules::RuleEngine;
use crate::domain::value_objects::trend::Trend;

use super::alert_center::AlertCenter;

/// Result of a single monitoring cycle.
pub struct MonitorCycleResult {
    pub parameters_sampled: usize,
    pub alerts_count: usize,
}

/// Orchestrates a monitoring cycle: sample → analyze → dispatch → notify.
pub struct MonitorService<'a> {
    sampler: &'a dyn Sampler,
    rule_engine: &'a RuleEngine,
    alert_center: &'a AlertCenter,
    notifier: &'a dyn Notifier,
}

impl<'a> MonitorService<'a> {
    #[must_use]
    pub const fn new(
        sampler: &'a dyn Sampler,
        rule_engine: &'a RuleEngine,
        alert_center: &'a AlertCenter,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            sampler,
            rule_engine,
            alert_center,
            notifier,
        }
    }

    /// Run a single monitoring cycle.
    ///
    /// Notification failures are logged and do not abort the cycle; every
    /// dispatched alert stays in the center regardless.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling the station fails.
    pub fn run_once(&self) -> anyhow::Result<MonitorCycleResult> {
        let snapshot = self.sampler.sample()?;

        let moving = snapshot
            .parameters
            .iter()
            .filter(|p| trend::classify(p.normal_range(), &p.history) != Trend::Stable)
            .count();
        if moving > 0 {
            tracing::debug!("{moving} parameter(s) trending away from their recent mean");
        }

        let drafts = self.rule_engine.analyze(&snapshot);

        if drafts.is_empty() {
            tracing::debug!("Station OK — no alerts");
        } else {
            tracing::warn!("{} alert(s) detected", drafts.len());
        }

        let mut alerts_count = 0usize;
        for draft in drafts {
            let alert = self.alert_center.add_alert(draft);
            alerts_count += 1;
            if let Err(e) = self.notifier.notify(&alert) {
                tracing::warn!("Alert notification failed: {e}");
            }
        }

        Ok(MonitorCycleResult {
            parameters_sampled: snapshot.parameters.len(),
            alerts_count,
        })
    }
}
