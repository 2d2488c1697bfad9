pub mod crossing;

use crate::domain::entities::alert::AlertDraft;
use crate::domain::entities::snapshot::StationSnapshot;

/// A deterministic rule that evaluates a station snapshot and produces alert
/// drafts. Rules are pure functions: snapshot in, drafts out. No I/O.
pub trait Rule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a snapshot
    fn evaluate(&self, snapshot: &StationSnapshot) -> Vec<AlertDraft>;
}

/// Returns all default threshold-crossing rules
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(crossing::CriticalCrossingRule),
        Box::new(crossing::WarningCrossingRule),
    ]
}

/// Engine that runs a collection of rules against station snapshots
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Analyzes a snapshot by running all rules, returning drafts sorted by
    /// severity (critical first)
    #[must_use]
    pub fn analyze(&self, snapshot: &StationSnapshot) -> Vec<AlertDraft> {
        let mut drafts: Vec<AlertDraft> = self
            .rules
            .iter()
            .flat_map(|rule| rule.evaluate(snapshot))
            .collect();
        drafts.sort_by(|a, b| b.severity.cmp(&a.severity));
        drafts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::severity::Severity;
    use chrono::Utc;

    fn make_snapshot() -> StationSnapshot {
        StationSnapshot {
            timestamp: Utc::now(),
            parameters: vec![],
        }
    }

    struct NoopRule;
    impl Rule for NoopRule {
        fn name(&self) -> &'static str {
            "noop"
        }
        fn evaluate(&self, _: &StationSnapshot) -> Vec<AlertDraft> {
            vec![]
        }
    }

    struct FixedDraftRule {
        severity: Severity,
    }
    impl Rule for FixedDraftRule {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn evaluate(&self, _: &StationSnapshot) -> Vec<AlertDraft> {
            vec![AlertDraft {
                title: "Fixed draft".to_string(),
                message: String::new(),
                severity: self.severity,
                parameter_id: "fixed".to_string(),
                observed_value: 0.0,
                threshold_crossed: 0.0,
            }]
        }
    }

    #[test]
    fn engine_with_no_rules_returns_empty() {
        let engine = RuleEngine::new(vec![]);
        assert!(engine.analyze(&make_snapshot()).is_empty());
    }

    #[test]
    fn engine_with_noop_rule_returns_empty() {
        let noop = NoopRule;
        assert_eq!(noop.name(), "noop");
        let engine = RuleEngine::new(vec![Box::new(noop)]);
        assert!(engine.analyze(&make_snapshot()).is_empty());
    }

    #[test]
    fn engine_sorts_drafts_critical_first() {
        let engine = RuleEngine::new(vec![
            Box::new(FixedDraftRule {
                severity: Severity::Info,
            }),
            Box::new(FixedDraftRule {
                severity: Severity::Critical,
            }),
            Box::new(FixedDraftRule {
                severity: Severity::Warning,
            }),
        ]);
        let drafts = engine.analyze(&make_snapshot());
        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].severity, Severity::Critical);
        assert_eq!(drafts[1].severity, Severity::Warning);
        assert_eq!(drafts[2].severity, Severity::Info);
    }

    #[test]
    fn default_rules_are_the_crossing_pair() {
        let rules = default_rules();
        assert_eq!(rules.len(), 2);
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert!(names.contains(&"critical_crossing"));
        assert!(names.contains(&"warning_crossing"));
    }

    #[test]
    fn default_rules_silent_on_empty_snapshot() {
        let engine = RuleEngine::new(default_rules());
        assert!(engine.analyze(&make_snapshot()).is_empty());
    }
}
