#![allow(clippy::expect_used)]

use chrono::Utc;
use naiad::domain::entities::parameter::{Parameter, ParameterCategory};
use naiad::domain::entities::snapshot::StationSnapshot;
use naiad::domain::rules::{RuleEngine, default_rules};
use naiad::domain::value_objects::severity::Severity;

fn make_parameter(id: &str, value: f64, warning: f64, critical: f64) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: id.to_string(),
        value,
        unit: "mg/L".to_string(),
        warning_threshold: warning,
        critical_threshold: critical,
        min_value: 0.0,
        max_value: 14.0,
        category: ParameterCategory::Chemical,
        history: vec![value],
    }
}

fn make_snapshot(parameters: Vec<Parameter>) -> StationSnapshot {
    StationSnapshot {
        timestamp: Utc::now(),
        parameters,
    }
}

#[test]
fn healthy_station_triggers_no_alerts() {
    let snapshot = make_snapshot(vec![
        make_parameter("ph", 7.2, 6.5, 6.0),
        make_parameter("dissolved_oxygen", 8.5, 6.0, 4.0),
        make_parameter("free_chlorine", 0.8, 0.4, 0.2),
    ]);
    let engine = RuleEngine::new(default_rules());
    let drafts = engine.analyze(&snapshot);
    assert!(
        drafts.is_empty(),
        "Expected no alerts on healthy snapshot, got: {drafts:?}"
    );
}

#[test]
fn degraded_station_produces_one_draft_per_crossing() {
    let snapshot = make_snapshot(vec![
        make_parameter("ph", 6.2, 6.5, 6.0),               // warning band
        make_parameter("dissolved_oxygen", 3.1, 6.0, 4.0), // critical band
        make_parameter("free_chlorine", 0.8, 0.4, 0.2),    // healthy
    ]);
    let engine = RuleEngine::new(default_rules());
    let drafts = engine.analyze(&snapshot);
    assert_eq!(drafts.len(), 2, "got: {drafts:?}");

    // Sorted critical first.
    assert_eq!(drafts[0].severity, Severity::Critical);
    assert_eq!(drafts[0].parameter_id, "dissolved_oxygen");
    assert_eq!(drafts[1].severity, Severity::Warning);
    assert_eq!(drafts[1].parameter_id, "ph");
}

#[test]
fn warning_and_critical_are_mutually_exclusive() {
    // A reading below critical must produce exactly one critical draft,
    // never a warning duplicate.
    let snapshot = make_snapshot(vec![make_parameter("dissolved_oxygen", 2.0, 6.0, 4.0)]);
    let engine = RuleEngine::new(default_rules());
    let drafts = engine.analyze(&snapshot);
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].severity, Severity::Critical);
}

#[test]
fn drafts_carry_observed_value_and_threshold() {
    let snapshot = make_snapshot(vec![make_parameter("ph", 6.2, 6.5, 6.0)]);
    let engine = RuleEngine::new(default_rules());
    let drafts = engine.analyze(&snapshot);
    assert_eq!(drafts.len(), 1);
    assert!((drafts[0].observed_value - 6.2).abs() < f64::EPSILON);
    assert!((drafts[0].threshold_crossed - 6.5).abs() < f64::EPSILON);
}

#[test]
fn boundary_readings_trigger_inclusively() {
    let snapshot = make_snapshot(vec![
        make_parameter("at_warning", 6.0, 6.0, 4.0),
        make_parameter("at_critical", 4.0, 6.0, 4.0),
    ]);
    let engine = RuleEngine::new(default_rules());
    let drafts = engine.analyze(&snapshot);
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].severity, Severity::Critical);
    assert_eq!(drafts[0].parameter_id, "at_critical");
    assert_eq!(drafts[1].severity, Severity::Warning);
    assert_eq!(drafts[1].parameter_id, "at_warning");
}
