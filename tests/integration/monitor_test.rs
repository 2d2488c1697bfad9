#![allow(clippy::expect_used)]

use std::sync::Mutex;

use naiad::application::services::alert_center::AlertCenter;
use naiad::application::services::monitor::MonitorService;
use naiad::domain::entities::alert::Alert;
use naiad::domain::ports::notifier::{NotificationError, Notifier};
use naiad::domain::rules::{RuleEngine, default_rules};
use naiad::domain::value_objects::severity::Severity;
use naiad::infrastructure::samplers::simulated::SimulatedStation;

struct RecordingNotifier {
    seen: Mutex<Vec<Alert>>,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            seen: Mutex::new(vec![]),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        self.seen
            .lock()
            .expect("mutex poisoned")
            .push(alert.clone());
        Ok(())
    }
}

#[test]
fn seeded_station_boots_quiet() {
    // The seed catalogue starts healthy; the first cycles with a gentle walk
    // must not alert.
    let station = SimulatedStation::new(0.001, 10, Some(1));
    let engine = RuleEngine::new(default_rules());
    let center = AlertCenter::new();
    let notifier = RecordingNotifier::new();
    let service = MonitorService::new(&station, &engine, &center, &notifier);

    for _ in 0..3 {
        let cycle = service.run_once().expect("cycle");
        assert_eq!(cycle.parameters_sampled, 8);
        assert_eq!(cycle.alerts_count, 0);
    }
    assert!(center.is_empty());
}

#[test]
fn wild_walk_eventually_alerts_and_records() {
    // A quarter-range step per sample drags readings into the threshold
    // bands within a few dozen cycles on any seed.
    let station = SimulatedStation::new(0.25, 10, Some(7));
    let engine = RuleEngine::new(default_rules());
    let center = AlertCenter::new();
    let notifier = RecordingNotifier::new();
    let service = MonitorService::new(&station, &engine, &center, &notifier);

    for _ in 0..100 {
        service.run_once().expect("cycle");
    }

    assert!(!center.is_empty(), "expected at least one crossing");
    let seen = notifier.seen.lock().expect("mutex poisoned");
    assert_eq!(seen.len(), center.len(), "every record was notified");

    // Every dispatched alert references a catalogue parameter and carries a
    // crossing severity.
    for alert in center.alerts() {
        assert!(!alert.parameter_id.is_empty());
        assert!(matches!(
            alert.severity,
            Severity::Warning | Severity::Critical
        ));
        assert!(!alert.acknowledged);
    }
}

#[test]
fn alert_center_operations_compose_with_monitor() {
    let station = SimulatedStation::new(0.25, 10, Some(11));
    let engine = RuleEngine::new(default_rules());
    let center = AlertCenter::new();
    let notifier = RecordingNotifier::new();
    let service = MonitorService::new(&station, &engine, &center, &notifier);

    for _ in 0..100 {
        service.run_once().expect("cycle");
    }
    let alerts = center.alerts();
    assert!(!alerts.is_empty());

    // Newest first: ids decrease down the list.
    for pair in alerts.windows(2) {
        assert!(pair[0].id > pair[1].id);
    }

    let first_id = alerts[0].id;
    assert!(center.acknowledge_alert(first_id));
    assert_eq!(center.unacknowledged_count(), alerts.len() - 1);

    assert!(center.clear_alert(first_id));
    assert_eq!(center.len(), alerts.len() - 1);

    center.clear_all_alerts();
    assert!(center.is_empty());
}
