use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::domain::entities::alert::{Alert, AlertDraft};

/// In-memory alert dispatcher.
///
/// Holds the session's alert records newest first. Ids and timestamps are
/// assigned here at add time. Repeated crossings of the same threshold
/// produce independent records; nothing is deduplicated or persisted.
pub struct AlertCenter {
    alerts: Mutex<Vec<Alert>>,
    next_id: AtomicU64,
}

impl AlertCenter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Turn a draft into a stored record: assign the next id and the current
    /// timestamp, prepend it, and return a copy for notification.
    pub fn add_alert(&self, draft: AlertDraft) -> Alert {
        let alert = Alert {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            title: draft.title,
            message: draft.message,
            severity: draft.severity,
            timestamp: Utc::now(),
            parameter_id: draft.parameter_id,
            observed_value: draft.observed_value,
            threshold_crossed: draft.threshold_crossed,
            acknowledged: false,
        };
        self.lock().insert(0, alert.clone());
        alert
    }

    /// Mark the matching record as acknowledged. Returns `false` when the id
    /// is unknown (a no-op).
    pub fn acknowledge_alert(&self, id: u64) -> bool {
        let mut alerts = self.lock();
        alerts.iter_mut().find(|a| a.id == id).is_some_and(|a| {
            a.acknowledged = true;
            true
        })
    }

    /// Remove the matching record. Returns `false` when the id is unknown
    /// (a no-op).
    pub fn clear_alert(&self, id: u64) -> bool {
        let mut alerts = self.lock();
        let before = alerts.len();
        alerts.retain(|a| a.id != id);
        alerts.len() != before
    }

    /// Remove every record.
    pub fn clear_all_alerts(&self) {
        self.lock().clear();
    }

    /// Snapshot of the current records, newest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn unacknowledged_count(&self) -> usize {
        self.lock().iter().filter(|a| !a.acknowledged).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Alert>> {
        // Single-writer access; a poisoned lock still holds a usable list.
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AlertCenter {
    fn default() -> Self {
        Self::new()
    }
}
