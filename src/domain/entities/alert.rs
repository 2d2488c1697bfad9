use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::severity::Severity;

/// An alert record held by the alert center.
///
/// Ids and timestamps are assigned by the center at add time; records live
/// for the process session only and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub parameter_id: String,
    pub observed_value: f64,
    pub threshold_crossed: f64,
    pub acknowledged: bool,
}

/// Alert fields as produced by a rule, before an id and timestamp exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDraft {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub parameter_id: String,
    pub observed_value: f64,
    pub threshold_crossed: f64,
}
