use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parameter::Parameter;

/// All parameter readings of the station at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub timestamp: DateTime<Utc>,
    pub parameters: Vec<Parameter>,
}
