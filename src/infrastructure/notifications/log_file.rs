use std::io::Write;
use std::path::PathBuf;

use crate::domain::entities::alert::Alert;
use crate::domain::ports::notifier::{NotificationError, Notifier};

/// Appends alerts to a file as JSON lines.
pub struct LogFileNotifier {
    path: PathBuf,
}

impl LogFileNotifier {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn append_json_line(&self, value: &serde_json::Value) -> Result<(), NotificationError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NotificationError::SendFailed(format!("cannot create parent directory: {e}"))
            })?;
        }

        let json = serde_json::to_string(value)
            .map_err(|e| NotificationError::SendFailed(format!("JSON serialization error: {e}")))?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| NotificationError::SendFailed(format!("cannot open log file: {e}")))?;

        writeln!(file, "{json}")
            .map_err(|e| NotificationError::SendFailed(format!("cannot write to log file: {e}")))
    }
}

impl Notifier for LogFileNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        let entry = serde_json::json!({
            "timestamp": alert.timestamp.to_rfc3339(),
            "severity": alert.severity.to_string(),
            "id": alert.id,
            "parameter": alert.parameter_id,
            "title": alert.title,
            "message": alert.message,
            "observed_value": alert.observed_value,
            "threshold_crossed": alert.threshold_crossed,
        });

        self.append_json_line(&entry)
    }
}
