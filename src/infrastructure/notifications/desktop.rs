use notify_rust::{Notification, Timeout, Urgency};

use crate::domain::entities::alert::Alert;
use crate::domain::ports::notifier::{NotificationError, Notifier};
use crate::domain::value_objects::severity::Severity;

const MAX_BODY_CHARS: usize = 250;
const MAX_SUMMARY_CHARS: usize = 100;

pub struct DesktopNotifier;

impl DesktopNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        let urgency = severity_to_urgency(alert.severity);

        let raw_summary = format!("{} naiad \u{2014} {}", alert.severity.emoji(), alert.title);
        let summary = truncate(&escape_markup(&raw_summary), MAX_SUMMARY_CHARS);

        let raw_body = format!(
            "{}\nobserved {:.2}, threshold {:.2}",
            alert.message, alert.observed_value, alert.threshold_crossed
        );
        let body = truncate(&escape_markup(&raw_body), MAX_BODY_CHARS);

        Notification::new()
            .summary(&summary)
            .body(&body)
            .urgency(urgency)
            .timeout(Timeout::Milliseconds(10_000))
            .show()
            .map_err(|_| {
                NotificationError::ChannelUnavailable(
                    "desktop notification server unreachable".to_string(),
                )
            })?;

        Ok(())
    }
}

// Critical maps to the visually destructive urgency level.
#[must_use]
const fn severity_to_urgency(severity: Severity) -> Urgency {
    match severity {
        Severity::Critical => Urgency::Critical,
        Severity::Warning => Urgency::Normal,
        Severity::Info => Urgency::Low,
    }
}

// Truncates on Unicode scalar values (not grapheme clusters; ZWJ sequences may split).
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_owned()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('\u{2026}');
        result
    }
}

fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
