use std::borrow::Cow;

use colored::Colorize;

use crate::domain::entities::alert::Alert;
use crate::domain::ports::notifier::{NotificationError, Notifier};
use crate::domain::value_objects::severity::Severity;

const SEPARATOR_WIDTH: usize = 70;

/// Prints alert banners to the terminal.
///
/// With sound enabled, critical alerts also emit the terminal bell.
pub struct TerminalNotifier {
    sound: bool,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(sound: bool) -> Self {
        Self { sound }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        let separator = "\u{2500}".repeat(SEPARATOR_WIDTH);

        let badge = severity_badge(alert.severity);

        println!("\n{}", separator.dimmed());
        println!("{} {}", badge, sanitize(&alert.title).bold());
        println!("{}", separator.dimmed());

        if !alert.message.is_empty() {
            println!("{}", sanitize(&alert.message));
        }

        println!(
            "{}",
            format!(
                "{} \u{2014} observed {:.2}, threshold {:.2}",
                sanitize(&alert.parameter_id),
                alert.observed_value,
                alert.threshold_crossed
            )
            .dimmed()
        );

        println!("{}\n", separator.dimmed());

        if self.sound && alert.severity == Severity::Critical {
            // BEL — the audible cue for critical alerts.
            print!("\u{0007}");
        }

        Ok(())
    }
}

/// Strip ANSI escape sequences and C0/C1 control characters from a string,
/// preserving only printable content, newlines, and tabs.
fn sanitize(s: &str) -> Cow<'_, str> {
    if s.bytes()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
    {
        Cow::Owned(
            s.chars()
                .filter(|&c| !matches!(c as u32, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

#[must_use]
fn severity_badge(severity: Severity) -> String {
    match severity {
        Severity::Critical => format!(" {} {} ", severity.emoji(), severity)
            .on_red()
            .white()
            .bold()
            .to_string(),
        Severity::Warning => format!(" {} {} ", severity.emoji(), severity)
            .on_yellow()
            .black()
            .bold()
            .to_string(),
        Severity::Info => format!(" {} {} ", severity.emoji(), severity)
            .on_blue()
            .white()
            .to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn disable_colors() {
        colored::control::set_override(false);
    }

    fn make_alert(severity: Severity) -> Alert {
        Alert {
            id: 1,
            title: "Test Alert".to_string(),
            message: "Some details".to_string(),
            severity,
            timestamp: Utc::now(),
            parameter_id: "ph".to_string(),
            observed_value: 6.2,
            threshold_crossed: 6.5,
            acknowledged: false,
        }
    }

    #[test]
    fn new_creates_notifier_with_sound_flag() {
        let notifier = TerminalNotifier::new(true);
        assert!(notifier.sound);
    }

    #[test]
    fn default_is_silent() {
        let notifier = TerminalNotifier::default();
        assert!(!notifier.sound);
    }

    #[test]
    fn notify_all_severities_succeed() {
        disable_colors();
        let notifier = TerminalNotifier::new(false);
        for severity in [Severity::Info, Severity::Warning, Severity::Critical] {
            let alert = make_alert(severity);
            assert!(notifier.notify(&alert).is_ok());
        }
    }

    #[test]
    fn notify_with_sound_enabled_succeeds() {
        disable_colors();
        let notifier = TerminalNotifier::new(true);
        assert!(notifier.notify(&make_alert(Severity::Critical)).is_ok());
        assert!(notifier.notify(&make_alert(Severity::Warning)).is_ok());
    }

    #[test]
    fn notify_empty_message_succeeds() {
        disable_colors();
        let notifier = TerminalNotifier::new(false);
        let mut alert = make_alert(Severity::Info);
        alert.message = String::new();
        assert!(notifier.notify(&alert).is_ok());
    }

    #[test]
    fn severity_badge_returns_non_empty() {
        disable_colors();
        for severity in [Severity::Info, Severity::Warning, Severity::Critical] {
            let badge = severity_badge(severity);
            assert!(!badge.is_empty(), "badge for {severity} should not be empty");
        }
    }

    #[test]
    fn sanitize_strips_control_characters() {
        let input = "hello\x1b[2Jworld\x07done";
        let result = sanitize(input);
        assert_eq!(result, "hello[2Jworlddone");
    }

    #[test]
    fn sanitize_preserves_clean_strings() {
        let input = "clean string with\nnewlines\tand tabs";
        let result = sanitize(input);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }

    #[test]
    fn sanitize_preserves_unicode() {
        let input = "turbidity 0.8 NTU \u{2014} 350 \u{00b5}S/cm";
        let result = sanitize(input);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }
}
