use std::fmt::Write;

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

use crate::domain::value_objects::status::ParameterStatus;
use crate::presentation::cli::commands::status::ParameterReport;

const SEPARATOR_WIDTH: usize = 88;

/// Render the status report as an aligned, colored table.
#[must_use]
pub fn render_table(timestamp: DateTime<Utc>, reports: &[ParameterReport]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}",
        format!(
            "Station status \u{2014} {}",
            timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .bold()
    );
    let _ = writeln!(out, "{}", "\u{2500}".repeat(SEPARATOR_WIDTH).dimmed());
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:<18} {:>14}  {:<10} {:<14} {:>8} {:>8} {:>8}",
            "Parameter", "Value", "Status", "Trend", "Mean", "Min", "Max"
        )
        .bold()
    );

    for report in reports {
        // Pad before coloring: ANSI escapes would break column widths.
        let value_cell = format!("{:>14}", format!("{:.2} {}", report.value, report.unit));
        let status_cell = status_colored(report.status, &format!("{:<10}", report.status.to_string()));
        let trend_cell = format!("{:<14}", format!("{} {}", report.trend.arrow(), report.trend));

        let _ = writeln!(
            out,
            "{:<18} {value_cell}  {status_cell} {trend_cell} {:>8} {:>8} {:>8}",
            report.name,
            optional(report.history_mean),
            optional(report.history_min),
            optional(report.history_max),
        );
    }

    let _ = write!(out, "{}", "\u{2500}".repeat(SEPARATOR_WIDTH).dimmed());
    out
}

fn status_colored(status: ParameterStatus, text: &str) -> ColoredString {
    match status {
        ParameterStatus::Normal => text.green(),
        ParameterStatus::Warning => text.yellow(),
        ParameterStatus::Critical => text.red().bold(),
    }
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.2}"))
}
