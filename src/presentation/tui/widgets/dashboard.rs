use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Gauge};

use crate::domain::analysis::threshold;
use crate::domain::entities::parameter::Parameter;
use crate::domain::value_objects::status::ParameterStatus;

const GAUGES_PER_ROW: usize = 4;

const fn status_color(status: ParameterStatus) -> Color {
    match status {
        ParameterStatus::Normal => Color::Green,
        ParameterStatus::Warning => Color::Yellow,
        ParameterStatus::Critical => Color::Red,
    }
}

/// One gauge per parameter, colored by threshold status and filled by the
/// evaluator's progress ratio.
pub fn render_dashboard(frame: &mut Frame, parameters: &[Parameter], area: Rect) {
    if parameters.is_empty() {
        return;
    }

    let row_count = parameters.len().div_ceil(GAUGES_PER_ROW);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); row_count])
        .split(area);

    for (row_idx, chunk) in parameters.chunks(GAUGES_PER_ROW).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GAUGES_PER_ROW as u32);
                GAUGES_PER_ROW
            ])
            .split(rows[row_idx]);

        for (col_idx, param) in chunk.iter().enumerate() {
            let eval = threshold::evaluate(
                param.value,
                param.warning_threshold,
                param.critical_threshold,
                param.min_value,
                param.max_value,
            );

            // The evaluator leaves progress unclamped; the gauge cannot be.
            let ratio = if eval.progress.is_finite() {
                (eval.progress / 100.0).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let gauge = Gauge::default()
                .block(Block::bordered().title(param.name.clone()))
                .gauge_style(Style::default().fg(status_color(eval.status)))
                .ratio(ratio)
                .label(format!("{:.1} {}", param.value, param.unit));
            frame.render_widget(gauge, columns[col_idx]);
        }
    }
}
