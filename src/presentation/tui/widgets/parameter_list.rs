use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState};

use crate::domain::analysis::{threshold, trend};
use crate::domain::entities::parameter::Parameter;
use crate::domain::value_objects::status::ParameterStatus;
use crate::presentation::tui::event::{SortColumn, SortOrder};

const fn status_color(status: ParameterStatus) -> Color {
    match status {
        ParameterStatus::Normal => Color::Green,
        ParameterStatus::Warning => Color::Yellow,
        ParameterStatus::Critical => Color::Red,
    }
}

/// Sort parameters for display without mutating the snapshot.
#[must_use]
pub fn sorted_indices(
    parameters: &[Parameter],
    column: SortColumn,
    order: SortOrder,
) -> Vec<usize> {
    let status_rank = |param: &Parameter| {
        let eval = threshold::evaluate(
            param.value,
            param.warning_threshold,
            param.critical_threshold,
            param.min_value,
            param.max_value,
        );
        match eval.status {
            ParameterStatus::Normal => 0u8,
            ParameterStatus::Warning => 1,
            ParameterStatus::Critical => 2,
        }
    };

    let mut indices: Vec<usize> = (0..parameters.len()).collect();
    indices.sort_by(|&a, &b| {
        let (pa, pb) = (&parameters[a], &parameters[b]);
        match column {
            SortColumn::Name => pa.name.cmp(&pb.name),
            SortColumn::Value => pa.value.total_cmp(&pb.value),
            SortColumn::Status => status_rank(pa).cmp(&status_rank(pb)),
        }
    });
    if order == SortOrder::Desc {
        indices.reverse();
    }
    indices
}

#[allow(clippy::too_many_arguments)]
pub fn render_parameter_list(
    frame: &mut Frame,
    parameters: &[Parameter],
    sort_column: SortColumn,
    sort_order: SortOrder,
    table_state: &mut TableState,
    is_focused: bool,
    area: Rect,
) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!("Parameters (sort: {sort_column} {sort_order})"))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let header = Row::new(
        ["Parameter", "Value", "Status", "Trend", "Category"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().bold())),
    )
    .height(1);

    let rows: Vec<Row<'_>> = sorted_indices(parameters, sort_column, sort_order)
        .into_iter()
        .map(|idx| {
            let param = &parameters[idx];
            let eval = threshold::evaluate(
                param.value,
                param.warning_threshold,
                param.critical_threshold,
                param.min_value,
                param.max_value,
            );
            let direction = trend::classify(param.normal_range(), &param.history);
            let style = Style::default().fg(status_color(eval.status));

            Row::new(vec![
                Cell::from(param.name.clone()).style(style),
                Cell::from(format!("{:.2} {}", param.value, param.unit)).style(style),
                Cell::from(eval.status.to_string()).style(style),
                Cell::from(format!("{} {}", direction.arrow(), direction)).style(style),
                Cell::from(param.category.to_string()).style(style),
            ])
        })
        .collect();

    let highlight_style = if is_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(20),
            Constraint::Percentage(14),
            Constraint::Percentage(20),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(highlight_style)
    .highlight_symbol("\u{25b6} ");

    frame.render_stateful_widget(table, area, table_state);
}
