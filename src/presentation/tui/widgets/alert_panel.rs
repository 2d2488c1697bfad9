use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::domain::entities::alert::Alert;
use crate::domain::value_objects::severity::Severity;

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}

fn severity_style(severity: Severity, acknowledged: bool) -> Style {
    let style = Style::default().fg(severity_color(severity));
    if acknowledged {
        style.add_modifier(Modifier::DIM)
    } else if matches!(severity, Severity::Critical) {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn render_alert_panel(
    frame: &mut Frame,
    alerts: &[Alert],
    list_state: &mut ListState,
    is_focused: bool,
    area: Rect,
) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let unacknowledged = alerts.iter().filter(|a| !a.acknowledged).count();
    let block = Block::default()
        .title(format!("Alerts ({unacknowledged} unacknowledged)"))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let highlight_style = if is_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let items: Vec<ListItem<'_>> = if alerts.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No active alerts",
            Style::default().fg(Color::Green),
        )))]
    } else {
        alerts
            .iter()
            .map(|alert| {
                let style = severity_style(alert.severity, alert.acknowledged);
                let ack_marker = if alert.acknowledged { " \u{2713}" } else { "" };
                let line1 = Line::from(vec![Span::styled(
                    format!(
                        "{} [{}] {}{}",
                        alert.severity.emoji(),
                        alert.severity,
                        alert.title,
                        ack_marker
                    ),
                    style,
                )]);
                let timestamp = alert.timestamp.format("%H:%M:%S").to_string();
                let line2 = Line::from(vec![Span::styled(
                    format!("  {} \u{2014} {}", timestamp, alert.message),
                    Style::default().add_modifier(Modifier::DIM),
                )]);
                ListItem::new(vec![line1, line2])
            })
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("\u{25b6} ");

    frame.render_stateful_widget(list, area, list_state);
}
