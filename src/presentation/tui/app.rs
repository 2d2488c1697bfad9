use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, ListState, Paragraph, TableState};
use ratatui::{Frame, Terminal};

use crate::application::services::alert_center::AlertCenter;
use crate::domain::entities::alert::Alert;
use crate::domain::entities::snapshot::StationSnapshot;
use crate::domain::ports::sampler::Sampler;
use crate::domain::rules::RuleEngine;
use crate::presentation::tui::event::{ActivePanel, SortColumn, SortOrder};
use crate::presentation::tui::widgets::alert_panel::render_alert_panel;
use crate::presentation::tui::widgets::dashboard::render_dashboard;
use crate::presentation::tui::widgets::parameter_list::render_parameter_list;

struct App<'a> {
    sampler: &'a dyn Sampler,
    rule_engine: &'a RuleEngine,
    alert_center: &'a AlertCenter,

    snapshot: Option<StationSnapshot>,
    alerts: Vec<Alert>,

    active_panel: ActivePanel,
    sort_column: SortColumn,
    sort_order: SortOrder,
    table_state: TableState,
    alert_list_state: ListState,

    should_quit: bool,
    tick_rate: Duration,
}

impl<'a> App<'a> {
    #[must_use]
    fn new(
        sampler: &'a dyn Sampler,
        rule_engine: &'a RuleEngine,
        alert_center: &'a AlertCenter,
        interval_secs: u64,
    ) -> Self {
        Self {
            sampler,
            rule_engine,
            alert_center,
            snapshot: None,
            alerts: Vec::new(),
            active_panel: ActivePanel::default(),
            sort_column: SortColumn::default(),
            sort_order: SortOrder::default(),
            table_state: TableState::default(),
            alert_list_state: ListState::default(),
            should_quit: false,
            tick_rate: Duration::from_secs(interval_secs.max(1)),
        }
    }

    /// Take a fresh sample, run the rules, and dispatch any new alerts.
    fn refresh_data(&mut self) {
        if let Ok(snapshot) = self.sampler.sample() {
            for draft in self.rule_engine.analyze(&snapshot) {
                self.alert_center.add_alert(draft);
            }
            self.snapshot = Some(snapshot);
        }
        self.reload_alerts();
    }

    /// Re-read the alert list without sampling.
    fn reload_alerts(&mut self) {
        self.alerts = self.alert_center.alerts();
        self.clamp_selections();
    }

    fn clamp_selections(&mut self) {
        let parameter_count = self.snapshot.as_ref().map_or(0, |s| s.parameters.len());
        if let Some(sel) = self.table_state.selected() {
            if parameter_count == 0 {
                self.table_state.select(None);
            } else if sel >= parameter_count {
                self.table_state.select(Some(parameter_count - 1));
            }
        }
        let alert_count = self.alerts.len();
        if let Some(sel) = self.alert_list_state.selected() {
            if alert_count == 0 {
                self.alert_list_state.select(None);
            } else if sel >= alert_count {
                self.alert_list_state.select(Some(alert_count - 1));
            }
        }
    }

    fn selected_alert_id(&self) -> Option<u64> {
        self.alert_list_state
            .selected()
            .and_then(|idx| self.alerts.get(idx))
            .map(|alert| alert.id)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.active_panel = self.active_panel.next(),
            KeyCode::BackTab => self.active_panel = self.active_panel.prev(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            KeyCode::Char('s') => {
                if self.active_panel == ActivePanel::Parameters {
                    self.sort_column = self.sort_column.next();
                }
            }
            KeyCode::Char('o') => {
                if self.active_panel == ActivePanel::Parameters {
                    self.sort_order = self.sort_order.toggle();
                }
            }
            KeyCode::Char('a') => {
                if self.active_panel == ActivePanel::Alerts {
                    if let Some(id) = self.selected_alert_id() {
                        self.alert_center.acknowledge_alert(id);
                        self.reload_alerts();
                    }
                }
            }
            KeyCode::Char('c') => {
                if self.active_panel == ActivePanel::Alerts {
                    if let Some(id) = self.selected_alert_id() {
                        self.alert_center.clear_alert(id);
                        self.reload_alerts();
                    }
                }
            }
            KeyCode::Char('C') => {
                if self.active_panel == ActivePanel::Alerts {
                    self.alert_center.clear_all_alerts();
                    self.reload_alerts();
                }
            }
            KeyCode::Char('r') => self.refresh_data(),
            _ => {}
        }
    }

    fn scroll_down(&mut self) {
        match self.active_panel {
            ActivePanel::Dashboard => {}
            ActivePanel::Parameters => {
                let count = self.snapshot.as_ref().map_or(0, |s| s.parameters.len());
                if count > 0 {
                    let i = self.table_state.selected().map_or(0, |i| {
                        if i >= count - 1 { 0 } else { i + 1 }
                    });
                    self.table_state.select(Some(i));
                }
            }
            ActivePanel::Alerts => {
                let count = self.alerts.len();
                if count > 0 {
                    let i = self.alert_list_state.selected().map_or(0, |i| {
                        if i >= count - 1 { 0 } else { i + 1 }
                    });
                    self.alert_list_state.select(Some(i));
                }
            }
        }
    }

    fn scroll_up(&mut self) {
        match self.active_panel {
            ActivePanel::Dashboard => {}
            ActivePanel::Parameters => {
                let count = self.snapshot.as_ref().map_or(0, |s| s.parameters.len());
                if count > 0 {
                    let i = self.table_state.selected().map_or(count - 1, |i| {
                        if i == 0 { count - 1 } else { i - 1 }
                    });
                    self.table_state.select(Some(i));
                }
            }
            ActivePanel::Alerts => {
                let count = self.alerts.len();
                if count > 0 {
                    let i = self.alert_list_state.selected().map_or(count - 1, |i| {
                        if i == 0 { count - 1 } else { i - 1 }
                    });
                    self.alert_list_state.select(Some(i));
                }
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let [dashboard_area, parameter_area, alert_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(10),
        ])
        .areas(body_area);

        if let Some(ref snapshot) = self.snapshot {
            render_dashboard(frame, &snapshot.parameters, dashboard_area);
            render_parameter_list(
                frame,
                &snapshot.parameters,
                self.sort_column,
                self.sort_order,
                &mut self.table_state,
                self.active_panel == ActivePanel::Parameters,
                parameter_area,
            );
        } else {
            let loading = Paragraph::new("Sampling station...")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::bordered().title("Dashboard"));
            frame.render_widget(loading, dashboard_area);
            let loading_params = Paragraph::new("Sampling station...")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::bordered().title("Parameters"));
            frame.render_widget(loading_params, parameter_area);
        }

        render_alert_panel(
            frame,
            &self.alerts,
            &mut self.alert_list_state,
            self.active_panel == ActivePanel::Alerts,
            alert_area,
        );

        self.render_status_bar(frame, status_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let timestamp = self.snapshot.as_ref().map_or_else(
            || "--:--:--".to_string(),
            |s| s.timestamp.format("%H:%M:%S").to_string(),
        );

        let header = Line::from(vec![
            Span::styled(
                " NAIAD ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("\u{2502} "),
            Span::styled(
                format!("[{}]", self.active_panel),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" \u{2502} "),
            Span::styled(timestamp, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(header), area);
    }

    #[allow(clippy::unused_self)]
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let bar = Line::from(vec![
            Span::styled(" q", key_style),
            Span::raw(":quit "),
            Span::styled("Tab", key_style),
            Span::raw(":panel "),
            Span::styled("j/k", key_style),
            Span::raw(":nav "),
            Span::styled("s/o", key_style),
            Span::raw(":sort "),
            Span::styled("a", key_style),
            Span::raw(":ack "),
            Span::styled("c", key_style),
            Span::raw(":clear "),
            Span::styled("C", key_style),
            Span::raw(":clear-all "),
            Span::styled("r", key_style),
            Span::raw(":refresh"),
        ]);

        frame.render_widget(
            Paragraph::new(bar).style(Style::default().bg(Color::DarkGray)),
            area,
        );
    }
}

/// Restore the terminal to its normal state.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        eprintln!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        eprintln!("Failed to leave alternate screen: {e}");
    }
}

/// Launch the interactive dashboard.
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event handling fails.
pub fn run_tui(
    sampler: &dyn Sampler,
    rule_engine: &RuleEngine,
    alert_center: &AlertCenter,
    interval_secs: u64,
) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // Raw mode was enabled but alternate screen failed — restore before returning
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    // Install panic hook so terminal is restored even on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(sampler, rule_engine, alert_center, interval_secs);
    app.refresh_data();

    let result = run_app_loop(&mut terminal, &mut app);

    // Restore terminal on normal exit
    restore_terminal();
    let _ = terminal.show_cursor();

    // Restore the default panic hook
    let _ = std::panic::take_hook();

    result
}

fn run_app_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<'_>,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = app.tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let CrosstermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if last_tick.elapsed() >= app.tick_rate {
            app.refresh_data();
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
