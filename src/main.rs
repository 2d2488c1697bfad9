use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use naiad::application::config::AppConfig;
use naiad::application::services::alert_center::AlertCenter;
use naiad::application::services::monitor::MonitorService;
use naiad::domain::rules::{RuleEngine, default_rules};
use naiad::infrastructure::compute::NumericWorker;
use naiad::infrastructure::notifications::composite::CompositeNotifier;
use naiad::infrastructure::notifications::desktop::DesktopNotifier;
use naiad::infrastructure::notifications::log_file::LogFileNotifier;
use naiad::infrastructure::notifications::terminal::TerminalNotifier;
use naiad::infrastructure::samplers::simulated::SimulatedStation;
use naiad::presentation::cli::app::{Cli, Commands};
use naiad::presentation::cli::commands::compute::run_compute;
use naiad::presentation::cli::commands::daemon::run_daemon;
use naiad::presentation::cli::commands::status::run_status;
use naiad::presentation::tui::app::run_tui;

fn print_banner() {
    println!("{}", "━".repeat(42).cyan());
    println!("{}", "  NAIAD — Water Quality Monitor".bold().cyan());
    println!("{}", "━".repeat(42).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_notifier(config: &AppConfig) -> CompositeNotifier {
    let mut notifiers: Vec<Box<dyn naiad::domain::ports::notifier::Notifier>> = Vec::new();
    if config.notifications.terminal {
        notifiers.push(Box::new(TerminalNotifier::new(config.notifications.sound)));
    }
    if config.notifications.desktop {
        notifiers.push(Box::new(DesktopNotifier::new()));
    }
    if let Some(ref path) = config.notifications.log_file {
        notifiers.push(Box::new(LogFileNotifier::new(path)));
    }
    CompositeNotifier::new(notifiers)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI — main.rs is the only place that knows concrete types
    let station = SimulatedStation::new(
        config.simulation.step_fraction(),
        config.general.history_window,
        config.simulation.seed,
    );
    let rule_engine = RuleEngine::new(default_rules());
    let alert_center = AlertCenter::new();

    match cli.command {
        Some(Commands::Daemon) | None => {
            let notifier = build_notifier(&config);
            print_banner();
            let service = MonitorService::new(&station, &rule_engine, &alert_center, &notifier);
            run_daemon(&service, config.general.interval_secs).await?;
        }
        Some(Commands::Status { json }) => {
            let worker = NumericWorker::spawn();
            run_status(&station, &worker, json)?;
        }
        Some(Commands::Watch { interval }) => {
            let interval_secs = interval.unwrap_or(config.general.interval_secs);
            run_tui(&station, &rule_engine, &alert_center, interval_secs)?;
        }
        Some(Commands::Compute { task }) => {
            let worker = NumericWorker::spawn();
            run_compute(&worker, &task)?;
        }
    }

    Ok(())
}
