use std::time::Duration;

use crate::application::services::monitor::MonitorService;

/// Run the monitoring daemon loop at the configured interval.
///
/// The daemon runs until it receives a SIGINT signal (Ctrl+C) via
/// [`tokio::signal::ctrl_c()`], at which point it shuts down gracefully and
/// returns `Ok(())`. Errors during individual monitoring cycles are logged
/// but do not stop the daemon.
///
/// # Errors
///
/// Returns an error if the shutdown signal handler cannot be installed.
pub async fn run_daemon(service: &MonitorService<'_>, interval_secs: u64) -> anyhow::Result<()> {
    tracing::info!("Daemon started (interval: {interval_secs}s)");
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match service.run_once() {
                    Ok(result) => {
                        tracing::info!(
                            "Cycle done: {} parameter(s) sampled, {} alert(s)",
                            result.parameters_sampled,
                            result.alerts_count
                        );
                    }
                    Err(e) => {
                        tracing::error!("Monitoring cycle failed: {e}");
                    }
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, closing down");
                println!("\nStopping naiad...");
                break;
            }
        }
    }
    Ok(())
}
