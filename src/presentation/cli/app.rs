use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// naiad — water-quality monitoring daemon
///
/// Samples station parameters, evaluates thresholds and trends,
/// and dispatches alerts to the configured channels.
#[derive(Parser, Debug)]
#[command(name = "naiad")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the monitoring daemon
    #[command(alias = "d")]
    Daemon,

    /// Show current station status
    #[command(alias = "s")]
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive dashboard
    #[command(alias = "w")]
    Watch {
        /// Refresh interval in seconds (default: config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Run a numeric task on the background worker
    #[command(alias = "c")]
    Compute {
        #[command(subcommand)]
        task: ComputeTask,
    },
}

/// Tasks accepted by the numeric worker
#[derive(Subcommand, Debug)]
pub enum ComputeTask {
    /// All primes up to the limit (sieve of Eratosthenes)
    Primes {
        /// Upper bound, inclusive
        limit: u64,
    },

    /// Summary statistics over a list of values
    Stats {
        /// Values to summarize
        #[arg(required = true, num_args = 1..)]
        values: Vec<f64>,
    },

    /// Fibonacci number (naive recursion — large inputs run forever)
    Fib {
        /// Index into the sequence
        n: u32,
    },
}
