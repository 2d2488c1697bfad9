pub mod routines;
pub mod worker;

pub use routines::{SummaryStats, fibonacci, find_primes, summary_stats};
pub use worker::{NumericWorker, WorkerError, WorkerRequest, WorkerResponse};
