use crate::infrastructure::compute::{NumericWorker, WorkerRequest, WorkerResponse};
use crate::presentation::cli::app::ComputeTask;

/// Run one task on the numeric worker and print the raw reply.
///
/// The reply is printed in the worker's wire format, so a failing task shows
/// up as `"success": false` with its error message rather than aborting.
///
/// # Errors
///
/// Returns an error if the worker thread is gone or the reply cannot be
/// serialized.
pub fn run_compute(worker: &NumericWorker, task: &ComputeTask) -> anyhow::Result<()> {
    let response = dispatch(worker, task)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn dispatch(worker: &NumericWorker, task: &ComputeTask) -> anyhow::Result<WorkerResponse> {
    let request = match task {
        ComputeTask::Primes { limit } => WorkerRequest::find_primes(*limit),
        ComputeTask::Stats { values } => WorkerRequest::calculate_stats(values),
        ComputeTask::Fib { n } => WorkerRequest::fibonacci(*n),
    };
    Ok(worker.request(request)?)
}
