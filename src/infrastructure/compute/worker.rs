use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use super::routines;

/// A task request on the worker channel.
///
/// The wire shape is `{ "type": string, "data": any }`; known types are
/// `findPrimes`, `calculateStats`, and `fibonacci`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRequest {
    #[serde(rename = "type")]
    pub task: String,
    #[serde(default)]
    pub data: Value,
}

impl WorkerRequest {
    #[must_use]
    pub fn find_primes(limit: u64) -> Self {
        Self {
            task: "findPrimes".to_string(),
            data: json!(limit),
        }
    }

    #[must_use]
    pub fn calculate_stats(data: &[f64]) -> Self {
        Self {
            task: "calculateStats".to_string(),
            data: json!(data),
        }
    }

    #[must_use]
    pub fn fibonacci(n: u32) -> Self {
        Self {
            task: "fibonacci".to_string(),
            data: json!(n),
        }
    }
}

/// The single reply every request produces: `{ "success": bool,
/// "result"?: any, "error"?: string }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WorkerResponse {
    fn ok(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("numeric worker is gone")]
    Disconnected,
}

struct Job {
    request: WorkerRequest,
    reply: Sender<WorkerResponse>,
}

/// Dedicated thread for CPU-bound numeric tasks.
///
/// Requests are processed strictly in send order and each yields exactly one
/// response. Task failures (unknown type, malformed data) come back as
/// `success: false` replies; nothing panics across the channel. There is no
/// timeout or cancellation: a long-running task (a large `fibonacci` input)
/// occupies the worker until it finishes.
pub struct NumericWorker {
    jobs: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl NumericWorker {
    #[must_use]
    pub fn spawn() -> Self {
        let (jobs, inbox) = mpsc::channel::<Job>();
        let handle = std::thread::spawn(move || {
            while let Ok(job) = inbox.recv() {
                let response = execute(&job.request);
                // The caller may have dropped its receiver (fire-and-forget).
                let _ = job.reply.send(response);
            }
        });
        Self {
            jobs: Some(jobs),
            handle: Some(handle),
        }
    }

    /// Submit a request and get the reply receiver back. Dropping the
    /// receiver turns the request into fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Disconnected` if the worker thread has exited.
    pub fn submit(&self, request: WorkerRequest) -> Result<Receiver<WorkerResponse>, WorkerError> {
        let (reply, response_rx) = mpsc::channel();
        self.jobs
            .as_ref()
            .ok_or(WorkerError::Disconnected)?
            .send(Job { request, reply })
            .map_err(|_| WorkerError::Disconnected)?;
        Ok(response_rx)
    }

    /// Submit a request and block until its reply arrives.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Disconnected` if the worker thread has exited.
    pub fn request(&self, request: WorkerRequest) -> Result<WorkerResponse, WorkerError> {
        let response_rx = self.submit(request)?;
        response_rx.recv().map_err(|_| WorkerError::Disconnected)
    }
}

impl Drop for NumericWorker {
    fn drop(&mut self) {
        // Closing the job channel ends the thread's receive loop.
        drop(self.jobs.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn execute(request: &WorkerRequest) -> WorkerResponse {
    match request.task.as_str() {
        "findPrimes" => find_primes_task(&request.data),
        "calculateStats" => calculate_stats_task(&request.data),
        "fibonacci" => fibonacci_task(&request.data),
        other => WorkerResponse::fail(format!("unknown task type: {other}")),
    }
}

fn find_primes_task(data: &Value) -> WorkerResponse {
    let Some(limit) = data.as_u64() else {
        return WorkerResponse::fail(format!(
            "findPrimes expects a non-negative integer limit, got {data}"
        ));
    };
    match usize::try_from(limit) {
        Ok(limit) => WorkerResponse::ok(json!(routines::find_primes(limit))),
        Err(_) => WorkerResponse::fail(format!("findPrimes limit {limit} does not fit in memory")),
    }
}

fn calculate_stats_task(data: &Value) -> WorkerResponse {
    match serde_json::from_value::<Vec<f64>>(data.clone()) {
        Ok(values) => {
            let stats = routines::summary_stats(&values);
            WorkerResponse::ok(json!({
                "mean": finite_or_null(stats.mean),
                "median": finite_or_null(stats.median),
                "min": finite_or_null(stats.min),
                "max": finite_or_null(stats.max),
                "sum": finite_or_null(stats.sum),
                "count": stats.count,
            }))
        }
        Err(e) => WorkerResponse::fail(format!("calculateStats expects a numeric array: {e}")),
    }
}

fn fibonacci_task(data: &Value) -> WorkerResponse {
    let Some(n) = data.as_u64().and_then(|n| u32::try_from(n).ok()) else {
        return WorkerResponse::fail(format!(
            "fibonacci expects a non-negative integer, got {data}"
        ));
    };
    WorkerResponse::ok(json!(routines::fibonacci(n)))
}

// Non-finite floats have no JSON representation; render them as null, the
// same way JSON.stringify does.
fn finite_or_null(v: f64) -> Value {
    if v.is_finite() { json!(v) } else { Value::Null }
}
