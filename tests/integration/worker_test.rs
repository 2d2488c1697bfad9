#![allow(clippy::expect_used)]

use naiad::infrastructure::compute::{NumericWorker, WorkerRequest, WorkerResponse};
use serde_json::{Value, json};

#[test]
fn every_request_yields_exactly_one_reply() {
    let worker = NumericWorker::spawn();
    let receivers: Vec<_> = (0..10)
        .map(|n| worker.submit(WorkerRequest::fibonacci(n)).expect("submit"))
        .collect();

    for (n, rx) in receivers.into_iter().enumerate() {
        let response = rx.recv().expect("one reply");
        assert!(response.success);
        // A second reply never arrives.
        assert!(rx.try_recv().is_err());
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34][n];
        assert_eq!(response.result, Some(json!(expected)));
    }
}

#[test]
fn wire_contract_roundtrip() {
    let worker = NumericWorker::spawn();

    // Requests arrive as JSON from the outside world.
    let request: WorkerRequest =
        serde_json::from_str(r#"{"type":"findPrimes","data":30}"#).expect("parse request");
    let response = worker.request(request).expect("request");
    assert!(response.success);
    assert_eq!(
        response.result,
        Some(json!([2, 3, 5, 7, 11, 13, 17, 19, 23, 29]))
    );

    // And replies serialize back without null noise.
    let wire = serde_json::to_string(&response).expect("serialize response");
    assert!(wire.contains("\"success\":true"));
    assert!(!wire.contains("\"error\""));
}

#[test]
fn stats_task_matches_the_contract_values() {
    let worker = NumericWorker::spawn();
    let response = worker
        .request(WorkerRequest::calculate_stats(&[1.0, 2.0, 3.0, 4.0]))
        .expect("request");
    assert!(response.success);
    let result = response.result.expect("result");
    assert_eq!(result["mean"], json!(2.5));
    assert_eq!(result["median"], json!(2.5));
    assert_eq!(result["min"], json!(1.0));
    assert_eq!(result["max"], json!(4.0));
    assert_eq!(result["sum"], json!(10.0));
    assert_eq!(result["count"], json!(4));
}

#[test]
fn unknown_type_is_always_a_structured_failure() {
    let worker = NumericWorker::spawn();
    for bad_type in ["", "primes", "Fibonacci", "calculate_stats"] {
        let request = WorkerRequest {
            task: bad_type.to_string(),
            data: Value::Null,
        };
        let response: WorkerResponse = worker.request(request).expect("reply");
        assert!(!response.success, "type {bad_type:?} must fail");
        assert!(response.result.is_none());
        assert!(response.error.is_some());
    }
}

#[test]
fn malformed_payloads_never_kill_the_worker() {
    let worker = NumericWorker::spawn();
    let bad_requests = [
        json!({"type": "findPrimes", "data": -1}),
        json!({"type": "findPrimes", "data": "ten"}),
        json!({"type": "fibonacci", "data": null}),
        json!({"type": "calculateStats", "data": 42}),
        json!({"type": "calculateStats", "data": ["a", "b"]}),
    ];

    for raw in bad_requests {
        let request: WorkerRequest = serde_json::from_value(raw).expect("parse request");
        let response = worker.request(request).expect("reply");
        assert!(!response.success);
        assert!(response.error.is_some());
    }

    // The worker keeps serving after the whole barrage.
    let response = worker
        .request(WorkerRequest::find_primes(10))
        .expect("follow-up");
    assert_eq!(response.result, Some(json!([2, 3, 5, 7])));
}

#[test]
fn replies_preserve_send_order() {
    let worker = NumericWorker::spawn();
    let slow = worker.submit(WorkerRequest::fibonacci(24)).expect("submit");
    let fast = worker.submit(WorkerRequest::fibonacci(1)).expect("submit");

    // FIFO: the fast request cannot overtake the slow one, so by the time
    // its reply arrives the slow reply must already be waiting.
    let fast_reply = fast.recv().expect("fast reply");
    let slow_reply = slow.try_recv().expect("slow reply already delivered");
    assert_eq!(slow_reply.result, Some(json!(46_368)));
    assert_eq!(fast_reply.result, Some(json!(1)));
}
