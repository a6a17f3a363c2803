//! Performance benchmarks for the Audit Calculation Engine.
//!
//! This benchmark suite covers both layers of the engine:
//! - Each calculator called directly, including its audit explanation
//! - A single request through the HTTP router
//! - A batch of requests spread over all five tools
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use audit_engine::api::{AppState, create_router};
use audit_engine::calculation::perform_audit;
use audit_engine::config::{AuditRules, ConfigLoader};
use audit_engine::intake::sample_request;
use audit_engine::models::AuditTool;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
    AppState::new(config)
}

/// Builds the JSON body and route for the sample figures of `tool`, with
/// the first amount shifted by `offset` so batches do not repeat.
fn request_body(tool: AuditTool, offset: i64) -> (String, String) {
    let mut request = serde_json::to_value(sample_request(tool)).expect("Failed to encode request");
    let input = request["input"]
        .as_object_mut()
        .expect("Sample input is an object");
    if let Some((_, first)) = input.iter_mut().next() {
        let amount: Decimal = serde_json::from_value(first.clone()).expect("Amount is a decimal");
        *first = serde_json::to_value(amount + Decimal::from(offset)).expect("Amount encodes");
    }
    (tool.route(), request["input"].to_string())
}

/// Benchmark: Each calculator with its audit explanation, no HTTP.
fn bench_calculators(c: &mut Criterion) {
    let rules = AuditRules::default();
    let mut group = c.benchmark_group("calculators");

    for tool in AuditTool::ALL {
        let request = sample_request(tool);
        group.bench_with_input(BenchmarkId::new("perform_audit", tool), &request, |b, request| {
            b.iter(|| black_box(perform_audit(black_box(request), &rules)))
        });
    }

    group.finish();
}

/// Benchmark: Single opening balance request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let (uri, body) = request_body(AuditTool::OpeningBalance, 0);

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(uri.as_str())
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batches of requests cycling through all five tools.
fn bench_batches(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let mut group = c.benchmark_group("batch_processing");

    for batch_size in [100usize, 1000] {
        let requests: Vec<(String, String)> = AuditTool::ALL
            .iter()
            .cycle()
            .take(batch_size)
            .enumerate()
            .map(|(i, tool)| request_body(*tool, i as i64))
            .collect();

        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::new("requests", batch_size),
            &requests,
            |b, requests| {
                b.to_async(&rt).iter(|| async {
                    let mut results = Vec::with_capacity(requests.len());
                    for (uri, body) in requests {
                        let router = create_router(state.clone());
                        let response = router
                            .oneshot(
                                Request::builder()
                                    .method("POST")
                                    .uri(uri.as_str())
                                    .header("Content-Type", "application/json")
                                    .body(Body::from(body.clone()))
                                    .unwrap(),
                            )
                            .await
                            .unwrap();
                        results.push(response);
                    }
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calculators,
    bench_single_request,
    bench_batches,
);
criterion_main!(benches);
