//! Load testing for the health endpoint.

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use health_aggregator::health::CHECK_TIMEOUT;

mod common;

#[tokio::test]
async fn test_load_performance() {
    // 1. Setup mock endpoints
    let mut endpoints = Vec::new();
    let mut counters = Vec::new();
    for i in 0..8 {
        let (addr, hits) = common::start_mock_backend(200).await;
        endpoints.push(common::endpoint(&format!("dep-{i}"), addr));
        counters.push(hits);
    }
    let endpoint_count = endpoints.len();

    // 2. Start health server
    let (addr, shutdown) = common::start_health_server(endpoints, CHECK_TIMEOUT).await;

    // 3. Run load test
    let concurrency = 10;
    let requests_per_task = 10;
    let total_requests = concurrency * requests_per_task;

    let client = common::client();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for _ in 0..concurrency {
        let client = client.clone();
        let url = format!("http://{addr}/health");
        tasks.push(tokio::spawn(async move {
            let mut latencies = Vec::new();
            for _ in 0..requests_per_task {
                let req_start = Instant::now();
                if let Ok(res) = client.get(&url).send().await {
                    if res.status().is_success() {
                        latencies.push(req_start.elapsed());
                    }
                }
            }
            latencies
        }));
    }

    let mut all_latencies = Vec::new();
    for task in tasks {
        all_latencies.extend(task.await.unwrap());
    }
    let duration = start.elapsed();

    assert_eq!(all_latencies.len(), total_requests, "every request should be healthy");

    // Every request probes every endpoint exactly once.
    let probes: usize = counters.iter().map(|c| c.load(Ordering::SeqCst)).sum();
    assert_eq!(probes, total_requests * endpoint_count);

    all_latencies.sort();
    let p50 = all_latencies[all_latencies.len() / 2];
    let p99 = all_latencies[(all_latencies.len() as f64 * 0.99) as usize];
    assert!(p99 < Duration::from_secs(5), "p99 {p99:?}");

    println!("\n--- Load Test Results ---");
    println!("Total Requests: {}", total_requests);
    println!("Endpoints:      {}", endpoint_count);
    println!("Concurrency:    {}", concurrency);
    println!("Total Duration: {:?}", duration);
    println!("P50 Latency:    {:?}", p50);
    println!("P99 Latency:    {:?}", p99);
    println!("-------------------------\n");

    shutdown.trigger();
}
