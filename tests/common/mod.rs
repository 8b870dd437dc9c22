//! Shared utilities for integration and load testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use health_aggregator::{Endpoint, EndpointChecker, EndpointSet, HealthAggregator, HttpServer, Shutdown};

/// Read until the end of the request head so the response is not racing
/// unread request bytes.
async fn read_request_head(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    return;
                }
            }
        }
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        204 => "204 No Content",
        301 => "301 Moved Permanently",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a programmable mock backend on an ephemeral port.
///
/// Returns the bound address and a counter of requests received.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, Arc<AtomicUsize>)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = u16> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let f = Arc::new(f);

    let counter = hits.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let counter = counter.clone();
            tokio::spawn(async move {
                read_request_head(&mut socket).await;
                counter.fetch_add(1, Ordering::SeqCst);
                let status = f().await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status_text(status)
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, hits)
}

/// Mock backend that always answers with `status`.
#[allow(dead_code)]
pub async fn start_mock_backend(status: u16) -> (SocketAddr, Arc<AtomicUsize>) {
    start_programmable_backend(move || async move { status }).await
}

/// Mock backend that answers 200 after `delay`.
#[allow(dead_code)]
pub async fn start_slow_backend(delay: Duration) -> (SocketAddr, Arc<AtomicUsize>) {
    start_programmable_backend(move || async move {
        tokio::time::sleep(delay).await;
        200
    })
    .await
}

#[allow(dead_code)]
pub fn endpoint(name: &str, addr: SocketAddr) -> Endpoint {
    Endpoint::new(name, format!("http://{addr}/health"))
}

/// HTTP client that never goes through a system proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Start a health server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_health_server(endpoints: Vec<Endpoint>, timeout: Duration) -> (SocketAddr, Shutdown) {
    let endpoints = EndpointSet::new(endpoints).unwrap();
    let aggregator = HealthAggregator::new(EndpointChecker::new(client())).with_timeout(timeout);

    let shutdown = Shutdown::new();
    let server = HttpServer::new(endpoints, aggregator, &shutdown);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    (addr, shutdown)
}

/// Parse the failed names out of an unhealthy body.
#[allow(dead_code)]
pub fn failed_names(body: &str) -> std::collections::BTreeSet<String> {
    body.trim_end()
        .strip_prefix("500 internal server error - unhealthy: ")
        .expect("unhealthy body")
        .split(", ")
        .map(str::to_string)
        .collect()
}
