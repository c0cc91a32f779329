//! End-to-end tests that run the real server on a loopback socket

use anyhow::Result;
use serde_json::Value;
use std::net::SocketAddr;
use std::time::Duration;
use strain_config::StrainConfig;
use strain_server::startup::Server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

fn test_config() -> StrainConfig {
    let mut config = StrainConfig::default();
    config.server.bind_address = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.shutdown_timeout = Duration::from_secs(2);
    config.execution.compute_threads = 2;
    config.execution.job_timeout = Duration::from_secs(30);
    config.workloads.sort.max_size = 2_000;
    config.workloads.matrix.max_size = 20;
    config.workloads.recursive.max_depth = 20;
    config.workloads.parallel.max_iterations = 100_000;
    config
}

/// Send a bare HTTP/1.1 GET and split the reply into status line and body
async fn http_get(addr: SocketAddr, path: &str) -> Result<(String, String)> {
    let mut stream = TcpStream::connect(addr).await?;
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        path, addr
    );
    stream.write_all(request.as_bytes()).await?;

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await?;
    let text = String::from_utf8(raw)?;

    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
    let status_line = head.lines().next().unwrap_or_default().to_string();
    Ok((status_line, body.to_string()))
}

struct RunningServer {
    addr: SocketAddr,
    pool: strain_execution::ComputePool,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<Result<()>>,
}

async fn start_server(config: StrainConfig) -> Result<RunningServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = Server::new(config)?;
    let pool = server.context().pool.clone();

    let (shutdown, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve(listener, async move {
        rx.await.ok();
    }));

    Ok(RunningServer {
        addr,
        pool,
        shutdown,
        handle,
    })
}

#[tokio::test]
async fn test_serve_primes_over_tcp() -> Result<()> {
    let running = start_server(test_config()).await?;

    let (status, body) = http_get(running.addr, "/cpu/primes?limit=30").await?;
    assert!(status.contains("200 OK"), "unexpected status line: {}", status);

    let json: Value = serde_json::from_str(&body)?;
    assert_eq!(json["data"]["count"], 10);
    assert_eq!(
        json["data"]["first"],
        serde_json::json!([2, 3, 5, 7, 11, 13, 17, 19, 23, 29])
    );

    running.shutdown.send(()).ok();
    running.handle.await??;
    assert!(running.pool.is_closed());
    Ok(())
}

#[tokio::test]
async fn test_serve_every_workload_over_tcp() -> Result<()> {
    let running = start_server(test_config()).await?;

    for path in [
        "/cpu/sort?size=500",
        "/cpu/matrix?size=12",
        "/cpu/recursive?depth=15",
        "/cpu/parallel?iterations=1000&threads=4",
        "/health/live",
    ] {
        let (status, body) = http_get(running.addr, path).await?;
        assert!(status.contains("200 OK"), "{} returned {}", path, status);
        let json: Value = serde_json::from_str(&body)?;
        assert!(json.is_object(), "{} returned non-JSON body", path);
    }

    let (status, body) = http_get(running.addr, "/metrics/prometheus").await?;
    assert!(status.contains("200 OK"));
    assert!(body.contains("strain_workload_requests_total{workload=\"sort\"} 1"));
    assert!(body.contains("strain_workload_requests_total{workload=\"parallel\"} 1"));

    running.shutdown.send(()).ok();
    running.handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_serve_reports_bad_request_and_not_found() -> Result<()> {
    let running = start_server(test_config()).await?;

    let (status, body) = http_get(running.addr, "/cpu/primes?limit=lots").await?;
    assert!(status.contains("400"), "unexpected status line: {}", status);
    let json: Value = serde_json::from_str(&body)?;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");

    let (status, _) = http_get(running.addr, "/cpu/memory").await?;
    assert!(status.contains("404"), "unexpected status line: {}", status);

    running.shutdown.send(()).ok();
    running.handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_shutdown_stops_accepting_connections() -> Result<()> {
    let running = start_server(test_config()).await?;
    let addr = running.addr;

    let (status, _) = http_get(addr, "/health").await?;
    assert!(status.contains("200 OK"));

    running.shutdown.send(()).ok();
    tokio::time::timeout(Duration::from_secs(5), running.handle).await???;

    assert!(running.pool.is_closed());
    assert!(TcpStream::connect(addr).await.is_err());
    Ok(())
}
