use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use strain_execution::{ComputePool, ExecutionError};

fn pool(capacity: usize) -> ComputePool {
    ComputePool::with_limits(capacity, Duration::from_secs(30))
}

#[tokio::test]
async fn test_run_returns_job_output() {
    let pool = pool(2);
    let primes = pool
        .run("primes", || strain_core::sieve(30))
        .await
        .unwrap();

    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

    let stats = pool.stats();
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.in_flight, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrency_is_bounded_by_capacity() {
    let pool = pool(2);
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let jobs = (0..6).map(|_| {
        let running = Arc::clone(&running);
        let peak = Arc::clone(&peak);
        pool.run("busy", move || {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(30));
            running.fetch_sub(1, Ordering::SeqCst);
        })
    });

    for outcome in join_all(jobs).await {
        assert!(outcome.is_ok());
    }

    assert!(peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(pool.stats().completed, 6);
}

#[tokio::test]
async fn test_timeout_abandons_job_but_keeps_permit() {
    let pool = ComputePool::with_limits(1, Duration::from_millis(50));

    let err = pool
        .run("sleepy", || std::thread::sleep(Duration::from_millis(500)))
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(
        err,
        ExecutionError::Timeout {
            label: "sleepy",
            timeout: Duration::from_millis(50)
        }
    );

    // The abandoned job still occupies the only permit
    assert_eq!(pool.stats().in_flight, 1);
    let err = pool.run("queued", || 1).await.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(pool.stats().timed_out, 2);
}

#[tokio::test]
async fn test_panicking_job_is_reported() {
    let pool = pool(1);
    let err = pool
        .run("faulty", || -> u32 { panic!("matrix exploded") })
        .await
        .unwrap_err();

    match err {
        ExecutionError::Panicked { label, message } => {
            assert_eq!(label, "faulty");
            assert_eq!(message, "matrix exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(pool.stats().failed, 1);
    // The permit was released with the panicking job
    assert_eq!(pool.run("after", || 5).await.unwrap(), 5);
}

#[tokio::test]
async fn test_closed_pool_rejects_jobs() {
    let pool = pool(1);
    pool.close();

    assert!(pool.is_closed());
    assert_eq!(pool.run("late", || ()).await, Err(ExecutionError::PoolClosed));
    assert_eq!(
        pool.parallel_accumulate(100, 2).await,
        Err(ExecutionError::PoolClosed)
    );
    assert!(pool.stats().closed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_accumulate_matches_core_in_worker_order() {
    let pool = pool(1);

    let results = pool.parallel_accumulate(1_000, 4).await.unwrap();
    assert_eq!(results, strain_core::parallel_accumulate(1_000, 4));
    assert_eq!(results.len(), 4);
}

#[tokio::test]
async fn test_parallel_report_drops_remainder() {
    let pool = pool(1);
    let report = pool.parallel_report(10, 3).await.unwrap();

    assert_eq!(report.threads, 3);
    assert_eq!(report.chunk_size, 3);
    assert_eq!(report.processed, 9);
    assert_eq!(report.dropped, 1);
    assert_eq!(report.results.len(), 3);
}

#[tokio::test]
async fn test_parallel_without_threads_is_empty() {
    let pool = pool(1);
    assert!(pool.parallel_accumulate(100, 0).await.unwrap().is_empty());
}
