//! Partitioned numeric accumulation with a fork-join barrier.
//!
//! The iteration space `[0, iterations)` is split into `threads` contiguous
//! chunks of `iterations / threads` indices. The division truncates, and
//! the trailing `iterations % threads` indices are never assigned to any
//! worker. That remainder is dropped deliberately and reported as such.

use serde::Serialize;
use std::time::Instant;

use crate::report::ParallelReport;

/// One worker's share of the iteration space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParallelTask {
    pub index: usize,
    pub start: u64,
    pub count: u64,
}

impl ParallelTask {
    /// One past the last index of this chunk
    pub fn end(&self) -> u64 {
        self.start + self.count
    }
}

/// Split `[0, iterations)` into `threads` equal contiguous chunks.
///
/// Returns no tasks when `threads` is zero.
pub fn partition(iterations: u64, threads: usize) -> Vec<ParallelTask> {
    if threads == 0 {
        return Vec::new();
    }

    let count = iterations / threads as u64;
    (0..threads)
        .map(|index| ParallelTask {
            index,
            start: index as u64 * count,
            count,
        })
        .collect()
}

/// Evaluate one chunk. Touches nothing but its own locals.
pub fn accumulate_chunk(task: &ParallelTask, iterations: u64) -> f64 {
    let mut sum = 0.0f64;
    for i in task.start..task.end() {
        let x = i as f64 / iterations as f64;
        sum += x.sin() * x.cos() * (x * x).tan() + (x * x * x).sin().abs().sqrt();
        sum = if i % 2 == 0 {
            sum.powf(1.01)
        } else {
            (sum.powi(2) + 1.0).sqrt()
        };
    }
    sum
}

/// Fork one scoped thread per task, join them all, and return their
/// results in worker-index order.
pub fn parallel_accumulate(iterations: u64, threads: usize) -> Vec<f64> {
    let tasks = partition(iterations, threads);

    std::thread::scope(|scope| {
        let handles: Vec<_> = tasks
            .iter()
            .map(|task| scope.spawn(move || accumulate_chunk(task, iterations)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}

/// Run [`parallel_accumulate`] and summarise it
pub fn parallel_report(iterations: u64, threads: usize) -> ParallelReport {
    let start = Instant::now();
    let results = parallel_accumulate(iterations, threads);
    let duration_ns = start.elapsed().as_nanos() as u64;

    ParallelReport::from_results(iterations, threads, &results, duration_ns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_contiguous_and_non_overlapping() {
        let tasks = partition(1_000, 4);
        assert_eq!(tasks.len(), 4);
        for (i, task) in tasks.iter().enumerate() {
            assert_eq!(task.index, i);
            assert_eq!(task.count, 250);
        }
        for pair in tasks.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }
        assert_eq!(tasks[0].start, 0);
        assert_eq!(tasks[3].end(), 1_000);
    }

    #[test]
    fn test_partition_drops_remainder() {
        let tasks = partition(10, 3);
        let processed: u64 = tasks.iter().map(|t| t.count).sum();

        assert_eq!(processed, 9);
        assert_eq!(tasks.last().map(ParallelTask::end), Some(9));
        assert!(tasks.iter().all(|t| !(t.start..t.end()).contains(&9)));
    }

    #[test]
    fn test_partition_with_more_threads_than_iterations() {
        let tasks = partition(3, 8);
        assert_eq!(tasks.len(), 8);
        assert!(tasks.iter().all(|t| t.count == 0));
    }

    #[test]
    fn test_partition_without_threads() {
        assert!(partition(100, 0).is_empty());
        assert!(parallel_accumulate(100, 0).is_empty());
    }

    #[test]
    fn test_parallel_accumulate_result_count() {
        assert_eq!(parallel_accumulate(1_000, 4).len(), 4);
        assert_eq!(parallel_accumulate(10, 3).len(), 3);
    }

    #[test]
    fn test_results_follow_worker_order() {
        let results = parallel_accumulate(400, 4);
        let expected: Vec<f64> = partition(400, 4)
            .iter()
            .map(|task| accumulate_chunk(task, 400))
            .collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_empty_chunk_accumulates_to_zero() {
        let task = ParallelTask { index: 0, start: 0, count: 0 };
        assert_eq!(accumulate_chunk(&task, 10), 0.0);
    }

    #[test]
    fn test_parallel_report_counts() {
        let report = parallel_report(10, 3);
        assert_eq!(report.threads, 3);
        assert_eq!(report.processed, 9);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.results.len(), 3);
    }
}
