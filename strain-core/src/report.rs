//! Result records returned by the workload engines
//!
//! All durations are wall-clock nanoseconds. Sample vectors hold at most
//! [`SAMPLE_LEN`] elements so responses stay small regardless of input size.

use serde::Serialize;

use crate::primes::PrimeMode;

/// Number of elements kept in sample vectors
pub const SAMPLE_LEN: usize = 10;

/// First `SAMPLE_LEN` elements
pub(crate) fn head<T: Clone>(values: &[T]) -> Vec<T> {
    values.iter().take(SAMPLE_LEN).cloned().collect()
}

/// Last `SAMPLE_LEN` elements, in their original order
pub(crate) fn tail<T: Clone>(values: &[T]) -> Vec<T> {
    values[values.len().saturating_sub(SAMPLE_LEN)..].to_vec()
}

#[derive(Debug, Clone, Serialize)]
pub struct PrimeReport {
    pub limit: usize,
    pub mode: PrimeMode,
    pub count: usize,
    pub largest: Option<usize>,
    pub first: Vec<usize>,
    pub last: Vec<usize>,
    pub duration_ns: u64,
}

/// Per-algorithm sort timings
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SortTimings {
    pub quick_sort_ns: u64,
    pub bubble_sort_ns: u64,
    pub merge_sort_ns: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub size: usize,
    pub timings: SortTimings,
    /// Sorting phase only; array generation is excluded
    pub duration_ns: u64,
    /// Whether all three algorithms produced identical output
    pub results_match: bool,
    pub first: Vec<i32>,
    pub last: Vec<i32>,
}

/// Timings of each stage of the matrix pipeline
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MatrixStageTimings {
    pub multiply_ab_ns: u64,
    pub multiply_abc_ns: u64,
    pub transpose_ns: u64,
    pub multiply_transpose_ns: u64,
    pub determinant_ns: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixReport {
    pub size: usize,
    pub stages: MatrixStageTimings,
    /// Trace of the final matrix (wrapping sum of the diagonal)
    pub trace: i64,
    /// Wrapping sum of every cell of the final matrix
    pub checksum: i64,
    /// Side of the leading submatrix the determinant was computed on
    pub determinant_size: usize,
    pub determinant: Option<f64>,
    pub duration_ns: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecursiveReport {
    pub depth: i64,
    pub result: f64,
    pub duration_ns: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParallelReport {
    pub iterations: u64,
    pub threads: usize,
    /// Indices assigned to each worker (`iterations / threads`)
    pub chunk_size: u64,
    /// Indices actually evaluated (`chunk_size * threads`)
    pub processed: u64,
    /// Trailing indices no worker was assigned (`iterations % threads`)
    pub dropped: u64,
    /// Per-worker results in worker order, truncated to `SAMPLE_LEN`
    pub results: Vec<f64>,
    pub duration_ns: u64,
}

impl ParallelReport {
    /// Summarise a completed fork-join run
    pub fn from_results(iterations: u64, threads: usize, results: &[f64], duration_ns: u64) -> Self {
        let chunk_size = if threads == 0 { 0 } else { iterations / threads as u64 };
        let processed = chunk_size * threads as u64;
        Self {
            iterations,
            threads,
            chunk_size,
            processed,
            dropped: iterations - processed,
            results: head(results),
            duration_ns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_and_tail() {
        let values: Vec<u32> = (0..25).collect();
        assert_eq!(head(&values), (0..10).collect::<Vec<_>>());
        assert_eq!(tail(&values), (15..25).collect::<Vec<_>>());

        let short = [1, 2, 3];
        assert_eq!(head(&short), vec![1, 2, 3]);
        assert_eq!(tail(&short), vec![1, 2, 3]);
        assert!(tail::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_parallel_report_remainder() {
        let report = ParallelReport::from_results(10, 3, &[1.0, 2.0, 3.0], 5);
        assert_eq!(report.chunk_size, 3);
        assert_eq!(report.processed, 9);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.results, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parallel_report_without_workers() {
        let report = ParallelReport::from_results(10, 0, &[], 0);
        assert_eq!(report.processed, 0);
        assert_eq!(report.dropped, 10);
    }

    #[test]
    fn test_reports_serialize_to_json() {
        let report = RecursiveReport { depth: 10, result: 55.0, duration_ns: 12 };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["depth"], 10);
        assert_eq!(json["result"], 55.0);
    }
}
