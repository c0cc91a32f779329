//! Query parameters for the `/cpu/*` endpoints
//!
//! Parameters arrive as signed integers so that negative values can be
//! clamped instead of rejected. Only text that is not an integer at all is
//! a client error.

use serde::Deserialize;
use strain_config::{MatrixLimits, ParallelLimits, PrimeLimits, RecursiveLimits, SortLimits};

/// Smallest array the sort endpoint will generate
pub const MIN_SORT_SIZE: u64 = 1;
/// Smallest matrix the matrix endpoint will generate
pub const MIN_MATRIX_SIZE: u64 = 1;
/// Smallest iteration space for the parallel endpoint
pub const MIN_ITERATIONS: u64 = 1;
/// The parallel endpoint always forks at least one worker
pub const MIN_THREADS: u64 = 1;

/// Missing takes `default`; present is clamped into `[min, max]`, with
/// negatives landing on `min`.
pub fn resolve_param(value: Option<i64>, default: u64, min: u64, max: u64) -> u64 {
    let max = max.max(min);
    match value {
        None => default.clamp(min, max),
        Some(v) if v < 0 => min,
        Some(v) => (v as u64).clamp(min, max),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrimesQuery {
    pub limit: Option<i64>,
}

impl PrimesQuery {
    pub fn resolve(&self, limits: &PrimeLimits) -> u64 {
        resolve_param(self.limit, limits.default_limit, 0, limits.max_limit)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortQuery {
    pub size: Option<i64>,
}

impl SortQuery {
    pub fn resolve(&self, limits: &SortLimits) -> u64 {
        resolve_param(self.size, limits.default_size, MIN_SORT_SIZE, limits.max_size)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatrixQuery {
    pub size: Option<i64>,
}

impl MatrixQuery {
    pub fn resolve(&self, limits: &MatrixLimits) -> u64 {
        resolve_param(self.size, limits.default_size, MIN_MATRIX_SIZE, limits.max_size)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecursiveQuery {
    pub depth: Option<i64>,
}

impl RecursiveQuery {
    pub fn resolve(&self, limits: &RecursiveLimits) -> u64 {
        resolve_param(
            self.depth,
            limits.default_depth,
            limits.min_depth,
            limits.max_depth,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParallelQuery {
    pub iterations: Option<i64>,
    pub threads: Option<i64>,
}

impl ParallelQuery {
    /// `(iterations, threads)`
    pub fn resolve(&self, limits: &ParallelLimits) -> (u64, u64) {
        let iterations = resolve_param(
            self.iterations,
            limits.default_iterations,
            MIN_ITERATIONS,
            limits.max_iterations,
        );
        let threads = resolve_param(
            self.threads,
            limits.default_threads,
            MIN_THREADS,
            limits.max_threads,
        );
        (iterations, threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_param() {
        assert_eq!(resolve_param(None, 30, 10, 40), 30);
        assert_eq!(resolve_param(Some(25), 30, 10, 40), 25);
        assert_eq!(resolve_param(Some(100), 30, 10, 40), 40);
        assert_eq!(resolve_param(Some(3), 30, 10, 40), 10);
        assert_eq!(resolve_param(Some(-7), 30, 10, 40), 10);
        assert_eq!(resolve_param(Some(i64::MAX), 30, 10, 40), 40);
    }

    #[test]
    fn test_resolve_param_with_inverted_bounds() {
        assert_eq!(resolve_param(Some(50), 5, 10, 4), 10);
        assert_eq!(resolve_param(None, 5, 10, 4), 10);
    }

    #[test]
    fn test_recursive_depth_clamped_to_configured_range() {
        let limits = RecursiveLimits::default();
        assert_eq!(RecursiveQuery { depth: None }.resolve(&limits), 30);
        assert_eq!(RecursiveQuery { depth: Some(5) }.resolve(&limits), 10);
        assert_eq!(RecursiveQuery { depth: Some(45) }.resolve(&limits), 40);
    }

    #[test]
    fn test_matrix_size_clamped() {
        let limits = MatrixLimits::default();
        assert_eq!(MatrixQuery { size: Some(10_000) }.resolve(&limits), 500);
        assert_eq!(MatrixQuery { size: Some(0) }.resolve(&limits), 1);
    }

    #[test]
    fn test_parallel_defaults_and_clamps() {
        let limits = ParallelLimits::default();
        let defaults = ParallelQuery::default().resolve(&limits);
        assert_eq!(defaults, (1_000_000, 4));

        let query = ParallelQuery {
            iterations: Some(50_000_000),
            threads: Some(0),
        };
        assert_eq!(query.resolve(&limits), (10_000_000, 1));
    }

    #[test]
    fn test_primes_limit_may_be_zero() {
        let limits = PrimeLimits::default();
        assert_eq!(PrimesQuery { limit: Some(-1) }.resolve(&limits), 0);
        assert_eq!(PrimesQuery { limit: None }.resolve(&limits), 100_000);
    }
}
