//! Per-workload defaults and clamps
//!
//! Every `/cpu/*` parameter falls back to its `default_*` value when absent
//! and is clamped into `[min, max]` when present.

use crate::error::ConfigResult;
use crate::validation::{validate_ordered, validate_positive, Validatable};
use serde::{Deserialize, Serialize};

/// Limits for all CPU workloads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadsConfig {
    #[serde(default)]
    pub primes: PrimeLimits,

    #[serde(default)]
    pub sort: SortLimits,

    #[serde(default)]
    pub matrix: MatrixLimits,

    #[serde(default)]
    pub recursive: RecursiveLimits,

    #[serde(default)]
    pub parallel: ParallelLimits,
}

/// Prime sieve limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimeLimits {
    pub default_limit: u64,
    pub max_limit: u64,
}

/// Sort array size limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortLimits {
    pub default_size: u64,
    /// Bubble sort is quadratic, keep this modest
    pub max_size: u64,
}

/// Matrix pipeline limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixLimits {
    pub default_size: u64,
    pub max_size: u64,
    /// Largest leading block handed to the cofactor determinant
    pub determinant_max_size: u64,
}

/// Recursive Fibonacci depth limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecursiveLimits {
    pub default_depth: u64,
    pub min_depth: u64,
    pub max_depth: u64,
}

/// Parallel accumulator limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelLimits {
    pub default_iterations: u64,
    pub max_iterations: u64,
    pub default_threads: u64,
    pub max_threads: u64,
}

impl Default for PrimeLimits {
    fn default() -> Self {
        Self {
            default_limit: 100_000,
            max_limit: 10_000_000,
        }
    }
}

impl Default for SortLimits {
    fn default() -> Self {
        Self {
            default_size: 100_000,
            max_size: 100_000,
        }
    }
}

impl Default for MatrixLimits {
    fn default() -> Self {
        Self {
            default_size: 200,
            max_size: 500,
            determinant_max_size: 10,
        }
    }
}

impl Default for RecursiveLimits {
    fn default() -> Self {
        Self {
            default_depth: 30,
            min_depth: 10,
            max_depth: 40,
        }
    }
}

impl Default for ParallelLimits {
    fn default() -> Self {
        Self {
            default_iterations: 1_000_000,
            max_iterations: 10_000_000,
            default_threads: 4,
            max_threads: 16,
        }
    }
}

impl Validatable for WorkloadsConfig {
    fn validate(&self) -> ConfigResult<()> {
        let domain = self.domain_name();

        let primes = &self.primes;
        validate_positive(primes.max_limit, "primes.max_limit", domain)?;
        validate_ordered(
            primes.default_limit,
            "primes.default_limit",
            primes.max_limit,
            "primes.max_limit",
            domain,
        )?;

        let sort = &self.sort;
        validate_positive(sort.max_size, "sort.max_size", domain)?;
        validate_ordered(
            sort.default_size,
            "sort.default_size",
            sort.max_size,
            "sort.max_size",
            domain,
        )?;

        let matrix = &self.matrix;
        validate_positive(matrix.max_size, "matrix.max_size", domain)?;
        validate_ordered(
            matrix.default_size,
            "matrix.default_size",
            matrix.max_size,
            "matrix.max_size",
            domain,
        )?;
        // Cofactor expansion is factorial time
        if matrix.determinant_max_size > 12 {
            return Err(self.validation_error(format!(
                "matrix.determinant_max_size must be at most 12, got {}",
                matrix.determinant_max_size
            )));
        }

        let recursive = &self.recursive;
        validate_positive(recursive.max_depth, "recursive.max_depth", domain)?;
        validate_ordered(
            recursive.min_depth,
            "recursive.min_depth",
            recursive.max_depth,
            "recursive.max_depth",
            domain,
        )?;
        validate_ordered(
            recursive.min_depth,
            "recursive.min_depth",
            recursive.default_depth,
            "recursive.default_depth",
            domain,
        )?;
        validate_ordered(
            recursive.default_depth,
            "recursive.default_depth",
            recursive.max_depth,
            "recursive.max_depth",
            domain,
        )?;
        // fib(93) is the last value that fits in a u64
        if recursive.max_depth > 92 {
            return Err(self.validation_error(format!(
                "recursive.max_depth must be at most 92, got {}",
                recursive.max_depth
            )));
        }

        let parallel = &self.parallel;
        validate_positive(parallel.max_iterations, "parallel.max_iterations", domain)?;
        validate_ordered(
            parallel.default_iterations,
            "parallel.default_iterations",
            parallel.max_iterations,
            "parallel.max_iterations",
            domain,
        )?;
        validate_positive(parallel.default_threads, "parallel.default_threads", domain)?;
        validate_ordered(
            parallel.default_threads,
            "parallel.default_threads",
            parallel.max_threads,
            "parallel.max_threads",
            domain,
        )?;

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "workloads"
    }
}
