//! CPU workload engines for Strain
//!
//! This crate contains the computations behind every `/cpu/*` endpoint.
//! Everything here is a plain function of its inputs and an injected random
//! source: no I/O, no shared state, no dispatcher. Callers are expected to
//! clamp sizes before invoking an engine, since most of the algorithms are
//! deliberately expensive (bubble sort, cofactor determinants, naive
//! recursive Fibonacci).

pub mod error;
pub mod matrix;
pub mod parallel;
pub mod primes;
pub mod primitives;
pub mod recursive;
pub mod report;
pub mod sorting;

// Re-export commonly used types at the crate root
pub use error::{WorkloadError, WorkloadResult};
pub use matrix::{run_matrix_pipeline, SquareMatrix};
pub use parallel::{accumulate_chunk, parallel_accumulate, parallel_report, partition, ParallelTask};
pub use primes::{find_primes, is_prime_trial, prime_report, sieve, PrimeMode};
pub use primitives::{random_array, random_matrix, ARRAY_VALUE_RANGE, MATRIX_VALUE_RANGE};
pub use recursive::{fibonacci, fibonacci_perturbed, recursive_report};
pub use report::{
    MatrixReport, MatrixStageTimings, ParallelReport, PrimeReport, RecursiveReport, SortReport,
    SortTimings, SAMPLE_LEN,
};
pub use sorting::{bubble_sort, merge_sort, quick_sort, sort_variants};
