//! Naive recursive Fibonacci, plain and with a trigonometric perturbation.
//! Both run in exponential time; callers bound the depth.

use std::time::Instant;

use crate::report::RecursiveReport;

/// Unperturbed recursive core: `fib(0) = 0`, `fib(1) = 1`
pub fn fibonacci(n: i64) -> u64 {
    match n {
        i64::MIN..=0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// Recursive Fibonacci where every intermediate sum is multiplied by
/// `sin²(x) + cos²(x)`. The factor is ≈1, so the result tracks `fib(n)`
/// up to floating-point rounding, but each call pays for two
/// transcendental evaluations.
pub fn fibonacci_perturbed(n: i64) -> f64 {
    match n {
        i64::MIN..=0 => 0.0,
        1 => 1.0,
        _ => {
            let result = fibonacci_perturbed(n - 1) + fibonacci_perturbed(n - 2);
            result * (result.sin().powi(2) + result.cos().powi(2))
        }
    }
}

/// Run the perturbed Fibonacci workload at `depth`
pub fn recursive_report(depth: i64) -> RecursiveReport {
    let start = Instant::now();
    let result = fibonacci_perturbed(depth);
    let duration_ns = start.elapsed().as_nanos() as u64;

    tracing::debug!(depth, duration_ns, "Recursive workload finished");

    RecursiveReport {
        depth,
        result,
        duration_ns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_known_values() {
        assert_eq!(fibonacci(-3), 0);
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(20), 6765);
    }

    #[test]
    fn test_perturbed_tracks_plain_fibonacci() {
        for n in [0, 1, 2, 10, 11, 20] {
            let exact = fibonacci(n) as f64;
            let perturbed = fibonacci_perturbed(n);
            assert!(
                (perturbed - exact).abs() <= exact * 1e-9,
                "n = {}: {} vs {}",
                n,
                perturbed,
                exact
            );
        }
    }

    #[test]
    fn test_perturbed_is_deterministic() {
        assert_eq!(fibonacci_perturbed(10), fibonacci_perturbed(10));
        assert_eq!(fibonacci_perturbed(11), fibonacci_perturbed(11));
    }

    #[test]
    fn test_recursive_report() {
        let report = recursive_report(12);
        assert_eq!(report.depth, 12);
        assert!((report.result - 144.0).abs() < 1e-6);
    }
}
