//! Prime engine: sieve of Eratosthenes with optional trial-division re-check

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::report::{head, tail, PrimeReport};

/// How survivors of the sieve are confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimeMode {
    /// Sieve only
    Sieve,
    /// Sieve, then re-test every survivor by 6k±1 trial division.
    ///
    /// Yields exactly the same set as [`PrimeMode::Sieve`] at a higher CPU
    /// cost; this is the mode served over HTTP.
    #[default]
    Verified,
}

/// All primes `<= limit`, in increasing order.
///
/// Composites are marked from `i*i` in steps of `i` for every `i` up to
/// `sqrt(limit)`. Limits of 0 and 1 produce an empty set.
pub fn sieve(limit: usize) -> Vec<usize> {
    if limit <= 1 {
        return Vec::new();
    }

    let mut composite = vec![false; limit + 1];
    let mut i = 2;
    while i <= limit / i {
        if !composite[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += i;
            }
        }
        i += 1;
    }

    (2..=limit).filter(|&n| !composite[n]).collect()
}

/// Trial-division primality test.
///
/// Handles 2 and 3 explicitly, then only tries divisors of the form 6k±1
/// up to `sqrt(n)`.
pub fn is_prime_trial(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut divisor = 5;
    while divisor <= n / divisor {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

/// All primes `<= limit` using the requested mode
pub fn find_primes(limit: usize, mode: PrimeMode) -> Vec<usize> {
    let mut primes = sieve(limit);
    if mode == PrimeMode::Verified {
        primes.retain(|&p| is_prime_trial(p));
    }
    primes
}

/// Run the prime workload and summarise it
pub fn prime_report(limit: usize, mode: PrimeMode) -> PrimeReport {
    let start = Instant::now();
    let primes = find_primes(limit, mode);
    let duration_ns = start.elapsed().as_nanos() as u64;

    tracing::debug!(limit, count = primes.len(), duration_ns, "Prime workload finished");

    PrimeReport {
        limit,
        mode,
        count: primes.len(),
        largest: primes.last().copied(),
        first: head(&primes),
        last: tail(&primes),
        duration_ns,
    }
}
