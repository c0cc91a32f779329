//! Random array and matrix generators
//!
//! Generators never reach for a global RNG. The caller hands in the random
//! source, so tests can seed it and production code can give each request
//! its own OS-seeded generator.

use rand::Rng;
use std::ops::Range;

use crate::matrix::SquareMatrix;

/// Value range for generated sort inputs
pub const ARRAY_VALUE_RANGE: Range<i32> = 0..1_000_000;

/// Value range for generated matrix cells
pub const MATRIX_VALUE_RANGE: Range<i64> = 0..100;

/// Generate `len` integers drawn uniformly from `range`.
///
/// An empty range fills the array with `range.start`.
pub fn random_array<R: Rng + ?Sized>(len: usize, range: Range<i32>, rng: &mut R) -> Vec<i32> {
    if range.is_empty() {
        return vec![range.start; len];
    }
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// Generate an `n × n` integer matrix with cells drawn from `range`.
pub fn random_matrix<R: Rng + ?Sized>(n: usize, range: Range<i64>, rng: &mut R) -> SquareMatrix<i64> {
    if range.is_empty() {
        return SquareMatrix::filled(n, range.start);
    }
    let cells = (0..n * n).map(|_| rng.random_range(range.clone())).collect();
    SquareMatrix::from_row_major(n, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_array_respects_length_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_array(1_000, ARRAY_VALUE_RANGE, &mut rng);

        assert_eq!(values.len(), 1_000);
        assert!(values.iter().all(|v| ARRAY_VALUE_RANGE.contains(v)));
    }

    #[test]
    fn test_random_array_is_reproducible_with_seed() {
        let a = random_array(64, 0..10, &mut StdRng::seed_from_u64(42));
        let b = random_array(64, 0..10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_array_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_array(3, 5..5, &mut rng), vec![5, 5, 5]);
        assert!(random_array(0, ARRAY_VALUE_RANGE, &mut rng).is_empty());
    }

    #[test]
    fn test_random_matrix_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = random_matrix(12, MATRIX_VALUE_RANGE, &mut rng);

        assert_eq!(m.size(), 12);
        assert!(m.rows().flatten().all(|v| MATRIX_VALUE_RANGE.contains(v)));
    }
}
