//! Sort engine: one random array sorted three independent ways

use rand::Rng;
use std::time::Instant;

use crate::primitives::{random_array, ARRAY_VALUE_RANGE};
use crate::report::{head, tail, SortReport, SortTimings};

/// Library-quality comparison sort (pattern-defeating quicksort)
pub fn quick_sort(values: &mut [i32]) {
    values.sort_unstable();
}

/// Bubble sort. Quadratic on purpose; stops early once a pass makes no swap.
pub fn bubble_sort(values: &mut [i32]) {
    let len = values.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 0..len - 1 - pass {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Recursive, stable merge sort returning a new vector
pub fn merge_sort(values: &[i32]) -> Vec<i32> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge(&left, &right)
}

/// Merge two sorted slices by repeatedly taking the smaller front element.
/// Ties take from `left`, which keeps the sort stable.
fn merge(left: &[i32], right: &[i32]) -> Vec<i32> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_nanos() as u64)
}

/// Generate `size` random values and sort copies with all three algorithms.
///
/// `results_match` is false only if one of the algorithms is broken.
pub fn sort_variants<R: Rng + ?Sized>(size: usize, rng: &mut R) -> SortReport {
    let base = random_array(size, ARRAY_VALUE_RANGE, rng);

    let mut quick = base.clone();
    let mut bubble = base.clone();

    let ((), quick_sort_ns) = timed(|| quick_sort(&mut quick));
    let ((), bubble_sort_ns) = timed(|| bubble_sort(&mut bubble));
    let (merged, merge_sort_ns) = timed(|| merge_sort(&base));

    let results_match = quick == bubble && quick == merged;
    if !results_match {
        tracing::error!(size, "Sort algorithms disagree on the same input");
    }

    let timings = SortTimings {
        quick_sort_ns,
        bubble_sort_ns,
        merge_sort_ns,
    };

    SortReport {
        size,
        timings,
        duration_ns: quick_sort_ns + bubble_sort_ns + merge_sort_ns,
        results_match,
        first: head(&quick),
        last: tail(&quick),
    }
}
