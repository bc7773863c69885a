//! Combinations with replacement and median statistics
//!
//! The "average" cost of a structure is the median over every distinct
//! configuration, not over raw symbol sequences. A configuration is a
//! multiset, so it is enumerated as a non-decreasing index tuple.

use std::ops::Range;

use itertools::Itertools;

/// Lazy iterator over non-decreasing index tuples of fixed length.
///
/// Yields tuples in lexicographic order, starting at all zeros and ending at
/// all `alphabet - 1`. Cloning the iterator restarts from the clone's position.
#[derive(Clone)]
pub struct CombinationsWithReplacement {
    inner: itertools::structs::CombinationsWithReplacement<Range<usize>>,
}

impl CombinationsWithReplacement {
    pub fn new(alphabet: usize, length: usize) -> Self {
        Self {
            inner: (0..alphabet).combinations_with_replacement(length),
        }
    }
}

impl Iterator for CombinationsWithReplacement {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Count occurrences of `symbol` in an index tuple
pub fn count_symbol(tuple: &[usize], symbol: usize) -> usize {
    tuple.iter().filter(|&&s| s == symbol).count()
}

/// Median of a sequence, the mean of the two middle values for even counts.
///
/// Returns `None` for an empty sequence.
pub fn median<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted: Vec<f64> = values.into_iter().collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
