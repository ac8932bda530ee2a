//! Canonical enumeration of k-element combinations
//!
//! Combinations are produced in lexicographic order of their index positions:
//! for `ABCD` taken two at a time the order is `AB AC AD BC BD CD`. Both the
//! assignment generator and the decoy sampler rely on this order being fixed,
//! since shuffles are applied on top of it.

/// Number of k-element subsets of an n-element set
///
/// Returns `None` if the count does not fit in a `u64`. Zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1) at this point
        result = result.checked_mul((n - i) as u64)? / (i as u64 + 1);
    }
    Some(result)
}

/// Iterator over the k-element combinations of a slice
///
/// Each item preserves the relative order of the source elements.
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    finished: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Start enumerating combinations of `size` elements from `items`
    pub fn new(items: &'a [T], size: usize) -> Self {
        Self {
            items,
            indices: (0..size).collect(),
            finished: size > items.len(),
        }
    }

    // Advance the rightmost index that still has room, then reset those after it
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        let Some(pivot) = (0..k)
            .rev()
            .find(|&i| self.indices.get(i).is_some_and(|&index| index != i + n - k))
        else {
            self.finished = true;
            return;
        };

        let mut next = self.indices.get(pivot).copied().unwrap_or(0);
        for slot in self.indices.iter_mut().skip(pivot) {
            next += 1;
            *slot = next;
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let current = self
            .indices
            .iter()
            .filter_map(|&index| self.items.get(index).cloned())
            .collect();
        self.advance();
        Some(current)
    }
}

/// Collect every `size`-element combination of `items` in canonical order
pub fn combinations<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    Combinations::new(items, size).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/combinatorics/combinations.rs"]
mod tests;
