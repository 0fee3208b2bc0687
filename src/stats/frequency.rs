//! Counting helpers shared by the report computations.

use std::collections::BTreeMap;

/// Occurrences per distinct value, most frequent first.
/// Equal counts are ordered by value, smallest first.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut out: Vec<(T, usize)> = counts.into_iter().collect();
    // stable sort keeps the BTreeMap (ascending value) order among ties
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Most frequent value; ties resolve to the smallest value.
/// `None` when `values` is empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(v, _)| v)
}
