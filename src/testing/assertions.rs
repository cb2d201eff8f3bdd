//! Assertion functions for comparing row collections.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections hold the same elements with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics if the collections differ as multisets.
///
/// # Example
///
/// ```
/// use csvmerge::testing::assert_same_rows;
///
/// assert_same_rows(&["b", "a", "a"], &["a", "b", "a"]);
/// ```
pub fn assert_same_rows<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let actual_bag = counts(actual);
    let expected_bag = counts(expected);
    if actual_bag != expected_bag {
        let missing: Vec<_> = expected_bag
            .iter()
            .filter(|(k, n)| actual_bag.get(*k) != Some(n))
            .map(|(k, _)| k)
            .collect();
        let extra: Vec<_> = actual_bag
            .iter()
            .filter(|(k, n)| expected_bag.get(*k) != Some(n))
            .map(|(k, _)| k)
            .collect();
        panic!(
            "Collection content mismatch:\n  Missing or miscounted: {missing:?}\n  Extra or miscounted: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that concatenating `chunks` in order reproduces `whole` exactly.
///
/// # Panics
///
/// Panics if an element is missing, duplicated or out of order.
pub fn assert_partition_of<T: Debug + PartialEq>(chunks: &[Vec<T>], whole: &[T]) {
    let joined: Vec<&T> = chunks.iter().flatten().collect();
    let whole: Vec<&T> = whole.iter().collect();
    assert_eq!(
        joined, whole,
        "Chunks do not partition the collection:\n  Chunks: {chunks:?}"
    );
}

fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut m = HashMap::new();
    for item in items {
        *m.entry(item).or_insert(0) += 1;
    }
    m
}
