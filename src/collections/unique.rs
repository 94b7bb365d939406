//! Uniqueness-sensitive operations over sequences of hashable values.
//!
//! Both functions key a hash table by element value, so they require
//! `T: Eq + Hash`. Hashing uses `ahash`.

use std::hash::Hash;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

/// Returns the first occurrence of each distinct value, in original order.
///
/// Later repeats are dropped. An empty input yields an empty `Vec`. The
/// operation is idempotent: deduplicating the result again changes nothing.
///
/// # Complexity
/// Time: O(n) expected, Space: O(d) where d is the number of distinct values
///
/// # Examples
/// ```
/// use arrtillery::collections::deduplicate;
/// assert_eq!(deduplicate(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn deduplicate<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Counts the distinct values that occur more than once.
///
/// This is the number of repeated *values*, not the number of surplus
/// occurrences: `[1, 1, 1, 2, 2, 3]` gives `2` (values 1 and 2), not `3`.
///
/// # Complexity
/// Time: O(n) expected, Space: O(d)
///
/// # Examples
/// ```
/// use arrtillery::collections::count_duplicates;
/// assert_eq!(count_duplicates(&[1, 2, 2, 3, 1]), 2);
/// assert_eq!(count_duplicates(&[1, 1, 1, 2, 2, 3]), 2);
/// ```
pub fn count_duplicates<T>(seq: &[T]) -> usize
where
    T: Eq + Hash,
{
    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(seq.len());
    for item in seq {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts.values().filter(|&&count| count > 1).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        assert_eq!(deduplicate(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
        assert_eq!(deduplicate(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_deduplicate_empty() {
        let out = deduplicate::<i32>(&[]);
        assert_eq!(out, Vec::<i32>::new());
    }

    #[test]
    fn test_deduplicate_all_same() {
        assert_eq!(deduplicate(&[7, 7, 7, 7]), vec![7]);
    }

    #[test]
    fn test_deduplicate_all_unique() {
        assert_eq!(deduplicate(&[4, 3, 2, 1]), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_deduplicate_strings() {
        let items = ["b", "a", "b", "c", "a"].map(String::from);
        assert_eq!(deduplicate(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_deduplicate_does_not_mutate_input() {
        let items = vec![1, 1, 2];
        let _ = deduplicate(&items);
        assert_eq!(items, vec![1, 1, 2]);
    }

    #[test]
    fn test_count_duplicates_counts_values() {
        assert_eq!(count_duplicates(&[1, 1, 1, 2, 2, 3]), 2);
        assert_eq!(count_duplicates(&[1, 2, 2, 3, 1]), 2);
    }

    #[test]
    fn test_count_duplicates_none() {
        assert_eq!(count_duplicates(&[1, 2, 3]), 0);
        assert_eq!(count_duplicates::<u8>(&[]), 0);
        assert_eq!(count_duplicates(&[5]), 0);
    }

    #[test]
    fn test_count_duplicates_single_value() {
        assert_eq!(count_duplicates(&['x'; 10]), 1);
    }
}
