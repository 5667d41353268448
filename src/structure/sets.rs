//! Order-preserving set operations on sequences.

use crate::collection::{contains, every, filter, reject, some, uniq};

/// Returns the elements of the first sequence that occur in every other
/// sequence.
///
/// Elements keep the first sequence's order and appear once. No input
/// yields an empty result; a single input yields its distinct elements.
///
/// # Examples
///
/// ```rust
/// use combinars::structure::intersection;
///
/// let shared = intersection(&[vec!["a", "b", "b", "c"], vec!["c", "b"], vec!["b", "c", "d"]]);
/// assert_eq!(shared, vec!["b", "c"]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let shared = filter(head.as_ref(), |item| {
        every(rest, |other| contains(other.as_ref(), item))
    });
    uniq(&shared)
}

/// Returns the elements of `items` that occur in none of `others`.
///
/// Order and duplicates of `items` are kept.
///
/// # Examples
///
/// ```rust
/// use combinars::structure::difference;
///
/// assert_eq!(difference(&[1, 2, 2, 3, 4], &[vec![4], vec![3, 9]]), vec![1, 2, 2]);
/// let nothing: [Vec<i32>; 0] = [];
/// assert_eq!(difference(&[1, 2], &nothing), vec![1, 2]);
/// ```
pub fn difference<T, S>(items: &[T], others: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    reject(items, |item| some(others, |other| contains(other.as_ref(), item)))
}
