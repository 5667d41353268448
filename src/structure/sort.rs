//! Stable sorting by a derived key.

use crate::collection::{Accessor, IntoCollection, map};
use crate::error::InvalidArgumentError;
use crate::value::{FieldAccess, Value};

/// Returns the elements ordered ascending by `key(element)`.
///
/// The sort is stable: elements with equal keys keep their input order.
/// `key` is called exactly once per element. Mappings are sorted by value;
/// their keys are dropped.
///
/// # Examples
///
/// ```rust
/// use combinars::structure::sort_by;
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<'a, C, K, F>(collection: C, mut key: F) -> Vec<C::Item>
where
    C: IntoCollection<'a>,
    C::Item: Clone,
    K: Ord,
    F: FnMut(&'a C::Item) -> K,
{
    let keyed = map(collection, |item| (key(item), item));
    order_by_key(keyed)
}

/// Returns the elements ordered ascending by a field or accessor function.
///
/// Keys are [`Value`]s: numbers compare numerically, text lexicographically,
/// and elements whose field is absent ([`Value::Missing`]) go last. The sort
/// is stable.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if a field accessor meets an element
/// that is not a record. Every key is derived before anything is sorted.
///
/// # Examples
///
/// ```rust
/// use combinars::record;
/// use combinars::structure::sort_by_accessor;
///
/// let people = vec![
///     record! { "name" => "b", "rank" => 2 },
///     record! { "name" => "a" },
///     record! { "name" => "c", "rank" => 1 },
/// ];
/// let sorted = sort_by_accessor(&people, "rank".into()).unwrap();
/// assert_eq!(sorted, vec![people[2].clone(), people[0].clone(), people[1].clone()]);
/// ```
pub fn sort_by_accessor<'a, C>(
    collection: C,
    accessor: Accessor<'_, C::Item>,
) -> Result<Vec<C::Item>, InvalidArgumentError>
where
    C: IntoCollection<'a>,
    C::Item: FieldAccess + Clone,
{
    let key = accessor.resolve("sort_by");
    let keyed = map(collection, |item| key(item).map(|derived| (derived, item)))
        .into_iter()
        .collect::<Result<Vec<(Value, &C::Item)>, _>>()?;
    Ok(order_by_key(keyed))
}

fn order_by_key<K: Ord, T: Clone>(mut keyed: Vec<(K, &T)>) -> Vec<T> {
    // slice::sort_by is a stable merge sort
    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_sort_by_keeps_equal_keys_in_input_order() {
        let pairs = [(1, 'x'), (0, 'a'), (1, 'y'), (0, 'b')];
        let sorted = sort_by(&pairs, |(number, _)| *number);
        assert_eq!(sorted, vec![(0, 'a'), (0, 'b'), (1, 'x'), (1, 'y')]);
    }

    #[test]
    fn test_sort_by_calls_key_once_per_element() {
        let mut calls = 0;
        let _ = sort_by(&[3, 1, 2, 5, 4], |number| {
            calls += 1;
            *number
        });
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_sort_by_accessor_rejects_non_record() {
        let items = vec![record! { "k" => 1 }, Value::from(2)];
        let error = sort_by_accessor(&items, Accessor::Field("k")).unwrap_err();
        assert_eq!(error.operation, "sort_by");
    }
}
