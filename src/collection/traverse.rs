//! Traversals derived from [`each`].

use std::collections::HashSet;
use std::hash::Hash;

use super::{Accessor, IntoCollection, Key, each};
use crate::combinator::negate;
use crate::error::InvalidArgumentError;
use crate::value::{FieldAccess, Truthy, Value};

/// Applies `transform` to every element, collecting the results in order.
///
/// The result has the same length as the input; the input is untouched.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::map;
///
/// let doubled = map(&[1, 2, 3], |number| number * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<'a, C, U, F>(collection: C, mut transform: F) -> Vec<U>
where
    C: IntoCollection<'a>,
    F: FnMut(&'a C::Item) -> U,
{
    let collection = collection.into_collection();
    let mut result = Vec::with_capacity(collection.len());
    collection.each(|item, _, _| result.push(transform(item)));
    result
}

/// Returns the elements for which `predicate` holds, in order.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::filter;
///
/// let even = filter(&[1, 2, 3, 4], |number| number % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// ```
pub fn filter<'a, C, P>(collection: C, mut predicate: P) -> Vec<C::Item>
where
    C: IntoCollection<'a>,
    C::Item: Clone,
    P: FnMut(&'a C::Item) -> bool,
{
    let mut result = Vec::new();
    each(collection, |item, _, _| {
        if predicate(item) {
            result.push(item.clone());
        }
    });
    result
}

/// Returns the elements for which `predicate` does not hold, in order.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::reject;
///
/// let odd = reject(&[1, 2, 3, 4], |number| number % 2 == 0);
/// assert_eq!(odd, vec![1, 3]);
/// ```
pub fn reject<'a, C, P>(collection: C, predicate: P) -> Vec<C::Item>
where
    C: IntoCollection<'a>,
    C::Item: Clone,
    P: FnMut(&'a C::Item) -> bool,
{
    filter(collection, negate(predicate))
}

/// Folds the collection left to right, starting from `initial`.
///
/// # Panics
///
/// Only if `step` panics; the accumulator is restored after every step.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, number| total + number, 0), 6);
/// ```
pub fn reduce<'a, C, A, F>(collection: C, mut step: F, initial: A) -> A
where
    C: IntoCollection<'a>,
    F: FnMut(A, &'a C::Item) -> A,
{
    let mut accumulator = Some(initial);
    each(collection, |item, _, _| {
        accumulator = accumulator.take().map(|current| step(current, item));
    });
    match accumulator {
        Some(result) => result,
        None => panic!("reduce accumulator should be restored after every step"),
    }
}

/// Folds the collection left to right, seeding the accumulator with the
/// first element.
///
/// The first element is never passed to `step`; folding starts at the
/// second. An empty collection leaves the accumulator unset and yields
/// `None`, which callers must handle.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::reduce_from_first;
///
/// // A single element comes back untouched, whatever the step does.
/// assert_eq!(reduce_from_first(&[5], |total, number| total + number * number), Some(5));
/// assert_eq!(reduce_from_first(&[1, 2, 3], |total, number| total + number), Some(6));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce_from_first(&empty, |total, number| total + number), None);
/// ```
pub fn reduce_from_first<'a, C, F>(collection: C, mut step: F) -> Option<C::Item>
where
    C: IntoCollection<'a>,
    C::Item: Clone,
    F: FnMut(C::Item, &'a C::Item) -> C::Item,
{
    let mut accumulator: Option<C::Item> = None;
    each(collection, |item, _, _| {
        accumulator = Some(match accumulator.take() {
            None => item.clone(),
            Some(current) => step(current, item),
        });
    });
    accumulator
}

/// Returns `true` if `predicate` holds for every element.
///
/// The whole collection is traversed through [`reduce`]; once an element
/// fails, the predicate is not called again.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::every;
///
/// assert!(every(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&[2, 3, 6], |number| number % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<'a, C, P>(collection: C, mut predicate: P) -> bool
where
    C: IntoCollection<'a>,
    P: FnMut(&'a C::Item) -> bool,
{
    reduce(collection, |passed, item| passed && predicate(item), true)
}

/// Returns `true` if every element is truthy.
pub fn every_truthy<'a, C>(collection: C) -> bool
where
    C: IntoCollection<'a>,
    C::Item: Truthy,
{
    every(collection, |item| item.is_truthy())
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Defined as "not every element fails the predicate".
///
/// # Examples
///
/// ```rust
/// use combinars::collection::some;
///
/// assert!(some(&[1, 3, 4], |number| number % 2 == 0));
/// assert!(!some(&[1, 3, 5], |number| number % 2 == 0));
/// ```
pub fn some<'a, C, P>(collection: C, predicate: P) -> bool
where
    C: IntoCollection<'a>,
    P: FnMut(&'a C::Item) -> bool,
{
    !every(collection, negate(predicate))
}

/// Returns `true` if at least one element is truthy.
pub fn some_truthy<'a, C>(collection: C) -> bool
where
    C: IntoCollection<'a>,
    C::Item: Truthy,
{
    some(collection, |item| item.is_truthy())
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::contains;
/// use combinars::value::Mapping;
///
/// assert!(contains(&[1, 2, 3], &2));
///
/// let mut ages = Mapping::new();
/// ages.insert("ada".to_owned(), 36);
/// assert!(contains(&ages, &36));
/// assert!(!contains(&ages, &37));
/// ```
pub fn contains<'a, C>(collection: C, target: &C::Item) -> bool
where
    C: IntoCollection<'a>,
    C::Item: PartialEq,
{
    reduce(collection, |found, item| found || item == target, false)
}

/// Returns the index of the first element equal to `target`.
///
/// `None` is the not-found sentinel.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20, 10], &30), None);
/// ```
pub fn index_of<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(items, |item, key, _| {
        if let Key::Index(index) = key
            && found.is_none()
            && item == target
        {
            found = Some(index);
        }
    });
    found
}

/// Returns the elements with duplicates removed, keeping first-seen order.
///
/// Each element is checked against the result so far with [`index_of`],
/// which only needs `PartialEq`. Use [`uniq_hashed`] for large inputs of
/// hashable elements.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq<'a, C>(collection: C) -> Vec<C::Item>
where
    C: IntoCollection<'a>,
    C::Item: PartialEq + Clone,
{
    let mut result = Vec::new();
    each(collection, |item, _, _| {
        if index_of(&result, item).is_none() {
            result.push(item.clone());
        }
    });
    result
}

/// Like [`uniq`], with a hash set for membership checks.
pub fn uniq_hashed<'a, C>(collection: C) -> Vec<C::Item>
where
    C: IntoCollection<'a>,
    C::Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    each(collection, |item, _, _| {
        if seen.insert(item) {
            result.push(item.clone());
        }
    });
    result
}

/// Reads the named field from every element.
///
/// Absent fields read as [`Value::Missing`].
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if an element is not a record.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::pluck;
/// use combinars::record;
/// use combinars::value::Value;
///
/// let people = vec![record! { "age" => 36 }, record! { "name" => "Lin" }];
/// assert_eq!(
///     pluck(&people, "age").unwrap(),
///     vec![Value::from(36), Value::Missing]
/// );
/// assert!(pluck(&[Value::from(1)], "age").is_err());
/// ```
pub fn pluck<'a, C>(collection: C, field: &str) -> Result<Vec<Value>, InvalidArgumentError>
where
    C: IntoCollection<'a>,
    C::Item: FieldAccess,
{
    let read = Accessor::<C::Item>::Field(field).resolve("pluck");
    map(collection, |item| read(item)).into_iter().collect()
}

/// Returns the first element, or `None` for an empty slice.
#[inline]
pub const fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns up to `count` leading elements.
///
/// Asking for more elements than there are returns the whole slice.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(items: &[T], count: usize) -> &[T] {
    &items[..count.min(items.len())]
}

/// Returns the last element, or `None` for an empty slice.
#[inline]
pub const fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Returns up to `count` trailing elements.
///
/// Asking for more elements than there are returns the whole slice.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(items: &[T], count: usize) -> &[T] {
    &items[items.len().saturating_sub(count)..]
}
