//! Iteration over sequences and mappings, and the traversals built on it.
//!
//! # Overview
//!
//! A [`Collection`] is either a sequence (`&[T]`) or a string-keyed
//! [`Mapping`]. Every operation in this module accepts anything implementing
//! [`IntoCollection`] (slices, arrays, `Vec`, `Mapping`), resolves it to a
//! `Collection` once, and then drives the single iteration primitive,
//! [`each`].
//!
//! The operations are layered:
//!
//! ```text
//! each ─┬─ map ── pluck
//!       ├─ filter ── reject
//!       ├─ index_of ── uniq
//!       └─ reduce ─┬─ contains
//!                  └─ every ── some
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinars::collection::{each, Key};
//! use combinars::value::Mapping;
//!
//! let mut prices = Mapping::new();
//! prices.insert("tea".to_owned(), 3);
//! prices.insert("coffee".to_owned(), 4);
//!
//! let mut seen = Vec::new();
//! each(&prices, |price, key, _| {
//!     if let Key::Name(name) = key {
//!         seen.push(format!("{name}={price}"));
//!     }
//! });
//! assert_eq!(seen, vec!["coffee=4", "tea=3"]);
//! ```

mod accessor;
mod traverse;

pub use accessor::Accessor;
pub use traverse::{
    contains, every, every_truthy, filter, first, first_n, index_of, last, last_n, map, pluck,
    reduce, reduce_from_first, reject, some, some_truthy, uniq, uniq_hashed,
};

use crate::value::Mapping;

/// Where an element sits in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Position in a sequence.
    Index(usize),
    /// Key in a mapping.
    Name(&'a str),
}

/// A borrowed sequence or mapping.
///
/// The variant is decided once, when the collection is created; the derived
/// operations never inspect element types to find out what they are
/// iterating over.
#[derive(Debug)]
pub enum Collection<'a, T> {
    /// Elements in index order.
    Sequence(&'a [T]),
    /// Values in ascending key order.
    Mapping(&'a Mapping<T>),
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

impl<'a, T> Collection<'a, T> {
    /// Calls `callback(element, key, collection)` for every element.
    ///
    /// Sequences are visited in index order, mappings in ascending key
    /// order. No element is skipped and the callback's return value is
    /// ignored.
    pub fn each<F>(self, mut callback: F)
    where
        F: FnMut(&'a T, Key<'a>, Self),
    {
        match self {
            Self::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    callback(item, Key::Index(index), self);
                }
            }
            Self::Mapping(entries) => {
                for (name, item) in entries {
                    callback(item, Key::Name(name), self);
                }
            }
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Conversion into a [`Collection`].
///
/// The associated `Item` type lets every operation name its element type
/// without callers spelling it out.
pub trait IntoCollection<'a> {
    /// The element type.
    type Item: 'a;

    /// Resolves `self` to a sequence or a mapping.
    fn into_collection(self) -> Collection<'a, Self::Item>;
}

impl<'a, T: 'a> IntoCollection<'a> for Collection<'a, T> {
    type Item = T;

    fn into_collection(self) -> Self {
        self
    }
}

impl<'a, T: 'a> IntoCollection<'a> for &'a [T] {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Sequence(self)
    }
}

impl<'a, T: 'a, const N: usize> IntoCollection<'a> for &'a [T; N] {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Sequence(self)
    }
}

impl<'a, T: 'a> IntoCollection<'a> for &'a Vec<T> {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Sequence(self)
    }
}

impl<'a, T: 'a> IntoCollection<'a> for &'a Mapping<T> {
    type Item = T;

    fn into_collection(self) -> Collection<'a, T> {
        Collection::Mapping(self)
    }
}

/// Calls `callback(element, key, collection)` for every element of
/// `collection`.
///
/// This is the one iteration routine in the crate; every derived traversal
/// is written in terms of it.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::{each, Key};
///
/// let letters = ['a', 'b', 'c'];
/// let mut visited = Vec::new();
/// each(&letters, |letter, key, collection| {
///     assert_eq!(collection.len(), 3);
///     visited.push((*letter, key));
/// });
/// assert_eq!(
///     visited,
///     vec![('a', Key::Index(0)), ('b', Key::Index(1)), ('c', Key::Index(2))]
/// );
/// ```
#[inline]
pub fn each<'a, C, F>(collection: C, callback: F)
where
    C: IntoCollection<'a>,
    F: FnMut(&'a C::Item, Key<'a>, Collection<'a, C::Item>),
{
    collection.into_collection().each(callback);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_visits_mapping_in_key_order() {
        let mut entries = Mapping::new();
        entries.insert("b".to_owned(), 2);
        entries.insert("a".to_owned(), 1);

        let mut keys = Vec::new();
        each(&entries, |_, key, _| keys.push(key));
        assert_eq!(keys, vec![Key::Name("a"), Key::Name("b")]);
    }

    #[test]
    fn test_each_on_empty_sequence_never_calls_back() {
        let empty: Vec<i32> = Vec::new();
        let mut calls = 0;
        each(&empty, |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_collection_len() {
        let items = [1, 2, 3];
        assert_eq!(items.into_collection().len(), 3);
        assert!(Collection::<i32>::Sequence(&[]).is_empty());
    }
}
