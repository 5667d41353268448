//! Recursive flattening of nested sequences.

use crate::collection::some;
use crate::value::Value;

/// Elements that may themselves be sequences of the same element type.
pub trait Nest: Sized {
    /// Returns the nested elements, or `None` for a leaf.
    fn children(&self) -> Option<&[Self]>;
}

/// A tree of sequences with leaves of type `T`.
///
/// # Examples
///
/// ```rust
/// use combinars::structure::{Nested, flatten};
///
/// let tree = vec![
///     Nested::Leaf(1),
///     Nested::List(vec![Nested::Leaf(2), Nested::List(vec![Nested::Leaf(3)])]),
/// ];
/// let flat = flatten(&tree);
/// assert_eq!(Nested::into_leaves(flat), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A single element.
    Leaf(T),
    /// A nested sequence.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Extracts the leaf values of an already flattened sequence.
    ///
    /// Nested lists are dropped; call [`flatten`] first to keep their
    /// contents.
    pub fn into_leaves(items: Vec<Self>) -> Vec<T> {
        items
            .into_iter()
            .filter_map(|item| match item {
                Self::Leaf(value) => Some(value),
                Self::List(_) => None,
            })
            .collect()
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

impl<T> Nest for Nested<T> {
    fn children(&self) -> Option<&[Self]> {
        match self {
            Self::Leaf(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl Nest for Value {
    fn children(&self) -> Option<&[Self]> {
        self.as_list()
    }
}

/// Flattens arbitrarily nested sequences into one sequence of leaves.
///
/// Leaves keep their left-to-right order. A sequence with nothing nested in
/// it comes back unchanged. Depth is bounded only by memory: the traversal
/// keeps its own stack instead of recursing.
///
/// # Examples
///
/// ```rust
/// use combinars::list;
/// use combinars::structure::flatten;
/// use combinars::value::Value;
///
/// let nested = [Value::from(1), list![2, list![3, list![4]], 5]];
/// assert_eq!(
///     flatten(&nested),
///     vec![1, 2, 3, 4, 5].into_iter().map(Value::from).collect::<Vec<_>>()
/// );
/// ```
pub fn flatten<T: Nest + Clone>(items: &[T]) -> Vec<T> {
    if !some(items, |item| item.children().is_some()) {
        return items.to_vec();
    }

    let mut flat = Vec::with_capacity(items.len());
    let mut pending = vec![items.iter()];
    while let Some(level) = pending.last_mut() {
        match level.next() {
            Some(item) => match item.children() {
                Some(children) => pending.push(children.iter()),
                None => flat.push(item.clone()),
            },
            None => {
                pending.pop();
            }
        }
    }
    flat
}
