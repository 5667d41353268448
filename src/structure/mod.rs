//! Structural algorithms over sequences.
//!
//! # Overview
//!
//! - [`flatten`]: collapse arbitrarily nested sequences into one flat sequence
//! - [`sort_by`] / [`sort_by_accessor`]: stable ascending sort by a derived key
//! - [`zip`]: index-aligned merge of several sequences, padded with `None`
//! - [`intersection`] / [`difference`]: set operations that keep input order
//! - [`shuffle`] / [`shuffle_with`]: uniformly random permutation
//! - [`invoke`]: call a method on every element
//!
//! None of these mutate their input; each returns a new `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use combinars::structure::{difference, intersection, zip};
//!
//! let rows = zip(&[vec!['a', 'b', 'c'], vec!['x', 'y']]);
//! assert_eq!(rows[2], vec![Some('c'), None]);
//!
//! assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4], vec![3, 2]]), vec![2, 3]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[vec![2], vec![4, 5]]), vec![1, 3]);
//! ```

mod flatten;
mod invoke;
mod sets;
mod shuffle;
mod sort;
mod zip;

pub use flatten::{Nest, Nested, flatten};
pub use invoke::{Method, invoke};
pub use sets::{difference, intersection};
#[cfg(feature = "random")]
pub use shuffle::{RngSource, shuffle};
pub use shuffle::{RandomSource, shuffle_with};
pub use sort::{sort_by, sort_by_accessor};
pub use zip::zip;
