//! # combinars
//!
//! Collection traversals, structural algorithms and stateful function
//! decorators for Rust.
//!
//! ## Overview
//!
//! The library is a small toolkit that other code composes instead of
//! writing loops by hand. It includes:
//!
//! - **Collections**: a single iteration primitive ([`collection::each`]) over
//!   sequences and string-keyed mappings, and the traversals derived from it
//!   (`map`, `filter`, `reject`, `reduce`, `every`, `some`, `contains`, ...)
//! - **Structure**: `flatten`, stable `sort_by`, `zip`, `intersection`,
//!   `difference`, `shuffle` and `invoke`
//! - **Decorators**: `once`, `memoize`, `delay` and `throttle`, each wrapping a
//!   function in a value that owns its private call state
//! - **Objects**: `extend` and `defaults` for shallow mapping merges
//! - **Values**: a dynamic [`Value`](value::Value) for field-name access,
//!   method dispatch and arbitrarily nested data
//!
//! ## Feature Flags
//!
//! - `collection`: Iteration primitive and derived traversals
//! - `structure`: Structural algorithms (enables `collection`)
//! - `decorate`: Function decorators and timing collaborators
//! - `object`: Mapping merge helpers (enables `collection`)
//! - `random`: Thread-local randomness for `shuffle`
//! - `async`: Tokio-backed clock and scheduler
//! - `serde`: `Serialize`/`Deserialize` for `Value`
//! - `fxhash` / `ahash`: Faster hashers for the memoize cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! let even = filter(&numbers, |number| number % 2 == 0);
//! let total = reduce(&even, |sum, number| sum + number, 0);
//! assert_eq!(total, 12);
//!
//! let square = memoize(|number: i64| number * number);
//! assert_eq!(square.call(9), 81);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::error::*;
    pub use crate::value::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "structure")]
    pub use crate::structure::*;

    #[cfg(feature = "decorate")]
    pub use crate::decorate::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;
}

pub mod combinator;
pub mod error;
pub mod value;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "structure")]
pub mod structure;

#[cfg(feature = "decorate")]
pub mod decorate;

#[cfg(feature = "object")]
pub mod object;
