//! Argument-keyed result caching.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Hasher for memoize caches, chosen by the `fxhash` and `ahash` features.
#[cfg(feature = "fxhash")]
pub type CacheHasher = rustc_hash::FxBuildHasher;

/// Hasher for memoize caches, chosen by the `fxhash` and `ahash` features.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CacheHasher = ahash::RandomState;

/// Hasher for memoize caches, chosen by the `fxhash` and `ahash` features.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CacheHasher = std::collections::hash_map::RandomState;

/// A function whose results are cached by argument.
///
/// The cache key is the complete argument value. Functions of several
/// arguments take them as a tuple, so `(2, 3)` and `(3, 2)` are different
/// keys. On a miss the wrapped function runs and its result is stored; on a
/// hit the stored result is cloned and the function is not called.
///
/// The cache is never shared between two `Memoize` values, even ones
/// wrapping the same function.
///
/// # Examples
///
/// ```rust
/// use combinars::decorate::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let power = memoize(|(base, exponent): (u64, u32)| {
///     calls.set(calls.get() + 1);
///     base.pow(exponent)
/// });
///
/// assert_eq!(power.call((2, 3)), 8);
/// assert_eq!(power.call((2, 3)), 8);
/// assert_eq!(calls.get(), 1);
///
/// assert_eq!(power.call((3, 2)), 9);
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Memoize<F, A, R, S = CacheHasher> {
    function: F,
    cache: RefCell<HashMap<A, R, S>>,
}

/// Wraps `function` with a per-argument result cache.
///
/// See [`Memoize`].
pub fn memoize<F, A, R>(function: F) -> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash,
{
    Memoize::with_hasher(function, CacheHasher::default())
}

impl<F, A, R, S> Memoize<F, A, R, S>
where
    F: Fn(A) -> R,
    A: Eq + Hash,
    S: BuildHasher,
{
    /// Wraps `function` with a cache using the given hasher.
    pub const fn with_hasher(function: F, hasher: S) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::with_hasher(hasher)),
        }
    }

    /// Returns the cached result for `arguments`, computing it on a miss.
    ///
    /// The cache is not borrowed while the wrapped function runs, so a
    /// recursive function may call its own wrapper.
    ///
    /// # Panics
    ///
    /// Panics if the `Hash` or `Eq` implementation of `A` calls back into
    /// this wrapper while the cache is borrowed.
    pub fn call(&self, arguments: A) -> R
    where
        A: Clone,
        R: Clone,
    {
        let cached = self.cache.borrow().get(&arguments).cloned();
        if let Some(result) = cached {
            tracing::trace!("memoize: cache hit");
            return result;
        }

        let result = (self.function)(arguments.clone());
        let entries = {
            let mut cache = self.cache.borrow_mut();
            cache.insert(arguments, result.clone());
            cache.len()
        };
        tracing::trace!(entries, "memoize: cache miss stored");
        result
    }

    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if a result is cached for `arguments`.
    pub fn is_cached(&self, arguments: &A) -> bool {
        self.cache.borrow().contains_key(arguments)
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Turns the wrapper into a plain closure.
    pub fn into_fn(self) -> impl Fn(A) -> R
    where
        A: Clone,
        R: Clone,
    {
        move |arguments| self.call(arguments)
    }
}

impl<F, A, R, S> fmt::Debug for Memoize<F, A, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.cache.try_borrow().map(|cache| cache.len()).ok();
        formatter
            .debug_struct("Memoize")
            .field("entries", &entries)
            .finish_non_exhaustive()
    }
}
