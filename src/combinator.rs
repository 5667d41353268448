//! Small function combinators shared by the traversals.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: ignores its input and returns a fixed value (K combinator)
//! - [`negate`]: inverts the result of a predicate
//!
//! `reject` is `filter` over a negated predicate, and `some` is the negation
//! of `every` over a negated predicate, so [`negate`] is the seam those
//! operations share.

/// Returns the value unchanged.
///
/// This is the accessor to reach for when an operation needs a
/// transformation but the elements should be used as they are.
///
/// # Examples
///
/// ```
/// use combinars::combinator::identity;
/// use combinars::collection::map;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(map(&numbers, |number| identity(*number)), numbers);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use combinars::combinator::constant;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Wraps a predicate so that it returns the opposite answer.
///
/// The wrapped predicate is called exactly as often as the returned one.
///
/// # Examples
///
/// ```
/// use combinars::combinator::negate;
///
/// let mut is_odd = negate(|number: i32| number % 2 == 0);
/// assert!(is_odd(3));
/// assert!(!is_odd(4));
/// ```
#[inline]
pub fn negate<A, P>(mut predicate: P) -> impl FnMut(A) -> bool
where
    P: FnMut(A) -> bool,
{
    move |argument| !predicate(argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_negate_calls_predicate_each_time() {
        let mut calls = 0;
        {
            let mut is_not_empty = negate(|text: &str| {
                calls += 1;
                text.is_empty()
            });
            assert!(is_not_empty("a"));
            assert!(!is_not_empty(""));
        }
        assert_eq!(calls, 2);
    }
}
