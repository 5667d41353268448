//! Run-once function wrapper.

use std::cell::RefCell;
use std::fmt;

/// The call state of a [`Once`].
#[derive(Debug)]
enum OnceState<F, R> {
    /// Not called yet; holds the wrapped function.
    Unset(F),
    /// Called; holds the result of the single invocation.
    Set(R),
    /// The wrapped function panicked.
    Poisoned,
}

/// A function that runs at most once and then replays its result.
///
/// The first [`call`](Self::call) invokes the wrapped function with its
/// arguments and stores the result; every call, the first included, returns
/// a clone of that stored result. Arguments of later calls are ignored.
/// Because the wrapped function runs at most once it may be an [`FnOnce`].
///
/// Functions of several arguments take them as a tuple.
///
/// # Panics
///
/// If the wrapped function panics the `Once` is poisoned and every later
/// call panics too. Calling a `Once` from inside its own wrapped function
/// panics on the re-entrant borrow.
///
/// # Examples
///
/// ```rust
/// use combinars::decorate::once;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let initialize = once(|(width, height): (u32, u32)| {
///     calls.set(calls.get() + 1);
///     width * height
/// });
///
/// assert_eq!(initialize.call((3, 4)), 12);
/// assert_eq!(initialize.call((10, 10)), 12);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

/// Wraps `function` so that it runs at most once.
///
/// See [`Once`].
pub const fn once<F, A, R>(function: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once {
        state: RefCell::new(OnceState::Unset(function)),
    }
}

impl<F, R> Once<F, R> {
    /// Calls the wrapped function the first time, and returns its result
    /// every time.
    ///
    /// # Panics
    ///
    /// Panics if an earlier call panicked inside the wrapped function, or if
    /// the wrapped function calls this wrapper again.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let mut state = self.state.borrow_mut();
        let result = match std::mem::replace(&mut *state, OnceState::Poisoned) {
            OnceState::Set(result) => result,
            OnceState::Unset(function) => {
                tracing::trace!("once: invoking wrapped function");
                function(arguments)
            }
            OnceState::Poisoned => panic!("Once instance has been poisoned"),
        };
        *state = OnceState::Set(result.clone());
        result
    }

    /// Returns `true` once the wrapped function has run.
    pub fn has_run(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Set(_))
    }

    /// Returns `true` if the wrapped function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }

    /// Turns the wrapper into a plain closure.
    pub fn into_fn<A>(self) -> impl Fn(A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        move |arguments| self.call(arguments)
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => match &*state {
                OnceState::Unset(_) => formatter.write_str("Once(<unset>)"),
                OnceState::Set(result) => formatter.debug_tuple("Once").field(result).finish(),
                OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
            },
            Err(_) => formatter.write_str("Once(<running>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_once_accepts_fn_once() {
        let owned = String::from("moved");
        let take = once(move |()| owned);
        assert_eq!(take.call(()), "moved");
        assert_eq!(take.call(()), "moved");
    }

    #[test]
    fn test_has_run() {
        let wrapped = once(|value: i32| value);
        assert!(!wrapped.has_run());
        wrapped.call(1);
        assert!(wrapped.has_run());
    }

    #[test]
    fn test_panic_poisons() {
        let wrapped = once(|fail: bool| {
            assert!(!fail, "boom");
            1
        });
        let first = catch_unwind(AssertUnwindSafe(|| wrapped.call(true)));
        assert!(first.is_err());
        assert!(wrapped.is_poisoned());
        let second = catch_unwind(AssertUnwindSafe(|| wrapped.call(false)));
        assert!(second.is_err());
    }

    #[test]
    fn test_debug_shows_state() {
        let wrapped = once(|value: i32| value * 2);
        assert_eq!(format!("{wrapped:?}"), "Once(<unset>)");
        wrapped.call(4);
        assert_eq!(format!("{wrapped:?}"), "Once(8)");
    }
}
