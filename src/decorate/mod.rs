//! Function decorators with private call state.
//!
//! # Overview
//!
//! Each decorator wraps a function in a value that owns the state it needs
//! and exposes `call` (plus `into_fn` for a plain closure):
//!
//! - [`once`]: run at most once, replay the first result forever
//! - [`memoize`]: cache results by the full argument value
//! - [`delay`]: run once after a wait, through a [`Scheduler`]
//! - [`throttle`]: at most one invocation per time window
//!
//! Functions of several arguments take them as a tuple.
//!
//! State lives in `RefCell`s, so wrapped functions are single-threaded:
//! none of them is `Sync`, and [`Throttled`] is not `Send` either. Two
//! wrappers never share state, even when they wrap the same function.
//!
//! # Examples
//!
//! ```rust
//! use combinars::decorate::{memoize, once};
//!
//! let greeting = once(|name: &str| format!("hello, {name}"));
//! assert_eq!(greeting.call("ada"), "hello, ada");
//! assert_eq!(greeting.call("grace"), "hello, ada");
//!
//! let double = memoize(|value: u32| value * 2);
//! assert_eq!(double.call(21), 42);
//! assert_eq!(double.cache_len(), 1);
//! ```

mod delay;
mod memoize;
mod once;
mod throttle;
mod timing;

pub use delay::delay;
pub use memoize::{CacheHasher, Memoize, memoize};
pub use once::{Once, once};
pub use throttle::{ThrottleOptions, Throttled, throttle, throttle_with_options};
#[cfg(feature = "async")]
pub use timing::{TokioClock, TokioScheduler};
pub use timing::{Clock, Scheduler, SystemClock, Task, VirtualTimeline};

static_assertions::assert_not_impl_any!(Once<fn(u8) -> u8, u8>: Sync);
static_assertions::assert_not_impl_any!(Memoize<fn(u8) -> u8, u8, u8>: Sync);
static_assertions::assert_not_impl_any!(Throttled<fn(u8), u8>: Send, Sync);
