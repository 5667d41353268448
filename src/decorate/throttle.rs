//! Rate limiting to one invocation per time window.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::timing::{Clock, Scheduler};

/// Which edges of a throttle window invoke the wrapped function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThrottleOptions {
    /// Invoke immediately on a call that opens a window.
    pub leading: bool,
    /// Invoke once at the end of a window with the latest arguments received
    /// inside it.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

#[derive(Debug)]
struct WindowState<A> {
    /// When the current window opened.
    opened_at: Option<Duration>,
    pending: Option<A>,
    trailing_scheduled: bool,
}

impl<A> WindowState<A> {
    const fn closed() -> Self {
        Self {
            opened_at: None,
            pending: None,
            trailing_scheduled: false,
        }
    }
}

struct Shared<F, A> {
    function: F,
    wait: Duration,
    options: ThrottleOptions,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn Scheduler>,
    window: RefCell<WindowState<A>>,
    /// Bumped by `cancel` so that already scheduled trailing calls go stale.
    generation: Cell<u64>,
}

impl<F, A> Shared<F, A> {
    /// `None` when the window end does not fit in a `Duration`; such a window
    /// never closes.
    const fn closes_at(&self, opened_at: Duration) -> Option<Duration> {
        opened_at.checked_add(self.wait)
    }
}

/// A function invoked at most once per `wait` window.
///
/// With the default [`ThrottleOptions`]:
///
/// - a call made while no window is open invokes the function immediately,
///   opens a window of length `wait` and returns `Some(result)`;
/// - a call made inside an open window returns `None` and records its
///   arguments, replacing any recorded earlier in the window;
/// - when the window closes, if arguments were recorded the function is
///   invoked once with them and that trailing invocation opens the next
///   window.
///
/// The result of a trailing invocation is discarded.
///
/// # Examples
///
/// ```rust
/// use combinars::decorate::{VirtualTimeline, throttle};
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let timeline = Rc::new(VirtualTimeline::new());
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// let record = throttle(
///     move |value: i32| sink.borrow_mut().push(value),
///     Duration::from_millis(100),
///     timeline.clone(),
///     timeline.clone(),
/// );
///
/// assert_eq!(record.call(1), Some(()));
/// assert_eq!(record.call(2), None);
/// assert_eq!(record.call(3), None);
/// assert_eq!(*seen.borrow(), vec![1]);
///
/// timeline.advance(Duration::from_millis(100));
/// assert_eq!(*seen.borrow(), vec![1, 3]);
/// ```
pub struct Throttled<F, A> {
    shared: Rc<Shared<F, A>>,
}

/// Throttles `function` to one invocation per `wait`, on both edges.
///
/// See [`Throttled`].
pub fn throttle<F, A, R>(
    function: F,
    wait: Duration,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn Scheduler>,
) -> Throttled<F, A>
where
    F: Fn(A) -> R + 'static,
    A: 'static,
{
    throttle_with_options(function, wait, clock, scheduler, ThrottleOptions::default())
}

/// Throttles `function` to one invocation per `wait`, on the edges selected
/// by `options`.
///
/// With `leading` off, the first call of a window records its arguments
/// instead of invoking. With `trailing` off, calls inside a window are
/// dropped. With both off the function is never invoked.
pub fn throttle_with_options<F, A, R>(
    function: F,
    wait: Duration,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn Scheduler>,
    options: ThrottleOptions,
) -> Throttled<F, A>
where
    F: Fn(A) -> R + 'static,
    A: 'static,
{
    Throttled {
        shared: Rc::new(Shared {
            function,
            wait,
            options,
            clock,
            scheduler,
            window: RefCell::new(WindowState::closed()),
            generation: Cell::new(0),
        }),
    }
}

impl<F, A, R> Throttled<F, A>
where
    F: Fn(A) -> R + 'static,
    A: 'static,
{
    /// Invokes the wrapped function if no window is open, otherwise records
    /// `arguments` for the trailing call.
    ///
    /// Returns `Some(result)` only when this call invoked the function.
    pub fn call(&self, arguments: A) -> Option<R> {
        let shared = &self.shared;
        let now = shared.clock.now();
        let mut window = shared.window.borrow_mut();
        let in_window = window.opened_at.is_some_and(|opened_at| {
            shared
                .closes_at(opened_at)
                .is_none_or(|closes_at| now < closes_at)
        });

        if !in_window && shared.options.leading {
            window.opened_at = Some(now);
            window.pending = None;
            if window.trailing_scheduled {
                window.trailing_scheduled = false;
                shared.generation.set(shared.generation.get() + 1);
            }
            drop(window);
            tracing::trace!(now_ms = now.as_millis(), "throttle: leading call");
            return Some((shared.function)(arguments));
        }

        if !shared.options.trailing {
            drop(window);
            tracing::trace!(now_ms = now.as_millis(), "throttle: call dropped");
            return None;
        }

        let opened_at = if in_window {
            window.opened_at.unwrap_or(now)
        } else {
            window.opened_at = Some(now);
            now
        };
        window.pending = Some(arguments);
        let already_scheduled = std::mem::replace(&mut window.trailing_scheduled, true);
        drop(window);
        if !already_scheduled {
            let remaining = shared
                .closes_at(opened_at)
                .map_or(Duration::MAX, |closes_at| closes_at.saturating_sub(now));
            self.schedule_trailing(remaining);
        }
        None
    }

    /// Drops any pending trailing call and closes the current window, so the
    /// next call is treated as the first.
    pub fn cancel(&self) {
        let shared = &self.shared;
        shared.generation.set(shared.generation.get() + 1);
        *shared.window.borrow_mut() = WindowState::closed();
        tracing::debug!("throttle: cancelled");
    }

    /// Returns `true` if a trailing call is waiting for the window to close.
    pub fn has_pending(&self) -> bool {
        self.shared.window.borrow().pending.is_some()
    }

    /// Turns the wrapper into a plain closure.
    pub fn into_fn(self) -> impl Fn(A) -> Option<R> {
        move |arguments| self.call(arguments)
    }

    fn schedule_trailing(&self, remaining: Duration) {
        let weak: Weak<Shared<F, A>> = Rc::downgrade(&self.shared);
        let generation = self.shared.generation.get();
        tracing::debug!(
            remaining_ms = remaining.as_millis(),
            "throttle: trailing call scheduled"
        );
        self.shared.scheduler.schedule(
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    fire_trailing(&shared, generation);
                }
            }),
            remaining,
        );
    }
}

fn fire_trailing<F, A, R>(shared: &Shared<F, A>, generation: u64)
where
    F: Fn(A) -> R,
{
    if shared.generation.get() != generation {
        tracing::trace!("throttle: stale trailing call skipped");
        return;
    }
    let mut window = shared.window.borrow_mut();
    window.trailing_scheduled = false;
    let Some(arguments) = window.pending.take() else {
        return;
    };
    let now = shared.clock.now();
    window.opened_at = Some(now);
    drop(window);
    tracing::trace!(now_ms = now.as_millis(), "throttle: trailing call");
    (shared.function)(arguments);
}

impl<F, A> fmt::Debug for Throttled<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window = self.shared.window.try_borrow().ok();
        formatter
            .debug_struct("Throttled")
            .field("wait", &self.shared.wait)
            .field("options", &self.shared.options)
            .field(
                "opened_at",
                &window.as_ref().and_then(|window| window.opened_at),
            )
            .field(
                "pending",
                &window.as_ref().map(|window| window.pending.is_some()),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::timing::VirtualTimeline;

    fn counter(
        timeline: &Rc<VirtualTimeline>,
        options: ThrottleOptions,
    ) -> (Throttled<impl Fn(u32) + 'static, u32>, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let throttled = throttle_with_options(
            move |value: u32| sink.borrow_mut().push(value),
            Duration::from_millis(10),
            timeline.clone(),
            timeline.clone(),
            options,
        );
        (throttled, seen)
    }

    #[test]
    fn test_leading_only_drops_window_calls() {
        let timeline = Rc::new(VirtualTimeline::new());
        let (throttled, seen) = counter(
            &timeline,
            ThrottleOptions {
                leading: true,
                trailing: false,
            },
        );
        throttled.call(1);
        throttled.call(2);
        assert_eq!(timeline.pending(), 0);
        timeline.advance(Duration::from_millis(10));
        throttled.call(3);
        assert_eq!(*seen.borrow(), vec![1, 3]);
    }

    #[test]
    fn test_trailing_only_defers_first_call() {
        let timeline = Rc::new(VirtualTimeline::new());
        let (throttled, seen) = counter(
            &timeline,
            ThrottleOptions {
                leading: false,
                trailing: true,
            },
        );
        assert_eq!(throttled.call(1), None);
        assert_eq!(throttled.call(2), None);
        assert!(seen.borrow().is_empty());
        timeline.advance(Duration::from_millis(10));
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_no_edges_never_invokes() {
        let timeline = Rc::new(VirtualTimeline::new());
        let (throttled, seen) = counter(
            &timeline,
            ThrottleOptions {
                leading: false,
                trailing: false,
            },
        );
        throttled.call(1);
        timeline.run_until_idle();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_dropping_wrapper_skips_trailing_call() {
        let timeline = Rc::new(VirtualTimeline::new());
        let (throttled, seen) = counter(&timeline, ThrottleOptions::default());
        throttled.call(1);
        throttled.call(2);
        drop(throttled);
        assert_eq!(timeline.run_until_idle(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_unrepresentable_window_end_keeps_window_open() {
        let timeline = Rc::new(VirtualTimeline::new());
        let throttled = throttle(
            |value: u8| value,
            Duration::MAX,
            timeline.clone(),
            timeline.clone(),
        );
        timeline.advance(Duration::from_millis(1));
        assert_eq!(throttled.call(1), Some(1));
        assert_eq!(throttled.call(2), None);
        assert!(throttled.has_pending());
    }

    #[test]
    fn test_zero_wait_invokes_every_call() {
        let timeline = Rc::new(VirtualTimeline::new());
        let calls = Rc::new(Cell::new(0));
        let sink = Rc::clone(&calls);
        let throttled = throttle(
            move |()| sink.set(sink.get() + 1),
            Duration::ZERO,
            timeline.clone(),
            timeline.clone(),
        );
        throttled.call(());
        throttled.call(());
        assert_eq!(calls.get(), 2);
    }
}
