//! Clocks and schedulers for the timing decorators.
//!
//! [`delay`](super::delay) and [`throttle`](super::throttle) never read the
//! system time or spawn anything themselves; they go through the [`Clock`]
//! and [`Scheduler`] traits. Three implementations ship with the crate:
//!
//! - [`SystemClock`]: monotonic wall time
//! - [`VirtualTimeline`]: a clock and scheduler that only move when told to,
//!   for deterministic tests and hand-driven event loops
//! - `TokioClock` / `TokioScheduler` (feature `async`): `tokio::time` and
//!   `spawn_local`
//!
//! All timestamps are [`Duration`]s since an arbitrary, fixed origin.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// A deferred callback.
pub type Task = Box<dyn FnOnce()>;

/// A source of timestamps.
pub trait Clock {
    /// Returns the time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// Runs callbacks later, on the same logical thread as the caller.
pub trait Scheduler {
    /// Runs `task` once, no earlier than `delay` from now.
    fn schedule(&self, task: Task, delay: Duration);
}

/// A monotonic clock whose origin is the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock starting at zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A manually advanced clock with a queue of scheduled tasks.
///
/// Time stands still until [`advance`](Self::advance) or
/// [`advance_to`](Self::advance_to) is called. Advancing runs every task
/// that falls due on the way, in due-time order (ties in scheduling order),
/// with the clock set to each task's due time while it runs. Tasks scheduled
/// by running tasks are picked up by the same advance if they fall due
/// before its deadline.
///
/// # Examples
///
/// ```rust
/// use combinars::decorate::{Clock, Scheduler, VirtualTimeline};
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let timeline = VirtualTimeline::new();
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let late = Rc::clone(&log);
/// timeline.schedule(Box::new(move || late.borrow_mut().push("late")), Duration::from_millis(20));
/// let early = Rc::clone(&log);
/// timeline.schedule(Box::new(move || early.borrow_mut().push("early")), Duration::from_millis(10));
///
/// assert_eq!(timeline.advance(Duration::from_millis(15)), 1);
/// assert_eq!(*log.borrow(), vec!["early"]);
/// assert_eq!(timeline.now(), Duration::from_millis(15));
///
/// timeline.advance(Duration::from_millis(5));
/// assert_eq!(*log.borrow(), vec!["early", "late"]);
/// ```
#[derive(Default)]
pub struct VirtualTimeline {
    now: Cell<Duration>,
    next_sequence: Cell<u64>,
    queue: RefCell<BTreeMap<(Duration, u64), Task>>,
}

impl VirtualTimeline {
    /// Creates a timeline at time zero with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Moves the clock forward by `elapsed`, running due tasks.
    ///
    /// Returns how many tasks ran.
    pub fn advance(&self, elapsed: Duration) -> usize {
        self.advance_to(self.now.get().saturating_add(elapsed))
    }

    /// Moves the clock forward to `deadline`, running due tasks.
    ///
    /// A deadline in the past runs whatever is already due and leaves the
    /// clock where it is. Returns how many tasks ran.
    pub fn advance_to(&self, deadline: Duration) -> usize {
        let mut executed = 0;
        while let Some((due, task)) = self.pop_due(deadline) {
            if due > self.now.get() {
                self.now.set(due);
            }
            task();
            executed += 1;
        }
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
        executed
    }

    /// Runs tasks until the queue is empty, moving the clock to each due time.
    ///
    /// Returns how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        let mut executed = 0;
        loop {
            let last_due = self.queue.borrow().last_key_value().map(|(&(due, _), _)| due);
            match last_due {
                Some(due) => executed += self.advance_to(due),
                None => return executed,
            }
        }
    }

    fn pop_due(&self, deadline: Duration) -> Option<(Duration, Task)> {
        let mut queue = self.queue.borrow_mut();
        let is_due = queue
            .first_key_value()
            .is_some_and(|(&(due, _), _)| due <= deadline);
        if is_due {
            queue.pop_first().map(|((due, _), task)| (due, task))
        } else {
            None
        }
    }
}

impl Clock for VirtualTimeline {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl Scheduler for VirtualTimeline {
    fn schedule(&self, task: Task, delay: Duration) {
        let sequence = self.next_sequence.get();
        self.next_sequence.set(sequence + 1);
        self.queue
            .borrow_mut()
            .insert((self.now.get().saturating_add(delay), sequence), task);
    }
}

impl fmt::Debug for VirtualTimeline {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VirtualTimeline")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(feature = "async")]
pub use tokio_timing::{TokioClock, TokioScheduler};

#[cfg(feature = "async")]
mod tokio_timing {
    use super::{Clock, Scheduler, Task};
    use std::time::Duration;
    use tokio::time::Instant;

    /// A clock reading `tokio::time`, so it follows paused and advanced
    /// test time.
    #[derive(Debug, Clone, Copy)]
    pub struct TokioClock {
        origin: Instant,
    }

    impl TokioClock {
        /// Creates a clock starting at zero now.
        #[must_use]
        pub fn new() -> Self {
            Self {
                origin: Instant::now(),
            }
        }
    }

    impl Default for TokioClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for TokioClock {
        fn now(&self) -> Duration {
            self.origin.elapsed()
        }
    }

    /// Runs tasks on the current [`tokio::task::LocalSet`] after a
    /// `tokio::time::sleep`.
    ///
    /// Tasks are not `Send`, so scheduling must happen inside a `LocalSet`
    /// (for example within `LocalSet::run_until`).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioScheduler;

    impl TokioScheduler {
        /// Creates a scheduler bound to whichever `LocalSet` is current when
        /// tasks are scheduled.
        #[must_use]
        pub const fn new() -> Self {
            Self
        }
    }

    impl Scheduler for TokioScheduler {
        fn schedule(&self, task: Task, delay: Duration) {
            tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                task();
            });
        }
    }
}
