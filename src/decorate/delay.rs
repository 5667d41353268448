//! Deferred invocation.

use std::time::Duration;

use super::timing::Scheduler;

/// Schedules `function(arguments)` to run once, `wait` from now.
///
/// `delay` returns immediately; the result of the deferred call is
/// discarded. A zero `wait` still defers the call to the scheduler instead
/// of running it inline. There is no handle for cancelling the call.
///
/// # Examples
///
/// ```rust
/// use combinars::decorate::{VirtualTimeline, delay};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let timeline = VirtualTimeline::new();
/// let seen = Rc::new(Cell::new(None));
///
/// let slot = Rc::clone(&seen);
/// delay(
///     &timeline,
///     move |(left, right): (i32, i32)| slot.set(Some(left + right)),
///     Duration::from_millis(50),
///     (1, 2),
/// );
///
/// timeline.advance(Duration::from_millis(49));
/// assert_eq!(seen.get(), None);
/// timeline.advance(Duration::from_millis(1));
/// assert_eq!(seen.get(), Some(3));
/// ```
pub fn delay<S, F, A, R>(scheduler: &S, function: F, wait: Duration, arguments: A)
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + 'static,
    A: 'static,
{
    tracing::trace!(wait_ms = wait.as_millis(), "delay: scheduling call");
    scheduler.schedule(
        Box::new(move || {
            function(arguments);
        }),
        wait,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorate::timing::VirtualTimeline;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_zero_wait_is_still_deferred() {
        let timeline = VirtualTimeline::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        delay(&timeline, move |()| flag.set(true), Duration::ZERO, ());
        assert!(!ran.get());
        assert_eq!(timeline.advance(Duration::ZERO), 1);
        assert!(ran.get());
    }

    #[test]
    fn test_through_trait_object() {
        let timeline = VirtualTimeline::new();
        let scheduler: &dyn Scheduler = &timeline;
        let total = Rc::new(Cell::new(0));
        let sink = Rc::clone(&total);
        delay(scheduler, move |value: i32| sink.set(value), Duration::from_millis(5), 7);
        timeline.run_until_idle();
        assert_eq!(total.get(), 7);
    }
}
