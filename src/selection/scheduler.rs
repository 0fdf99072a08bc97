//! Cancellable one-shot timers.
//!
//! The controller never sleeps or reads a clock. It asks a [`Scheduler`] for a
//! timer and later receives the fired [`TimerHandle`] back through
//! `SelectionController::on_timer`. Two implementations are provided:
//!
//! - [`ManualScheduler`]: owns a simulated clock advanced explicitly. Used by
//!   tests and by hosts that already track time themselves.
//! - [`TimerQueue`]: bookkeeping for hosts like Zellij whose `set_timeout`
//!   cannot be cancelled and only reports the requested duration when it
//!   fires.

use std::collections::VecDeque;
use std::time::Duration;

/// Opaque identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Capability to schedule and cancel one-shot timers.
pub trait Scheduler {
    /// Schedules a timer firing after `after` and returns its handle.
    fn schedule(&mut self, after: Duration) -> TimerHandle;

    /// Cancels a pending timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule(&mut self, after: Duration) -> TimerHandle {
        (**self).schedule(after)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}

/// Scheduler backed by a simulated clock.
///
/// # Example
///
/// ```
/// use folio::selection::{ManualScheduler, Scheduler};
/// use std::time::Duration;
///
/// let mut scheduler = ManualScheduler::default();
/// let handle = scheduler.schedule(Duration::from_millis(1000));
///
/// assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![handle]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<(TimerHandle, Duration)>,
}

impl ManualScheduler {
    /// Current simulated time since the scheduler was created.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns the handles that became due,
    /// earliest deadline first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(TimerHandle, Duration)> = Vec::new();
        self.pending.retain(|&(handle, deadline)| {
            if deadline <= now {
                due.push((handle, deadline));
                false
            } else {
                true
            }
        });

        due.sort_by_key(|&(handle, deadline)| (deadline, handle));
        due.into_iter().map(|(handle, _)| handle).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, after: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push((handle, self.now + after));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }
}

#[derive(Debug, Clone)]
struct QueuedTimer {
    handle: TimerHandle,
    after: Duration,
    cancelled: bool,
}

/// Scheduler for hosts with fire-and-forget timers.
///
/// Every `schedule` call queues an outbound request (drained with
/// [`TimerQueue::take_requests`]) that the host turns into a real timer.
/// When the host reports a fired timer of some duration, [`TimerQueue::fire`]
/// resolves it to the oldest queued timer with that duration. Cancelled timers
/// stay queued until their host timer fires so the FIFO pairing stays aligned,
/// but they resolve to `None`.
#[derive(Debug, Default, Clone)]
pub struct TimerQueue {
    next_id: u64,
    queued: VecDeque<QueuedTimer>,
    requests: Vec<Duration>,
}

impl TimerQueue {
    /// Drains the timer requests the host still has to start.
    pub fn take_requests(&mut self) -> Vec<Duration> {
        std::mem::take(&mut self.requests)
    }

    /// Resolves a host timer that fired after `elapsed`.
    ///
    /// Returns `None` when nothing with that duration is queued or the
    /// matching timer was cancelled.
    pub fn fire(&mut self, elapsed: Duration) -> Option<TimerHandle> {
        let pos = self.queued.iter().position(|t| same_duration(t.after, elapsed))?;
        let timer = self.queued.remove(pos)?;

        if timer.cancelled {
            tracing::trace!(timer = timer.handle.id(), "cancelled timer fired, ignoring");
            None
        } else {
            Some(timer.handle)
        }
    }

    /// Number of queued timers that are still live.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.queued.iter().filter(|t| !t.cancelled).count()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, after: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.queued.push_back(QueuedTimer {
            handle,
            after,
            cancelled: false,
        });
        self.requests.push(after);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(timer) = self.queued.iter_mut().find(|t| t.handle == handle) {
            timer.cancelled = true;
        }
    }
}

/// Host timers round-trip through `f64` seconds, so compare within half a
/// millisecond.
fn same_duration(a: Duration, b: Duration) -> bool {
    (a.as_secs_f64() - b.as_secs_f64()).abs() < 0.0005
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn manual_scheduler_fires_in_deadline_order() {
        let mut s = ManualScheduler::default();
        let late = s.schedule(SECOND * 2);
        let early = s.schedule(SECOND);

        assert_eq!(s.advance(SECOND * 3), vec![early, late]);
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn manual_scheduler_cancelled_timer_never_fires() {
        let mut s = ManualScheduler::default();
        let handle = s.schedule(SECOND);
        s.cancel(handle);

        assert!(s.advance(SECOND * 5).is_empty());
    }

    #[test]
    fn manual_scheduler_deadline_is_relative_to_now() {
        let mut s = ManualScheduler::default();
        s.advance(SECOND);
        let handle = s.schedule(SECOND);

        assert!(s.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(s.advance(Duration::from_millis(500)), vec![handle]);
        assert_eq!(s.now(), SECOND * 2);
    }

    #[test]
    fn timer_queue_records_host_requests() {
        let mut q = TimerQueue::default();
        q.schedule(SECOND);
        q.schedule(Duration::from_millis(50));

        assert_eq!(q.take_requests(), vec![SECOND, Duration::from_millis(50)]);
        assert!(q.take_requests().is_empty());
    }

    #[test]
    fn timer_queue_matches_by_duration_in_fifo_order() {
        let mut q = TimerQueue::default();
        let first = q.schedule(SECOND);
        let frame = q.schedule(Duration::from_millis(50));
        let second = q.schedule(SECOND);

        assert_eq!(q.fire(Duration::from_millis(50)), Some(frame));
        assert_eq!(q.fire(SECOND), Some(first));
        assert_eq!(q.fire(SECOND), Some(second));
        assert_eq!(q.fire(SECOND), None);
    }

    #[test]
    fn timer_queue_swallows_cancelled_timers() {
        let mut q = TimerQueue::default();
        let stale = q.schedule(SECOND);
        let fresh = q.schedule(SECOND);
        q.cancel(stale);

        assert_eq!(q.live_count(), 1);
        assert_eq!(q.fire(SECOND), None);
        assert_eq!(q.fire(SECOND), Some(fresh));
    }

    #[test]
    fn timer_queue_tolerates_float_round_trip() {
        let mut q = TimerQueue::default();
        let handle = q.schedule(Duration::from_millis(50));

        assert_eq!(q.fire(Duration::from_secs_f64(0.05)), Some(handle));
    }

    #[test]
    fn timer_queue_ignores_unknown_durations() {
        let mut q = TimerQueue::default();
        let handle = q.schedule(Duration::from_millis(300));

        assert_eq!(q.fire(Duration::from_millis(301)), None);
        assert_eq!(q.fire(Duration::from_secs_f64(0.3)), Some(handle));
    }
}
