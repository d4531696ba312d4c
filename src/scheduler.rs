//! Deferred work. The core never sleeps; it hands a [`Task`] to a
//! [`Scheduler`] and the host drives time forward with `advance`.

use std::time::Duration;

/// Work that can be deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Task {
    /// Empty the hand.
    ClearHand,
}

/// Identifies a scheduled task for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    /// Run `task` once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, task: Task) -> TimerHandle;
    /// Returns `false` if the task already ran or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
    /// Move the clock forward and return the tasks that came due, earliest first.
    fn advance(&mut self, elapsed: Duration) -> Vec<(TimerHandle, Task)>;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, delay: Duration, task: Task) -> TimerHandle {
        (**self).schedule(delay, task)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        (**self).cancel(handle)
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<(TimerHandle, Task)> {
        (**self).advance(elapsed)
    }
}

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    handle: TimerHandle,
    task: Task,
}

/// Deterministic clock that only moves when told to.
///
/// ```
/// use poker_hands::scheduler::{ManualScheduler, Scheduler, Task};
/// use std::time::Duration;
///
/// let mut clock = ManualScheduler::new();
/// let handle = clock.schedule(Duration::from_secs(1), Task::ClearHand);
/// assert!(clock.advance(Duration::from_millis(999)).is_empty());
/// assert_eq!(clock.advance(Duration::from_millis(1)), vec![(handle, Task::ClearHand)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending { due: self.now.saturating_add(delay), handle, task });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<(TimerHandle, Task)> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;
        // ties go to whichever was scheduled first
        due.sort_by_key(|p| (p.due, p.handle));
        due.into_iter().map(|p| (p.handle, p.task)).collect()
    }
}
