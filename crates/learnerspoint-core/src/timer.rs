//! Timer-driven state machines.
//!
//! Every animated widget on the site is a small finite-state machine that owns
//! exactly one pending timer. The machine says how long until that timer
//! fires ([`TimedMachine::next_delay`]) and what happens when it does
//! ([`TimedMachine::fire`]). [`drive`] turns that description into a running
//! loop on `tokio::time`.
//!
//! ## Cancellation
//!
//! Dropping the future returned by [`drive`] cancels the pending timer. The UI
//! runs each driver inside a component-scoped task, so unmounting the
//! component (or re-arming the machine) tears the timer down and no transition
//! can land on a defunct instance.
//!
//! ## Usage
//!
//! ```ignore
//! use learnerspoint_core::timer::{drive, Deadline};
//!
//! let mut done = Deadline::started(Duration::from_millis(4000));
//! drive(|step| step(&mut done)).await;
//! assert!(done.is_elapsed());
//! ```

use std::time::Duration;

/// A state machine advanced by a single owned timer.
pub trait TimedMachine {
    /// Delay until the next transition, or `None` when the machine is at rest.
    fn next_delay(&self) -> Option<Duration>;

    /// Take the transition scheduled by [`next_delay`](Self::next_delay).
    fn fire(&mut self);

    /// Re-arm key. When it changes, the pending timer must be cancelled and a
    /// new one started from "now".
    fn epoch(&self) -> u64 {
        0
    }
}

/// A single step applied to a machine by [`drive`].
pub type Step<M> = fn(&mut M) -> Option<Duration>;

/// Runs a machine until it comes to rest.
///
/// `apply` hands a step function to wherever the machine lives (a UI signal, a
/// mutex, a plain `&mut`) and returns the step's result. The machine is never
/// borrowed across an await point.
pub async fn drive<M, F>(mut apply: F)
where
    M: TimedMachine,
    F: FnMut(Step<M>) -> Option<Duration>,
{
    let mut delay = apply(|machine| machine.next_delay());
    while let Some(wait) = delay {
        tokio::time::sleep(wait).await;
        delay = apply(|machine| {
            machine.fire();
            machine.next_delay()
        });
    }
}

/// Phase of a [`Deadline`]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DeadlinePhase {
    /// Not started
    #[default]
    Idle,
    /// Waiting for the delay to pass
    Pending,
    /// The delay has passed
    Elapsed,
}

/// One-shot timer: `Idle -> Pending -> Elapsed`.
///
/// Used for the loading "done" flag, transient notices (success banner,
/// "copied" badge, newsletter thank-you) and staggered entrance reveals.
#[derive(Clone, Debug, PartialEq)]
pub struct Deadline {
    after: Duration,
    phase: DeadlinePhase,
    arms: u64,
}

impl Deadline {
    /// A deadline that waits for [`arm`](Self::arm).
    pub fn idle(after: Duration) -> Self {
        Self {
            after,
            phase: DeadlinePhase::Idle,
            arms: 0,
        }
    }

    /// A deadline that is already counting down.
    pub fn started(after: Duration) -> Self {
        Self {
            after,
            phase: DeadlinePhase::Pending,
            arms: 1,
        }
    }

    /// Start (or restart) the countdown from now.
    pub fn arm(&mut self) {
        self.phase = DeadlinePhase::Pending;
        self.arms += 1;
    }

    /// Return to idle without firing.
    pub fn disarm(&mut self) {
        if self.phase == DeadlinePhase::Pending {
            self.phase = DeadlinePhase::Idle;
            self.arms += 1;
        }
    }

    pub fn phase(&self) -> DeadlinePhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == DeadlinePhase::Pending
    }

    pub fn is_elapsed(&self) -> bool {
        self.phase == DeadlinePhase::Elapsed
    }

    pub fn after(&self) -> Duration {
        self.after
    }
}

impl TimedMachine for Deadline {
    fn next_delay(&self) -> Option<Duration> {
        self.is_pending().then_some(self.after)
    }

    fn fire(&mut self) {
        if self.is_pending() {
            self.phase = DeadlinePhase::Elapsed;
        }
    }

    fn epoch(&self) -> u64 {
        self.arms
    }
}

/// Cycles an index over `len` items every `period`, wrapping at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotator {
    len: usize,
    index: usize,
    period: Duration,
}

impl Rotator {
    pub fn new(len: usize, period: Duration) -> Self {
        Self {
            len,
            index: 0,
            period,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pick the current item out of `items`.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

impl TimedMachine for Rotator {
    fn next_delay(&self) -> Option<Duration> {
        // A single item never changes
        (self.len > 1).then_some(self.period)
    }

    fn fire(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_lifecycle() {
        let mut deadline = Deadline::idle(Duration::from_millis(200));
        assert_eq!(deadline.phase(), DeadlinePhase::Idle);
        assert_eq!(deadline.next_delay(), None);

        deadline.arm();
        assert!(deadline.is_pending());
        assert_eq!(deadline.next_delay(), Some(Duration::from_millis(200)));

        deadline.fire();
        assert!(deadline.is_elapsed());
        assert_eq!(deadline.next_delay(), None);

        // Firing again is a no-op
        deadline.fire();
        assert!(deadline.is_elapsed());
    }

    #[test]
    fn deadline_rearm_bumps_epoch() {
        let mut deadline = Deadline::started(Duration::from_secs(2));
        let first = deadline.epoch();
        deadline.fire();
        deadline.arm();
        assert!(deadline.is_pending());
        assert!(deadline.epoch() > first);
    }

    #[test]
    fn deadline_disarm_only_from_pending() {
        let mut deadline = Deadline::started(Duration::from_secs(1));
        deadline.disarm();
        assert_eq!(deadline.phase(), DeadlinePhase::Idle);

        let mut elapsed = Deadline::started(Duration::from_secs(1));
        elapsed.fire();
        elapsed.disarm();
        assert!(elapsed.is_elapsed());
    }

    #[test]
    fn rotator_wraps() {
        let mut rotator = Rotator::new(3, Duration::from_secs(1));
        let seen: Vec<usize> = (0..7)
            .map(|_| {
                let i = rotator.index();
                rotator.fire();
                i
            })
            .collect();
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn rotator_single_item_rests() {
        let rotator = Rotator::new(1, Duration::from_secs(1));
        assert_eq!(rotator.next_delay(), None);
        assert_eq!(rotator.pick(&["only"]), Some(&"only"));
    }

    #[tokio::test(start_paused = true)]
    async fn drive_runs_deadline_to_rest() {
        let mut deadline = Deadline::started(Duration::from_millis(4000));
        let start = tokio::time::Instant::now();
        drive(|step| step(&mut deadline)).await;
        assert!(deadline.is_elapsed());
        assert!(start.elapsed() >= Duration::from_millis(4000));
    }
}
