//! Cancelable delayed tasks
//!
//! Tasks are keyed by slot: scheduling into an occupied slot replaces the
//! pending task, so a superseding request always cancels the stale one.
//! Nothing runs on its own; the owner polls [`DelayedTasks::take_due`] with
//! the current time, which keeps every transition on the UI thread.

use std::fmt::Debug;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Scheduled<K, T> {
    slot: K,
    due: Instant,
    seq: u64,
    task: T,
}

#[derive(Debug)]
pub struct DelayedTasks<K, T> {
    pending: Vec<Scheduled<K, T>>,
    next_seq: u64,
}

impl<K, T> Default for DelayedTasks<K, T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq + Debug, T> DelayedTasks<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due `delay` after `now`.
    /// Returns true if a pending task in the same slot was replaced.
    pub fn schedule(&mut self, slot: K, now: Instant, delay: Duration, task: T) -> bool {
        let replaced = self.cancel(slot);
        self.pending.push(Scheduled {
            slot,
            due: now + delay,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
        replaced
    }

    /// Drop the pending task in `slot`, if any
    pub fn cancel(&mut self, slot: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.slot != slot);
        before != self.pending.len()
    }

    /// Remove and return every task due at `now`, earliest first
    /// (ties keep scheduling order)
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.task).collect()
    }

    /// Earliest pending deadline, for scheduling the next repaint
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Cancel everything. Returns how many tasks were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }
}

#[cfg(test)]
impl<K: Copy + Eq + Debug, T> DelayedTasks<K, T> {
    pub fn is_pending(&self, slot: K) -> bool {
        self.pending.iter().any(|s| s.slot == slot)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Slot {
        A,
        B,
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_task_not_due_before_delay() {
        let t0 = Instant::now();
        let mut tasks = DelayedTasks::new();
        tasks.schedule(Slot::A, t0, ms(300), "clear");

        assert!(tasks.take_due(t0 + ms(299)).is_empty());
        assert_eq!(tasks.take_due(t0 + ms(300)), vec!["clear"]);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_same_slot_replaces_pending_task() {
        let t0 = Instant::now();
        let mut tasks = DelayedTasks::new();
        assert!(!tasks.schedule(Slot::A, t0, ms(100), "first"));
        assert!(tasks.schedule(Slot::A, t0, ms(500), "second"));

        assert_eq!(tasks.len(), 1);
        assert!(tasks.take_due(t0 + ms(100)).is_empty());
        assert_eq!(tasks.take_due(t0 + ms(500)), vec!["second"]);
    }

    #[test]
    fn test_due_tasks_returned_in_deadline_order() {
        let t0 = Instant::now();
        let mut tasks = DelayedTasks::new();
        tasks.schedule(Slot::A, t0, ms(500), "late");
        tasks.schedule(Slot::B, t0, ms(300), "early");

        assert_eq!(tasks.next_deadline(), Some(t0 + ms(300)));
        assert_eq!(tasks.take_due(t0 + ms(1000)), vec!["early", "late"]);
    }

    #[test]
    fn test_cancel_and_cancel_all() {
        let t0 = Instant::now();
        let mut tasks = DelayedTasks::new();
        tasks.schedule(Slot::A, t0, ms(100), 1);
        tasks.schedule(Slot::B, t0, ms(100), 2);

        assert!(tasks.cancel(Slot::A));
        assert!(!tasks.cancel(Slot::A));
        assert!(tasks.is_pending(Slot::B));
        assert_eq!(tasks.cancel_all(), 1);
        assert!(tasks.take_due(t0 + ms(100)).is_empty());
        assert_eq!(tasks.next_deadline(), None);
    }
}
