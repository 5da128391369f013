//! Cancellable scheduled tasks keyed by deadline.
//!
//! Every delay in the form (alert auto-dismiss, exit animations, toast
//! lifetimes, the clear-form animation) is a task in a `TimerQueue`. Time is
//! passed in by the caller, so the queue never reads a clock itself.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Deadline-ordered queue of pending tasks.
///
/// Tasks with equal deadlines fire in scheduling order.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: BTreeMap<(Instant, TimerId), T>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Schedule `task` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((deadline, id), task);
        id
    }

    /// Schedule `task` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) -> TimerId {
        self.schedule_at(now + delay, task)
    }

    /// Cancel a pending task.
    ///
    /// Returns the task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let key = self.pending.keys().find(|(_, tid)| *tid == id).copied()?;
        self.pending.remove(&key)
    }

    /// Whether `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.keys().any(|(_, tid)| *tid == id)
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// together with its deadline, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<(Instant, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let deadline = entry.key().0;
            due.push((deadline, entry.remove()));
        }
        due
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn tasks_fire_in_deadline_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule_after(t0, ms(300), "late");
        queue.schedule_after(t0, ms(100), "early");
        queue.schedule_after(t0, ms(200), "middle");

        let fired: Vec<_> = queue
            .pop_due(t0 + ms(1000))
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(fired, vec!["early", "middle", "late"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule_at(t0, 1);
        queue.schedule_at(t0, 2);
        queue.schedule_at(t0, 3);

        let fired: Vec<_> = queue.pop_due(t0).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn tasks_not_yet_due_stay_pending() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let id = queue.schedule_after(t0, ms(500), ());

        assert!(queue.pop_due(t0 + ms(499)).is_empty());
        assert!(queue.is_pending(id));
        assert_eq!(queue.next_deadline(), Some(t0 + ms(500)));

        assert_eq!(queue.pop_due(t0 + ms(500)).len(), 1);
        assert!(!queue.is_pending(id));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let keep = queue.schedule_after(t0, ms(10), "keep");
        let dropped = queue.schedule_after(t0, ms(10), "drop");

        assert_eq!(queue.cancel(dropped), Some("drop"));
        assert_eq!(queue.cancel(dropped), None, "second cancel is a no-op");

        let fired: Vec<_> = queue.pop_due(t0 + ms(10)).into_iter().map(|(_, t)| t).collect();
        assert_eq!(fired, vec!["keep"]);
        assert!(!queue.is_pending(keep));
    }

    #[test]
    fn pop_due_reports_original_deadline() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule_after(t0, ms(100), ());

        let due = queue.pop_due(t0 + ms(5000));
        assert_eq!(due[0].0, t0 + ms(100));
    }
}
