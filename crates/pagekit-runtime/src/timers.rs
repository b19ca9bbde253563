//! Timer queue
//!
//! setTimeout on a virtual clock. Tasks run in `(due_at, scheduling
//! order)` order, so two timers due at the same instant fire in the
//! order they were set.

use crate::Page;

/// Timer handle returned by `set_timeout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Deferred unit of work
pub(crate) type Task = Box<dyn FnOnce(&mut Page)>;

struct ScheduledTask {
    id: TimerId,
    due_at: u64,
    order: u64,
    task: Task,
}

/// Pending timeouts plus the current virtual time
#[derive(Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    next_order: u64,
    tasks: Vec<ScheduledTask>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers that have not fired or been cleared
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_at).min()
    }

    pub(crate) fn schedule(&mut self, delay_ms: u64, task: Task) -> TimerId {
        self.next_id += 1;
        self.next_order += 1;
        let id = TimerId(self.next_id);
        self.tasks.push(ScheduledTask {
            id,
            due_at: self.now_ms.saturating_add(delay_ms),
            order: self.next_order,
            task,
        });
        id
    }

    /// Cancel a timer; false if it already fired or was cleared
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Remove the earliest task due at or before `until`
    pub(crate) fn pop_due(&mut self, until: u64) -> Option<(TimerId, u64, Task)> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at <= until)
            .min_by_key(|(_, t)| (t.due_at, t.order))
            .map(|(i, _)| i)?;
        let scheduled = self.tasks.swap_remove(index);
        Some((scheduled.id, scheduled.due_at, scheduled.task))
    }

    /// Move the clock forward; never backwards
    pub(crate) fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl std::fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now_ms", &self.now_ms)
            .field("pending", &self.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Task {
        Box::new(|_| {})
    }

    #[test]
    fn test_pop_order_is_due_then_insertion() {
        let mut queue = TimerQueue::new();
        let late = queue.schedule(50, noop());
        let first = queue.schedule(10, noop());
        let second = queue.schedule(10, noop());

        let order: Vec<TimerId> = std::iter::from_fn(|| queue.pop_due(100).map(|(id, _, _)| id)).collect();
        assert_eq!(order, vec![first, second, late]);
    }

    #[test]
    fn test_pop_respects_window() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, noop());

        assert!(queue.pop_due(99).is_none());
        assert_eq!(queue.next_due(), Some(100));
        assert!(queue.pop_due(100).is_some());
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_clear() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(10, noop());

        assert!(queue.clear(id));
        assert!(!queue.clear(id));
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut queue = TimerQueue::new();
        queue.set_now(1000);
        queue.schedule(5, noop());
        queue.set_now(10);

        assert_eq!(queue.now_ms(), 1000);
        assert_eq!(queue.next_due(), Some(1005));
    }
}
