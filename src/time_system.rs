//! Deferred one-shot tasks driven by simulated time.
//!
//! Time advances only when the host reports elapsed frame time; tasks whose
//! due time has been reached are handed back in due order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

// =============================================================================
// GAME CLOCK
// =============================================================================

/// Simulation clock (in seconds)
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Current game time in seconds (simulation time, not real time)
    pub time: f32,
}

impl GameClock {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Advance time to the given timestamp
    pub fn advance_to(&mut self, time: f32) {
        debug_assert!(
            time >= self.time,
            "Cannot go backwards in time: {} -> {}",
            self.time,
            time
        );
        self.time = time;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// DEFERRED SCHEDULER
// =============================================================================

/// Handle returned by [`DeferredScheduler::schedule_in`], used to cancel a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due_time: f32,
    payload: T,
}

impl<T> PartialEq for ScheduledTask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_time == other.due_time && self.handle == other.handle
    }
}

impl<T> Eq for ScheduledTask<T> {}

impl<T> PartialOrd for ScheduledTask<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTask<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest time first,
        // then earliest scheduled)
        other
            .due_time
            .partial_cmp(&self.due_time)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.handle.0.cmp(&self.handle.0))
    }
}

/// One-shot tasks waiting for their due time. Dropping the scheduler drops
/// every pending task without running it.
#[derive(Debug)]
pub struct DeferredScheduler<T> {
    clock: GameClock,
    pending: BinaryHeap<ScheduledTask<T>>,
    next_handle: u64,
}

impl<T> DeferredScheduler<T> {
    pub fn new() -> Self {
        Self {
            clock: GameClock::new(),
            pending: BinaryHeap::new(),
            next_handle: 0,
        }
    }

    pub fn now(&self) -> f32 {
        self.clock.time
    }

    /// Schedule `payload` to come due `delay` seconds from now
    pub fn schedule_in(&mut self, delay: f32, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(ScheduledTask {
            handle,
            due_time: self.clock.time + delay.max(0.0),
            payload,
        });
        handle
    }

    /// Remove a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        // Rebuild the heap without the cancelled task
        let remaining: Vec<_> = self
            .pending
            .drain()
            .filter(|task| task.handle != handle)
            .collect();
        self.pending = remaining.into_iter().collect();
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|task| task.handle == handle)
    }

    /// Advance the clock by `elapsed` seconds and return every task that came due
    pub fn advance(&mut self, elapsed: f32) -> Vec<T> {
        if elapsed > 0.0 {
            let target = self.clock.time + elapsed;
            self.clock.advance_to(target);
        }

        let mut due = Vec::new();
        while self
            .pending
            .peek()
            .is_some_and(|task| task.due_time <= self.clock.time)
        {
            if let Some(task) = self.pending.pop() {
                due.push(task.payload);
            }
        }
        due
    }

    /// Check if there are any pending tasks
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for DeferredScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_once_after_delay() {
        let mut scheduler = DeferredScheduler::new();
        scheduler.schedule_in(1.0, "restart");

        assert!(scheduler.advance(0.5).is_empty());
        assert_eq!(scheduler.advance(0.5), vec!["restart"]);
        assert!(scheduler.advance(5.0).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_due_order() {
        let mut scheduler = DeferredScheduler::new();
        scheduler.schedule_in(2.0, 'b');
        scheduler.schedule_in(1.0, 'a');
        scheduler.schedule_in(2.0, 'c');

        assert_eq!(scheduler.advance(3.0), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut scheduler = DeferredScheduler::new();
        let keep = scheduler.schedule_in(1.0, 1);
        let drop = scheduler.schedule_in(1.0, 2);

        assert!(scheduler.cancel(drop));
        assert!(!scheduler.cancel(drop));
        assert!(scheduler.is_pending(keep));
        assert_eq!(scheduler.advance(1.0), vec![1]);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut scheduler = DeferredScheduler::new();
        scheduler.schedule_in(0.0, ());
        assert_eq!(scheduler.advance(0.0).len(), 1);
    }
}
