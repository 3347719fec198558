//! Single-threaded delayed-task queue.
//!
//! The original design buried the reveal sequencing in nested timeout
//! callbacks; here the controller posts delayed transitions to this queue
//! and the environment drives it, so the transition table stays the
//! single source of truth. The queue runs on a virtual clock: tests call
//! `advance` directly, the web layer forwards browser timeouts.

/// Delayed tasks with an epoch guard. Cancelling bumps the epoch, so an
/// environment callback scheduled against an earlier epoch can detect it
/// is stale and do nothing instead of mutating a reused controller.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now_ms: u64,
    epoch: u64,
    pending: Vec<Entry<T>>,
}

#[derive(Debug)]
struct Entry<T> {
    due_ms: u64,
    task: T,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            epoch: 0,
            pending: Vec::new(),
        }
    }

    /// Post a task to fire `delay_ms` after the current virtual instant.
    pub fn schedule(&mut self, delay_ms: u64, task: T) {
        self.pending.push(Entry {
            due_ms: self.now_ms.saturating_add(delay_ms),
            task,
        });
    }

    /// Move the virtual clock forward and return every task that came
    /// due, in due order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<T> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;
        let mut fired: Vec<Entry<T>> = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due_ms <= now {
                fired.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        fired.sort_by_key(|entry| entry.due_ms);
        fired.into_iter().map(|entry| entry.task).collect()
    }

    /// Drop every pending task and invalidate outstanding environment
    /// callbacks by bumping the epoch.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.epoch += 1;
    }

    /// Epoch stamp for environment callbacks to compare against.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Delay until the earliest pending task, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|entry| entry.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
