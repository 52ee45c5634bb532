//! Tick-driven delay queue.
//!
//! Time only moves when the owner calls [`TimerQueue::tick`], which keeps
//! every delayed effect deterministic under test. Dropping the queue cancels
//! whatever is still pending.

struct Pending<T> {
    due_ms: u64,
    seq: u64,
    item: T,
}

/// Fire-and-forget actions waiting on a deadline.
pub struct TimerQueue<T> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Queue `item` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, item: T) {
        let due_ms = self.now_ms + u64::from(delay_ms);
        log::debug!("timer #{} due at {due_ms}ms", self.next_seq);
        self.pending.push(Pending {
            due_ms,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Advance the clock by `dt_ms` and return everything that came due,
    /// ordered by deadline and then by scheduling order.
    pub fn tick(&mut self, dt_ms: u32) -> Vec<T> {
        self.now_ms += u64::from(dt_ms);
        let now = self.now_ms;
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = waiting;
        due.sort_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.item).collect()
    }

    /// Number of actions still waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
