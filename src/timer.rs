//! Single-shot timer queue driven by virtual time.
//!
//! The crate never sleeps or spawns threads. Every "wait" — an autoplay tick,
//! a pause-then-resume window, the lightbox's post-close image clear, the
//! contact form's fake send — is an entry in this queue, keyed by a deadline
//! in milliseconds since page load. The host owns real time: it calls
//! [`crate::page::Page::advance`] with the current virtual instant and the
//! queue hands back every event whose deadline has passed, in deadline order.
//!
//! Scheduling returns a [`TimerHandle`] so the scheduler can cancel exactly
//! the timer it created. Cancellation by handle is what makes the autoplay
//! pause/resume discipline checkable: a component that must "cancel any
//! outstanding resume timer before scheduling a new one" holds the handle and
//! there is nothing implicit to leak.

/// Opaque handle to a scheduled timer. Stale handles (fired or cancelled)
/// are harmless: cancelling them is a no-op that returns `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<E> {
    id: u64,
    due_ms: u64,
    event: E,
}

/// Ordered single-shot timer queue.
///
/// `E` is the payload delivered when a timer fires. Entries with equal
/// deadlines fire in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_id: u64,
    pending: Vec<Entry<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `event` to fire once `now >= due_ms`.
    pub fn schedule(&mut self, due_ms: u64, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Entry { id, due_ms, event });
        TimerHandle(id)
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != handle.0);
        self.pending.len() != before
    }

    /// Whether the timer behind `handle` is still waiting to fire.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|e| e.id == handle.0)
    }

    /// Remove and return every event due at `now_ms`, ordered by deadline
    /// (ties by scheduling order).
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<E> {
        let mut due = Vec::new();
        let mut rest = Vec::with_capacity(self.pending.len());
        for entry in self.pending.drain(..) {
            if entry.due_ms <= now_ms {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.pending = rest;
        due.sort_by_key(|e| (e.due_ms, e.id));
        due.into_iter().map(|e| e.event).collect()
    }

    /// Number of timers still pending.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
