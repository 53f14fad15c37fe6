//! Single-threaded timer queue driven by a virtual millisecond clock.
//!
//! Nothing here sleeps. The owner pops due timers with [`Scheduler::pop_due`]
//! and dispatches their tasks itself, which keeps every handler on the one
//! execution thread and makes timing fully deterministic.
//!
//! Timers due at the same instant fire in the order they were armed.
//! Repeating timers are re-armed at `due + interval`, so their cadence never
//! drifts regardless of when the owner gets around to popping them.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

/// Handle of an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    /// Virtual time the timer was due, in milliseconds.
    pub at_ms: u64,
    pub task: T,
}

#[derive(Debug)]
struct Slot<T> {
    task: T,
    every_ms: Option<u64>,
}

/// Heap key: due time, then arming sequence.
type Key = Reverse<(u64, u64, TimerId)>;

#[derive(Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    next_id: u64,
    queue: BinaryHeap<Key>,
    slots: HashMap<TimerId, Slot<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            next_id: 0,
            queue: BinaryHeap::new(),
            slots: HashMap::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arm a one-shot timer firing `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TimerId {
        self.arm(delay_ms, None, task)
    }

    /// Arm a repeating timer. The first firing is one interval from now.
    ///
    /// A zero interval is treated as one millisecond so the queue always
    /// makes progress.
    pub fn schedule_every(&mut self, interval_ms: u64, task: T) -> TimerId {
        let interval_ms = interval_ms.max(1);
        self.arm(interval_ms, Some(interval_ms), task)
    }

    /// Disarm a timer. Returns false when it already fired (one-shot) or was
    /// never armed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.slots.remove(&id).is_some();
        if removed {
            tracing::trace!(%id, "timer cancelled");
        }
        removed
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.slots.len()
    }

    /// Due time of the next armed timer.
    pub fn next_due(&mut self) -> Option<u64> {
        self.discard_cancelled();
        self.queue.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Move the clock forward to `at_ms` without firing anything.
    ///
    /// The clock never goes backwards.
    pub fn finish_at(&mut self, at_ms: u64) {
        self.now_ms = self.now_ms.max(at_ms);
    }

    fn arm(&mut self, delay_ms: u64, every_ms: Option<u64>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.push(due, id);
        self.slots.insert(id, Slot { task, every_ms });
        tracing::trace!(%id, due_ms = due, repeating = every_ms.is_some(), "timer armed");
        id
    }

    fn push(&mut self, due: u64, id: TimerId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((due, seq, id)));
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse((_, _, id))) = self.queue.peek() {
            if self.slots.contains_key(id) {
                break;
            }
            self.queue.pop();
        }
    }
}

impl<T: Clone> Scheduler<T> {
    /// Pop the next timer due at or before `until_ms`, advancing the clock to
    /// its due time. Repeating timers are re-armed before returning.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired<T>> {
        self.discard_cancelled();
        let Reverse((due, _, id)) = *self.queue.peek()?;
        if due > until_ms {
            return None;
        }
        self.queue.pop();
        self.now_ms = self.now_ms.max(due);

        let slot = self.slots.get(&id)?;
        let task = slot.task.clone();
        match slot.every_ms {
            Some(every) => self.push(due.saturating_add(every), id),
            None => {
                self.slots.remove(&id);
            }
        }
        Some(Fired {
            id,
            at_ms: due,
            task,
        })
    }

    /// Fire everything due up to `until_ms` through `handler`, then leave the
    /// clock at `until_ms`. Tasks armed by the handler are honored when they
    /// fall inside the window.
    pub fn run_until(&mut self, until_ms: u64, mut handler: impl FnMut(&mut Self, Fired<T>)) {
        while let Some(fired) = self.pop_due(until_ms) {
            handler(self, fired);
        }
        self.finish_at(until_ms);
    }
}
