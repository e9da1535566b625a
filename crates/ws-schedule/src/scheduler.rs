//! `EventScheduler` — a time-ordered queue of deferred mutations.
//!
//! `BTreeMap<Tick, Vec<_>>` gives O(log W) insert and pop where W is the
//! number of distinct due ticks.  Events sharing a due tick live in one
//! `Vec` in insertion order, which is the tie-break.

use std::collections::BTreeMap;

use ws_core::Tick;

use crate::{ScheduleError, ScheduleResult};

/// One deferred mutation, owned by the scheduler until it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledEvent<T, M> {
    pub due:      Tick,
    pub target:   T,
    pub mutation: M,
}

/// Priority queue of [`ScheduledEvent`]s keyed by due tick.
pub struct EventScheduler<T, M> {
    inner: BTreeMap<Tick, Vec<(T, M)>>,
    /// The time relative delays are measured from.  Advanced by `fire_due`.
    now:   Tick,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl<T, M> Default for EventScheduler<T, M> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), now: Tick::ZERO, total: 0 }
    }
}

impl<T, M> EventScheduler<T, M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty scheduler whose clock already reads `now` (snapshot restore).
    pub fn starting_at(now: Tick) -> Self {
        Self { now, ..Self::default() }
    }

    /// The scheduler's notion of the current tick.
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Schedule `mutation` on `target` to fire `delay` ticks from now.
    ///
    /// A zero delay fires at the next `fire_due` call.  Returns the due tick.
    pub fn schedule_relative(&mut self, delay: i64, target: T, mutation: M) -> ScheduleResult<Tick> {
        if delay < 0 {
            return Err(ScheduleError::InvalidSchedule { delay });
        }
        let due = self.now + delay as u64;
        self.push(due, target, mutation);
        Ok(due)
    }

    /// Schedule at an absolute tick, which must not precede `now`.
    pub fn schedule_at(&mut self, due: Tick, target: T, mutation: M) -> ScheduleResult<()> {
        if due < self.now {
            return Err(ScheduleError::DueInPast { due, now: self.now });
        }
        self.push(due, target, mutation);
        Ok(())
    }

    fn push(&mut self, due: Tick, target: T, mutation: M) {
        self.inner.entry(due).or_default().push((target, mutation));
        self.total += 1;
    }

    /// Advance to `now` and hand every event with `due <= now` to `apply`,
    /// earliest due first and in insertion order within a tick.
    ///
    /// Returns the number of events applied.  If `apply` fails the error is
    /// returned immediately; events not yet handed over stay queued.
    pub fn fire_due<E, F>(&mut self, now: Tick, mut apply: F) -> Result<usize, E>
    where
        F: FnMut(ScheduledEvent<T, M>) -> Result<(), E>,
    {
        if now > self.now {
            self.now = now;
        }
        let mut fired = 0;
        while let Some(entry) = self.inner.first_entry() {
            if *entry.key() > now {
                break;
            }
            let due = *entry.key();
            let batch = entry.remove();
            self.total -= batch.len();
            let mut batch = batch.into_iter();
            while let Some((target, mutation)) = batch.next() {
                if let Err(e) = apply(ScheduledEvent { due, target, mutation }) {
                    let rest: Vec<(T, M)> = batch.by_ref().collect();
                    if !rest.is_empty() {
                        self.total += rest.len();
                        self.inner.insert(due, rest);
                    }
                    return Err(e);
                }
                fired += 1;
            }
        }
        Ok(fired)
    }

    /// The earliest due tick, or `None` if nothing is queued.
    pub fn next_due(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Pending events in firing order, without removing them.
    pub fn pending(&self) -> impl Iterator<Item = ScheduledEvent<&T, &M>> + '_ {
        self.inner.iter().flat_map(|(&due, batch)| {
            batch.iter().map(move |(target, mutation)| ScheduledEvent { due, target, mutation })
        })
    }

    /// Due ticks of every pending event aimed at `target`, earliest first.
    pub fn pending_for(&self, target: &T) -> Vec<Tick>
    where
        T: PartialEq,
    {
        self.pending()
            .filter(|ev| ev.target == target)
            .map(|ev| ev.due)
            .collect()
    }

    /// Total number of queued events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
