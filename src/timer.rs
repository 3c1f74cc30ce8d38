// SPDX-License-Identifier: MPL-2.0
//! One-shot and repeating timers on a caller-driven clock.
//!
//! The scheduler never reads the system clock. Callers pass `now` into
//! [`Scheduler::pop_due`] and receive due timers one at a time, earliest
//! first, ties broken by creation order. A repeating timer is rescheduled
//! before it is returned, so a handler that clears it stops it for good.

use crate::surface::ElementId;
use crate::toast::ToastId;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Handle returned by the scheduling calls, used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Adds the `show` class to a freshly created toast.
    Entry(ToastId),
    /// Accumulates elapsed time and dismisses the toast on expiry.
    Countdown(ToastId),
    /// Writes the `--progress` style property.
    Progress(ToastId),
    /// Delivers the end of a running transition.
    TransitionEnd(ElementId),
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: TimerKind,
    due: Instant,
    every: Option<Duration>,
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub kind: TimerKind,
    /// The instant the timer was scheduled for, used as the handler's clock.
    pub at: Instant,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    timers: BTreeMap<TimerId, Entry>,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire once at `now + delay`.
    pub fn set_timeout(&mut self, kind: TimerKind, now: Instant, delay: Duration) -> TimerId {
        self.insert(Entry {
            kind,
            due: now + delay,
            every: None,
        })
    }

    /// Schedules `kind` to fire every `interval`, first at `now + interval`.
    pub fn set_interval(&mut self, kind: TimerKind, now: Instant, interval: Duration) -> TimerId {
        // A zero interval would never let `pop_due` make progress.
        let interval = interval.max(Duration::from_millis(1));
        self.insert(Entry {
            kind,
            due: now + interval,
            every: Some(interval),
        })
    }

    /// Cancels a timer. Returns `false` if it already fired or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancels every timer matching `predicate`.
    pub fn clear_where(&mut self, mut predicate: impl FnMut(TimerKind) -> bool) {
        self.timers.retain(|_, entry| !predicate(entry.kind));
    }

    #[must_use]
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Earliest instant at which some timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|entry| entry.due).min()
    }

    /// Returns the earliest timer due at or before `now`.
    ///
    /// One-shot timers are removed; repeating ones are moved to their next
    /// occurrence.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired> {
        let (&id, &entry) = self
            .timers
            .iter()
            .filter(|(_, entry)| entry.due <= now)
            .min_by_key(|(id, entry)| (entry.due, **id))?;
        let fired = Fired {
            id,
            kind: entry.kind,
            at: entry.due,
        };
        match entry.every {
            Some(interval) => {
                if let Some(entry) = self.timers.get_mut(&id) {
                    entry.due += interval;
                }
            }
            None => {
                self.timers.remove(&id);
            }
        }
        Some(fired)
    }

    fn insert(&mut self, entry: Entry) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, entry);
        id
    }
}
