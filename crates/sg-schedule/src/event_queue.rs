//! `EventQueue` — ordered, cancellable registration queue.
//!
//! # Layout
//!
//! Registrations live in a `BTreeMap` keyed by `(fire_time, EventId)`.  Since
//! `EventId`s are handed out monotonically, the key order is exactly "earliest
//! time first, then registration order".  A side index `EventId → fire_time`
//! makes `cancel` an O(log N) removal of the real queue entry rather than a
//! tombstone checked when the event pops.

use std::collections::{BTreeMap, HashMap};

use sg_core::{EntityId, EventId, SimTime};

use crate::{ScheduleError, ScheduleResult, ScheduledEvent, Scheduler};

/// Reference [`Scheduler`] implementation.
#[derive(Default, Debug)]
pub struct EventQueue {
    queue:   BTreeMap<(SimTime, EventId), EntityId>,
    /// Fire time of every live registration, for O(log N) cancel.
    index:   HashMap<EventId, SimTime>,
    now:     SimTime,
    next_id: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue whose clock starts at `start` instead of zero.
    pub fn starting_at(start: SimTime) -> Self {
        Self { now: start, ..Self::default() }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Fire time of a live registration.
    pub fn fire_time(&self, event: EventId) -> Option<SimTime> {
        self.index.get(&event).copied()
    }

    /// Number of live registrations targeting `entity`.
    ///
    /// O(N); meant for diagnostics and tests.
    pub fn registrations_for(&self, entity: EntityId) -> usize {
        self.queue.values().filter(|&&target| target == entity).count()
    }

    fn alloc_id(&mut self) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Scheduler for EventQueue {
    #[inline]
    fn now(&self) -> SimTime {
        self.now
    }

    fn schedule_at(&mut self, time: SimTime, target: EntityId) -> EventId {
        let time = time.max(self.now);
        let id = self.alloc_id();
        self.queue.insert((time, id), target);
        self.index.insert(id, time);
        id
    }

    fn cancel(&mut self, event: EventId) -> bool {
        match self.index.remove(&event) {
            Some(time) => self.queue.remove(&(time, event)).is_some(),
            None => false,
        }
    }

    #[inline]
    fn is_pending(&self, event: EventId) -> bool {
        self.index.contains_key(&event)
    }

    #[inline]
    fn pending(&self) -> usize {
        self.queue.len()
    }

    fn peek_time(&self) -> Option<SimTime> {
        self.queue.keys().next().map(|&(time, _)| time)
    }

    fn pop_next(&mut self) -> Option<ScheduledEvent> {
        let ((time, id), target) = self.queue.pop_first()?;
        self.index.remove(&id);
        self.now = time;
        Some(ScheduledEvent { id, time, target })
    }

    fn advance_to(&mut self, time: SimTime) -> ScheduleResult<()> {
        if time < self.now {
            return Err(ScheduleError::TimeReversal { now: self.now, requested: time });
        }
        if let Some(next) = self.peek_time() {
            if next < time {
                return Err(ScheduleError::SkipsPending { requested: time, next });
            }
        }
        self.now = time;
        Ok(())
    }
}
