//! `Scheduler` — the discrete-event clock and queue the simulation drives.

use sg_core::{EntityId, EventId, SimTime};

use crate::ScheduleResult;

/// One registration popped from a [`Scheduler`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledEvent {
    /// Handle returned when the event was registered.
    pub id: EventId,
    /// Nominal fire time.
    pub time: SimTime,
    /// Entity whose periodic update this event drives.
    pub target: EntityId,
}

/// Discrete-event scheduler.
///
/// # Contract
///
/// - Each registration fires at most once, at its registered time.
/// - `pop_next` yields registrations in non-decreasing time order; ties are
///   broken by registration order.
/// - `cancel` is a true dequeue: once it returns, the registration can no
///   longer be popped.
/// - Handlers run to completion one at a time; nothing here is `Sync`.
pub trait Scheduler {
    /// Current simulation time.
    fn now(&self) -> SimTime;

    /// Register `target` to fire at an absolute `time`.
    ///
    /// A `time` earlier than `now()` is clamped to `now()`.
    fn schedule_at(&mut self, time: SimTime, target: EntityId) -> EventId;

    /// Register `target` to fire `delay` after `now()`.
    fn schedule(&mut self, delay: SimTime, target: EntityId) -> EventId {
        let at = self.now().saturating_add(delay);
        self.schedule_at(at, target)
    }

    /// Remove a pending registration.
    ///
    /// Returns `true` if it was pending.  Cancelling an unknown, fired, or
    /// already-cancelled handle is a no-op returning `false`.
    fn cancel(&mut self, event: EventId) -> bool;

    /// `true` while `event` is registered and has not fired.
    fn is_pending(&self, event: EventId) -> bool;

    /// Number of live registrations.
    fn pending(&self) -> usize;

    /// Fire time of the earliest live registration.
    fn peek_time(&self) -> Option<SimTime>;

    /// Remove the earliest registration and advance `now()` to its time.
    fn pop_next(&mut self) -> Option<ScheduledEvent>;

    /// Move the clock forward to `time` without firing anything.
    ///
    /// # Errors
    ///
    /// `ScheduleError::TimeReversal` if `time < now()`;
    /// `ScheduleError::SkipsPending` if a registration is due before `time`.
    fn advance_to(&mut self, time: SimTime) -> ScheduleResult<()>;
}
