//! `sg-schedule` — the scheduler boundary and a cancellable event queue.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`scheduler`]   | `Scheduler` trait, `ScheduledEvent`                       |
//! | [`event_queue`] | `EventQueue` (`BTreeMap<(SimTime, EventId), EntityId>`)   |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Event model (summary)
//!
//! A registration carries only the target `EntityId`, never a reference to
//! the entity itself.  The simulation resolves the id when the event fires,
//! so a destroyed entity can never be reached through a stale callback:
//!
//! ```text
//! schedule(delay, entity)  → EventId    registration at now + delay
//! cancel(EventId)          → bool       removed from the queue immediately
//! pop_next()               → event      clock advances to event.time
//! ```

pub mod error;
pub mod event_queue;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::EventQueue;
pub use scheduler::{ScheduledEvent, Scheduler};
