//! Periodic-update lifecycle of one entity.
//!
//! ```text
//!            begin_updates            rearm (on every fire)
//!   Idle ─────────────────▶ Scheduled ◀──────┐
//!                               │  └─────────┘
//!                               │ cancel
//!                               ▼
//!                           Cancelled   (terminal)
//! ```
//!
//! `cancel` from `Idle` or `Cancelled` is a no-op.

use sg_core::{EntityId, EventId, SimTime};

use crate::{NodeError, NodeResult};

// ── UpdateInterval ────────────────────────────────────────────────────────────

/// A validated update period.
///
/// Keeps the caller's `f64` seconds for kinematic integration and the
/// nanosecond period used for scheduling.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateInterval {
    secs:   f64,
    period: SimTime,
}

impl UpdateInterval {
    /// # Errors
    ///
    /// [`NodeError::InvalidInterval`] if `secs` is not finite, not positive,
    /// rounds to a zero-length period, or does not fit in a `SimTime`.
    pub fn from_secs(secs: f64) -> NodeResult<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(NodeError::InvalidInterval(secs));
        }
        match SimTime::try_from_secs_f64(secs) {
            Some(period) if period > SimTime::ZERO => Ok(Self { secs, period }),
            _ => Err(NodeError::InvalidInterval(secs)),
        }
    }

    #[inline]
    pub fn secs(&self) -> f64 {
        self.secs
    }

    #[inline]
    pub fn period(&self) -> SimTime {
        self.period
    }
}

// ── UpdateState ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateState {
    /// No update registered.  Initial state.
    #[default]
    Idle,
    /// Exactly one future registration is live.
    Scheduled { event: EventId, interval: UpdateInterval },
    /// Terminal.  No further registrations.
    Cancelled,
}

impl UpdateState {
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        matches!(self, UpdateState::Scheduled { .. })
    }

    /// The live registration, if any.
    #[inline]
    pub fn pending_event(&self) -> Option<EventId> {
        match self {
            UpdateState::Scheduled { event, .. } => Some(*event),
            _ => None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Option<UpdateInterval> {
        match self {
            UpdateState::Scheduled { interval, .. } => Some(*interval),
            _ => None,
        }
    }

    /// Succeeds only from `Idle`.
    pub fn ensure_can_start(&self, entity: EntityId) -> NodeResult<()> {
        match self {
            UpdateState::Idle => Ok(()),
            UpdateState::Scheduled { .. } => Err(NodeError::AlreadyScheduled(entity)),
            UpdateState::Cancelled => Err(NodeError::UpdatesCancelled(entity)),
        }
    }

    /// `Idle → Scheduled`.
    pub(crate) fn begin(
        &mut self,
        entity:   EntityId,
        event:    EventId,
        interval: UpdateInterval,
    ) -> NodeResult<()> {
        self.ensure_can_start(entity)?;
        *self = UpdateState::Scheduled { event, interval };
        Ok(())
    }

    /// Replace the live registration after a fire.
    pub(crate) fn rearm(&mut self, entity: EntityId, fired: EventId, next: EventId) -> NodeResult<()> {
        match self {
            UpdateState::Scheduled { event, .. } if *event == fired => {
                *event = next;
                Ok(())
            }
            _ => Err(NodeError::UnexpectedEvent { entity, event: fired }),
        }
    }

    /// `Scheduled → Cancelled`, returning the registration to dequeue.
    pub(crate) fn cancel(&mut self) -> Option<EventId> {
        match *self {
            UpdateState::Scheduled { event, .. } => {
                *self = UpdateState::Cancelled;
                Some(event)
            }
            UpdateState::Idle | UpdateState::Cancelled => None,
        }
    }
}
