//! Unit tests for sg-schedule.

use sg_core::{EntityId, SimTime};

use crate::{EventQueue, ScheduleError, Scheduler};

fn secs(s: f64) -> SimTime {
    SimTime::from_secs_f64(s)
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.schedule(secs(3.0), EntityId(3));
        q.schedule(secs(1.0), EntityId(1));
        q.schedule(secs(2.0), EntityId(2));

        let order: Vec<EntityId> = std::iter::from_fn(|| q.pop_next()).map(|e| e.target).collect();
        assert_eq!(order, vec![EntityId(1), EntityId(2), EntityId(3)]);
    }

    #[test]
    fn ties_fire_in_registration_order() {
        let mut q = EventQueue::new();
        for i in [5, 2, 9] {
            q.schedule(secs(1.0), EntityId(i));
        }
        let order: Vec<u32> = std::iter::from_fn(|| q.pop_next()).map(|e| e.target.0).collect();
        assert_eq!(order, vec![5, 2, 9]);
    }

    #[test]
    fn pop_advances_clock() {
        let mut q = EventQueue::new();
        q.schedule(secs(2.5), EntityId(0));
        assert_eq!(q.now(), SimTime::ZERO);
        let ev = q.pop_next().unwrap();
        assert_eq!(ev.time, secs(2.5));
        assert_eq!(q.now(), secs(2.5));
        assert!(q.pop_next().is_none());
    }

    #[test]
    fn schedule_is_relative_to_now() {
        let mut q = EventQueue::new();
        q.schedule(secs(1.0), EntityId(0));
        q.pop_next();
        let id = q.schedule(secs(1.0), EntityId(0));
        assert_eq!(q.fire_time(id), Some(secs(2.0)));
    }

    #[test]
    fn schedule_at_in_past_clamped_to_now() {
        let mut q = EventQueue::starting_at(secs(10.0));
        let id = q.schedule_at(secs(4.0), EntityId(0));
        assert_eq!(q.fire_time(id), Some(secs(10.0)));
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn cancel_removes_registration() {
        let mut q = EventQueue::new();
        let a = q.schedule(secs(1.0), EntityId(0));
        let b = q.schedule(secs(2.0), EntityId(1));
        assert_eq!(q.pending(), 2);

        assert!(q.cancel(a));
        assert!(!q.is_pending(a));
        assert_eq!(q.pending(), 1);

        let ev = q.pop_next().unwrap();
        assert_eq!(ev.id, b);
        assert!(q.pop_next().is_none());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut q = EventQueue::new();
        let a = q.schedule(secs(1.0), EntityId(0));
        assert!(q.cancel(a));
        assert!(!q.cancel(a));
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut q = EventQueue::new();
        let a = q.schedule(secs(1.0), EntityId(0));
        q.pop_next();
        assert!(!q.cancel(a));
    }

    #[test]
    fn registrations_for_counts_per_entity() {
        let mut q = EventQueue::new();
        q.schedule(secs(1.0), EntityId(0));
        q.schedule(secs(2.0), EntityId(0));
        q.schedule(secs(1.0), EntityId(1));
        assert_eq!(q.registrations_for(EntityId(0)), 2);
        assert_eq!(q.registrations_for(EntityId(1)), 1);
        assert_eq!(q.registrations_for(EntityId(2)), 0);
    }
}

// ── Clock advancement ─────────────────────────────────────────────────────────

#[cfg(test)]
mod advance {
    use super::*;

    #[test]
    fn advance_moves_clock() {
        let mut q = EventQueue::new();
        q.advance_to(secs(5.0)).unwrap();
        assert_eq!(q.now(), secs(5.0));
    }

    #[test]
    fn advance_backwards_errors() {
        let mut q = EventQueue::starting_at(secs(5.0));
        let err = q.advance_to(secs(1.0)).unwrap_err();
        assert!(matches!(err, ScheduleError::TimeReversal { .. }));
    }

    #[test]
    fn advance_past_pending_errors() {
        let mut q = EventQueue::new();
        q.schedule(secs(1.0), EntityId(0));
        let err = q.advance_to(secs(2.0)).unwrap_err();
        assert!(matches!(err, ScheduleError::SkipsPending { .. }));
        // Advancing exactly onto the pending time is fine.
        q.advance_to(secs(1.0)).unwrap();
        assert_eq!(q.pending(), 1);
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_derives {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}

    #[test]
    fn public_state_types_are_serializable() {
        assert_serde::<crate::ScheduledEvent>();
    }
}
