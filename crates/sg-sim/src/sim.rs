//! The `Sim` struct and its event loop.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use tracing::{debug, error, info, warn};

use sg_core::{EntityId, EventId, SimConfig, SimTime, Vector3};
use sg_mobility::{MobilityError, MobilityStore};
use sg_node::{Entity, NodeError, UpdateInterval, UpdateState};
use sg_schedule::{EventQueue, ScheduledEvent, Scheduler};

use crate::{SimError, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` owns every entity, the authoritative [`MobilityStore`], and the
/// scheduler `S` that drives the periodic update chains.  Event handlers run
/// one at a time to completion, so no entity state needs locking.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: Scheduler = EventQueue> {
    /// Global configuration (stop time, loader defaults).
    pub config: SimConfig,

    /// Discrete-event clock and registration queue.
    pub scheduler: S,

    /// Authoritative positions, read by other subsystems.
    pub store: MobilityStore,

    entities: HashMap<EntityId, Entity>,

    /// Total periodic updates applied so far.
    fired: u64,
}

impl<S: Scheduler> Sim<S> {
    pub(crate) fn new(config: SimConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            store:    MobilityStore::new(),
            entities: HashMap::default(),
            fired:    0,
        }
    }

    // ── Clock ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> SimTime {
        self.scheduler.now()
    }

    /// Number of periodic updates applied since construction.
    #[inline]
    pub fn updates_fired(&self) -> u64 {
        self.fired
    }

    /// Number of live scheduler registrations.
    #[inline]
    pub fn registrations(&self) -> usize {
        self.scheduler.pending()
    }

    // ── Entity table ──────────────────────────────────────────────────────

    /// Register `entity` and record its initial position in the store.
    ///
    /// # Errors
    ///
    /// [`SimError::DuplicateEntity`] if the id is already registered.
    pub fn add_entity(&mut self, entity: Entity) -> SimResult<()> {
        let id = entity.id();
        if self.entities.contains_key(&id) {
            return Err(SimError::DuplicateEntity(id));
        }
        self.store.set_position(id, entity.position());
        debug!(entity = %id, kind = %entity.kind(), position = %entity.position(), "entity added");
        self.entities.insert(id, entity);
        Ok(())
    }

    /// Destroy an entity.
    ///
    /// Its pending update, if any, is dequeued before the entity is dropped,
    /// so the scheduler can never fire against it afterwards.
    pub fn remove_entity(&mut self, id: EntityId) -> SimResult<Entity> {
        let mut entity = self.entities.remove(&id).ok_or(SimError::EntityNotFound(id))?;
        if let Some(event) = entity.cancel_updates() {
            self.scheduler.cancel(event);
        }
        self.store.remove(id);
        info!(entity = %id, "entity removed");
        Ok(entity)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// All registered ids in ascending order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.entities.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn get(&self, id: EntityId) -> SimResult<&Entity> {
        self.entities.get(&id).ok_or(SimError::EntityNotFound(id))
    }

    fn get_mut(&mut self, id: EntityId) -> SimResult<&mut Entity> {
        self.entities.get_mut(&id).ok_or(SimError::EntityNotFound(id))
    }

    // ── Per-entity accessors ──────────────────────────────────────────────

    /// Current position.
    ///
    /// Space entities recompute it from their orbital angles on every call;
    /// every other kind returns the mobility store's value.
    pub fn position(&self, id: EntityId) -> SimResult<Vector3> {
        let entity = self.get(id)?;
        if entity.capabilities().orbital {
            return Ok(entity.position());
        }
        self.store
            .position(id)
            .ok_or_else(|| MobilityError::MissingPosition(id).into())
    }

    /// Move a non-space entity.  The entity's own copy and the store are
    /// written together.
    ///
    /// # Errors
    ///
    /// Unsupported for space entities; use [`set_orbit_angles`](Self::set_orbit_angles).
    pub fn set_position(&mut self, id: EntityId, position: Vector3) -> SimResult<()> {
        self.get_mut(id)?.set_position(position)?;
        self.store.set_position(id, position);
        debug!(entity = %id, %position, "position set");
        Ok(())
    }

    pub fn velocity(&self, id: EntityId) -> SimResult<Vector3> {
        Ok(self.get(id)?.velocity())
    }

    /// Store a new velocity.  Takes effect at the next periodic update.
    ///
    /// Balloons accept the call and ignore the value; check
    /// [`is_motion_capable`](Self::is_motion_capable) to tell.
    pub fn set_velocity(&mut self, id: EntityId, velocity: Vector3) -> SimResult<()> {
        let entity = self.get_mut(id)?;
        if entity.set_velocity(velocity)? {
            debug!(entity = %id, %velocity, "velocity set");
        } else {
            warn!(entity = %id, kind = %entity.kind(), %velocity, "velocity ignored: entity is not motion-capable");
        }
        Ok(())
    }

    /// Set a space entity's orbital angles and re-project its position.
    pub fn set_orbit_angles(&mut self, id: EntityId, angle_x: f64, angle_y: f64) -> SimResult<()> {
        let entity = self.get_mut(id)?;
        entity.set_orbit_angles(angle_x, angle_y)?;
        let position = entity.position();
        self.store.set_position(id, position);
        debug!(entity = %id, angle_x, angle_y, %position, "orbit angles set");
        Ok(())
    }

    pub fn is_motion_capable(&self, id: EntityId) -> SimResult<bool> {
        Ok(self.get(id)?.is_motion_capable())
    }

    pub fn update_state(&self, id: EntityId) -> SimResult<UpdateState> {
        Ok(*self.get(id)?.updates())
    }

    // ── Update chains ─────────────────────────────────────────────────────

    /// Begin periodic updates every `interval_secs`.
    ///
    /// The first update fires at `now + interval_secs`; nothing is
    /// recomputed immediately.  Returns the first registration's handle.
    ///
    /// # Errors
    ///
    /// - `InvalidInterval` unless `interval_secs` is finite and > 0 and the
    ///   first fire time is representable.
    /// - `AlreadyScheduled` / `UpdatesCancelled` unless the entity is idle.
    pub fn start_updates(&mut self, id: EntityId, interval_secs: f64) -> SimResult<EventId> {
        let interval = UpdateInterval::from_secs(interval_secs)?;
        self.start_updates_with(id, interval)
    }

    /// [`start_updates`](Self::start_updates) with a pre-validated interval.
    pub fn start_updates_with(&mut self, id: EntityId, interval: UpdateInterval) -> SimResult<EventId> {
        let entity = self.entities.get_mut(&id).ok_or(SimError::EntityNotFound(id))?;
        // Check before registering so a rejected start leaves no registration behind.
        entity.updates().ensure_can_start(id)?;
        let first_fire = self
            .scheduler
            .now()
            .checked_add(interval.period())
            .ok_or(NodeError::InvalidInterval(interval.secs()))?;
        let event = self.scheduler.schedule_at(first_fire, id);
        entity.begin_updates(event, interval)?;
        info!(entity = %id, interval_secs = interval.secs(), %first_fire, "periodic updates started");
        Ok(event)
    }

    /// Cancel the entity's update chain.
    ///
    /// Returns `true` if a registration was dequeued.  Calling this on an
    /// idle or already-cancelled entity is a no-op.
    pub fn stop_updates(&mut self, id: EntityId) -> SimResult<bool> {
        let entity = self.entities.get_mut(&id).ok_or(SimError::EntityNotFound(id))?;
        match entity.cancel_updates() {
            Some(event) => {
                self.scheduler.cancel(event);
                info!(entity = %id, "periodic updates stopped");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Fire the earliest registration.  Returns `None` when the queue is empty.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<ScheduledEvent>> {
        let Some(event) = self.scheduler.pop_next() else {
            return Ok(None);
        };
        if let Err(e) = self.fire(event, observer) {
            error!(entity = %event.target, event = %event.id, time = %event.time, error = %e, "periodic update failed; aborting run");
            return Err(e);
        }
        Ok(Some(event))
    }

    /// Fire every registration due at or before `until`, then leave the clock
    /// at `until` (or where it already is, if later).
    ///
    /// Returns the number of updates applied.
    pub fn run_until<O: SimObserver>(&mut self, until: SimTime, observer: &mut O) -> SimResult<u64> {
        let mut count = 0;
        while self.scheduler.peek_time().is_some_and(|t| t <= until) {
            self.step(observer)?;
            count += 1;
        }
        if until > self.scheduler.now() {
            self.scheduler.advance_to(until)?;
        }
        Ok(count)
    }

    /// Run to `config.stop_time()` and notify `observer.on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let stop = self.config.stop_time();
        info!(entities = self.entities.len(), stop = %stop, "simulation started");
        let fired = self.run_until(stop, observer)?;
        info!(fired, now = %self.now(), "simulation finished");
        observer.on_sim_end(self.now(), &self.store);
        Ok(())
    }

    /// The periodic update handler.
    fn fire<O: SimObserver>(&mut self, event: ScheduledEvent, observer: &mut O) -> SimResult<()> {
        let ScheduledEvent { id: fired, time, target } = event;
        let entity = self
            .entities
            .get_mut(&target)
            .ok_or(SimError::OrphanEvent { entity: target, event: fired })?;

        // The store must still mirror the entity before we integrate further.
        // Both hold the same computed value, so compare bit patterns.
        let own = entity.position();
        match self.store.position(target) {
            None => return Err(MobilityError::MissingPosition(target).into()),
            Some(stored) if !stored.bits_eq(own) => {
                return Err(SimError::PositionDiverged { entity: target, stored, own });
            }
            Some(_) => {}
        }

        let (position, interval) = entity.fire(fired)?;
        self.store.set_position(target, position);

        match time.checked_add(interval.period()) {
            Some(next_time) => {
                let next = self.scheduler.schedule_at(next_time, target);
                entity.rearm(fired, next)?;
            }
            None => {
                // `fired` is already off the queue; only the state changes.
                entity.cancel_updates();
                warn!(entity = %target, %time, "next update is past the end of simulated time; chain ended");
            }
        }
        self.fired += 1;

        debug!(entity = %target, %time, %position, "periodic update");
        observer.on_position_update(time, target, position);
        Ok(())
    }
}
