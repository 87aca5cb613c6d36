//! The `Entity` type.

use sg_core::{AerialType, EntityId, EntityKind, EventId, Vector3};
use sg_mobility::{Capabilities, Kinematics, Orbit};

use crate::{NodeResult, UpdateInterval, UpdateState};

/// One simulated mobile object.
///
/// `id` and `kind` never change after construction; the kinematic model is
/// selected from `kind` once, here, and never re-queried.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    id:         EntityId,
    kind:       EntityKind,
    kinematics: Kinematics,
    updates:    UpdateState,
}

impl Entity {
    /// Entity of `kind` with the kind's construction defaults: origin,
    /// zero velocity, and (for space) angles `(0, 0)` on an orbit of
    /// `orbit_radius`.
    ///
    /// # Errors
    ///
    /// `InvalidRadius` for a space entity with a non-positive radius.
    pub fn new(id: EntityId, kind: EntityKind, orbit_radius: f64) -> NodeResult<Self> {
        let kinematics = Kinematics::for_kind(kind, orbit_radius)?;
        Ok(Self { id, kind, kinematics, updates: UpdateState::Idle })
    }

    pub fn aerial(id: EntityId, subtype: AerialType) -> Self {
        let kind = EntityKind::Aerial(subtype);
        let kinematics = match subtype {
            AerialType::Balloon => Kinematics::stationary(Vector3::ZERO),
            AerialType::Uav | AerialType::Haps => Kinematics::linear(Vector3::ZERO),
        };
        Self { id, kind, kinematics, updates: UpdateState::Idle }
    }

    pub fn ground(id: EntityId) -> Self {
        Self {
            id,
            kind:       EntityKind::Ground,
            kinematics: Kinematics::linear(Vector3::ZERO),
            updates:    UpdateState::Idle,
        }
    }

    pub fn space(id: EntityId, radius: f64) -> NodeResult<Self> {
        Ok(Self {
            id,
            kind:       EntityKind::Space,
            kinematics: Kinematics::orbital(radius)?,
            updates:    UpdateState::Idle,
        })
    }

    // ── Identity ──────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    // ── Kinematics ────────────────────────────────────────────────────────

    #[inline]
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.kinematics.capabilities()
    }

    /// `false` for balloons: periodic updates never move them.
    #[inline]
    pub fn is_motion_capable(&self) -> bool {
        self.capabilities().is_motion_capable()
    }

    /// The entity's own view of its position.  Derived from the angles for
    /// space entities.
    #[inline]
    pub fn position(&self) -> Vector3 {
        self.kinematics.position()
    }

    pub fn set_position(&mut self, position: Vector3) -> NodeResult<()> {
        Ok(self.kinematics.set_position(position)?)
    }

    #[inline]
    pub fn velocity(&self) -> Vector3 {
        self.kinematics.velocity()
    }

    /// Returns `Ok(false)` if the entity's model ignores velocity.
    pub fn set_velocity(&mut self, velocity: Vector3) -> NodeResult<bool> {
        Ok(self.kinematics.set_velocity(velocity)?)
    }

    #[inline]
    pub fn orbit(&self) -> Option<&Orbit> {
        self.kinematics.orbit()
    }

    pub fn set_orbit_angles(&mut self, angle_x: f64, angle_y: f64) -> NodeResult<()> {
        Ok(self.kinematics.set_orbit_angles(angle_x, angle_y)?)
    }

    // ── Update lifecycle ──────────────────────────────────────────────────

    #[inline]
    pub fn updates(&self) -> &UpdateState {
        &self.updates
    }

    /// Record the first registration of the update chain.
    ///
    /// # Errors
    ///
    /// `AlreadyScheduled` / `UpdatesCancelled` unless the entity is `Idle`.
    pub fn begin_updates(&mut self, event: EventId, interval: UpdateInterval) -> NodeResult<()> {
        self.updates.begin(self.id, event, interval)
    }

    /// Apply one update step for the registration `event`.
    ///
    /// Returns the new position and the interval to reschedule with.
    ///
    /// # Errors
    ///
    /// `UnexpectedEvent` if `event` is not this entity's live registration.
    pub fn fire(&mut self, event: EventId) -> NodeResult<(Vector3, UpdateInterval)> {
        match self.updates {
            UpdateState::Scheduled { event: live, interval } if live == event => {
                let position = self.kinematics.advance(interval.secs());
                Ok((position, interval))
            }
            _ => Err(crate::NodeError::UnexpectedEvent { entity: self.id, event }),
        }
    }

    /// Swap the live registration `fired` for its successor `next`.
    pub fn rearm(&mut self, fired: EventId, next: EventId) -> NodeResult<()> {
        self.updates.rearm(self.id, fired, next)
    }

    /// Stop the update chain.  Returns the registration the caller must
    /// dequeue, or `None` if nothing was pending.
    pub fn cancel_updates(&mut self) -> Option<EventId> {
        self.updates.cancel()
    }
}
