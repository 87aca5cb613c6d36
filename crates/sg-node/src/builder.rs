//! Fluent builder for configuring an [`Entity`] in one expression.
//!
//! # Usage
//!
//! ```rust
//! use sg_core::{EntityId, EntityKind, Vector3};
//! use sg_node::EntityBuilder;
//!
//! let rover = EntityBuilder::new(EntityId(7), EntityKind::Ground)
//!     .position(Vector3::new(10.0, 0.0, 0.0))
//!     .velocity(Vector3::new(1.0, 0.0, 0.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(rover.position(), Vector3::new(10.0, 0.0, 0.0));
//! ```

use sg_core::{EntityId, EntityKind, Vector3};

use crate::{Entity, NodeResult};

/// Radius used for space entities when [`EntityBuilder::radius`] is not called.
pub const DEFAULT_ORBIT_RADIUS: f64 = 1.0;

/// Fluent builder for [`Entity`].
///
/// Every option is validated against the kind in [`build`](Self::build):
/// a Cartesian position on a space entity or orbital angles on any other
/// kind is rejected as unsupported.
pub struct EntityBuilder {
    id:       EntityId,
    kind:     EntityKind,
    position: Option<Vector3>,
    velocity: Option<Vector3>,
    radius:   f64,
    angles:   Option<(f64, f64)>,
}

impl EntityBuilder {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            position: None,
            velocity: None,
            radius:   DEFAULT_ORBIT_RADIUS,
            angles:   None,
        }
    }

    /// Initial Cartesian position (not valid for space entities).
    pub fn position(mut self, position: Vector3) -> Self {
        self.position = Some(position);
        self
    }

    /// Initial velocity.  Angular rates for space; ignored for balloons.
    pub fn velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Orbital radius (space only; other kinds ignore it).
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Initial orbital angles (space only).
    pub fn angles(mut self, angle_x: f64, angle_y: f64) -> Self {
        self.angles = Some((angle_x, angle_y));
        self
    }

    pub fn build(self) -> NodeResult<Entity> {
        let mut entity = Entity::new(self.id, self.kind, self.radius)?;
        if let Some(p) = self.position {
            entity.set_position(p)?;
        }
        if let Some((ax, ay)) = self.angles {
            entity.set_orbit_angles(ax, ay)?;
        }
        if let Some(v) = self.velocity {
            entity.set_velocity(v)?;
        }
        Ok(entity)
    }
}
