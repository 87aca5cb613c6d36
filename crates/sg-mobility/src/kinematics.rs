//! Per-entity kinematic state.

use sg_core::{AerialType, EntityKind, Vector3};

use crate::projection::{linear_step, orbital_step, spherical_to_cartesian};
use crate::{MobilityError, MobilityResult};

// ── Capabilities ──────────────────────────────────────────────────────────────

/// What a kinematic model can do, fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    /// Accepts a Cartesian position from callers.
    pub positionable: bool,
    /// Advances over time from its velocity.
    pub velocity_integrable: bool,
    /// Position is derived from orbital angles.
    pub orbital: bool,
}

impl Capabilities {
    pub const STATIC: Capabilities = Capabilities {
        positionable:        true,
        velocity_integrable: false,
        orbital:             false,
    };
    pub const LINEAR: Capabilities = Capabilities {
        positionable:        true,
        velocity_integrable: true,
        orbital:             false,
    };
    pub const ORBITAL: Capabilities = Capabilities {
        positionable:        false,
        velocity_integrable: true,
        orbital:             true,
    };

    /// `true` if periodic updates can ever change the position.
    #[inline]
    pub fn is_motion_capable(self) -> bool {
        self.velocity_integrable
    }
}

// ── Orbit ─────────────────────────────────────────────────────────────────────

/// Fixed-radius spherical orbit.
///
/// The Cartesian position is never stored; [`Orbit::position`] derives it from
/// the current angles on every call, so it cannot go stale.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orbit {
    radius:  f64,
    angle_x: f64,
    angle_y: f64,
    /// Angular rates in rad/s; `x` and `y` drive the two angles, `z` is unused.
    rates:   Vector3,
}

impl Orbit {
    /// Orbit of `radius` starting at angles `(0, 0)` with zero rates.
    ///
    /// # Errors
    ///
    /// [`MobilityError::InvalidRadius`] unless `radius` is finite and > 0.
    pub fn new(radius: f64) -> MobilityResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MobilityError::InvalidRadius(radius));
        }
        Ok(Self {
            radius,
            angle_x: 0.0,
            angle_y: 0.0,
            rates:   Vector3::ZERO,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn angles(&self) -> (f64, f64) {
        (self.angle_x, self.angle_y)
    }

    #[inline]
    pub fn set_angles(&mut self, angle_x: f64, angle_y: f64) {
        self.angle_x = angle_x;
        self.angle_y = angle_y;
    }

    #[inline]
    pub fn rates(&self) -> Vector3 {
        self.rates
    }

    #[inline]
    pub fn set_rates(&mut self, rates: Vector3) {
        self.rates = rates;
    }

    #[inline]
    pub fn position(&self) -> Vector3 {
        spherical_to_cartesian(self.radius, self.angle_x, self.angle_y)
    }

    /// Advance both angles by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> Vector3 {
        let (ax, ay) = orbital_step(self.angle_x, self.angle_y, self.rates, dt);
        self.angle_x = ax;
        self.angle_y = ay;
        self.position()
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

/// The kinematic model of one entity.
///
/// | Variant   | Used by              | `advance`                         |
/// |-----------|----------------------|-----------------------------------|
/// | `Static`  | balloon              | no-op                             |
/// | `Linear`  | ground, UAV, HAPS    | `position += velocity · dt`       |
/// | `Orbital` | space                | angles += rates · dt, re-project  |
///
/// `Linear` keeps its own copy of the position.  The simulation mirrors that
/// copy into the [`MobilityStore`][crate::MobilityStore] on every write; the
/// two must never differ.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kinematics {
    Static { position: Vector3 },
    Linear { position: Vector3, velocity: Vector3 },
    Orbital(Orbit),
}

impl Kinematics {
    /// Stationary model at `position`.
    pub fn stationary(position: Vector3) -> Self {
        Kinematics::Static { position }
    }

    /// Constant-velocity model at `position` with zero velocity.
    pub fn linear(position: Vector3) -> Self {
        Kinematics::Linear { position, velocity: Vector3::ZERO }
    }

    /// Orbital model of `radius` at angles `(0, 0)`.
    pub fn orbital(radius: f64) -> MobilityResult<Self> {
        Orbit::new(radius).map(Kinematics::Orbital)
    }

    /// Select the model an entity of `kind` uses.
    ///
    /// `orbit_radius` is only read for [`EntityKind::Space`].
    pub fn for_kind(kind: EntityKind, orbit_radius: f64) -> MobilityResult<Self> {
        match kind {
            EntityKind::Aerial(AerialType::Balloon) => Ok(Self::stationary(Vector3::ZERO)),
            EntityKind::Aerial(AerialType::Uav | AerialType::Haps) | EntityKind::Ground => {
                Ok(Self::linear(Vector3::ZERO))
            }
            EntityKind::Space => Self::orbital(orbit_radius),
        }
    }

    pub fn model_name(&self) -> &'static str {
        match self {
            Kinematics::Static { .. } => "static",
            Kinematics::Linear { .. } => "linear",
            Kinematics::Orbital(_)    => "orbital",
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            Kinematics::Static { .. } => Capabilities::STATIC,
            Kinematics::Linear { .. } => Capabilities::LINEAR,
            Kinematics::Orbital(_)    => Capabilities::ORBITAL,
        }
    }

    /// Current Cartesian position.  Derived fresh for `Orbital`.
    pub fn position(&self) -> Vector3 {
        match self {
            Kinematics::Static { position } | Kinematics::Linear { position, .. } => *position,
            Kinematics::Orbital(orbit) => orbit.position(),
        }
    }

    /// Overwrite the Cartesian position.
    ///
    /// # Errors
    ///
    /// [`MobilityError::Unsupported`] for `Orbital`, whose position is only
    /// ever derived from its angles; [`MobilityError::NonFinite`] for NaN or
    /// infinite components.
    pub fn set_position(&mut self, new: Vector3) -> MobilityResult<()> {
        let model = self.model_name();
        if !new.is_finite() && !matches!(self, Kinematics::Orbital(_)) {
            return Err(MobilityError::NonFinite { quantity: "position" });
        }
        match self {
            Kinematics::Static { position } | Kinematics::Linear { position, .. } => {
                *position = new;
                Ok(())
            }
            Kinematics::Orbital(_) => Err(MobilityError::Unsupported {
                operation: "cartesian set_position",
                model,
            }),
        }
    }

    /// Current velocity.  Always zero for `Static`; angular rates for `Orbital`.
    pub fn velocity(&self) -> Vector3 {
        match self {
            Kinematics::Static { .. } => Vector3::ZERO,
            Kinematics::Linear { velocity, .. } => *velocity,
            Kinematics::Orbital(orbit) => orbit.rates(),
        }
    }

    /// Store a new velocity.  Nothing is recomputed until the next `advance`.
    ///
    /// Returns `Ok(false)` when the model ignores velocity (`Static`).
    ///
    /// # Errors
    ///
    /// [`MobilityError::NonFinite`] for NaN or infinite components.
    pub fn set_velocity(&mut self, new: Vector3) -> MobilityResult<bool> {
        if !new.is_finite() {
            return Err(MobilityError::NonFinite { quantity: "velocity" });
        }
        Ok(match self {
            Kinematics::Static { .. } => false,
            Kinematics::Linear { velocity, .. } => {
                *velocity = new;
                true
            }
            Kinematics::Orbital(orbit) => {
                orbit.set_rates(new);
                true
            }
        })
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        match self {
            Kinematics::Orbital(orbit) => Some(orbit),
            _ => None,
        }
    }

    /// Set the orbital angles.
    ///
    /// # Errors
    ///
    /// [`MobilityError::Unsupported`] for non-orbital models;
    /// [`MobilityError::NonFinite`] for a NaN or infinite angle.
    pub fn set_orbit_angles(&mut self, angle_x: f64, angle_y: f64) -> MobilityResult<()> {
        let model = self.model_name();
        match self {
            Kinematics::Orbital(_) if !(angle_x.is_finite() && angle_y.is_finite()) => {
                Err(MobilityError::NonFinite { quantity: "orbit angles" })
            }
            Kinematics::Orbital(orbit) => {
                orbit.set_angles(angle_x, angle_y);
                Ok(())
            }
            _ => Err(MobilityError::Unsupported { operation: "set_orbit_angles", model }),
        }
    }

    /// Apply one projection step of `dt` seconds and return the new position.
    pub fn advance(&mut self, dt: f64) -> Vector3 {
        match self {
            Kinematics::Static { position } => *position,
            Kinematics::Linear { position, velocity } => {
                *position = linear_step(*position, *velocity, dt);
                *position
            }
            Kinematics::Orbital(orbit) => orbit.advance(dt),
        }
    }
}
