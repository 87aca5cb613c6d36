//! `sg-mobility` — kinematic state, position projection, and the mobility store.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`projection`] | Pure step functions: linear, orbital, spherical → Cartesian     |
//! | [`kinematics`] | `Kinematics` (static / linear / orbital), `Orbit`, `Capabilities` |
//! | [`store`]      | `MobilityStore` — authoritative per-entity position map         |
//! | [`error`]      | `MobilityError`, `MobilityResult<T>`                            |
//!
//! # Movement model (piecewise-constant velocity)
//!
//! Nothing moves between updates.  Each periodic update applies one
//! projection step of exactly `interval` seconds:
//!
//! ```text
//! linear:   position' = position + velocity · interval
//! orbital:  angle_x'  = angle_x + velocity.x · interval
//!           angle_y'  = angle_y + velocity.y · interval
//!           position' = spherical_to_cartesian(radius, angle_x', angle_y')
//! static:   position' = position
//! ```
//!
//! The model is chosen from the entity kind once, at construction, by
//! [`Kinematics::for_kind`].  There is no runtime type query afterwards;
//! callers inspect [`Capabilities`] instead.

pub mod error;
pub mod kinematics;
pub mod projection;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{MobilityError, MobilityResult};
pub use kinematics::{Capabilities, Kinematics, Orbit};
pub use projection::{linear_step, orbital_step, spherical_to_cartesian};
pub use store::MobilityStore;
