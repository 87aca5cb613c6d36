//! `sg-core` — foundational types for the `sagin` mobility framework.
//!
//! This crate is a dependency of every other `sg-*` crate.  It intentionally
//! has no `sg-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EntityId`, `EventId`                                 |
//! | [`vector`]      | `Vector3` — Cartesian position / velocity             |
//! | [`time`]        | `SimTime`, `SimConfig`                                |
//! | [`kind`]        | `EntityKind`, `AerialType`                            |
//! | [`error`]       | `ErrorKind`, `SgError`, `SgResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod kind;
pub mod time;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ErrorKind, SgError, SgResult};
pub use ids::{EntityId, EventId};
pub use kind::{AerialType, EntityKind};
pub use time::{SimConfig, SimTime};
pub use vector::Vector3;
