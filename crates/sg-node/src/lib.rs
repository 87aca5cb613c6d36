//! `sg-node` — simulated entities and their periodic-update lifecycle.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`entity`]  | `Entity` — identity, kind, kinematics, update state         |
//! | [`update`]  | `UpdateState` (Idle / Scheduled / Cancelled), `UpdateInterval` |
//! | [`builder`] | `EntityBuilder` (fluent construction with validation)       |
//! | [`loader`]  | `load_scenario_csv`, `load_scenario_reader`                 |
//! | [`error`]   | `NodeError`, `NodeResult<T>`                                |
//!
//! # Entity variants
//!
//! | Kind            | Kinematics | Notes                                       |
//! |-----------------|------------|---------------------------------------------|
//! | UAV / HAPS      | linear     | full velocity integration                   |
//! | balloon         | static     | velocity accepted but never applied         |
//! | ground          | linear     | own position copy mirrored into the store   |
//! | space           | orbital    | radius fixed at construction, must be > 0   |
//!
//! Entities do not talk to the scheduler.  `sg-sim` registers events and
//! hands the resulting `EventId`s to [`Entity::begin_updates`] /
//! [`Entity::rearm`]; the entity only tracks which registration is live.

pub mod builder;
pub mod entity;
pub mod error;
pub mod loader;
pub mod update;


pub use builder::EntityBuilder;
pub use entity::Entity;
pub use error::{NodeError, NodeResult};
pub use loader::{ScenarioEntry, load_scenario_csv, load_scenario_reader};
pub use update::{UpdateInterval, UpdateState};
