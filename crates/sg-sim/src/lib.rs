//! `sg-sim` — discrete-event driver for the sagin mobility framework.
//!
//! # Periodic update chain
//!
//! ```text
//! start_updates(id, Δt)      → register first fire at now + Δt      (Idle → Scheduled)
//! fire at T:
//!   ① check the store still mirrors the entity's own position
//!   ② advance kinematics by exactly Δt (linear / orbital / static)
//!   ③ write the new position into the MobilityStore
//!   ④ register the next fire at T + Δt, before returning
//! stop_updates(id) / remove_entity(id)
//!                            → dequeue the pending fire             (Scheduled → Cancelled)
//! ```
//!
//! Rescheduling uses the nominal fire time `T`, never the time at which the
//! handler happened to run, and `SimTime` is integer nanoseconds, so a chain
//! fires at exactly `k · Δt` after it started for every `k`.
//!
//! Scheduler registrations carry only the target `EntityId`.  Removing an
//! entity dequeues its registration first, so no fire can ever reach a
//! removed entity.  If one somehow does, the run stops with a fatal error.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash maps for the entity table and mobility store.    |
//!
//! # Quick-start
//!
//! ```rust
//! use sg_core::{EntityId, SimConfig, Vector3};
//! use sg_node::Entity;
//! use sg_sim::{NoopObserver, SimBuilder};
//!
//! let mut rover = Entity::ground(EntityId(0));
//! rover.set_velocity(Vector3::new(1.0, 0.0, 0.0)).unwrap();
//!
//! let config = SimConfig { stop_time_secs: 5.0, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config).entity(rover).build().unwrap();
//! sim.start_updates(EntityId(0), 1.0).unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//!
//! assert_eq!(sim.position(EntityId(0)).unwrap(), Vector3::new(5.0, 0.0, 0.0));
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
