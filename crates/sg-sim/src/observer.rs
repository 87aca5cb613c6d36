//! Simulation observer trait for progress reporting and data collection.

use sg_core::{EntityId, SimTime, Vector3};
use sg_mobility::MobilityStore;

/// Callbacks invoked by [`Sim`][crate::Sim] while it runs.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: position printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_position_update(&mut self, time: SimTime, entity: EntityId, position: Vector3) {
///         println!("{time} {entity} {position}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every periodic update, once the new position is in the
    /// mobility store and the next fire is registered.
    fn on_position_update(&mut self, _time: SimTime, _entity: EntityId, _position: Vector3) {}

    /// Called once when [`Sim::run`][crate::Sim::run] reaches the stop time.
    fn on_sim_end(&mut self, _time: SimTime, _store: &MobilityStore) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
