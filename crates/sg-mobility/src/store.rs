//! The `MobilityStore` — authoritative position of every entity.
//!
//! Other subsystems (propagation, contact detection, output) read positions
//! from here rather than from the entities themselves.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use sg_core::{EntityId, Vector3};

/// Sparse `EntityId → position` map.
#[derive(Default, Debug)]
pub struct MobilityStore {
    positions: HashMap<EntityId, Vector3>,
}

impl MobilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `position` for `entity`, inserting it if absent.
    #[inline]
    pub fn set_position(&mut self, entity: EntityId, position: Vector3) {
        self.positions.insert(entity, position);
    }

    /// Last recorded position, or `None` if the entity was never placed.
    #[inline]
    pub fn position(&self, entity: EntityId) -> Option<Vector3> {
        self.positions.get(&entity).copied()
    }

    #[inline]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.positions.contains_key(&entity)
    }

    /// Forget `entity`, returning its last position.
    pub fn remove(&mut self, entity: EntityId) -> Option<Vector3> {
        self.positions.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All `(entity, position)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, Vector3)> + '_ {
        self.positions.iter().map(|(&id, &pos)| (id, pos))
    }
}
