//! Fluent builder for constructing a [`Sim`].

use sg_core::SimConfig;
use sg_node::{Entity, ScenarioEntry, UpdateInterval};
use sg_schedule::{EventQueue, Scheduler};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                  |
/// |-------------------|------------------------------------------|
/// | `.entity(e)`      | No entities                              |
/// | `.scenario(v)`    | No entities                              |
/// | scheduler         | [`EventQueue`] via [`SimBuilder::new`]   |
///
/// Entities are added in the order given.  Entries from
/// [`scenario`](Self::scenario) that carry an interval have their update
/// chain started at time zero, after every entity is registered.
///
/// # Example
///
/// ```rust,ignore
/// let entries = load_scenario_csv(path, &config)?;
/// let mut sim = SimBuilder::new(config).scenario(entries).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: Scheduler = EventQueue> {
    config:    SimConfig,
    scheduler: S,
    entities:  Vec<(Entity, Option<UpdateInterval>)>,
}

impl SimBuilder<EventQueue> {
    /// Builder using the reference [`EventQueue`] scheduler.
    pub fn new(config: SimConfig) -> Self {
        Self::with_scheduler(config, EventQueue::new())
    }
}

impl<S: Scheduler> SimBuilder<S> {
    /// Builder driving a caller-supplied scheduler.
    pub fn with_scheduler(config: SimConfig, scheduler: S) -> Self {
        Self { config, scheduler, entities: Vec::new() }
    }

    /// Add one entity without starting its updates.
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push((entity, None));
        self
    }

    /// Add loaded scenario entries, starting updates where an interval is set.
    pub fn scenario(mut self, entries: impl IntoIterator<Item = ScenarioEntry>) -> Self {
        self.entities
            .extend(entries.into_iter().map(|e| (e.entity, e.interval)));
        self
    }

    /// Validate the config, register every entity, and start the requested
    /// update chains.
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;

        let mut sim = Sim::new(self.config, self.scheduler);
        let mut to_start = Vec::new();
        for (entity, interval) in self.entities {
            let id = entity.id();
            sim.add_entity(entity)?;
            if let Some(interval) = interval {
                to_start.push((id, interval));
            }
        }
        for (id, interval) in to_start {
            sim.start_updates_with(id, interval)?;
        }
        Ok(sim)
    }
}
