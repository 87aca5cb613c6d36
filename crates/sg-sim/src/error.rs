use sg_core::{EntityId, ErrorKind, EventId, SgError, Vector3};
use sg_mobility::MobilityError;
use sg_node::NodeError;
use sg_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] SgError),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Mobility(#[from] MobilityError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("invalid argument: entity {0} is already registered")]
    DuplicateEntity(EntityId),

    #[error("{event} fired for entity {entity}, which is not registered")]
    OrphanEvent { entity: EntityId, event: EventId },

    #[error("mobility store holds {stored} for entity {entity} but the entity is at {own}")]
    PositionDiverged {
        entity: EntityId,
        stored: Vector3,
        own:    Vector3,
    },
}

impl SimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::Core(e)                   => e.kind(),
            SimError::Node(e)                   => e.kind(),
            SimError::Mobility(e)               => e.kind(),
            SimError::Schedule(e)               => e.kind(),
            SimError::EntityNotFound(_)         => ErrorKind::NotFound,
            SimError::DuplicateEntity(_)        => ErrorKind::InvalidArgument,
            SimError::OrphanEvent { .. }
            | SimError::PositionDiverged { .. } => ErrorKind::Fatal,
        }
    }

    /// `true` if the simulation state can no longer be trusted.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Fatal
    }
}

pub type SimResult<T> = Result<T, SimError>;
