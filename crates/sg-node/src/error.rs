use sg_core::{EntityId, ErrorKind, EventId};
use sg_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error(transparent)]
    Mobility(#[from] MobilityError),

    #[error("invalid argument: update interval must be finite and > 0 s, got {0}")]
    InvalidInterval(f64),

    #[error("entity {0} already has a periodic update scheduled")]
    AlreadyScheduled(EntityId),

    #[error("entity {0} had its periodic updates cancelled and cannot be restarted")]
    UpdatesCancelled(EntityId),

    #[error("entity {entity} received {event} but has no matching update scheduled")]
    UnexpectedEvent { entity: EntityId, event: EventId },

    #[error("scenario parse error: {0}")]
    Parse(String),

    /// A scenario row failed; `kind()` is that of the underlying error.
    #[error("line {line}: {source}")]
    Row { line: usize, source: Box<NodeError> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NodeError::Mobility(e)              => e.kind(),
            NodeError::InvalidInterval(_)       => ErrorKind::InvalidArgument,
            NodeError::AlreadyScheduled(_)
            | NodeError::UpdatesCancelled(_)    => ErrorKind::InvalidState,
            NodeError::UnexpectedEvent { .. }   => ErrorKind::Fatal,
            NodeError::Parse(_)                 => ErrorKind::Parse,
            NodeError::Row { source, .. }       => source.kind(),
            NodeError::Io(_)                    => ErrorKind::Io,
        }
    }
}

pub type NodeResult<T> = Result<T, NodeError>;
