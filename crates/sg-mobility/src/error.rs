use sg_core::{EntityId, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("invalid argument: orbital radius must be finite and > 0, got {0}")]
    InvalidRadius(f64),

    #[error("invalid argument: {quantity} must be finite")]
    NonFinite { quantity: &'static str },

    #[error("{operation} is not supported by the {model} kinematic model")]
    Unsupported {
        operation: &'static str,
        model:     &'static str,
    },

    #[error("no position recorded for entity {0}")]
    MissingPosition(EntityId),
}

impl MobilityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MobilityError::InvalidRadius(_)
            | MobilityError::NonFinite { .. } => ErrorKind::InvalidArgument,
            MobilityError::Unsupported { .. } => ErrorKind::UnsupportedOperation,
            MobilityError::MissingPosition(_) => ErrorKind::Fatal,
        }
    }
}

pub type MobilityResult<T> = Result<T, MobilityError>;
