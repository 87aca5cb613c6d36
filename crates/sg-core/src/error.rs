//! Framework error type and the shared error taxonomy.
//!
//! Sub-crates define their own error enums and convert them upward via `From`
//! impls.  Every error enum in the workspace exposes `kind()` so callers can
//! branch on the category without matching concrete variants.

use thiserror::Error;

use crate::EntityId;

/// Category of a failure, shared by every `sg-*` error type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// A parameter was out of range (non-positive radius or interval, …).
    InvalidArgument,
    /// The operation is not legal in the entity's current lifecycle state.
    InvalidState,
    /// The entity's kind does not support the requested operation.
    UnsupportedOperation,
    /// No entity with the given identifier exists.
    NotFound,
    /// Malformed configuration or scenario input.
    Parse,
    Io,
    /// Internal inconsistency.  The simulation cannot continue.
    Fatal,
}

/// The top-level error type for `sg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SgError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SgError::EntityNotFound(_) => ErrorKind::NotFound,
            SgError::Config(_)         => ErrorKind::InvalidArgument,
            SgError::Parse(_)          => ErrorKind::Parse,
            SgError::Io(_)             => ErrorKind::Io,
        }
    }
}

/// Shorthand result type for all `sg-*` crates.
pub type SgResult<T> = Result<T, SgError>;
