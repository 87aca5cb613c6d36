use sg_core::{ErrorKind, SimTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("cannot move scheduler clock backwards from {now} to {requested}")]
    TimeReversal { now: SimTime, requested: SimTime },

    #[error("cannot advance scheduler clock to {requested}: an event is pending at {next}")]
    SkipsPending { requested: SimTime, next: SimTime },
}

impl ScheduleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::TimeReversal { .. } => ErrorKind::InvalidArgument,
            ScheduleError::SkipsPending { .. } => ErrorKind::InvalidState,
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
