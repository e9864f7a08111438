use seat_core::SeatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Core(#[from] SeatError),

    #[error("sample file parse error: {0}")]
    Parse(String),

    #[error("participant {name:?}: {reason}")]
    InvalidParticipant { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
