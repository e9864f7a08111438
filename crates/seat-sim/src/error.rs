use seat_core::ConfigError;
use seat_policy::PolicyError;
use seat_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("schedule generation failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

impl SimError {
    /// `true` when an observer stopped an evaluation early.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, SimError::Policy(PolicyError::Interrupted { .. }))
    }
}

pub type SimResult<T> = Result<T, SimError>;
