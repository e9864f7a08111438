//! Workspace error types.
//!
//! [`ConfigError`] covers everything detected before any random sampling
//! happens.  [`SeatError`] is the base error sub-crates wrap with `#[from]`.

use thiserror::Error;

/// Invalid participants, policy selector, or run parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("simulation must have at least two people, got {0}")]
    TooFewParticipants(usize),

    #[error("each user must be given a unique name: {0:?} appears more than once")]
    DuplicateName(String),

    #[error("unknown policy {0:?}: expected \"lazy\" or \"down\"")]
    UnknownPolicy(String),

    #[error("horizon must be a positive number of days")]
    NonPositiveHorizon,

    #[error("invalid {what} process: {reason}")]
    InvalidProcess {
        what:   &'static str,
        reason: String,
    },

    #[error("sampler safety factor {got} is below the minimum of {min}")]
    SafetyFactorTooSmall { got: u32, min: u32 },

    #[error("sample budget of {budget} draws exceeds the limit of {max}; raise the visit means or shorten the horizon")]
    SampleBudgetTooLarge { budget: f64, max: usize },
}

/// The base error type for `seat-core` and the crates built on it.
#[derive(Debug, Error)]
pub enum SeatError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The pre-drawn normal sequence ran out before a schedule reached the
    /// horizon.  This means the sample-count bound is wrong; it is never
    /// recovered by drawing more.
    #[error("random sample sequence exhausted: index {index} requested but only {available} drawn")]
    SamplesExhausted { index: usize, available: usize },
}

/// Shorthand result type for `seat-core`.
pub type SeatResult<T> = Result<T, SeatError>;
