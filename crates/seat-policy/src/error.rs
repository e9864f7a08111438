use thiserror::Error;

use seat_core::PersonId;

use crate::PolicyKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("{policy} policy evaluation interrupted by observer")]
    Interrupted { policy: PolicyKind },

    /// Tallies and cursors are indexed by id, so ids must equal positions.
    #[error("participant at position {position} carries {id}; ids must match registration order")]
    MisnumberedParticipant { position: usize, id: PersonId },
}

pub type PolicyResult<T> = Result<T, PolicyError>;
