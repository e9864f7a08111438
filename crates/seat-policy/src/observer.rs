//! Observer hooks for the policy walk.

use std::ops::ControlFlow;

use seat_core::{Hours, PersonId};
use seat_schedule::{Participant, SeatPosition};

use crate::{PolicyKind, ToggleTally};

/// One served visit, as seen by observers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UsageEvent {
    pub policy:        PolicyKind,
    pub time:          Hours,
    pub person:        PersonId,
    pub needs:         SeatPosition,
    pub seat_before:   SeatPosition,
    pub seat_after:    SeatPosition,
    /// Toggles charged to `person` for this visit.
    pub toggles:       u32,
    /// Running total for this evaluation, including this visit.
    pub total_toggles: u64,
}

/// Callbacks invoked by [`walk`][crate::walk] as it serves each visit.
///
/// Observers see the walk but never change it: the only thing they can do is
/// return `ControlFlow::Break(())` to stop early, which aborts the evaluation
/// with [`PolicyError::Interrupted`][crate::PolicyError::Interrupted] and
/// discards its partial tally.
///
/// All methods have default no-op implementations.
pub trait UsageObserver {
    /// Called once before the first visit.
    fn on_policy_start(&mut self, _policy: PolicyKind) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called after each visit has been served.
    fn on_usage(&mut self, _participant: &Participant, _event: &UsageEvent) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once after the last visit, with the walked tally.
    fn on_policy_end(&mut self, _policy: PolicyKind, _tally: &ToggleTally) {}
}

/// A [`UsageObserver`] that does nothing.
pub struct NoopObserver;

impl UsageObserver for NoopObserver {}
