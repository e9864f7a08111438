//! The `SimulationRun` struct: generated schedules plus policy evaluation.

use seat_core::{Hours, PersonId};
use seat_policy::{PolicyKind, ToggleTally, UsageObserver};
use seat_schedule::{Participant, PersonClass};

use crate::SimResult;

/// One policy's result over a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyOutcome {
    pub policy: PolicyKind,
    pub tally:  ToggleTally,
}

/// Generated schedules for every participant.
///
/// Never mutated after [`SimulationBuilder::build`][crate::SimulationBuilder::build];
/// every evaluation reads it and keeps its own cursor state, so the same run
/// can be evaluated under any number of policies.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRun {
    horizon:      Hours,
    participants: Vec<Participant>,
    samples_used: usize,
}

impl SimulationRun {
    pub(crate) fn new(horizon: Hours, participants: Vec<Participant>, samples_used: usize) -> Self {
        Self { horizon, participants, samples_used }
    }

    #[inline]
    pub fn horizon(&self) -> Hours {
        self.horizon
    }

    /// Participants in registration order (index == `PersonId`).
    #[inline]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: PersonId) -> Option<&Participant> {
        self.participants.get(id.index())
    }

    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name() == name)
    }

    /// Number of participants of `class`.
    pub fn class_count(&self, class: PersonClass) -> usize {
        self.participants.iter().filter(|p| p.class() == class).count()
    }

    /// Total visits across everyone.
    pub fn event_count(&self) -> usize {
        self.participants.iter().map(Participant::event_count).sum()
    }

    /// How many pre-drawn samples schedule generation consumed.
    pub fn samples_used(&self) -> usize {
        self.samples_used
    }

    /// Evaluate one policy.
    pub fn evaluate<O: UsageObserver>(
        &self,
        policy:   PolicyKind,
        observer: &mut O,
    ) -> SimResult<ToggleTally> {
        Ok(seat_policy::evaluate(policy, &self.participants, observer)?)
    }

    /// Evaluate `only` if given, otherwise every policy in report order.
    ///
    /// Stops at the first failure; outcomes of earlier policies are dropped
    /// along with it.
    pub fn evaluate_selected<O: UsageObserver>(
        &self,
        only:     Option<PolicyKind>,
        observer: &mut O,
    ) -> SimResult<Vec<PolicyOutcome>> {
        PolicyKind::ALL
            .into_iter()
            .filter(|kind| only.is_none_or(|o| o == *kind))
            .map(|policy| {
                let tally = self.evaluate(policy, observer)?;
                Ok(PolicyOutcome { policy, tally })
            })
            .collect()
    }
}
