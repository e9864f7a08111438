//! `ToggleTally` — toggles charged to each participant by one evaluation.

use seat_core::PersonId;
use seat_schedule::Participant;

/// Per-participant toggle counts, indexed by `PersonId`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToggleTally {
    counts: Vec<u64>,
}

impl ToggleTally {
    /// All-zero tally for `participants` people.
    pub fn zeroed(participants: usize) -> Self {
        Self { counts: vec![0; participants] }
    }

    pub fn from_counts(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    #[inline]
    pub(crate) fn charge(&mut self, person: PersonId, toggles: u32) {
        self.counts[person.index()] += u64::from(toggles);
    }

    /// Toggles charged to `person`; zero for an unknown id.
    #[inline]
    pub fn get(&self, person: PersonId) -> u64 {
        self.counts.get(person.index()).copied().unwrap_or(0)
    }

    /// Look a count up by participant name.
    pub fn get_by_name(&self, participants: &[Participant], name: &str) -> Option<u64> {
        participants
            .iter()
            .find(|p| p.name() == name)
            .map(|p| self.get(p.id()))
    }

    /// Grand total across all participants.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// `(PersonId, count)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &n)| (PersonId(i as u32), n))
    }
}
