//! Strongly typed participant identifier.
//!
//! A `PersonId` is the participant's registration index: all standing users in
//! the order given, then all sitting users.  Schedules, cursors and tallies are
//! plain `Vec`s indexed by it, so the scan order of the event merger is the
//! registration order.

use std::fmt;

/// Index of a participant in registration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u32);

impl PersonId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl From<PersonId> for usize {
    #[inline(always)]
    fn from(id: PersonId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PersonId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PersonId, Self::Error> {
        u32::try_from(n).map(PersonId)
    }
}
