//! `Participant` — one user of the shared seat and their generated schedule.

use std::fmt;

use seat_core::{Hours, PersonId};

use crate::{ScheduleError, ScheduleResult};

// ── PersonClass ───────────────────────────────────────────────────────────────

/// Usage class.  Decides which stream a short visit lands in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonClass {
    /// Stands for short visits (seat up), sits for long ones (seat down).
    Male,
    /// Sits for every visit.
    Female,
}

impl PersonClass {
    /// Lowercase label used in reports ("male" / "female").
    pub fn label(self) -> &'static str {
        match self {
            PersonClass::Male   => "male",
            PersonClass::Female => "female",
        }
    }
}

impl fmt::Display for PersonClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── SeatPosition ──────────────────────────────────────────────────────────────

/// Position of the seat, and equally what a usage event needs it to be.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatPosition {
    Up,
    Down,
}

impl SeatPosition {
    #[inline]
    pub fn flipped(self) -> SeatPosition {
        match self {
            SeatPosition::Up   => SeatPosition::Down,
            SeatPosition::Down => SeatPosition::Up,
        }
    }

    #[inline]
    pub fn is_up(self) -> bool {
        self == SeatPosition::Up
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatPosition::Up   => f.write_str("up"),
            SeatPosition::Down => f.write_str("down"),
        }
    }
}

// ── Participant ───────────────────────────────────────────────────────────────

/// A named user and the times they need the seat up or down.
///
/// Immutable once constructed.  [`Participant::new`] checks the schedule
/// invariants: both streams non-decreasing, every time in `[0, horizon)`,
/// and no seat-up events for the `Female` class.
#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    id:         PersonId,
    name:       String,
    class:      PersonClass,
    needs_up:   Vec<Hours>,
    needs_down: Vec<Hours>,
}

impl Participant {
    pub fn new(
        id:         PersonId,
        name:       impl Into<String>,
        class:      PersonClass,
        needs_up:   Vec<Hours>,
        needs_down: Vec<Hours>,
        horizon:    Hours,
    ) -> ScheduleResult<Self> {
        let name = name.into();
        if class == PersonClass::Female && !needs_up.is_empty() {
            return Err(ScheduleError::InvalidParticipant {
                name,
                reason: "a sitting user never needs the seat up".into(),
            });
        }
        for (stream, times) in [("seat-up", &needs_up), ("seat-down", &needs_down)] {
            if let Some(reason) = stream_violation(times, horizon) {
                return Err(ScheduleError::InvalidParticipant {
                    name,
                    reason: format!("{stream} stream {reason}"),
                });
            }
        }
        Ok(Self { id, name, class, needs_up, needs_down })
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> PersonClass {
        self.class
    }

    /// Times at which this person needs the seat up (short visits of the
    /// `Male` class).
    #[inline]
    pub fn needs_up(&self) -> &[Hours] {
        &self.needs_up
    }

    /// Times at which this person needs the seat down.
    #[inline]
    pub fn needs_down(&self) -> &[Hours] {
        &self.needs_down
    }

    /// The stream of events that need the seat at `position`.
    #[inline]
    pub fn times(&self, position: SeatPosition) -> &[Hours] {
        match position {
            SeatPosition::Up   => &self.needs_up,
            SeatPosition::Down => &self.needs_down,
        }
    }

    /// Total visits across both streams.
    pub fn event_count(&self) -> usize {
        self.needs_up.len() + self.needs_down.len()
    }
}

fn stream_violation(times: &[Hours], horizon: Hours) -> Option<String> {
    if let Some(t) = times.iter().find(|t| !(t.get() >= 0.0 && t.get() < horizon.get())) {
        return Some(format!("has time {} outside [0, {})", t.get(), horizon.get()));
    }
    times
        .windows(2)
        .find(|w| w[1] < w[0])
        .map(|w| format!("is not in time order ({} after {})", w[1].get(), w[0].get()))
}
