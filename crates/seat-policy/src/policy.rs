//! Seat policies.
//!
//! A [`SeatPolicy`] only answers "given where the seat is and what this visit
//! needs, how many toggles does the visitor make and where is the seat left?".
//! The merge walk in [`crate::evaluate`] is shared by every policy.

use std::fmt;
use std::str::FromStr;

use seat_core::ConfigError;
use seat_schedule::{Participant, SeatPosition};

use crate::ToggleTally;

// ── Service ───────────────────────────────────────────────────────────────────

/// Outcome of serving one visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Service {
    /// Toggles made by the visitor.
    pub toggles:    u32,
    /// Seat position once the visitor leaves.
    pub seat_after: SeatPosition,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Rule deciding how a visitor handles the seat.
///
/// # Contract
///
/// - Must be a pure function of its arguments.
/// - `serve` is called once per merged event, in chronological order.
pub trait SeatPolicy {
    fn kind(&self) -> PolicyKind;

    /// Seat position before the first visit.
    fn initial_position(&self) -> SeatPosition;

    fn serve(&self, seat: SeatPosition, needs: SeatPosition) -> Service;
}

// ── Lazy ──────────────────────────────────────────────────────────────────────

/// Leave the seat wherever the last visitor needed it.  Starts up.
pub struct LazyPolicy;

impl SeatPolicy for LazyPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lazy
    }

    fn initial_position(&self) -> SeatPosition {
        SeatPosition::Up
    }

    #[inline]
    fn serve(&self, seat: SeatPosition, needs: SeatPosition) -> Service {
        if seat == needs {
            Service { toggles: 0, seat_after: seat }
        } else {
            Service { toggles: 1, seat_after: needs }
        }
    }
}

// ── Always down ───────────────────────────────────────────────────────────────

/// Put the seat back down after every visit.
///
/// Because the seat is always down between visits, the tally has a closed
/// form: two toggles per seat-up visit, nothing else.
pub struct AlwaysDownPolicy;

impl AlwaysDownPolicy {
    /// `2 * len(needs_up)` per participant.
    pub fn closed_form(participants: &[Participant]) -> ToggleTally {
        ToggleTally::from_counts(
            participants
                .iter()
                .map(|p| 2 * p.needs_up().len() as u64)
                .collect(),
        )
    }
}

impl SeatPolicy for AlwaysDownPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::AlwaysDown
    }

    fn initial_position(&self) -> SeatPosition {
        SeatPosition::Down
    }

    #[inline]
    fn serve(&self, _seat: SeatPosition, needs: SeatPosition) -> Service {
        match needs {
            SeatPosition::Up   => Service { toggles: 2, seat_after: SeatPosition::Down },
            SeatPosition::Down => Service { toggles: 0, seat_after: SeatPosition::Down },
        }
    }
}

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// Policy selector, as named on the command line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyKind {
    Lazy,
    AlwaysDown,
}

impl PolicyKind {
    /// Report order.
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Lazy, PolicyKind::AlwaysDown];

    /// Command-line spelling.
    pub fn selector(self) -> &'static str {
        match self {
            PolicyKind::Lazy       => "lazy",
            PolicyKind::AlwaysDown => "down",
        }
    }

    /// Heading used in reports.
    pub fn title(self) -> &'static str {
        match self {
            PolicyKind::Lazy       => "Lazy",
            PolicyKind::AlwaysDown => "Always down",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lazy" => Ok(PolicyKind::Lazy),
            "down" => Ok(PolicyKind::AlwaysDown),
            other  => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
