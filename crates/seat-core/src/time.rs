//! Simulation time model.
//!
//! # Design
//!
//! Time is a non-negative real number of simulated hours since the run
//! began.  Unlike a tick counter, event times come straight out of a
//! continuous arrival process, so the canonical unit is an `f64` wrapped in
//! [`Hours`].
//!
//! The run length is a whole number of days ([`Horizon`]); generation stops
//! at the first event that would land at or past `Horizon::hours()`.

use std::fmt;

/// Hours in one simulated day.
pub const HOURS_PER_DAY: f64 = 24.0;

// ── Hours ─────────────────────────────────────────────────────────────────────

/// A point in simulated time, in hours since the run began.
///
/// `Hours` is only `PartialOrd`: every value produced by the generator is
/// finite, and comparisons use the strict `<` the merge rules are defined in.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Hours(pub f64);

impl Hours {
    pub const ZERO: Hours = Hours(0.0);

    /// Raw value in hours.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Advance by `delta` hours.
    #[inline]
    pub fn offset(self, delta: f64) -> Hours {
        Hours(self.0 + delta)
    }

    /// Break the time into (day, hour, minute) from the run start.
    pub fn dhm(self) -> (u64, u32, u32) {
        let total_minutes = (self.0.max(0.0) * 60.0) as u64;
        let days = total_minutes / (24 * 60);
        let hours = ((total_minutes % (24 * 60)) / 60) as u32;
        let minutes = (total_minutes % 60) as u32;
        (days, hours, minutes)
    }
}

impl std::ops::Add<f64> for Hours {
    type Output = Hours;
    #[inline]
    fn add(self, rhs: f64) -> Hours {
        Hours(self.0 + rhs)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.dhm();
        write!(f, "day {} {:02}:{:02}", d, h, m)
    }
}

// ── Horizon ───────────────────────────────────────────────────────────────────

/// Total simulated duration, as a whole number of days.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Horizon {
    pub days: u32,
}

impl Horizon {
    pub fn from_days(days: u32) -> Self {
        Self { days }
    }

    /// The exclusive upper bound on event times.
    #[inline]
    pub fn hours(self) -> Hours {
        Hours(self.days as f64 * HOURS_PER_DAY)
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days)
    }
}
