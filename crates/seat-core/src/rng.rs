//! Seeded RNG wrapper and the pre-drawn standard-normal sequence.
//!
//! # Determinism strategy
//!
//! All randomness in a run comes from one [`NormalSamples`] sequence, drawn
//! up front from a single `SmallRng` seeded with `SimConfig::seed`.  Schedule
//! generation consumes it through an explicit integer cursor that callers pass
//! in and get back, so:
//!
//! - The consumption order is visible at every call site and testable.
//! - Replaying the same sequence (same seed, or an injected vector) yields
//!   bit-identical schedules and therefore bit-identical toggle tallies.
//! - No hidden mutable state is shared between participants.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::{SeatError, SeatResult};

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.  Only used to fill a [`NormalSamples`] sequence.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// One standard-normal variate.
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}

// ── NormalSamples ─────────────────────────────────────────────────────────────

/// A finite, ordered sequence of independent standard-normal draws.
///
/// There is no internal cursor: [`next`](Self::next) takes the read position
/// and returns it advanced by one.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalSamples {
    values: Vec<f64>,
}

impl NormalSamples {
    /// Draw `count` standard normals from `rng`.
    pub fn draw(rng: &mut SimRng, count: usize) -> Self {
        let values = (0..count).map(|_| rng.standard_normal()).collect();
        Self { values }
    }

    /// Wrap an existing sequence (tests, replay files).
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Read the value at `cursor` and return it with the advanced cursor.
    ///
    /// Reading past the end is [`SeatError::SamplesExhausted`].
    #[inline]
    pub fn next(&self, cursor: usize) -> SeatResult<(f64, usize)> {
        match self.values.get(cursor) {
            Some(&z) => Ok((z, cursor + 1)),
            None => Err(SeatError::SamplesExhausted {
                index:     cursor,
                available: self.values.len(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
