//! Run configuration.
//!
//! Built by the application crate (usually from CLI flags) and passed to the
//! simulation builder.  [`SimConfig::default`] reproduces the documented
//! constants: a 30-day horizon (64 with the `long-horizon` feature), short
//! visits every 5 ± 1 hours and long visits every 24 ± 5 hours.

use crate::time::{Horizon, Hours};
use crate::ConfigError;

/// Default horizon length in days.
#[cfg(not(feature = "long-horizon"))]
pub const DEFAULT_HORIZON_DAYS: u32 = 30;
#[cfg(feature = "long-horizon")]
pub const DEFAULT_HORIZON_DAYS: u32 = 64;

/// Smallest accepted sampler safety factor.
pub const MIN_SAFETY_FACTOR: u32 = 4;

/// Standard-normal draws consumed per generation step (one per process).
pub const SAMPLES_PER_STEP: usize = 2;

/// Largest sample budget [`SimConfig::required_samples`] will hand out.
pub const MAX_SAMPLES: usize = 1 << 24;

// ── UsageProcess ──────────────────────────────────────────────────────────────

/// Parameters of one renewal-type arrival process.
///
/// The interval to the next arrival is `max(z * std_hours + mean_hours, 0)`
/// for a standard-normal draw `z`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageProcess {
    pub mean_hours: f64,
    pub std_hours:  f64,
}

impl UsageProcess {
    pub const fn new(mean_hours: f64, std_hours: f64) -> Self {
        Self { mean_hours, std_hours }
    }

    /// Kind A: the frequent, short visit (seat up for standing users).
    pub const SHORT_VISIT: UsageProcess = UsageProcess::new(5.0, 1.0);

    /// Kind B: the infrequent, long visit (seat down for everyone).
    pub const LONG_VISIT: UsageProcess = UsageProcess::new(24.0, 5.0);

    /// Interval implied by the draw `z`, clamped at zero.
    #[inline]
    pub fn interval(&self, z: f64) -> f64 {
        (z * self.std_hours + self.mean_hours).max(0.0)
    }

    fn validate(&self, what: &'static str) -> Result<(), ConfigError> {
        if !self.mean_hours.is_finite() || self.mean_hours <= 0.0 {
            return Err(ConfigError::InvalidProcess {
                what,
                reason: format!("mean must be a positive number of hours, got {}", self.mean_hours),
            });
        }
        if !self.std_hours.is_finite() || self.std_hours < 0.0 {
            return Err(ConfigError::InvalidProcess {
                what,
                reason: format!("std must be a non-negative number of hours, got {}", self.std_hours),
            });
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated duration.
    pub horizon: Horizon,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Kind-A arrival process.
    pub short_visit: UsageProcess,

    /// Kind-B arrival process.
    pub long_visit: UsageProcess,

    /// Multiplier on the expected sample count when pre-drawing normals.
    /// Must be at least [`MIN_SAFETY_FACTOR`].
    pub safety_factor: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon:       Horizon::from_days(DEFAULT_HORIZON_DAYS),
            seed:          0,
            short_visit:   UsageProcess::SHORT_VISIT,
            long_visit:    UsageProcess::LONG_VISIT,
            safety_factor: MIN_SAFETY_FACTOR,
        }
    }
}

impl SimConfig {
    /// Reject configurations the generator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon.days == 0 {
            return Err(ConfigError::NonPositiveHorizon);
        }
        self.short_visit.validate("short visit")?;
        self.long_visit.validate("long visit")?;
        if self.safety_factor < MIN_SAFETY_FACTOR {
            return Err(ConfigError::SafetyFactorTooSmall {
                got: self.safety_factor,
                min: MIN_SAFETY_FACTOR,
            });
        }
        Ok(())
    }

    /// The exclusive upper bound on event times.
    #[inline]
    pub fn horizon_hours(&self) -> Hours {
        self.horizon.hours()
    }

    /// Number of standard-normal draws to pre-allocate for `participants`
    /// people:
    ///
    ///   horizon / min(mean_A, mean_B) * participants * 2 * safety_factor
    ///
    /// Fails with [`ConfigError::SampleBudgetTooLarge`] when the budget is not
    /// finite or exceeds [`MAX_SAMPLES`], e.g. for a near-zero mean.
    pub fn required_samples(&self, participants: usize) -> Result<usize, ConfigError> {
        let min_mean = self.short_visit.mean_hours.min(self.long_visit.mean_hours);
        let expected_steps = self.horizon_hours().get() / min_mean;
        let budget = expected_steps
            * participants as f64
            * SAMPLES_PER_STEP as f64
            * self.safety_factor as f64;
        if !budget.is_finite() || budget > MAX_SAMPLES as f64 {
            return Err(ConfigError::SampleBudgetTooLarge { budget, max: MAX_SAMPLES });
        }
        Ok(budget as usize)
    }
}
