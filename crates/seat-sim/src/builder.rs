//! Fluent builder for constructing a [`SimulationRun`].

use std::collections::HashSet;

use tracing::{debug, info, warn};

use seat_core::{ConfigError, NormalSamples, PersonId, SimConfig, SimRng};
use seat_schedule::{Participant, PersonClass, VisitModel, generate_schedule};

use crate::{SimResult, SimulationRun};

/// Fluent builder for [`SimulationRun`].
///
/// # Required inputs
///
/// - [`SimConfig`] — horizon, seed, arrival processes, safety factor
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                              |
/// |-----------------|------------------------------------------------------|
/// | `.males(v)`     | No standing users                                    |
/// | `.females(v)`   | No sitting users                                     |
/// | `.samples(s)`   | `config.required_samples(n)` draws from `config.seed` |
///
/// # Example
///
/// ```rust,ignore
/// let run = SimulationBuilder::new(config)
///     .males(["Sam", "Bob"])
///     .females(["Ana"])
///     .build()?;
/// ```
pub struct SimulationBuilder {
    config:  SimConfig,
    males:   Vec<String>,
    females: Vec<String>,
    samples: Option<NormalSamples>,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            males:   Vec::new(),
            females: Vec::new(),
            samples: None,
        }
    }

    /// Names of users who stand for short visits, in registration order.
    pub fn males<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.males.extend(names.into_iter().map(Into::into));
        self
    }

    /// Names of users who sit for every visit, registered after all males.
    pub fn females<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.females.extend(names.into_iter().map(Into::into));
        self
    }

    /// Use a fixed sample sequence instead of drawing one from the seed.
    pub fn samples(mut self, samples: NormalSamples) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Check the config and participant lists.  Touches no randomness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;

        let total = self.males.len() + self.females.len();
        if total < 2 {
            return Err(ConfigError::TooFewParticipants(total));
        }

        let mut seen = HashSet::with_capacity(total);
        for name in self.males.iter().chain(&self.females) {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }
        Ok(())
    }

    /// Validate inputs, obtain samples, and generate every participant's
    /// schedule.
    pub fn build(self) -> SimResult<SimulationRun> {
        // ── Validate before any sampling ──────────────────────────────────
        self.validate()?;

        let total = self.males.len() + self.females.len();
        let samples = match self.samples {
            Some(s) => s,
            None => {
                let count = self.config.required_samples(total)?;
                debug!(count, seed = self.config.seed, "drawing standard-normal samples");
                NormalSamples::draw(&mut SimRng::new(self.config.seed), count)
            }
        };

        // ── Generate schedules in registration order ──────────────────────
        let model = VisitModel::from_config(&self.config);
        let roster = self
            .males
            .into_iter()
            .map(|n| (n, PersonClass::Male))
            .chain(self.females.into_iter().map(|n| (n, PersonClass::Female)));

        let mut participants = Vec::with_capacity(total);
        let mut cursor = 0;
        for (i, (name, class)) in roster.enumerate() {
            let schedule = generate_schedule(class, &model, &samples, cursor)?;
            cursor = schedule.cursor;
            debug!(
                name = %name,
                %class,
                needs_up = schedule.needs_up.len(),
                needs_down = schedule.needs_down.len(),
                "participant scheduled"
            );
            participants.push(Participant::new(
                PersonId(i as u32),
                name,
                class,
                schedule.needs_up,
                schedule.needs_down,
                model.horizon,
            )?);
        }

        let run = SimulationRun::new(model.horizon, participants, cursor);
        if run.event_count() == 0 {
            warn!("no visits fall inside the horizon; every tally will be zero");
        }
        info!(
            participants = run.participants().len(),
            visits = run.event_count(),
            samples_used = cursor,
            samples_available = samples.len(),
            "simulation run built"
        );
        Ok(run)
    }
}
