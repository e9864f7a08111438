//! Per-person usage schedule generation.
//!
//! Both classes share one stepping rule (see the crate docs); they differ only
//! in where a short visit is recorded:
//!
//! | Class    | Short visit (kind A) | Long visit (kind B) |
//! |----------|----------------------|---------------------|
//! | `Male`   | `needs_up`           | `needs_down`        |
//! | `Female` | `needs_down`         | `needs_down`        |
//!
//! Generation stops at the first emitted time at or past the horizon; that
//! event is dropped.  A negative drawn interval is clamped to zero and the
//! zero-length gap is kept.

use seat_core::{Hours, NormalSamples, SimConfig, UsageProcess};
use tracing::trace;

use crate::{PersonClass, ScheduleResult};

/// The two arrival processes and the horizon they run to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisitModel {
    pub short_visit: UsageProcess,
    pub long_visit:  UsageProcess,
    pub horizon:     Hours,
}

impl VisitModel {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            short_visit: config.short_visit,
            long_visit:  config.long_visit,
            horizon:     config.horizon_hours(),
        }
    }
}

/// Output of [`generate_schedule`]: the two streams plus the advanced sample
/// cursor for the next person.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedSchedule {
    pub needs_up:   Vec<Hours>,
    pub needs_down: Vec<Hours>,
    pub cursor:     usize,
}

/// Generate one person's schedule, consuming samples from `cursor` onwards.
///
/// Each step reads the short-visit draw first, then the long-visit draw.
/// Fails only if `samples` runs out before the horizon is crossed.
pub fn generate_schedule(
    class:   PersonClass,
    model:   &VisitModel,
    samples: &NormalSamples,
    cursor:  usize,
) -> ScheduleResult<GeneratedSchedule> {
    let mut needs_up = Vec::new();
    let mut needs_down = Vec::new();
    let mut last_short = Hours::ZERO;
    let mut last_long = Hours::ZERO;
    let mut i = cursor;

    loop {
        let (z_short, next) = samples.next(i)?;
        let (z_long, next) = samples.next(next)?;
        i = next;

        let cand_short = last_short + model.short_visit.interval(z_short);
        let cand_long = last_long + model.long_visit.interval(z_long);

        if cand_short < cand_long {
            if cand_short >= model.horizon {
                break;
            }
            match class {
                PersonClass::Male   => needs_up.push(cand_short),
                PersonClass::Female => needs_down.push(cand_short),
            }
            last_short = cand_short;
        } else {
            if cand_long >= model.horizon {
                break;
            }
            needs_down.push(cand_long);
            // A long visit also clears the pending short one.
            last_long = cand_long;
            last_short = cand_long;
        }
    }

    trace!(
        %class,
        up = needs_up.len(),
        down = needs_down.len(),
        samples_used = i - cursor,
        "schedule generated"
    );

    Ok(GeneratedSchedule { needs_up, needs_down, cursor: i })
}
