//! Human- and machine-readable results.
//!
//! `Report` implements `Display` for the terminal layout and `Serialize` for
//! `--json` output.  Class averages are `None` (and omitted from both forms)
//! when the class has no members.

use std::fmt;

use serde::Serialize;

use seat_schedule::PersonClass;

use crate::{PolicyOutcome, SimulationRun};

/// Toggle count of one participant under one policy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PersonMoves {
    pub name:  String,
    pub class: &'static str,
    pub moves: u64,
}

/// One evaluated policy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyReport {
    pub policy:   &'static str,
    pub selector: &'static str,
    pub people:   Vec<PersonMoves>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_male_moves:   Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_female_moves: Option<f64>,
    pub total_moves: u64,
}

/// Results of every evaluated policy over one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub horizon_hours: f64,
    pub males:         usize,
    pub females:       usize,
    pub policies:      Vec<PolicyReport>,
}

impl Report {
    pub fn new(run: &SimulationRun, outcomes: &[PolicyOutcome]) -> Self {
        Self {
            horizon_hours: run.horizon().get(),
            males:         run.class_count(PersonClass::Male),
            females:       run.class_count(PersonClass::Female),
            policies:      outcomes.iter().map(|o| PolicyReport::new(run, o)).collect(),
        }
    }
}

impl PolicyReport {
    fn new(run: &SimulationRun, outcome: &PolicyOutcome) -> Self {
        let people: Vec<PersonMoves> = run
            .participants()
            .iter()
            .map(|p| PersonMoves {
                name:  p.name().to_string(),
                class: p.class().label(),
                moves: outcome.tally.get(p.id()),
            })
            .collect();

        let average = |class: PersonClass| {
            let (n, sum) = people
                .iter()
                .filter(|m| m.class == class.label())
                .fold((0usize, 0u64), |(n, sum), m| (n + 1, sum + m.moves));
            (n > 0).then(|| sum as f64 / n as f64)
        };

        Self {
            policy:               outcome.policy.title(),
            selector:             outcome.policy.selector(),
            average_male_moves:   average(PersonClass::Male),
            average_female_moves: average(PersonClass::Female),
            total_moves:          outcome.tally.total(),
            people,
        }
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = format!("{} policy", self.policy);
        writeln!(f, "{heading}")?;
        writeln!(f, "{}", "=".repeat(heading.len()))?;
        for person in &self.people {
            writeln!(f, "{} moves: {}", person.name, person.moves)?;
        }
        if let Some(avg) = self.average_male_moves {
            writeln!(f, "Average male moves: {avg:.2}")?;
        }
        if let Some(avg) = self.average_female_moves {
            writeln!(f, "Average female moves: {avg:.2}")?;
        }
        writeln!(f, "TOTAL MOVES: {}", self.total_moves)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for policy in &self.policies {
            writeln!(f, "{policy}")?;
        }
        Ok(())
    }
}
