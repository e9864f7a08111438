//! `seat-sim` — builds a simulation run and evaluates policies against it.
//!
//! # Pipeline
//!
//! ```text
//! SimulationBuilder::build()
//!   ① Validate   — config, ≥ 2 participants, unique names.  No sampling yet.
//!   ② Sample     — injected NormalSamples, or draw
//!                  config.required_samples(n) normals from SimRng(seed).
//!   ③ Generate   — one schedule per participant, standing users first,
//!                  all sharing one sample cursor.
//! SimulationRun::evaluate(policy, observer)
//!   ④ Walk       — fresh cursor state per call; the run itself is read-only.
//! Report::new(run, outcomes)
//!   ⑤ Report     — per-person counts, per-class averages, grand total.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seat_core::SimConfig;
//! use seat_policy::NoopObserver;
//! use seat_sim::{Report, SimulationBuilder};
//!
//! let run = SimulationBuilder::new(SimConfig { seed: 42, ..SimConfig::default() })
//!     .males(["Sam"])
//!     .females(["Ana"])
//!     .build()?;
//! let outcomes = run.evaluate_selected(None, &mut NoopObserver)?;
//! println!("{}", Report::new(&run, &outcomes));
//! ```

pub mod builder;
pub mod error;
pub mod report;
pub mod run;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use report::{PersonMoves, PolicyReport, Report};
pub use run::{PolicyOutcome, SimulationRun};
