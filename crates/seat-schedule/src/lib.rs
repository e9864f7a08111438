//! `seat-schedule` — participant records, schedule generation, and sample
//! CSV loading.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`participant`] | `PersonClass`, `SeatPosition`, `Participant`               |
//! | [`generator`]   | `VisitModel`, `generate_schedule`, `GeneratedSchedule`     |
//! | [`loader`]      | `load_samples_csv`, `load_samples_reader`                  |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Arrival model (summary)
//!
//! Every person runs two coupled renewal processes, short visits (kind A) and
//! long visits (kind B).  Each step draws one candidate time per process and
//! emits the earlier one:
//!
//! ```text
//! cand_A = last_A + max(z_A * std_A + mean_A, 0)
//! cand_B = last_B + max(z_B * std_B + mean_B, 0)
//! cand_A <  cand_B  → kind A at cand_A;  last_A = cand_A
//! cand_A >= cand_B  → kind B at cand_B;  last_A = last_B = cand_B
//! ```
//!
//! A long visit also takes care of the pending short one, which is why it
//! resets both baselines.

pub mod error;
pub mod generator;
pub mod loader;
pub mod participant;


pub use error::{ScheduleError, ScheduleResult};
pub use generator::{GeneratedSchedule, VisitModel, generate_schedule};
pub use loader::{load_samples_csv, load_samples_reader};
pub use participant::{Participant, PersonClass, SeatPosition};
