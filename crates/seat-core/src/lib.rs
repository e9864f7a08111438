//! `seat-core` — foundational types for the `seatsim` workspace.
//!
//! This crate is a dependency of every other `seat-*` crate.  It has no
//! `seat-*` dependencies and only a few external ones (`rand`, `rand_distr`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `PersonId`                                                 |
//! | [`time`]   | `Hours`, `Horizon`                                         |
//! | [`config`] | `SimConfig`, `UsageProcess`                                |
//! | [`rng`]    | `SimRng` (seeded), `NormalSamples` (pre-drawn sequence)    |
//! | [`error`]  | `SeatError`, `ConfigError`, `SeatResult`                   |
//!
//! # Feature flags
//!
//! | Flag           | Effect                                              |
//! |----------------|-----------------------------------------------------|
//! | `serde`        | Adds `Serialize`/`Deserialize` to ids and config.   |
//! | `long-horizon` | Default horizon becomes 64 days instead of 30.      |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, UsageProcess};
pub use error::{ConfigError, SeatError, SeatResult};
pub use ids::PersonId;
pub use rng::{NormalSamples, SimRng};
pub use time::{Horizon, Hours};
