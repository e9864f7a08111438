//! `seat-policy` — event merging and seat policy evaluation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`cursor`]   | `CursorState` — per-evaluation read positions + seat position |
//! | [`merger`]   | `earliest_event`, `next_event`, `MergedEvent`                 |
//! | [`policy`]   | `SeatPolicy` trait, `LazyPolicy`, `AlwaysDownPolicy`, `PolicyKind` |
//! | [`evaluate`] | `walk`, `evaluate`                                            |
//! | [`observer`] | `UsageObserver`, `UsageEvent`, `NoopObserver`                 |
//! | [`tally`]    | `ToggleTally`                                                 |
//! | [`error`]    | `PolicyError`, `PolicyResult<T>`                              |
//!
//! # Walk
//!
//! ```text
//! state = fresh CursorState (seat = policy.initial_position())
//! loop:
//!   up   = earliest unread seat-up event   (registration-order scan, strict <)
//!   down = earliest unread seat-down event
//!   both exhausted → done
//!   up strictly earlier → serve up event, else serve down event
//!   serve: policy decides toggles + position after; charge the user;
//!          advance that user's cursor; notify the observer
//! ```
//!
//! Every evaluation builds its own `CursorState`, so two evaluations over the
//! same participants never see each other's progress.

pub mod cursor;
pub mod error;
pub mod evaluate;
pub mod merger;
pub mod observer;
pub mod policy;
pub mod tally;

#[cfg(test)]
mod tests;

pub use cursor::CursorState;
pub use error::{PolicyError, PolicyResult};
pub use evaluate::{evaluate, walk};
pub use merger::{MergedEvent, earliest_event, next_event};
pub use observer::{NoopObserver, UsageEvent, UsageObserver};
pub use policy::{AlwaysDownPolicy, LazyPolicy, PolicyKind, SeatPolicy, Service};
pub use tally::ToggleTally;
