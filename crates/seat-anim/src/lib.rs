//! `seat-anim` — terminal animation of a policy walk.
//!
//! Purely an observer: it plugs into [`seat_policy::UsageObserver`], draws a
//! short sequence of frames per visit, and can only ask the walk to stop.
//! It never changes a tally.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`art`]      | Embedded ASCII art                                         |
//! | [`canvas`]   | `Canvas` — character grid with transparent-space stamping  |
//! | [`frame`]    | `FrameKey`, `Presence`, `Lid`, `compose`                   |
//! | [`sequence`] | `visit_frames` — frame steps for one served visit          |
//! | [`context`]  | `RenderContext` — terminal guard, frame cache, pacing      |
//! | [`sink`]     | `FrameTarget` trait, `AnimationSink`                       |
//! | [`error`]    | `AnimError`, `AnimResult<T>`                               |
//!
//! # Terminal lifetime
//!
//! [`RenderContext::open`] switches to the alternate screen and raw mode;
//! dropping the context restores both, including on early return, `?`
//! propagation, and panics that unwind.

pub mod art;
pub mod canvas;
pub mod context;
pub mod error;
pub mod frame;
pub mod sequence;
pub mod sink;

#[cfg(test)]
mod tests;

pub use canvas::Canvas;
pub use context::RenderContext;
pub use error::{AnimError, AnimResult};
pub use frame::{FrameKey, Lid, Presence, compose};
pub use sequence::visit_frames;
pub use sink::{AnimationSink, FrameTarget};
