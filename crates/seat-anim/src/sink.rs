//! `AnimationSink` — drives a [`FrameTarget`] from the policy walk.

use std::ops::ControlFlow;

use seat_policy::{PolicyKind, ToggleTally, UsageEvent, UsageObserver};
use seat_schedule::Participant;

use crate::error::{AnimError, AnimResult};
use crate::frame::FrameKey;
use crate::sequence::visit_frames;

/// Somewhere frames can be shown.
///
/// [`RenderContext`][crate::RenderContext] is the terminal implementation;
/// tests substitute a recorder.
pub trait FrameTarget {
    /// Show one frame with a status line beneath it.
    fn draw(&mut self, key: &FrameKey, status: &str) -> AnimResult<()>;

    /// Wait between frames.  `Break` means the viewer asked to stop.
    fn pace(&mut self) -> AnimResult<ControlFlow<()>>;
}

/// [`UsageObserver`] that animates every served visit.
///
/// Observer callbacks cannot return errors, so a failed draw is stored and
/// the walk is stopped; retrieve it with [`take_error`][Self::take_error]
/// after the evaluation returns.
pub struct AnimationSink<T: FrameTarget> {
    target:     T,
    frames:     u64,
    last_error: Option<AnimError>,
}

impl<T: FrameTarget> AnimationSink<T> {
    pub fn new(target: T) -> Self {
        Self { target, frames: 0, last_error: None }
    }

    /// Take the stored draw error (if any) after the evaluation returns.
    pub fn take_error(&mut self) -> Option<AnimError> {
        self.last_error.take()
    }

    /// Frames drawn so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn into_target(self) -> T {
        self.target
    }

    fn play(&mut self, participant: &Participant, event: &UsageEvent) -> AnimResult<ControlFlow<()>> {
        let status = format!(
            "{} policy | {} | {} needs the seat {} | moves so far: {}",
            event.policy.title(),
            event.time,
            participant.name(),
            event.needs,
            event.total_toggles,
        );
        for (presence, lid) in visit_frames(event) {
            let key = FrameKey {
                name: participant.name().to_string(),
                class: participant.class(),
                presence,
                lid,
            };
            self.target.draw(&key, &status)?;
            self.frames += 1;
            if self.target.pace()?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl<T: FrameTarget> UsageObserver for AnimationSink<T> {
    fn on_policy_start(&mut self, policy: PolicyKind) -> ControlFlow<()> {
        tracing::debug!(%policy, "animation started");
        ControlFlow::Continue(())
    }

    fn on_usage(&mut self, participant: &Participant, event: &UsageEvent) -> ControlFlow<()> {
        match self.play(participant, event) {
            Ok(flow) => flow,
            Err(e) => {
                tracing::warn!(error = %e, "animation draw failed; stopping");
                self.last_error = Some(e);
                ControlFlow::Break(())
            }
        }
    }

    fn on_policy_end(&mut self, policy: PolicyKind, tally: &ToggleTally) {
        tracing::debug!(%policy, total = tally.total(), frames = self.frames, "animation finished");
    }
}
