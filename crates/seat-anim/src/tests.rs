//! Unit tests for seat-anim.

use std::ops::ControlFlow;

use seat_core::{Hours, PersonId};
use seat_policy::{PolicyKind, UsageEvent};
use seat_schedule::{Participant, PersonClass, SeatPosition};

use crate::{AnimError, AnimResult, FrameKey, FrameTarget, Lid, Presence};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HORIZON: Hours = Hours(24.0);

fn household() -> Vec<Participant> {
    let hours = |v: &[f64]| v.iter().copied().map(Hours).collect::<Vec<_>>();
    vec![
        Participant::new(PersonId(0), "Sam", PersonClass::Male, hours(&[1.0, 5.0]), hours(&[3.0]), HORIZON)
            .unwrap(),
        Participant::new(PersonId(1), "Bob", PersonClass::Male, hours(&[2.0]), vec![], HORIZON).unwrap(),
        Participant::new(PersonId(2), "Ana", PersonClass::Female, vec![], hours(&[4.0]), HORIZON).unwrap(),
    ]
}

fn event(before: SeatPosition, needs: SeatPosition, after: SeatPosition) -> UsageEvent {
    UsageEvent {
        policy:        PolicyKind::Lazy,
        time:          Hours(1.0),
        person:        PersonId(0),
        needs,
        seat_before:   before,
        seat_after:    after,
        toggles:       0,
        total_toggles: 0,
    }
}

/// Records every drawn frame; optionally stops or fails after `limit` frames.
#[derive(Default)]
struct Recorder {
    frames:   Vec<(FrameKey, String)>,
    stop_at:  Option<usize>,
    fail_at:  Option<usize>,
}

impl FrameTarget for Recorder {
    fn draw(&mut self, key: &FrameKey, status: &str) -> AnimResult<()> {
        if self.fail_at == Some(self.frames.len()) {
            return Err(AnimError::Io(std::io::Error::other("terminal gone")));
        }
        self.frames.push((key.clone(), status.to_string()));
        Ok(())
    }

    fn pace(&mut self) -> AnimResult<ControlFlow<()>> {
        if self.stop_at == Some(self.frames.len()) {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod canvas {
    use crate::Canvas;

    #[test]
    fn stamp_treats_spaces_as_transparent() {
        let mut c = Canvas::blank(5, 3);
        c.stamp("xxxxx", 1, 0);
        c.stamp("ab c", 1, 1);
        assert_eq!(c.lines()[1], "xabxc");
    }

    #[test]
    fn stamp_clips_at_edges() {
        let mut c = Canvas::blank(4, 2);
        c.stamp("\nabcdef\nghij\nklmn", 0, 2);
        assert_eq!(c.get(0, 2), Some('a'));
        assert_eq!(c.get(0, 3), Some('b'));
        assert_eq!(c.get(1, 2), Some('g'));
        assert_eq!(c.get(2, 2), None);
    }

    #[test]
    fn lines_trim_trailing_space() {
        let mut c = Canvas::blank(6, 2);
        c.stamp("ab", 0, 0);
        assert_eq!(c.lines(), vec!["ab".to_string(), String::new()]);
        assert_eq!(c.width(), 6);
        assert_eq!(c.height(), 2);
    }
}

// ── Frames ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frames {
    use super::*;
    use crate::compose;

    fn key(presence: Presence, lid: Lid) -> FrameKey {
        FrameKey { name: "Sam".into(), class: PersonClass::Male, presence, lid }
    }

    #[test]
    fn away_frame_has_no_banner() {
        let lines = compose(&key(Presence::Away, Lid::Down)).lines();
        assert!(lines.iter().all(|l| !l.contains("Sam")));
    }

    #[test]
    fn banner_moves_with_presence() {
        let inside = compose(&key(Presence::Inside, Lid::Up)).lines();
        let entering = compose(&key(Presence::Entering, Lid::Up)).lines();
        let col = |lines: &[String]| lines.iter().find_map(|l| l.find("Sam")).unwrap();
        assert!(col(&entering) > col(&inside));
    }

    #[test]
    fn lid_changes_the_rim() {
        let down = compose(&key(Presence::Away, Lid::Down));
        let up = compose(&key(Presence::Away, Lid::Up));
        let half = compose(&key(Presence::Away, Lid::Halfway));
        assert_ne!(down, up);
        assert_ne!(down, half);
        assert_ne!(up, half);
    }

    #[test]
    fn classes_draw_different_figures() {
        let male = compose(&key(Presence::Inside, Lid::Down));
        let female = compose(&FrameKey { class: PersonClass::Female, ..key(Presence::Inside, Lid::Down) });
        assert_ne!(male, female);
    }
}

// ── Sequence ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sequence {
    use super::*;
    use crate::visit_frames;
    use SeatPosition::{Down, Up};

    #[test]
    fn no_toggle_keeps_lid_still() {
        let steps = visit_frames(&event(Up, Up, Up));
        assert_eq!(steps.len(), 6);
        assert!(steps.iter().all(|&(_, lid)| lid == Lid::Up));
        assert_eq!(steps.first().map(|s| s.0), Some(Presence::Entering));
        assert_eq!(steps.last().map(|s| s.0), Some(Presence::Away));
    }

    #[test]
    fn toggle_passes_through_halfway() {
        let steps = visit_frames(&event(Down, Up, Up));
        let lids: Vec<Lid> = steps.iter().map(|s| s.1).collect();
        assert_eq!(lids, vec![Lid::Down, Lid::Down, Lid::Halfway, Lid::Up, Lid::Up, Lid::Up]);
    }

    #[test]
    fn leaving_seat_down_adds_second_toggle() {
        let steps = visit_frames(&event(Down, Up, Down));
        assert_eq!(
            steps,
            vec![
                (Presence::Entering, Lid::Down),
                (Presence::Inside, Lid::Down),
                (Presence::Inside, Lid::Halfway),
                (Presence::Inside, Lid::Up),
                (Presence::Inside, Lid::Halfway),
                (Presence::Inside, Lid::Down),
                (Presence::Entering, Lid::Down),
                (Presence::Away, Lid::Down),
            ]
        );
    }
}

// ── Sink ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink {
    use super::*;
    use crate::AnimationSink;
    use seat_policy::{NoopObserver, PolicyError, evaluate};

    #[test]
    fn lazy_walk_draws_six_frames_per_visit() {
        let people = household();
        let mut sink = AnimationSink::new(Recorder::default());
        let tally = evaluate(PolicyKind::Lazy, &people, &mut sink).unwrap();
        assert_eq!(tally, evaluate(PolicyKind::Lazy, &people, &mut NoopObserver).unwrap());
        assert_eq!(sink.frames_drawn(), 30);
        assert!(sink.take_error().is_none());

        let rec = sink.into_target();
        assert_eq!(rec.frames[0].0.name, "Sam");
        assert!(rec.frames[0].1.starts_with("Lazy policy"));
        assert!(rec.frames[0].1.contains("Sam needs the seat up"));
    }

    #[test]
    fn always_down_up_visits_take_eight_frames() {
        let people = household();
        let mut sink = AnimationSink::new(Recorder::default());
        let tally = evaluate(PolicyKind::AlwaysDown, &people, &mut sink).unwrap();
        assert_eq!(tally.as_slice(), &[4, 2, 0]);
        assert_eq!(sink.frames_drawn(), 3 * 8 + 2 * 6);
    }

    #[test]
    fn viewer_stop_interrupts_evaluation() {
        let people = household();
        let mut sink = AnimationSink::new(Recorder { stop_at: Some(3), ..Recorder::default() });
        let err = evaluate(PolicyKind::Lazy, &people, &mut sink).unwrap_err();
        assert_eq!(err, PolicyError::Interrupted { policy: PolicyKind::Lazy });
        assert_eq!(sink.frames_drawn(), 3);
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn draw_failure_is_stored_and_stops_walk() {
        let people = household();
        let mut sink = AnimationSink::new(Recorder { fail_at: Some(2), ..Recorder::default() });
        assert!(evaluate(PolicyKind::Lazy, &people, &mut sink).is_err());
        assert!(matches!(sink.take_error(), Some(AnimError::Io(_))));
        assert!(sink.take_error().is_none());
    }
}

// ── Keys ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use crate::context::is_stop_key;

    #[test]
    fn stop_keys() {
        assert!(is_stop_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_stop_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_stop_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_stop_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_stop_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));

        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!is_stop_key(&release));
    }
}
