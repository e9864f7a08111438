//! Unit tests for seat-policy.

use seat_core::{Hours, PersonId};
use seat_schedule::{Participant, PersonClass, SeatPosition};

use crate::{
    AlwaysDownPolicy, CursorState, LazyPolicy, NoopObserver, PolicyKind, ToggleTally, evaluate,
    walk,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HORIZON: Hours = Hours(48.0);

fn male(id: u32, name: &str, up: &[f64], down: &[f64]) -> Participant {
    Participant::new(
        PersonId(id), name, PersonClass::Male,
        up.iter().copied().map(Hours).collect(),
        down.iter().copied().map(Hours).collect(),
        HORIZON,
    )
    .unwrap()
}

fn female(id: u32, name: &str, down: &[f64]) -> Participant {
    Participant::new(
        PersonId(id), name, PersonClass::Female,
        vec![],
        down.iter().copied().map(Hours).collect(),
        HORIZON,
    )
    .unwrap()
}

/// Sam needs the seat up at 3 h, Ana needs it down at 10 h.
fn sam_and_ana() -> Vec<Participant> {
    vec![male(0, "Sam", &[3.0], &[]), female(1, "Ana", &[10.0])]
}

/// Sam: up 1, down 3, up 5.  Bob: up 2.  Ana: down 4.
fn household() -> Vec<Participant> {
    vec![
        male(0, "Sam", &[1.0, 5.0], &[3.0]),
        male(1, "Bob", &[2.0], &[]),
        female(2, "Ana", &[4.0]),
    ]
}

// ── Merger ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod merger {
    use super::*;
    use crate::{earliest_event, next_event};

    #[test]
    fn finds_earliest_across_participants() {
        let people = household();
        let got = earliest_event(&people, &[0, 0, 0], SeatPosition::Up);
        assert_eq!(got, Some((Hours(1.0), PersonId(0))));
        let got = earliest_event(&people, &[0, 0, 0], SeatPosition::Down);
        assert_eq!(got, Some((Hours(3.0), PersonId(0))));
    }

    #[test]
    fn respects_cursors() {
        let people = household();
        let got = earliest_event(&people, &[1, 0, 0], SeatPosition::Up);
        assert_eq!(got, Some((Hours(2.0), PersonId(1))));
        let got = earliest_event(&people, &[2, 1, 0], SeatPosition::Up);
        assert_eq!(got, None);
    }

    #[test]
    fn equal_times_go_to_first_registered() {
        let people = vec![
            female(0, "Ana", &[7.0]),
            female(1, "Eve", &[7.0]),
            female(2, "Zoe", &[7.0]),
        ];
        let got = earliest_event(&people, &[0, 0, 0], SeatPosition::Down);
        assert_eq!(got, Some((Hours(7.0), PersonId(0))));
        let got = earliest_event(&people, &[1, 0, 0], SeatPosition::Down);
        assert_eq!(got, Some((Hours(7.0), PersonId(1))));
    }

    #[test]
    fn empty_streams_give_none() {
        let people = vec![female(0, "Ana", &[]), female(1, "Eve", &[])];
        assert_eq!(earliest_event(&people, &[0, 0], SeatPosition::Up), None);
        assert_eq!(earliest_event(&people, &[0, 0], SeatPosition::Down), None);
    }

    #[test]
    fn up_must_be_strictly_earlier_than_down() {
        let people = vec![male(0, "Sam", &[2.0], &[]), female(1, "Ana", &[2.0])];
        let state = CursorState::new(2, SeatPosition::Up);
        let next = next_event(&people, &state).unwrap();
        assert_eq!(next.needs, SeatPosition::Down);
        assert_eq!(next.person, PersonId(1));
    }

    #[test]
    fn up_only_and_down_only() {
        let state = CursorState::new(1, SeatPosition::Up);
        let up_only = vec![male(0, "Sam", &[2.0], &[])];
        assert_eq!(next_event(&up_only, &state).unwrap().needs, SeatPosition::Up);
        let down_only = vec![female(0, "Ana", &[2.0])];
        assert_eq!(next_event(&down_only, &state).unwrap().needs, SeatPosition::Down);
    }

    #[test]
    fn cursor_advance_is_per_stream() {
        let mut state = CursorState::new(2, SeatPosition::Up);
        state.advance(PersonId(1), SeatPosition::Down);
        assert_eq!(state.positions(SeatPosition::Down), &[0, 1]);
        assert_eq!(state.positions(SeatPosition::Up), &[0, 0]);
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policies {
    use super::*;
    use crate::{SeatPolicy, Service};

    #[test]
    fn lazy_toggles_only_on_mismatch() {
        let p = LazyPolicy;
        assert_eq!(p.initial_position(), SeatPosition::Up);
        assert_eq!(
            p.serve(SeatPosition::Up, SeatPosition::Up),
            Service { toggles: 0, seat_after: SeatPosition::Up }
        );
        assert_eq!(
            p.serve(SeatPosition::Up, SeatPosition::Down),
            Service { toggles: 1, seat_after: SeatPosition::Down }
        );
    }

    #[test]
    fn always_down_charges_two_per_up_visit() {
        let p = AlwaysDownPolicy;
        assert_eq!(p.initial_position(), SeatPosition::Down);
        assert_eq!(
            p.serve(SeatPosition::Down, SeatPosition::Up),
            Service { toggles: 2, seat_after: SeatPosition::Down }
        );
        assert_eq!(
            p.serve(SeatPosition::Down, SeatPosition::Down),
            Service { toggles: 0, seat_after: SeatPosition::Down }
        );
    }

    #[test]
    fn selector_parsing() {
        assert_eq!("lazy".parse::<PolicyKind>(), Ok(PolicyKind::Lazy));
        assert_eq!("down".parse::<PolicyKind>(), Ok(PolicyKind::AlwaysDown));
        assert_eq!(
            "Lazy".parse::<PolicyKind>(),
            Err(seat_core::ConfigError::UnknownPolicy("Lazy".into()))
        );
        assert_eq!(PolicyKind::AlwaysDown.to_string(), "Always down");
        assert_eq!(PolicyKind::Lazy.selector(), "lazy");
    }
}

// ── Evaluation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod evaluation {
    use std::ops::ControlFlow;

    use super::*;
    use crate::{PolicyError, UsageEvent, UsageObserver};

    #[test]
    fn lazy_sam_and_ana() {
        let people = sam_and_ana();
        let tally = evaluate(PolicyKind::Lazy, &people, &mut NoopObserver).unwrap();
        assert_eq!(tally.get_by_name(&people, "Sam"), Some(0));
        assert_eq!(tally.get_by_name(&people, "Ana"), Some(1));
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn always_down_sam_and_ana() {
        let people = sam_and_ana();
        let tally = evaluate(PolicyKind::AlwaysDown, &people, &mut NoopObserver).unwrap();
        assert_eq!(tally.get_by_name(&people, "Sam"), Some(2));
        assert_eq!(tally.get_by_name(&people, "Ana"), Some(0));
    }

    #[test]
    fn ids_out_of_registration_order_rejected() {
        let people = vec![male(5, "Sam", &[3.0], &[]), female(0, "Ana", &[10.0])];
        for kind in PolicyKind::ALL {
            let err = evaluate(kind, &people, &mut NoopObserver).unwrap_err();
            assert_eq!(err, PolicyError::MisnumberedParticipant { position: 0, id: PersonId(5) });
        }
        let err = walk(&LazyPolicy, &people, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, PolicyError::MisnumberedParticipant { .. }));
    }

    #[test]
    fn lazy_can_cost_one_more_than_always_down() {
        // Ana down at 1, Sam up at 2, Ana down at 3: lazy pays the initial
        // seat-up on top of every switch, 3 vs 2.
        let people = vec![male(0, "Sam", &[2.0], &[]), female(1, "Ana", &[1.0, 3.0])];
        let lazy = evaluate(PolicyKind::Lazy, &people, &mut NoopObserver).unwrap();
        let down = evaluate(PolicyKind::AlwaysDown, &people, &mut NoopObserver).unwrap();
        assert_eq!(lazy.total(), 3);
        assert_eq!(down.total(), 2);
        assert_eq!(lazy.total(), down.total() + 1);
    }

    #[test]
    fn lazy_household() {
        // 1 Sam up (0), 2 Bob up (0), 3 Sam down (1), 4 Ana down (0), 5 Sam up (1)
        let people = household();
        let tally = evaluate(PolicyKind::Lazy, &people, &mut NoopObserver).unwrap();
        assert_eq!(tally, ToggleTally::from_counts(vec![2, 0, 0]));
    }

    #[test]
    fn always_down_household() {
        let people = household();
        let tally = evaluate(PolicyKind::AlwaysDown, &people, &mut NoopObserver).unwrap();
        assert_eq!(tally, ToggleTally::from_counts(vec![4, 2, 0]));
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn always_down_walk_matches_closed_form() {
        let people = household();
        let walked = walk(&AlwaysDownPolicy, &people, &mut NoopObserver).unwrap();
        assert_eq!(walked, AlwaysDownPolicy::closed_form(&people));
    }

    #[test]
    fn simultaneous_up_and_down_serves_down_first() {
        // Ana flips the seat down at 2 h, then Sam flips it back up.
        let people = vec![male(0, "Sam", &[2.0], &[]), female(1, "Ana", &[2.0])];
        let tally = evaluate(PolicyKind::Lazy, &people, &mut NoopObserver).unwrap();
        assert_eq!(tally, ToggleTally::from_counts(vec![1, 1]));
    }

    #[test]
    fn no_participants_no_toggles() {
        let tally = evaluate(PolicyKind::Lazy, &[], &mut NoopObserver).unwrap();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn repeated_evaluations_are_independent() {
        let people = household();
        let first = evaluate(PolicyKind::Lazy, &people, &mut NoopObserver).unwrap();
        let _ = evaluate(PolicyKind::AlwaysDown, &people, &mut NoopObserver).unwrap();
        let second = evaluate(PolicyKind::Lazy, &people, &mut NoopObserver).unwrap();
        assert_eq!(first, second);
    }

    /// Records every event it sees.
    #[derive(Default)]
    struct Recorder {
        started: Vec<PolicyKind>,
        events:  Vec<(String, UsageEvent)>,
        ended:   Option<ToggleTally>,
    }

    impl UsageObserver for Recorder {
        fn on_policy_start(&mut self, policy: PolicyKind) -> ControlFlow<()> {
            self.started.push(policy);
            ControlFlow::Continue(())
        }

        fn on_usage(&mut self, participant: &Participant, event: &UsageEvent) -> ControlFlow<()> {
            self.events.push((participant.name().to_string(), *event));
            ControlFlow::Continue(())
        }

        fn on_policy_end(&mut self, _policy: PolicyKind, tally: &ToggleTally) {
            self.ended = Some(tally.clone());
        }
    }

    #[test]
    fn observer_sees_every_visit_in_order() {
        let people = household();
        let mut rec = Recorder::default();
        let tally = evaluate(PolicyKind::Lazy, &people, &mut rec).unwrap();

        assert_eq!(rec.started, vec![PolicyKind::Lazy]);
        let names: Vec<&str> = rec.events.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Sam", "Bob", "Sam", "Ana", "Sam"]);

        let times: Vec<f64> = rec.events.iter().map(|(_, e)| e.time.get()).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        let (_, third) = &rec.events[2];
        assert_eq!(third.seat_before, SeatPosition::Up);
        assert_eq!(third.seat_after, SeatPosition::Down);
        assert_eq!(third.toggles, 1);

        assert_eq!(rec.events.last().unwrap().1.total_toggles, tally.total());
        assert_eq!(rec.ended, Some(tally));
    }

    #[test]
    fn always_down_events_leave_seat_down() {
        let people = household();
        let mut rec = Recorder::default();
        evaluate(PolicyKind::AlwaysDown, &people, &mut rec).unwrap();
        assert!(rec.events.iter().all(|(_, e)| e.seat_after == SeatPosition::Down));
        assert!(rec.events.iter().all(|(_, e)| e.seat_before == SeatPosition::Down));
    }

    /// Breaks after `limit` visits.
    struct StopAfter {
        limit: usize,
        seen:  usize,
    }

    impl UsageObserver for StopAfter {
        fn on_usage(&mut self, _p: &Participant, _e: &UsageEvent) -> ControlFlow<()> {
            self.seen += 1;
            if self.seen >= self.limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
    }

    #[test]
    fn observer_break_interrupts_without_partial_result() {
        let people = household();
        let mut obs = StopAfter { limit: 2, seen: 0 };
        let err = evaluate(PolicyKind::AlwaysDown, &people, &mut obs).unwrap_err();
        assert_eq!(err, PolicyError::Interrupted { policy: PolicyKind::AlwaysDown });
        assert_eq!(obs.seen, 2);
    }
}
