//! The merge walk and the per-policy entry point.

use tracing::{debug, trace};

use seat_schedule::Participant;

use crate::{
    AlwaysDownPolicy, CursorState, LazyPolicy, PolicyError, PolicyKind, PolicyResult, SeatPolicy,
    ToggleTally, UsageEvent, UsageObserver, next_event,
};

/// Walk every participant's visits in chronological order under `policy`,
/// charging toggles to whoever makes them.
///
/// Builds a fresh [`CursorState`] on every call.  Terminates after exactly
/// `sum(event_count)` visits unless the observer breaks, in which case the
/// partial tally is dropped and [`PolicyError::Interrupted`] is returned.
///
/// Each participant's id must equal its position in `participants`;
/// otherwise [`PolicyError::MisnumberedParticipant`] is returned before any
/// visit is served.
pub fn walk<P: SeatPolicy, O: UsageObserver>(
    policy:       &P,
    participants: &[Participant],
    observer:     &mut O,
) -> PolicyResult<ToggleTally> {
    let kind = policy.kind();
    let interrupted = || PolicyError::Interrupted { policy: kind };

    if let Some((position, p)) =
        participants.iter().enumerate().find(|(i, p)| p.id().index() != *i)
    {
        return Err(PolicyError::MisnumberedParticipant { position, id: p.id() });
    }

    let mut state = CursorState::new(participants.len(), policy.initial_position());
    let mut tally = ToggleTally::zeroed(participants.len());
    let mut total = 0u64;

    if observer.on_policy_start(kind).is_break() {
        return Err(interrupted());
    }

    while let Some(next) = next_event(participants, &state) {
        let service = policy.serve(state.seat, next.needs);
        tally.charge(next.person, service.toggles);
        total += u64::from(service.toggles);

        let event = UsageEvent {
            policy:        kind,
            time:          next.time,
            person:        next.person,
            needs:         next.needs,
            seat_before:   state.seat,
            seat_after:    service.seat_after,
            toggles:       service.toggles,
            total_toggles: total,
        };
        trace!(
            policy = kind.selector(),
            time = next.time.get(),
            person = %next.person,
            needs = %next.needs,
            toggles = service.toggles,
            "visit served"
        );

        state.advance(next.person, next.needs);
        state.seat = service.seat_after;

        if observer.on_usage(&participants[next.person.index()], &event).is_break() {
            return Err(interrupted());
        }
    }

    observer.on_policy_end(kind, &tally);
    Ok(tally)
}

/// Evaluate one policy over `participants`.
///
/// For [`PolicyKind::AlwaysDown`] the walk still runs (observers get every
/// visit), but the returned tally is the closed form
/// `2 * len(needs_up)`, which the walk must reproduce exactly.
pub fn evaluate<O: UsageObserver>(
    kind:         PolicyKind,
    participants: &[Participant],
    observer:     &mut O,
) -> PolicyResult<ToggleTally> {
    let tally = match kind {
        PolicyKind::Lazy => walk(&LazyPolicy, participants, observer)?,
        PolicyKind::AlwaysDown => {
            let walked = walk(&AlwaysDownPolicy, participants, observer)?;
            let closed = AlwaysDownPolicy::closed_form(participants);
            debug_assert_eq!(walked, closed, "always-down walk disagrees with closed form");
            closed
        }
    };

    debug!(policy = kind.selector(), total = tally.total(), "policy evaluated");
    Ok(tally)
}
