//! Chronological merge over all participants' streams.
//!
//! Each query is a linear scan in registration order: O(participants).  With
//! a handful of people sharing one seat that beats maintaining a heap, and
//! the scan order gives a reproducible tie-break for free.

use seat_core::{Hours, PersonId};
use seat_schedule::{Participant, SeatPosition};

use crate::CursorState;

/// The next event to serve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MergedEvent {
    pub time:   Hours,
    pub person: PersonId,
    pub needs:  SeatPosition,
}

/// Earliest unread event in the `needs` stream across `participants`.
///
/// `cursors[i]` is participant `i`'s read position into that stream.
/// Returns `None` once every participant has exhausted it.  On exactly equal
/// times the participant registered first wins.
pub fn earliest_event(
    participants: &[Participant],
    cursors:      &[usize],
    needs:        SeatPosition,
) -> Option<(Hours, PersonId)> {
    let mut best: Option<(Hours, PersonId)> = None;
    for (participant, &cursor) in participants.iter().zip(cursors) {
        let Some(&time) = participant.times(needs).get(cursor) else {
            continue;
        };
        if best.is_none_or(|(best_time, _)| time < best_time) {
            best = Some((time, participant.id()));
        }
    }
    best
}

/// The next event of either kind.
///
/// A seat-up event is served first only when strictly earlier than the
/// earliest seat-down event; equal times go to the seat-down event.
pub fn next_event(participants: &[Participant], state: &CursorState) -> Option<MergedEvent> {
    let up = earliest_event(participants, state.positions(SeatPosition::Up), SeatPosition::Up);
    let down = earliest_event(participants, state.positions(SeatPosition::Down), SeatPosition::Down);

    let (time, person, needs) = match (up, down) {
        (None, None) => return None,
        (Some((up_time, up_person)), Some((down_time, _))) if up_time < down_time => {
            (up_time, up_person, SeatPosition::Up)
        }
        (Some((up_time, up_person)), None) => (up_time, up_person, SeatPosition::Up),
        (_, Some((down_time, down_person))) => (down_time, down_person, SeatPosition::Down),
    };
    Some(MergedEvent { time, person, needs })
}
