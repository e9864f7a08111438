//! Frame steps for one served visit.

use seat_policy::UsageEvent;

use crate::frame::{Lid, Presence};

/// The `(presence, lid)` steps that show `event` being served.
///
/// The visitor walks in, finds the seat as it was left, moves it (through
/// `Halfway`) if it is not where they need it, and walks out.  When the
/// policy leaves the seat somewhere other than where the visitor used it,
/// the visitor moves it once more before leaving.
///
/// ```text
/// seat_before == needs == seat_after:   E·b  I·b  I·b  I·b  E·b  A·b
/// seat_before != needs == seat_after:   E·b  I·b  I·½  I·n  E·n  A·n
/// needs != seat_after:                  E·b  I·b  I·?  I·n  I·½  I·a  E·a  A·a
/// ```
pub fn visit_frames(event: &UsageEvent) -> Vec<(Presence, Lid)> {
    let before = Lid::from(event.seat_before);
    let needed = Lid::from(event.needs);
    let after = Lid::from(event.seat_after);
    let moving = if event.seat_before == event.needs { needed } else { Lid::Halfway };

    let mut steps = vec![
        (Presence::Entering, before),
        (Presence::Inside, before),
        (Presence::Inside, moving),
        (Presence::Inside, needed),
    ];
    if event.seat_after != event.needs {
        steps.push((Presence::Inside, Lid::Halfway));
        steps.push((Presence::Inside, after));
    }
    steps.push((Presence::Entering, after));
    steps.push((Presence::Away, after));
    steps
}
