//! Private walk state of one policy evaluation.

use seat_core::PersonId;
use seat_schedule::SeatPosition;

/// Read positions into every participant's two streams, plus where the seat
/// currently is.
///
/// Indices only ever increase.  Built fresh by each evaluation and dropped
/// when it returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorState {
    up:       Vec<usize>,
    down:     Vec<usize>,
    pub seat: SeatPosition,
}

impl CursorState {
    pub fn new(participants: usize, seat: SeatPosition) -> Self {
        Self {
            up:   vec![0; participants],
            down: vec![0; participants],
            seat,
        }
    }

    /// Per-participant read positions into the stream that needs `position`.
    #[inline]
    pub fn positions(&self, position: SeatPosition) -> &[usize] {
        match position {
            SeatPosition::Up   => &self.up,
            SeatPosition::Down => &self.down,
        }
    }

    /// Mark `person`'s next `position` event as consumed.
    #[inline]
    pub fn advance(&mut self, person: PersonId, position: SeatPosition) {
        match position {
            SeatPosition::Up   => self.up[person.index()] += 1,
            SeatPosition::Down => self.down[person.index()] += 1,
        }
    }
}
