//! Frame identity and composition.

use seat_schedule::{PersonClass, SeatPosition};

use crate::art;
use crate::canvas::Canvas;

// ── Layout ────────────────────────────────────────────────────────────────────

pub const FRAME_WIDTH: usize = 60;
pub const FRAME_HEIGHT: usize = 18;

const SEAT_ROW: usize = 2;
const SEAT_COL: usize = 2;
const FIGURE_ROW: usize = 5;
const INSIDE_COL: usize = 26;
const ENTERING_COL: usize = 42;
const BANNER_ROW: usize = 12;

// ── Keys ──────────────────────────────────────────────────────────────────────

/// Where the visitor stands relative to the seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Presence {
    Away,
    Entering,
    Inside,
}

/// Lid position as drawn; `Halfway` only appears mid-toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lid {
    Down,
    Halfway,
    Up,
}

impl From<SeatPosition> for Lid {
    fn from(pos: SeatPosition) -> Self {
        match pos {
            SeatPosition::Up => Lid::Up,
            SeatPosition::Down => Lid::Down,
        }
    }
}

/// Everything that determines a frame's pixels; used as the cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameKey {
    pub name:     String,
    pub class:    PersonClass,
    pub presence: Presence,
    pub lid:      Lid,
}

// ── Composition ───────────────────────────────────────────────────────────────

/// Draw the frame described by `key`.
///
/// An `Away` frame shows only the seat; the visitor and their name banner are
/// drawn for `Entering` and `Inside`.
pub fn compose(key: &FrameKey) -> Canvas {
    let mut canvas = Canvas::blank(FRAME_WIDTH, FRAME_HEIGHT);

    let seat = match key.lid {
        Lid::Down => art::SEAT_DOWN,
        Lid::Halfway => art::SEAT_HALFWAY,
        Lid::Up => art::SEAT_UP,
    };
    canvas.stamp(seat, SEAT_ROW, SEAT_COL);

    let col = match key.presence {
        Presence::Away => return canvas,
        Presence::Entering => ENTERING_COL,
        Presence::Inside => INSIDE_COL,
    };
    let figure = match key.class {
        PersonClass::Male => art::MALE_FIGURE,
        PersonClass::Female => art::FEMALE_FIGURE,
    };
    canvas.stamp(figure, FIGURE_ROW, col);

    let rule = "=".repeat(key.name.chars().count());
    canvas.stamp(&rule, BANNER_ROW, col);
    canvas.stamp(&key.name, BANNER_ROW + 1, col);
    canvas.stamp(&rule, BANNER_ROW + 2, col);
    canvas
}
