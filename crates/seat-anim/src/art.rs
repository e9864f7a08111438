//! Embedded ASCII art.
//!
//! Each piece is stamped onto a [`Canvas`][crate::Canvas] at an offset;
//! spaces are transparent.  The leading newline of every literal is skipped
//! by [`Canvas::stamp`][crate::Canvas::stamp].

pub const SEAT_DOWN: &str = r"
  .-----------.
  |           |
  |           |
  '-----------'
    |       |
  __|_______|__
 (=============)
  \           /
   \         /
    \       /
     \_____/
      |   |
     _|___|_";

pub const SEAT_HALFWAY: &str = r"
  .-----------.
  |           |
  |           |
  '-----------'
    /=======/
  _/_______/__
 (             )
  \           /
   \         /
    \       /
     \_____/
      |   |
     _|___|_";

pub const SEAT_UP: &str = r"
  .-----------.
  |(=========)|
  ||         ||
  '(=========)'
    |       |
  __|_______|__
 (             )
  \           /
   \         /
    \       /
     \_____/
      |   |
     _|___|_";

pub const MALE_FIGURE: &str = r"
   _O_
  / | \
 /  |  \
    |
   / \
  /   \";

pub const FEMALE_FIGURE: &str = r"
   _O_
  / | \
 /  |  \
   /_\
   | |
   | |";
