//! The album screen on top of `iced`.
//!
//! `AlbumView` holds the one scroll offset everything hangs off; `view`
//! re-derives the header geometry from it on every redraw and stacks:
//! - the artwork, pinned to the window top and stretched by pull-down
//! - the scrollable track list, opening with a gap the artwork shows through
//! - the header bar, whose compact title and background react to progress
//!
//! Wheel/resize events and animation frames arrive via `subscription`.

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

pub(crate) use state::AlbumView;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
