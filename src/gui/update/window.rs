//! gui/update/window.rs
//!
//! Viewport changes and per-frame animation.

use iced::Task;
use iced::time::Instant;
use tracing::{debug, warn};

use super::super::state::{AlbumView, Message, max_pull_for};
use super::scroll::{log_transitions, sync_compact_title};
use crate::core::parallax::LayoutConstants;

pub(crate) fn resized(state: &mut AlbumView, width: f32, height: f32) -> Task<Message> {
    let image_height = height * state.image_height_ratio;
    if !(image_height.is_finite() && image_height > 0.0) {
        warn!(width, height, "Ignoring degenerate window size");
        return Task::none();
    }

    state.layout = LayoutConstants::from_viewport(
        height,
        state.image_height_ratio,
        state.layout.safe_area_top(),
    );
    state.overscroll.set_max_pull(max_pull_for(&state.layout));

    debug!(
        width,
        height,
        image_height = state.layout.image_height(),
        "Viewport resized"
    );
    sync_compact_title(state);
    Task::none()
}

pub(crate) fn frame(state: &mut AlbumView, now: Instant) -> Task<Message> {
    state.now = now;

    if state.overscroll.is_animating() {
        let before = state.parallax();
        state.overscroll.tick();
        log_transitions(&before, &state.parallax());
    }

    Task::none()
}
