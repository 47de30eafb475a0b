//! gui/update/scroll.rs
//!
//! Scroll input: the real scrollable offset plus synthetic pull-down.

use iced::Task;
use iced::time::Instant;
use tracing::{debug, trace};

use super::super::state::{AlbumView, Message};
use crate::core::parallax::ParallaxState;

pub(crate) fn scrolled(state: &mut AlbumView, offset_y: f32) -> Task<Message> {
    if !offset_y.is_finite() {
        return Task::none();
    }

    let before = state.parallax();
    state.scroll_y = offset_y.max(0.0);
    let after = state.parallax();

    trace!(
        offset_y = after.offset_y,
        denominator = after.denominator,
        progress = after.progress,
        title_progress = after.title_progress,
        "Scrolled"
    );
    log_transitions(&before, &after);
    sync_compact_title(state);
    Task::none()
}

/// Wheel delta in pixels, positive when the wheel pulls content down.
///
/// Only feeds the pull while the list sits at its top edge. A wheel-down
/// drains an existing pull only when the scrollable did not take the step
/// itself; otherwise the content already moved and the pull just relaxes.
pub(crate) fn wheel_scrolled(
    state: &mut AlbumView,
    delta_y: f32,
    captured: bool,
) -> Task<Message> {
    if !delta_y.is_finite() || delta_y == 0.0 {
        return Task::none();
    }

    let pulling = state.overscroll.is_animating();
    if !state.at_top() || (delta_y < 0.0 && (captured || !pulling)) {
        return Task::none();
    }

    let before = state.parallax();
    state.overscroll.apply(delta_y);
    let after = state.parallax();

    trace!(
        pull = state.overscroll.pull(),
        max_pull = state.overscroll.max_pull(),
        "Overscroll"
    );
    log_transitions(&before, &after);
    sync_compact_title(state);
    Task::none()
}

/// Point the cross-fade at whatever the current offset says.
pub(super) fn sync_compact_title(state: &mut AlbumView) {
    let visible = state.parallax().compact_title_visible;
    if state.compact_title.value() != visible {
        // Frames only tick while animating, so the clock may be stale here.
        state.now = state.now.max(Instant::now());
        state.compact_title.go_mut(visible, state.now);
    }
}

pub(super) fn log_transitions(before: &ParallaxState, after: &ParallaxState) {
    if before.header_opacity != after.header_opacity {
        debug!(opacity = after.header_opacity, "Header background flipped");
    }
    if before.compact_title_visible != after.compact_title_visible {
        debug!(visible = after.compact_title_visible, "Compact title toggled");
    }
}
