//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use std::time::Duration;

use iced::Animation;
use iced::animation::Easing;
use iced::time::Instant;
use iced::widget::image;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::overscroll::Overscroll;
use crate::core::parallax::{LayoutConstants, OVERSCROLL_DENOMINATOR, ParallaxState};
use crate::core::types::{Album, TrackId};

/// Compact header title cross-fade.
pub(crate) const TITLE_FADE: Duration = Duration::from_millis(250);

/// `scroll_y` at or below this counts as "at the top" for pull-down.
pub(crate) const TOP_EDGE_PX: f32 = 0.5;

/// App state
pub(crate) struct AlbumView {
    pub album: Album,
    pub artwork: Option<image::Handle>,

    // Layout
    pub image_height_ratio: f32,
    pub layout: LayoutConstants,

    // Scroll
    /// Absolute offset reported by the scrollable (>= 0).
    pub scroll_y: f32,
    pub overscroll: Overscroll,

    // Animation
    pub compact_title: Animation<bool>,
    pub now: Instant,
}

impl AlbumView {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let layout = LayoutConstants::from_viewport(
            config.window_height,
            config.image_height_ratio,
            config.safe_area_top,
        );

        let artwork = match &config.artwork_path {
            Some(path) if path.is_file() => {
                info!(path = %path.display(), "Using artwork");
                Some(image::Handle::from_path(path))
            }
            Some(path) => {
                warn!(path = %path.display(), "Artwork not found; using placeholder");
                None
            }
            None => None,
        };

        Self {
            album: Album::revival(),
            artwork,

            image_height_ratio: config.image_height_ratio,
            layout,

            scroll_y: 0.0,
            overscroll: Overscroll::new(max_pull_for(&layout), config.overscroll_speed),

            compact_title: Animation::new(false)
                .easing(Easing::EaseInOut)
                .duration(TITLE_FADE),
            now: Instant::now(),
        }
    }

    /// Signed offset of the content top: pull-down minus scroll-up.
    pub(crate) fn offset_y(&self) -> f32 {
        self.overscroll.pull() - self.scroll_y
    }

    pub(crate) fn parallax(&self) -> ParallaxState {
        ParallaxState::compute(self.offset_y(), &self.layout)
    }

    pub(crate) fn at_top(&self) -> bool {
        self.scroll_y <= TOP_EDGE_PX
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.overscroll.is_animating() || self.compact_title.is_animating(self.now)
    }
}

/// Pull ceiling: the point where `progress` reaches 1 on the overscroll side.
pub(crate) fn max_pull_for(layout: &LayoutConstants) -> f32 {
    layout.image_height() * OVERSCROLL_DENOMINATOR
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Scroll
    Scrolled { offset_y: f32 },
    /// `captured`: the scrollable already moved by this wheel step.
    WheelScrolled { delta_y: f32, captured: bool },

    // Window
    WindowResized { width: f32, height: f32 },
    Frame(Instant),

    // Buttons
    BackPressed,
    TrackMenuPressed(TrackId),
}
