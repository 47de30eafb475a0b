//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;
use tracing::{debug, info};

use super::state::{AlbumView, Message};

mod scroll;
mod window;

pub(crate) fn update(state: &mut AlbumView, message: Message) -> Task<Message> {
    match message {
        // Scroll
        Message::Scrolled { offset_y } => scroll::scrolled(state, offset_y),
        Message::WheelScrolled { delta_y, captured } => {
            scroll::wheel_scrolled(state, delta_y, captured)
        }

        // Window
        Message::WindowResized { width, height } => window::resized(state, width, height),
        Message::Frame(now) => window::frame(state, now),

        // Buttons
        Message::BackPressed => {
            info!("Back pressed");
            Task::none()
        }
        Message::TrackMenuPressed(id) => {
            let name = state.album.track(id).map(|t| t.name.as_str());
            debug!(track = ?id, ?name, "Track menu pressed");
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::gui::state::max_pull_for;

    /// 1000px tall window -> 450px image.
    fn state() -> AlbumView {
        let config = AppConfig {
            window_height: 1000.0,
            ..AppConfig::default()
        };
        AlbumView::new(&config)
    }

    /// A wheel step the scrollable did not take.
    fn wheel(s: &mut AlbumView, delta_y: f32) {
        let _ = update(
            s,
            Message::WheelScrolled {
                delta_y,
                captured: false,
            },
        );
    }

    #[test]
    fn scrolling_moves_offset_negative() {
        let mut s = state();
        let _ = update(&mut s, Message::Scrolled { offset_y: 120.0 });
        assert_eq!(s.scroll_y, 120.0);
        assert_eq!(s.offset_y(), -120.0);
        assert!(!s.parallax().compact_title_visible);
    }

    #[test]
    fn compact_title_targets_visible_past_threshold() {
        let mut s = state();
        // 0.75 * 450 = 337.5
        let _ = update(&mut s, Message::Scrolled { offset_y: 340.0 });
        assert!(s.parallax().compact_title_visible);
        assert!(s.compact_title.value());

        let _ = update(&mut s, Message::Scrolled { offset_y: 10.0 });
        assert!(!s.compact_title.value());
    }

    #[test]
    fn header_turns_opaque_after_full_progress() {
        let mut s = state();
        // 450 * 0.8 = 360
        let _ = update(&mut s, Message::Scrolled { offset_y: 359.0 });
        assert_eq!(s.parallax().header_opacity, 0.0);
        let _ = update(&mut s, Message::Scrolled { offset_y: 361.0 });
        assert_eq!(s.parallax().header_opacity, 1.0);
    }

    #[test]
    fn wheel_at_top_pulls_down() {
        let mut s = state();
        wheel(&mut s, 30.0);
        assert_eq!(s.overscroll.pull(), 30.0);
        assert_eq!(s.offset_y(), 30.0);

        let p = s.parallax();
        assert_eq!(p.denominator, 0.5);
        assert!((p.artwork_height() - 480.0).abs() < 1e-3);
        assert!(s.is_animating());
    }

    #[test]
    fn wheel_mid_list_does_not_pull() {
        let mut s = state();
        let _ = update(&mut s, Message::Scrolled { offset_y: 200.0 });
        wheel(&mut s, 30.0);
        assert_eq!(s.overscroll.pull(), 0.0);
        assert_eq!(s.offset_y(), -200.0);
    }

    #[test]
    fn wheel_down_releases_pull() {
        let mut s = state();
        wheel(&mut s, 30.0);
        wheel(&mut s, -30.0);
        assert_eq!(s.overscroll.pull(), 0.0);
    }

    #[test]
    fn captured_wheel_down_moves_content_by_exactly_the_wheel() {
        let mut s = state();
        wheel(&mut s, 30.0);
        let start = s.offset_y();

        // One 60px wheel-down: the scrollable moves and reports it, and the
        // same event reaches the reducer as captured.
        let _ = update(
            &mut s,
            Message::WheelScrolled {
                delta_y: -60.0,
                captured: true,
            },
        );
        let _ = update(&mut s, Message::Scrolled { offset_y: 60.0 });

        assert_eq!(start - s.offset_y(), 60.0);
        assert_eq!(s.overscroll.pull(), 30.0);
    }

    #[test]
    fn frames_relax_the_pull() {
        let mut s = state();
        wheel(&mut s, 80.0);
        let mut now = s.now;
        for _ in 0..200 {
            now += std::time::Duration::from_millis(16);
            let _ = update(&mut s, Message::Frame(now));
        }
        assert_eq!(s.overscroll.pull(), 0.0);
        assert_eq!(s.offset_y(), 0.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn resize_rebuilds_layout() {
        let mut s = state();
        let _ = update(
            &mut s,
            Message::WindowResized {
                width: 400.0,
                height: 800.0,
            },
        );
        assert!((s.layout.image_height() - 360.0).abs() < 1e-3);
        assert_eq!(s.overscroll.max_pull(), max_pull_for(&s.layout));
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut s = state();
        let before = s.layout;
        let _ = update(
            &mut s,
            Message::WindowResized {
                width: 400.0,
                height: 0.0,
            },
        );
        assert_eq!(s.layout, before);
    }

    #[test]
    fn button_messages_leave_state_alone() {
        let mut s = state();
        let first = s.album.tracks[0].id;
        let _ = update(&mut s, Message::BackPressed);
        let _ = update(&mut s, Message::TrackMenuPressed(first));
        assert_eq!(s.offset_y(), 0.0);
        assert_eq!(s.album.tracks.len(), 11);
    }
}
