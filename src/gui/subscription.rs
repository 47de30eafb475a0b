//! gui/subscription.rs
//! Window + wheel events always; animation frames only while something moves.

use iced::event::{self, Event};
use iced::mouse;
use iced::{Subscription, window};

use super::state::{AlbumView, Message};

/// Pixels per wheel "line", matching iced's scrollable.
const LINE_PX: f32 = 60.0;

pub(crate) fn subscription(state: &AlbumView) -> Subscription<Message> {
    let events = event::listen_with(runtime_event_to_message);

    if state.is_animating() {
        Subscription::batch([events, window::frames().map(Message::Frame)])
    } else {
        events
    }
}

// Wheel events are taken even when the scrollable captured them: at the top
// edge it has nothing left to scroll and the pull takes over. The capture
// flag travels along so a wheel-down is never applied twice.
fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => Some(Message::WheelScrolled {
            delta_y: wheel_delta_px(delta),
            captured: status == event::Status::Captured,
        }),
        _ => None,
    }
}

/// Vertical wheel movement in pixels; positive pulls content down.
pub(crate) fn wheel_delta_px(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y * LINE_PX,
        mouse::ScrollDelta::Pixels { y, .. } => y,
    }
}
