//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! Three layers, back to front:
//! - artwork, pinned to the window top and stretched by pull-down
//! - the scrollable list, led by a transparent gap the artwork shows through
//! - the header bar

mod artwork;
mod constants;
mod header;
mod tracks;
mod widgets;

use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{column, scrollable, stack};
use iced::{Element, Length};

use super::state::{AlbumView, Message};

pub(crate) fn view(state: &AlbumView) -> Element<'_, Message> {
    let p = state.parallax();

    let gap = widgets::spacer(state.layout.base_artwork_height() + state.overscroll.pull());
    let content = column![gap, tracks::build_track_section(state)];

    let list = scrollable(content)
        .direction(Direction::Vertical(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(|viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
        })
        .width(Length::Fill)
        .height(Length::Fill);

    stack![
        artwork::build_artwork(state, &p),
        list,
        header::build_header(state, &p),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
