//! Header bar: back button, sliding compact title, binary background.

use iced::alignment::Horizontal;
use iced::widget::{button, container, row, stack, text};
use iced::{Alignment, Color, Element, Length, Padding};

use super::super::state::{AlbumView, Message};
use super::constants::{
    BACK_ICON_TEXT, HEADER_BOTTOM_PAD, HEADER_HPAD, HEADER_TITLE_H, HEADER_TITLE_SLIDE,
    HEADER_TOP_GAP,
};
use super::widgets::{SEMIBOLD, fill, with_alpha};
use crate::core::parallax::ParallaxState;

pub(crate) fn build_header<'a>(state: &'a AlbumView, p: &ParallaxState) -> Element<'a, Message> {
    // 0 = hidden below the bar, 1 = in place.
    let shown: f32 = state.compact_title.interpolate(0.0, 1.0, state.now);

    let back = button(text("‹").size(BACK_ICON_TEXT).color(Color::WHITE))
        .padding(0)
        .style(button::text)
        .on_press(Message::BackPressed);

    let controls = row![back]
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_TITLE_H));

    let compact_title = container(
        text(state.album.artist.as_str())
            .font(SEMIBOLD)
            .color(with_alpha(Color::WHITE, shown)),
    )
    .padding(Padding {
        top: (1.0 - shown) * HEADER_TITLE_SLIDE,
        ..Padding::ZERO
    })
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_TITLE_H))
    .align_x(Horizontal::Center)
    .clip(true);

    let opacity = p.header_opacity;
    container(stack![controls, compact_title])
        .width(Length::Fill)
        .padding(Padding {
            top: state.layout.safe_area_top() + HEADER_TOP_GAP,
            right: HEADER_HPAD,
            bottom: HEADER_BOTTOM_PAD,
            left: HEADER_HPAD,
        })
        .style(move |_theme| fill(with_alpha(Color::BLACK, opacity)))
        .into()
}
