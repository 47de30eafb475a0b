//! Track list (one row per track, album heading on top).

use iced::widget::{Column, Row, button, column, container, row, text};
use iced::{Alignment, Color, Length, Padding};

use super::super::state::{AlbumView, Message};
use super::super::util::{album_heading, track_row_labels};
use super::constants::{
    CAPTION_TEXT, GRAY, HEADING_TEXT, INDEX_TEXT, LIST_PAD, LIST_TOP_PAD, NAME_STACK_SPACING,
    ROW_INNER_SPACING, ROW_SPACING, ROW_TEXT,
};
use super::widgets::{HEAVY, SEMIBOLD, fill, spacer};
use crate::core::types::Track;

pub(crate) fn build_track_section(state: &AlbumView) -> iced::widget::Container<'_, Message> {
    let heading = text(album_heading(&state.album.title))
        .size(HEADING_TEXT)
        .font(HEAVY);

    let body = column![
        heading,
        container(build_track_list(state)).padding(LIST_PAD),
        // tail room so the header can collapse fully even on tall windows
        spacer(state.layout.image_height()),
    ]
    .align_x(Alignment::Center);

    container(body)
        .width(Length::Fill)
        .padding(Padding {
            top: LIST_TOP_PAD,
            ..Padding::ZERO
        })
        .style(|_theme| fill(Color::BLACK))
}

fn build_track_list(state: &AlbumView) -> Column<'_, Message> {
    let mut list = column![].spacing(ROW_SPACING);

    for (i, t) in state.album.tracks.iter().enumerate() {
        list = list.push(build_track_row(i, t));
    }

    list
}

fn build_track_row(i: usize, t: &Track) -> Row<'static, Message> {
    let labels = track_row_labels(i, t);

    let name_stack = column![
        text(labels.name)
            .size(ROW_TEXT)
            .font(SEMIBOLD)
            .color(Color::WHITE),
        text(labels.artist).size(CAPTION_TEXT).color(GRAY),
    ]
    .spacing(NAME_STACK_SPACING)
    .width(Length::Fill);

    let menu = button(text("⋯").size(ROW_TEXT).color(GRAY))
        .padding(0)
        .style(button::text)
        .on_press(Message::TrackMenuPressed(t.id));

    row![
        text(labels.index)
            .size(INDEX_TEXT)
            .font(SEMIBOLD)
            .color(GRAY),
        name_stack,
        text(labels.duration).size(CAPTION_TEXT).color(Color::WHITE),
        menu,
    ]
    .spacing(ROW_INNER_SPACING)
    .align_y(Alignment::Center)
}
