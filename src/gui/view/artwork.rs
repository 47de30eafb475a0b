//! Artwork layer: pinned image, darkening gradient, big title block.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, image, stack, text};
use iced::{Alignment, Background, Color, ContentFit, Element, Gradient, Length, Padding, Radians};

use super::super::state::{AlbumView, Message};
use super::constants::{ALBUM_CAPTION_TEXT, ARTIST_TEXT, GRAY, TITLE_BLOCK_BOTTOM_PAD};
use super::widgets::{BOLD, cover_placeholder, with_alpha};
use crate::core::parallax::{ParallaxState, gradient_stop_offsets};

pub(crate) fn build_artwork<'a>(state: &'a AlbumView, p: &ParallaxState) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match &state.artwork {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => cover_placeholder().into(),
    };

    let alphas = p.gradient_alphas();
    let shade = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(shade_background(alphas)),
            ..container::Style::default()
        });

    let a = p.title_opacity();
    let title_block = column![
        text(state.album.artist.as_str())
            .size(ARTIST_TEXT)
            .font(BOLD)
            .color(with_alpha(Color::WHITE, a)),
        text(state.album.title.as_str())
            .size(ALBUM_CAPTION_TEXT)
            .font(BOLD)
            .color(with_alpha(GRAY, a)),
    ]
    .align_x(Alignment::Center);

    // title_offset <= 0: lifting the block means more bottom padding
    let title_layer = container(title_block)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(Padding {
            bottom: TITLE_BLOCK_BOTTOM_PAD - p.title_offset(),
            ..Padding::ZERO
        });

    container(stack![picture, shade, title_layer])
        .width(Length::Fill)
        .height(Length::Fixed(p.artwork_height()))
        .clip(true)
        .into()
}

/// Top-to-bottom black gradient over the artwork.
fn shade_background(alphas: [f32; 6]) -> Background {
    // PI radians runs the gradient from the top edge to the bottom edge.
    let linear = gradient_stop_offsets().into_iter().zip(alphas).fold(
        iced::gradient::Linear::new(Radians(std::f32::consts::PI)),
        |g, (offset, alpha)| g.add_stop(offset, with_alpha(Color::BLACK, alpha)),
    );

    Background::Gradient(Gradient::Linear(linear))
}
