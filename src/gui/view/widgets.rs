//! Reusable small widgets/helpers used across view modules.

use iced::font::Weight;
use iced::widget::{column, container, text};
use iced::{Alignment, Background, Color, Font, Length};

use super::super::state::Message;
use super::constants::{GRAY, PLACEHOLDER_BOTTOM, PLACEHOLDER_TOP};

pub(crate) const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

pub(crate) const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub(crate) const HEAVY: Font = Font {
    weight: Weight::ExtraBold,
    ..Font::DEFAULT
};

pub(crate) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Flat background fill for a container.
pub(crate) fn fill(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// Empty block of fixed height.
pub(crate) fn spacer(height: f32) -> iced::widget::Container<'static, Message> {
    container(column![])
        .width(Length::Fill)
        .height(Length::Fixed(height.max(0.0)))
}

/// Stand-in for missing artwork: a dim two-tone wash with a note glyph.
pub(crate) fn cover_placeholder() -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(96).color(with_alpha(GRAY, 0.5))]
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(|_theme| {
        let wash = iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
            .add_stop(0.0, PLACEHOLDER_TOP)
            .add_stop(1.0, PLACEHOLDER_BOTTOM);
        container::Style {
            background: Some(Background::Gradient(iced::Gradient::Linear(wash))),
            ..container::Style::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(with_alpha(Color::BLACK, 1.5).a, 1.0);
        assert_eq!(with_alpha(Color::BLACK, -0.3).a, 0.0);
        assert_eq!(with_alpha(Color::WHITE, 0.4).r, 1.0);
    }
}
