//! View constants (layout/sizing/colour).

use iced::Color;

// header bar
pub(crate) const HEADER_TOP_GAP: f32 = 10.0;
pub(crate) const HEADER_HPAD: f32 = 16.0;
pub(crate) const HEADER_BOTTOM_PAD: f32 = 16.0;
pub(crate) const HEADER_TITLE_H: f32 = 28.0;
/// How far below its slot the compact title waits while hidden.
pub(crate) const HEADER_TITLE_SLIDE: f32 = 46.0;
pub(crate) const BACK_ICON_TEXT: f32 = 20.0;

// artwork title block
pub(crate) const ARTIST_TEXT: f32 = 45.0;
pub(crate) const ALBUM_CAPTION_TEXT: f32 = 12.0;
pub(crate) const TITLE_BLOCK_BOTTOM_PAD: f32 = 56.0;

// list
pub(crate) const LIST_TOP_PAD: f32 = 8.0;
pub(crate) const LIST_PAD: f32 = 16.0;
pub(crate) const ROW_SPACING: f32 = 24.0;
pub(crate) const ROW_INNER_SPACING: f32 = 24.0;
pub(crate) const NAME_STACK_SPACING: f32 = 6.0;
pub(crate) const HEADING_TEXT: f32 = 17.0;
pub(crate) const ROW_TEXT: f32 = 16.0;
pub(crate) const INDEX_TEXT: f32 = 15.0;
pub(crate) const CAPTION_TEXT: f32 = 12.0;

pub(crate) const GRAY: Color = Color::from_rgb(0.56, 0.56, 0.58);
pub(crate) const PLACEHOLDER_TOP: Color = Color::from_rgb(0.42, 0.27, 0.36);
pub(crate) const PLACEHOLDER_BOTTOM: Color = Color::from_rgb(0.12, 0.09, 0.14);
