//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use crate::core::library::ALBUM_ARTIST;
use crate::core::types::Track;

/// Text cells for one track row, in on-screen order (menu glyph excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackRowLabels {
    pub index: String,
    pub name: String,
    pub artist: String,
    pub duration: String,
}

/// `index` is 0-based; the label is 1-based.
pub(crate) fn track_row_labels(index: usize, track: &Track) -> TrackRowLabels {
    TrackRowLabels {
        index: (index + 1).to_string(),
        name: track.name.clone(),
        artist: ALBUM_ARTIST.to_string(),
        duration: track.duration.clone(),
    }
}

/// Heading above the list. Ex: 'Revival' -> 'Revival Album'
pub(crate) fn album_heading(title: &str) -> String {
    format!("{title} Album")
}
