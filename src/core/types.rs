//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No scroll math (that lives in `parallax`)

/// Stable identity for a track row.
/// Index-free so list order can never leak into identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

/// One line in the album's track list.
///
/// `duration` is display text (`m:ss`), never parsed as time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub duration: String,
}

/// A fixed album: who made it, what it's called, what's on it.
#[derive(Debug, Clone)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub tracks: Vec<Track>,
}
