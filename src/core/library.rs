//! Static sample library.
//!
//! The album is built once at startup and never mutated afterwards.

use super::types::{Album, Track, TrackId};

pub const ALBUM_TITLE: &str = "Revival";
pub const ALBUM_ARTIST: &str = "Selena Gomez";

const REVIVAL_TRACKS: [(&str, &str); 11] = [
    ("Revival", "4:06"),
    ("Sober", "3:15"),
    ("Kill Em with Kindness", "3:37"),
    ("Same Old Love", "3:49"),
    ("Good for You", "3:41"),
    ("Hands to Myself", "3:21"),
    ("Camouflage", "4:09"),
    ("Me & Rhythm", "3:33"),
    ("Survivors", "3:42"),
    ("Rise", "2:47"),
    ("Body Heat", "3:28"),
];

impl Album {
    /// The album shown on the one and only screen.
    pub fn revival() -> Self {
        let tracks = REVIVAL_TRACKS
            .iter()
            .zip(1u32..)
            .map(|(&(name, duration), id)| Track {
                id: TrackId(id),
                name: name.to_string(),
                duration: duration.to_string(),
            })
            .collect();

        Self {
            title: ALBUM_TITLE.to_string(),
            artist: ALBUM_ARTIST.to_string(),
            tracks,
        }
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn revival_has_eleven_tracks_in_order() {
        let album = Album::revival();
        assert_eq!(album.tracks.len(), 11);
        assert_eq!(album.tracks[0].name, "Revival");
        assert_eq!(album.tracks[0].duration, "4:06");
        assert_eq!(album.tracks[6].name, "Camouflage");
        assert_eq!(album.tracks[10].name, "Body Heat");
        assert_eq!(album.tracks[10].duration, "3:28");
    }

    #[test]
    fn track_ids_are_unique() {
        let album = Album::revival();
        let ids: HashSet<TrackId> = album.tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), album.tracks.len());
    }

    #[test]
    fn lookup_by_id() {
        let album = Album::revival();
        let second = album.tracks[1].id;
        assert_eq!(album.track(second).map(|t| t.name.as_str()), Some("Sober"));
        assert!(album.track(TrackId(999)).is_none());
    }
}
