//! Release-level metadata records

use super::TrackInfo;
use crate::traits::TagRecord;
use serde::{Deserialize, Serialize};

/// A release-level metadata record, with its tracks in release order.
///
/// Language and script are properties of the release, not of individual
/// recordings, which is why decoder resolution happens here and is applied
/// to every owned track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumInfo {
    /// Stable release identifier (e.g. a MusicBrainz release id)
    pub album_id: Option<String>,

    /// Release title
    pub album: Option<String>,

    /// Credited release artist, rendered to a single string
    pub artist: Option<String>,

    /// Release artist sort name
    pub artist_sort: Option<String>,

    /// Release artist credit as printed on the release
    pub artist_credit: Option<String>,

    /// ISO 639-3 language code of the release, when known
    pub language: Option<String>,

    /// ISO 15924 script code of the release, when known
    pub script: Option<String>,

    /// The release's tracks, in release order
    pub tracks: Vec<TrackInfo>,
}

impl AlbumInfo {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }
}

impl TagRecord for AlbumInfo {
    fn get(&self, field: &str) -> Option<&str> {
        let slot = match field {
            "album" => &self.album,
            "artist" => &self.artist,
            "artist_sort" => &self.artist_sort,
            "artist_credit" => &self.artist_credit,
            _ => return None,
        };
        slot.as_deref()
    }

    fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            "album" => &mut self.album,
            "artist" => &mut self.artist,
            "artist_sort" => &mut self.artist_sort,
            "artist_credit" => &mut self.artist_credit,
            _ => return,
        };
        *slot = Some(value);
    }
}
