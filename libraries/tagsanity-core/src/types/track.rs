//! Track-level metadata records

use crate::traits::TagRecord;
use serde::{Deserialize, Serialize};

/// A track-level metadata record.
///
/// Owned by the host tagging framework; the sanitizer is granted temporary
/// mutation rights on the string-valued tag fields below. Fields the host
/// never filled in stay `None` and are skipped during processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Stable recording identifier (e.g. a MusicBrainz recording id)
    pub track_id: Option<String>,

    /// Position within the release being imported. `Some` means the track
    /// arrived as part of an album and is handled on release arrival.
    pub index: Option<u32>,

    /// Track title
    pub title: Option<String>,

    /// Credited artist, rendered to a single string
    pub artist: Option<String>,

    /// Artist sort name
    pub artist_sort: Option<String>,

    /// Artist credit as printed on the release
    pub artist_credit: Option<String>,

    /// Arranger
    pub arranger: Option<String>,

    /// Composer
    pub composer: Option<String>,

    /// Composer sort name
    pub composer_sort: Option<String>,

    /// Title of the disc this track sits on
    pub disctitle: Option<String>,

    /// Lyricist
    pub lyricist: Option<String>,

    /// Work title
    pub work: Option<String>,

    /// Work disambiguation comment
    pub work_disambig: Option<String>,
}

impl TrackInfo {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }
}

impl TagRecord for TrackInfo {
    fn get(&self, field: &str) -> Option<&str> {
        let slot = match field {
            "title" => &self.title,
            "artist" => &self.artist,
            "artist_sort" => &self.artist_sort,
            "artist_credit" => &self.artist_credit,
            "arranger" => &self.arranger,
            "composer" => &self.composer,
            "composer_sort" => &self.composer_sort,
            "disctitle" => &self.disctitle,
            "lyricist" => &self.lyricist,
            "work" => &self.work,
            "work_disambig" => &self.work_disambig,
            _ => return None,
        };
        slot.as_deref()
    }

    fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            "title" => &mut self.title,
            "artist" => &mut self.artist,
            "artist_sort" => &mut self.artist_sort,
            "artist_credit" => &mut self.artist_credit,
            "arranger" => &mut self.arranger,
            "composer" => &mut self.composer,
            "composer_sort" => &mut self.composer_sort,
            "disctitle" => &mut self.disctitle,
            "lyricist" => &mut self.lyricist,
            "work" => &mut self.work,
            "work_disambig" => &mut self.work_disambig,
            _ => return,
        };
        *slot = Some(value);
    }
}
