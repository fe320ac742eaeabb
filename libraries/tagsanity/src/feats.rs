//! Featured-artist join-phrase capture and removal
//!
//! The raw pre-extraction payload still carries the artist-credit sequence
//! with its literal join phrase (" feat. ", " & ", ...). By the time the
//! structured track record exists, the credits have been rendered into a
//! single string and the phrase is gone. This table bridges the two
//! events, keyed by the recording identifier both of them carry.

use serde_json::Value;
use std::collections::HashMap;
use tagsanity_core::traits::TagRecord;
use tagsanity_core::types::TrackInfo;

/// Join phrases captured from raw recording data, keyed by recording id.
///
/// One table belongs to one plugin instance. Entries for recordings whose
/// track never arrives stay in the table; `len` is exposed so a host can
/// watch growth if it cares.
#[derive(Debug, Default)]
pub struct JoinPhraseTable {
    phrases: HashMap<String, String>,
}

impl JoinPhraseTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of captured phrases still awaiting their track
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether no phrases are waiting
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Remember the join phrase from one recording's raw payload.
    ///
    /// The phrase is the first plain string element of the `artist-credit`
    /// array; structured credit entries are objects and are skipped. A
    /// payload with no id, no credit array, or no string element is left
    /// alone. A second capture for the same recording overwrites the
    /// first, since re-extraction implies re-import.
    pub fn capture(&mut self, data: &Value) {
        let Some(id) = data.get("id").and_then(Value::as_str) else {
            return;
        };
        let Some(phrase) = data
            .get("artist-credit")
            .and_then(Value::as_array)
            .and_then(|credits| credits.iter().find_map(Value::as_str))
        else {
            return;
        };
        if phrase.is_empty() {
            return;
        }

        tracing::debug!("captured join phrase {:?} for recording {}", phrase, id);
        self.phrases.insert(id.to_string(), phrase.to_string());
    }

    /// Truncate each of the given fields of `track` at the first occurrence
    /// of the captured join phrase, consuming the capture.
    ///
    /// The entry is popped before any field is touched, so a second call
    /// for the same recording is a no-op. Tracks that never went through
    /// `capture` (standalone single-track imports, for instance) are
    /// skipped silently, and a field the phrase does not occur in keeps
    /// its exact value.
    pub fn scrub(&mut self, track: &mut TrackInfo, fields: &[String]) {
        let Some(phrase) = track
            .track_id
            .as_deref()
            .and_then(|id| self.phrases.remove(id))
        else {
            return;
        };

        for field in fields {
            let Some(value) = track.get(field) else {
                continue;
            };
            if let Some(at) = value.find(&phrase) {
                let kept = value[..at].to_string();
                track.set(field, kept);
            }
        }
    }
}
