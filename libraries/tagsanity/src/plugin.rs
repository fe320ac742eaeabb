//! Event handlers and release orchestration

use crate::config::Config;
use crate::decoder;
use crate::feats::JoinPhraseTable;
use crate::fields;
use serde_json::Value;
use tagsanity_core::traits::TranslitProvider;
use tagsanity_core::types::{AlbumInfo, TrackInfo};

/// The sanitizer plugin: configuration, the transliteration provider, and
/// the join-phrase table, driven by three host events.
///
/// Events arrive one at a time and every handler runs to completion, so
/// the table needs no locking. Handlers never fail: conditions like an
/// unresolvable language or a missing capture degrade to doing less, not
/// to an error.
pub struct TagSanity<P> {
    config: Config,
    provider: P,
    join_phrases: JoinPhraseTable,
}

impl<P: TranslitProvider> TagSanity<P> {
    /// Create a plugin instance with its own empty join-phrase table
    pub fn new(config: Config, provider: P) -> Self {
        Self::with_join_phrases(config, provider, JoinPhraseTable::new())
    }

    /// Create a plugin instance around an existing table.
    ///
    /// The table is per-instance state rather than a process-wide global;
    /// injecting it keeps independent instances isolated and lets tests
    /// pre-seed captures.
    pub fn with_join_phrases(config: Config, provider: P, join_phrases: JoinPhraseTable) -> Self {
        Self {
            config,
            provider,
            join_phrases,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The captured join phrases still awaiting their track
    pub fn join_phrases(&self) -> &JoinPhraseTable {
        &self.join_phrases
    }

    /// Raw recording data arrived, before the host renders artist credits
    /// into a single string. This is the only moment the join phrase is
    /// visible, so it is captured here and consumed on release arrival.
    pub fn raw_recording_received(&mut self, data: &Value) {
        self.join_phrases.capture(data);
    }

    /// A track record arrived on its own.
    ///
    /// Tracks carrying a release index are handled wholesale when their
    /// release arrives. For the rest, language and script are unknowable
    /// at track granularity, so there is nothing useful to do here.
    pub fn track_received(&mut self, track: &TrackInfo) {
        if track.index.is_some() {
            return;
        }
        tracing::trace!("ignoring standalone track {:?}", track.track_id);
    }

    /// A release record and its tracks arrived.
    ///
    /// Resolves one decoder from the release's language and script, then
    /// scrubs and sanitizes every track in release order, then the release
    /// record itself. The track records reachable from the release are
    /// mutated directly: the information needed to pick a decoder only
    /// exists at release granularity.
    pub fn release_received(&mut self, album: &mut AlbumInfo) {
        let decoder = decoder::for_release(&self.provider, album, &self.config);
        let decoder = decoder.as_deref();

        tracing::debug!(
            "processing release {:?} with {} tracks",
            album.album_id,
            album.tracks.len()
        );

        for track in &mut album.tracks {
            if !self.config.drop_feats_from_fields.is_empty() {
                self.join_phrases
                    .scrub(track, &self.config.drop_feats_from_fields);
            }
            fields::process_record(track, decoder, &self.config);
        }

        fields::process_record(album, decoder, &self.config);
    }
}
