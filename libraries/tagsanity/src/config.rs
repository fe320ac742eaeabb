//! Plugin configuration
//!
//! The typed fields double as the schema: unknown keys, unknown language
//! codes, and unknown normal forms are rejected during deserialization,
//! and missing keys fall back to the defaults below. The host loads and
//! merges raw configuration; this module only validates and types it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tagsanity_core::types::{Lang, NormalForm};
use tagsanity_core::Result;

/// Configuration for the sanitization pipeline.
///
/// Read once per processing pass; settings never change mid-pipeline for a
/// single text value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Targets transliteration is enabled for
    pub langs_enabled: Vec<Lang>,

    /// Clean up spacing artifacts the transliteration step introduces
    pub tidy_translit: bool,

    /// Track fields to drop featured-artist credits from
    pub drop_feats_from_fields: Vec<String>,

    /// Collapse runs of Unicode separators into a single ASCII space
    pub simplify_whitespace: bool,

    /// Replace Unicode dash punctuation with an ASCII hyphen-minus
    pub simplify_hyphens: bool,

    /// Replace curly and typographic quotes with ASCII quotes
    pub simplify_curly_quotes: bool,

    /// Replace open / close punctuation with the configured brackets
    pub simplify_brackets: bool,

    /// Replacement for open punctuation of all kinds
    pub left_bracket: String,

    /// Replacement for close punctuation of all kinds
    pub right_bracket: String,

    /// Normal form to render results into; `None` leaves composition as-is
    pub unicode_normalization: Option<NormalForm>,

    /// Fields to run the cleanup pipeline on, for both record shapes
    pub process_fields: Vec<String>,

    /// Language to assume for the ambiguous "Hani" script code
    pub han_preference: Lang,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            langs_enabled: Lang::ALL.to_vec(),
            tidy_translit: true,
            drop_feats_from_fields: string_list(&["artist", "artist_sort", "title"]),
            simplify_whitespace: true,
            simplify_hyphens: true,
            simplify_curly_quotes: true,
            simplify_brackets: true,
            left_bracket: "(".to_string(),
            right_bracket: ")".to_string(),
            // NFKC would also fold lookalikes, e.g. U+2160 -> "I"
            unicode_normalization: Some(NormalForm::Nfc),
            process_fields: string_list(&[
                "arranger",
                "artist_credit",
                "artist",
                "artist_sort",
                "composer",
                "composer_sort",
                "disctitle",
                "lyricist",
                "title",
                "work",
                "work_disambig",
            ]),
            han_preference: Lang::Zh,
        }
    }
}

impl Config {
    /// Deserialize and validate a raw configuration value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

fn string_list(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
