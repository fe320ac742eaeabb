//! Tagsanity
//!
//! Sanitizes and transliterates music-metadata text fields before the host
//! tagging framework persists them.
//!
//! # Features
//!
//! - Unicode punctuation and whitespace cleanup driven by general categories
//! - Romanization of East-Asian script text via a pluggable capability
//! - Featured-artist removal using the join phrase captured from raw
//!   pre-extraction data
//!
//! # Architecture
//!
//! - `config`: settings bundle with validated defaults
//! - `resolver`: language / script code resolution to a supported target
//! - `decoder`: per-release transliteration capability selection
//! - `sanitize`: the ordered text-cleanup pipeline
//! - `fields`: applying the pipeline across configured record fields
//! - `feats`: join-phrase capture and featured-artist truncation
//! - `plugin`: event handlers wiring it all together

pub mod config;
pub mod decoder;
pub mod feats;
pub mod fields;
pub mod plugin;
pub mod resolver;
pub mod sanitize;

pub use config::Config;
pub use feats::JoinPhraseTable;
pub use plugin::TagSanity;
pub use sanitize::sanitize;

/// Re-export of the shared error and result types
pub use tagsanity_core::{Result, SanityError};
