//! Tagsanity Core
//!
//! Domain types, capability traits, and error handling shared by the
//! tagsanity crates.
//!
//! This crate defines:
//! - **Record Types**: `TrackInfo` and `AlbumInfo`, the two metadata record
//!   shapes the host framework hands us for cleanup
//! - **Capability Traits**: `TagRecord` (named field access over both record
//!   shapes), `Transliterate` and `TranslitProvider` (the pluggable
//!   romanization boundary)
//! - **Error Handling**: `SanityError` and the `Result` alias
//!
//! # Example
//!
//! ```rust
//! use tagsanity_core::types::{Lang, TrackInfo};
//! use tagsanity_core::traits::TagRecord;
//!
//! let mut track = TrackInfo::new();
//! track.set("title", "Some Song".to_string());
//! assert_eq!(track.get("title"), Some("Some Song"));
//! assert_eq!(Lang::Ja.as_str(), "ja");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SanityError};
pub use traits::{TagRecord, Transliterate, TranslitProvider};
pub use types::{AlbumInfo, Lang, NormalForm, TrackInfo};
