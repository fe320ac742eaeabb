//! Core error types for tagsanity

use thiserror::Error;

/// Result type alias using `SanityError`
pub type Result<T> = std::result::Result<T, SanityError>;

/// Core error type for tagsanity
///
/// The processing pipeline itself never fails: unresolvable codes, absent
/// fields, and missing captures are all modeled as silent no-ops. Errors
/// only arise at the configuration boundary, before any record is touched.
#[derive(Error, Debug)]
pub enum SanityError {
    /// A language code outside the supported target set
    #[error("unknown language code: {0}")]
    UnknownLang(String),

    /// A normalization mode outside the four standard normal forms
    #[error("unknown normalization form: {0}")]
    UnknownNormalForm(String),

    /// Configuration that fails schema validation
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
