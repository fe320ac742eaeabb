//! Capability traits at the boundaries of the sanitization pipeline

use crate::types::Lang;

/// Named access to the string-valued tag fields of a metadata record.
///
/// Both record shapes (`TrackInfo` and `AlbumInfo`) implement this. The
/// field processor and the feature-phrase tracker depend only on this
/// trait, never on a concrete record type, so the same configured field
/// list can be applied to either shape. Fields a record does not have read
/// as `None` and are dropped on write.
pub trait TagRecord {
    /// Current value of `field`, if the record knows the field and it is set
    fn get(&self, field: &str) -> Option<&str>;

    /// Overwrite `field` with `value`. Writes to unknown fields are dropped.
    fn set(&mut self, field: &str, value: String);
}

/// Renders text written in one East-Asian script into latin script.
///
/// The capability is bound to a single target language at construction.
/// `render` is assumed total: it always returns, possibly with the input
/// unchanged, and has no side effects. This crate only cleans up whatever
/// the capability produces; it makes no claim of linguistic correctness.
pub trait Transliterate {
    /// Render `text` into latin script
    fn render(&self, text: &str) -> String;
}

/// Factory for transliteration capabilities.
///
/// One capability is constructed per release arrival, bound to the target
/// resolved from the release's language/script, and discarded once the
/// release has been processed. Capabilities are never cached or shared
/// across releases.
pub trait TranslitProvider {
    /// Construct a capability bound to `lang`
    fn create(&self, lang: Lang) -> Box<dyn Transliterate>;
}
