//! Applying the sanitizer across record fields

use crate::config::Config;
use crate::sanitize::sanitize;
use tagsanity_core::traits::{TagRecord, Transliterate};

/// Sanitize every configured field present on `record`.
///
/// Fields the record does not have, or that hold no value, are skipped
/// silently. A field is written back only when sanitizing actually changed
/// it, so host-side change tracking sees no spurious writes.
pub fn process_record(
    record: &mut dyn TagRecord,
    decoder: Option<&dyn Transliterate>,
    config: &Config,
) {
    for field in &config.process_fields {
        let Some(current) = record.get(field).map(str::to_owned) else {
            continue;
        };
        let clean = sanitize(&current, decoder, config);
        if clean != current {
            record.set(field, clean);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsanity_core::types::TrackInfo;

    /// Minimal record that counts writes, to observe the no-op-write rule.
    #[derive(Default)]
    struct Probe {
        title: Option<String>,
        writes: usize,
    }

    impl TagRecord for Probe {
        fn get(&self, field: &str) -> Option<&str> {
            match field {
                "title" => self.title.as_deref(),
                _ => None,
            }
        }

        fn set(&mut self, field: &str, value: String) {
            if field == "title" {
                self.title = Some(value);
                self.writes += 1;
            }
        }
    }

    fn hyphens_only(fields: &[&str]) -> Config {
        Config {
            simplify_whitespace: false,
            simplify_curly_quotes: false,
            simplify_brackets: false,
            unicode_normalization: None,
            simplify_hyphens: true,
            process_fields: fields.iter().map(ToString::to_string).collect(),
            ..Config::default()
        }
    }

    #[test]
    fn test_configured_field_is_rewritten() {
        let mut track = TrackInfo {
            title: Some("\u{2E1A}".to_string()),
            ..TrackInfo::new()
        };
        process_record(&mut track, None, &hyphens_only(&["title"]));
        assert_eq!(track.title.as_deref(), Some("-"));
    }

    #[test]
    fn test_unconfigured_field_is_left_alone() {
        let mut track = TrackInfo {
            title: Some("\u{2E1A}".to_string()),
            ..TrackInfo::new()
        };
        process_record(&mut track, None, &hyphens_only(&["composer"]));
        assert_eq!(track.title.as_deref(), Some("\u{2E1A}"));
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        // "album" does not exist on tracks, "work" exists but is unset
        let mut track = TrackInfo::new();
        process_record(&mut track, None, &hyphens_only(&["album", "work"]));
        assert_eq!(track, TrackInfo::new());
    }

    #[test]
    fn test_unchanged_value_is_not_written_back() {
        let mut probe = Probe {
            title: Some("already clean".to_string()),
            ..Probe::default()
        };
        process_record(&mut probe, None, &hyphens_only(&["title"]));
        assert_eq!(probe.writes, 0);

        probe.title = Some("not\u{2014}clean".to_string());
        process_record(&mut probe, None, &hyphens_only(&["title"]));
        assert_eq!(probe.writes, 1);
        assert_eq!(probe.title.as_deref(), Some("not-clean"));
    }
}
