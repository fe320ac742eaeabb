//! The ordered text-cleanup pipeline
//!
//! Stages run in a fixed order because their effects interact: bracket
//! simplification has to happen before the transliteration tidy-up sees
//! the text, and normal-form rendering applies to the pipeline's output,
//! not its input. Each stage is an independently toggleable pure
//! transform over the previous stage's output; with every stage disabled
//! the pipeline is exactly `str::trim`.

use crate::config::Config;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;
use tagsanity_core::traits::Transliterate;
use tagsanity_core::types::NormalForm;
use unicode_normalization::UnicodeNormalization;

// Unicode general-category classes drive the substitutions, so newly
// assigned code points are covered without a table update.
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Z}+").unwrap());

static DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Pd}").unwrap());

static SINGLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{60}\x{B4}\x{2018}\x{2019}]").unwrap());

static DOUBLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{201C}\x{201D}]").unwrap());

static PAIRED_QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{Pi}\p{Pf}]").unwrap());

static OPENER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Ps}").unwrap());

static CLOSER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Pe}").unwrap());

static CASE_SEAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").unwrap());

static PUNCT_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{L})\s+([\p{Pe}\p{Pf}\p{Po}])|([\p{Ps}\p{Pi}])\s+(\p{L})").unwrap()
});

static OTHER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{C}").unwrap());

/// One toggleable transform in the pipeline.
enum Stage<'a> {
    Whitespace,
    Hyphens,
    Quotes,
    Brackets { left: &'a str, right: &'a str },
    Transliterate(&'a dyn Transliterate),
    Tidy,
    Normalize(NormalForm),
}

impl Stage<'_> {
    fn apply(&self, text: &str) -> String {
        match self {
            // every maximal run of separators becomes a single ASCII space
            Stage::Whitespace => SEPARATOR_RUN.replace_all(text, " ").into_owned(),
            // any dash punctuation becomes a plain hyphen-minus
            Stage::Hyphens => DASH.replace_all(text, "-").into_owned(),
            Stage::Quotes => {
                let text = SINGLE_QUOTE.replace_all(text, "'");
                let text = DOUBLE_QUOTE.replace_all(&text, "\"");
                // guillemets and any other paired quotes read as plain double quotes
                PAIRED_QUOTE.replace_all(&text, "\"").into_owned()
            }
            Stage::Brackets { left, right } => {
                let text = OPENER.replace_all(text, NoExpand(left));
                CLOSER.replace_all(&text, NoExpand(right)).into_owned()
            }
            Stage::Transliterate(decoder) => decoder.render(text),
            Stage::Tidy => {
                // concatenated syllables: "naShaku" -> "na Shaku"
                let text = CASE_SEAM.replace_all(text, "$1 $2");
                // spurious spacing around punctuation: "(Kyou )" -> "(Kyou)"
                PUNCT_GAP
                    .replace_all(&text, "${1}${3}${2}${4}")
                    .into_owned()
            }
            Stage::Normalize(form) => {
                let text: String = match form {
                    NormalForm::Nfc => text.nfc().collect(),
                    NormalForm::Nfkc => text.nfkc().collect(),
                    NormalForm::Nfd => text.nfd().collect(),
                    NormalForm::Nfkd => text.nfkd().collect(),
                };
                // control codes, unprintables, broken unicode
                OTHER.replace_all(&text, "").into_owned()
            }
        }
    }
}

/// The stages enabled by `config`, in their contractual order: whitespace,
/// hyphens, quotes, brackets, transliteration, tidy, normalize. The
/// tidy-up only ever follows a transliteration stage, since the artifacts
/// it removes are introduced there.
fn stages<'a>(decoder: Option<&'a dyn Transliterate>, config: &'a Config) -> Vec<Stage<'a>> {
    let mut stages = Vec::new();

    if config.simplify_whitespace {
        stages.push(Stage::Whitespace);
    }
    if config.simplify_hyphens {
        stages.push(Stage::Hyphens);
    }
    if config.simplify_curly_quotes {
        stages.push(Stage::Quotes);
    }
    if config.simplify_brackets {
        stages.push(Stage::Brackets {
            left: config.left_bracket.as_str(),
            right: config.right_bracket.as_str(),
        });
    }
    if let Some(decoder) = decoder {
        stages.push(Stage::Transliterate(decoder));
        if config.tidy_translit {
            stages.push(Stage::Tidy);
        }
    }
    if let Some(form) = config.unicode_normalization {
        stages.push(Stage::Normalize(form));
    }

    stages
}

/// Run the configured pipeline over one text value.
///
/// Pure: the same text, capability, and settings always produce the same
/// output. The result is trimmed unconditionally, even when every stage
/// is disabled.
pub fn sanitize(text: &str, decoder: Option<&dyn Transliterate>, config: &Config) -> String {
    let mut text = text.to_string();
    for stage in stages(decoder, config) {
        text = stage.apply(&text);
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Transliterate for Identity {
        fn render(&self, text: &str) -> String {
            text.to_string()
        }
    }

    fn bare() -> Config {
        Config {
            langs_enabled: vec![],
            tidy_translit: false,
            simplify_whitespace: false,
            simplify_hyphens: false,
            simplify_curly_quotes: false,
            simplify_brackets: false,
            unicode_normalization: None,
            ..Config::default()
        }
    }

    // one representative per cleanup category, none of them ASCII
    const SOUP: &str = "\u{AB}\u{201C}\u{201D}\u{BB}\u{2018}\u{2019}\u{1680}\u{2E1A}\u{FF08}\u{FF09}";

    #[test]
    fn test_everything_disabled_is_exactly_trim() {
        let text = format!("{SOUP}\u{660E}\u{61}\u{315}\u{300}\u{5AE}\u{300}\u{62}");
        assert_eq!(sanitize(&text, None, &bare()), text);
        assert_eq!(sanitize(" hi ", None, &bare()), "hi");
    }

    #[test]
    fn test_whitespace_collapse() {
        let config = Config {
            simplify_whitespace: true,
            ..bare()
        };
        assert_eq!(sanitize("a\u{1680}b", None, &config), "a b");
        assert_eq!(sanitize("a \u{2009}\u{200A} b", None, &config), "a b");
    }

    #[test]
    fn test_hyphen_normalization() {
        let config = Config {
            simplify_hyphens: true,
            ..bare()
        };
        assert_eq!(sanitize("a\u{2E1A}b\u{2014}c", None, &config), "a-b-c");
    }

    #[test]
    fn test_quote_normalization() {
        let config = Config {
            simplify_curly_quotes: true,
            ..bare()
        };
        assert_eq!(
            sanitize("\u{2018}a\u{2019} \u{60}b\u{B4}", None, &config),
            "'a' 'b'"
        );
        assert_eq!(
            sanitize("\u{201C}a\u{201D} \u{AB}b\u{BB}", None, &config),
            "\"a\" \"b\""
        );
    }

    #[test]
    fn test_bracket_normalization_defaults() {
        let config = Config {
            simplify_brackets: true,
            ..bare()
        };
        assert_eq!(sanitize("\u{FF08}foo\u{FF09}", None, &config), "(foo)");
    }

    #[test]
    fn test_bracket_normalization_configured_replacements() {
        let config = Config {
            simplify_brackets: true,
            left_bracket: ">".to_string(),
            right_bracket: "<".to_string(),
            ..bare()
        };
        assert_eq!(sanitize("\u{FF08}foo\u{FF09}", None, &config), ">foo<");
    }

    #[test]
    fn test_tidy_splits_concatenated_syllables_and_tightens_punctuation() {
        let raw = "Kyou Mei (Kuu Kyo naShaku )";

        let untidy = bare();
        assert_eq!(sanitize(raw, Some(&Identity), &untidy), raw);

        let tidy = Config {
            tidy_translit: true,
            ..bare()
        };
        assert_eq!(
            sanitize(raw, Some(&Identity), &tidy),
            "Kyou Mei (Kuu Kyo na Shaku)"
        );
        assert_eq!(
            sanitize("Gan Sei Shun Ni , Shou Rin Bu Shi", Some(&Identity), &tidy),
            "Gan Sei Shun Ni, Shou Rin Bu Shi"
        );
    }

    #[test]
    fn test_tidy_needs_a_decoder() {
        let config = Config {
            tidy_translit: true,
            ..bare()
        };
        assert_eq!(sanitize("naShaku", None, &config), "naShaku");
    }

    #[test]
    fn test_normal_forms() {
        // a, COMBINING COMMA ABOVE RIGHT, COMBINING GRAVE ACCENT,
        // HEBREW ACCENT ZINOR, COMBINING GRAVE ACCENT, b
        let text = "\u{61}\u{315}\u{300}\u{5AE}\u{300}\u{62}";

        let cases = [
            (None, text.to_string()),
            (Some(NormalForm::Nfc), "\u{E0}\u{5AE}\u{300}\u{315}\u{62}".to_string()),
            (Some(NormalForm::Nfd), "\u{61}\u{5AE}\u{300}\u{300}\u{315}\u{62}".to_string()),
            (Some(NormalForm::Nfkc), "\u{E0}\u{5AE}\u{300}\u{315}\u{62}".to_string()),
            (Some(NormalForm::Nfkd), "\u{61}\u{5AE}\u{300}\u{300}\u{315}\u{62}".to_string()),
        ];

        for (form, expected) in cases {
            let config = Config {
                unicode_normalization: form,
                ..bare()
            };
            assert_eq!(sanitize(text, None, &config), expected, "form {:?}", form);
        }
    }

    #[test]
    fn test_normalization_drops_other_category_characters() {
        let config = Config {
            unicode_normalization: Some(NormalForm::Nfc),
            ..bare()
        };
        assert_eq!(sanitize("\u{FFFE}", None, &config), "");
        assert_eq!(sanitize("a\u{200B}\u{7}b", None, &config), "ab");
    }
}
