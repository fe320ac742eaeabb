//! Supported transliteration targets

use crate::error::SanityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported transliteration target.
///
/// The codes follow the argument convention of the transliteration
/// libraries this plugin is used with rather than any single ISO standard
/// ("kr" and "vn" are country codes, not ISO 639 language codes). The
/// resolver maps the ISO codes found in release data onto these; nothing
/// else constructs a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Japanese
    Ja,
    /// Korean
    Kr,
    /// Vietnamese
    Vn,
    /// Chinese
    Zh,
}

impl Lang {
    /// Every supported target
    pub const ALL: [Lang; 4] = [Lang::Ja, Lang::Kr, Lang::Vn, Lang::Zh];

    /// The lowercase code for this target
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::Kr => "kr",
            Lang::Vn => "vn",
            Lang::Zh => "zh",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = SanityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Lang::Ja),
            "kr" => Ok(Lang::Kr),
            "vn" => Ok(Lang::Vn),
            "zh" => Ok(Lang::Zh),
            other => Err(SanityError::UnknownLang(other.to_string())),
        }
    }
}
