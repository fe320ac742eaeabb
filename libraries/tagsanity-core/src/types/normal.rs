//! Unicode normal forms

use crate::error::SanityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four standard Unicode normalization forms.
///
/// "No normalization" is expressed as `Option<NormalForm>::None` in the
/// configuration rather than a fifth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalForm {
    /// Canonical decomposition, then canonical composition
    Nfc,
    /// Compatibility decomposition, then canonical composition
    Nfkc,
    /// Canonical decomposition
    Nfd,
    /// Compatibility decomposition
    Nfkd,
}

impl NormalForm {
    /// The conventional uppercase name of this form
    pub fn as_str(self) -> &'static str {
        match self {
            NormalForm::Nfc => "NFC",
            NormalForm::Nfkc => "NFKC",
            NormalForm::Nfd => "NFD",
            NormalForm::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalForm {
    type Err = SanityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NFC" => Ok(NormalForm::Nfc),
            "NFKC" => Ok(NormalForm::Nfkc),
            "NFD" => Ok(NormalForm::Nfd),
            "NFKD" => Ok(NormalForm::Nfkd),
            other => Err(SanityError::UnknownNormalForm(other.to_string())),
        }
    }
}
