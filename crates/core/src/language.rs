//! Supported conversation languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a session can be locked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    Marathi,
    Gujarati,
    Tamil,
    Telugu,
    Kannada,
    Bengali,
}

impl Language {
    /// Language used when a lookup has no entry for the requested one
    pub const DEFAULT: Language = Language::English;

    /// All supported languages in display order
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Hindi,
            Language::Marathi,
            Language::Gujarati,
            Language::Tamil,
            Language::Telugu,
            Language::Kannada,
            Language::Bengali,
        ]
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Kannada => "kn",
            Language::Bengali => "bn",
        }
    }

    /// English name, also the identifier used in localization tables
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Kannada => "Kannada",
            Language::Bengali => "Bengali",
        }
    }

    /// Name of the language in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Marathi => "मराठी",
            Language::Gujarati => "ગુજરાતી",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Bengali => "বাংলা",
        }
    }

    /// Resolve an identifier (display name, native name or ISO code).
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn from_identifier(identifier: &str) -> Option<Language> {
        let needle = identifier.trim();
        Language::all().iter().copied().find(|lang| {
            lang.display_name().eq_ignore_ascii_case(needle)
                || lang.code().eq_ignore_ascii_case(needle)
                || lang.native_name() == needle
        })
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when parsing an unsupported language identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_identifier(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
