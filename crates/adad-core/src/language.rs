// Supported languages and language tag parsing

use std::fmt;
use std::str::FromStr;

/// Error returned when a language tag names a language without a lexicon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    /// The tag is not one of "fa", "en" or "ar".
    #[error("unsupported language: {0}")]
    Unsupported(String),
}

/// A language with a built-in lexicon.
///
/// The set is closed: every lexicon lookup is an exhaustive `match` over
/// these variants, so adding a language is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Persian (`fa`).
    #[default]
    Persian,
    /// English (`en`).
    English,
    /// Arabic (`ar`).
    Arabic,
}

impl Language {
    /// Every supported language, in tag order fa, en, ar.
    pub const ALL: [Language; 3] = [Language::Persian, Language::English, Language::Arabic];

    /// The ISO 639-1 tag of the language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Persian => "fa",
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// The English name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Language::Persian => "Persian",
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }

    /// Whether the language is written right to left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Persian | Language::Arabic)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    /// Parse a language tag.
    ///
    /// Matching is ASCII case-insensitive and only the primary subtag of a
    /// BCP 47 tag is considered, so "fa-IR" and "EN_us" are accepted.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        if primary.eq_ignore_ascii_case("fa") {
            Ok(Language::Persian)
        } else if primary.eq_ignore_ascii_case("en") {
            Ok(Language::English)
        } else if primary.eq_ignore_ascii_case("ar") {
            Ok(Language::Arabic)
        } else {
            Err(LanguageError::Unsupported(tag.to_string()))
        }
    }
}
