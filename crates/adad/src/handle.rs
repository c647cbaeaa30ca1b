// Converter: top-level handle for both conversion directions
//
// Owns the options and forwards to the encoder and decoder. The lexicons
// are process-wide statics, so a converter is a few bytes and can be
// cloned or shared across threads freely.

use adad_core::{Language, LanguageError};

use crate::decoder::{self, DecodeError};
use crate::encoder::{self, EncodeError};

/// Options of a [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConverterOptions {
    /// Language used when a call does not name one. Default: Persian.
    pub language: Language,
}

/// Number-words converter with a default language.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Create a converter for a language tag ("fa", "en", "ar").
    pub fn for_tag(tag: &str) -> Result<Self, LanguageError> {
        let language = tag.parse()?;
        Ok(Self::new(ConverterOptions { language }))
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Spell an integer.
    pub fn to_words(&self, n: i64) -> Result<String, EncodeError> {
        encoder::encode(n, self.options.language)
    }

    /// Spell a floating-point number, truncating any fractional part.
    pub fn to_words_f64(&self, value: f64) -> Result<String, EncodeError> {
        encoder::encode_f64(value, self.options.language)
    }

    /// Parse spelled-out words into a number.
    pub fn to_number(&self, text: &str) -> Result<i64, DecodeError> {
        decoder::decode(text, self.options.language)
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// The current options.
    pub fn options(&self) -> ConverterOptions {
        self.options
    }

    /// The current default language.
    pub fn language(&self) -> Language {
        self.options.language
    }

    /// Set the default language.
    pub fn set_language(&mut self, language: Language) {
        self.options.language = language;
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_persian() {
        let c = Converter::default();
        assert_eq!(c.language(), Language::Persian);
        assert_eq!(c.to_words(4).unwrap(), "چهار");
    }

    #[test]
    fn for_tag_selects_language() {
        let c = Converter::for_tag("en").unwrap();
        assert_eq!(c.to_words(21).unwrap(), "Twenty-one");
        assert_eq!(c.to_number("twenty one").unwrap(), 21);
        assert_eq!(c.to_words_f64(21.7).unwrap(), "Twenty-one");
    }

    #[test]
    fn unsupported_tag_returns_error() {
        match Converter::for_tag("sv") {
            Err(LanguageError::Unsupported(tag)) => assert_eq!(tag, "sv"),
            other => panic!("expected Unsupported, got: {other:?}"),
        }
    }

    #[test]
    fn set_language_switches_both_directions() {
        let mut c = Converter::default();
        c.set_language(Language::Arabic);
        assert_eq!(c.options().language, Language::Arabic);
        assert_eq!(c.to_words(1000).unwrap(), "ألف");
        assert_eq!(c.to_number("ألف").unwrap(), 1000);
    }

    #[test]
    fn converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }

    #[test]
    fn get_version_returns_cargo_version() {
        assert_eq!(Converter::get_version(), env!("CARGO_PKG_VERSION"));
    }
}
