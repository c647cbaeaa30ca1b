//! Number to words and words to number conversion for Persian, English
//! and Arabic.
//!
//! Integers up to 999 trillion in magnitude are spelled by splitting them
//! into base-1000 groups, rendering each group from fixed per-language word
//! tables and attaching scale words. The reverse direction tokenizes text,
//! collapses compound scale phrases ("thousand billion") and folds the
//! recognized words into a value.
//!
//! # Architecture
//!
//! - [`lexicon`] -- Per-language word tables and the reverse lookup
//! - [`render`] -- Spelling of a single 0..=999 group
//! - [`encoder`] -- Integer to words
//! - [`tokenizer`] -- Language-aware word splitting
//! - [`decoder`] -- Words to integer
//! - [`handle`] -- [`handle::Converter`], a handle with a default language
//!
//! ```
//! assert_eq!(
//!     adad::number_to_words(1234, "en").unwrap(),
//!     "One thousand, two hundred thirty-four"
//! );
//! assert_eq!(adad::words_to_number("ألف", "ar"), Some(1000));
//! assert_eq!(adad::words_to_number("asdf", "en"), None);
//! ```

pub mod decoder;
pub mod encoder;
pub mod lexicon;
pub mod render;
pub mod tokenizer;

#[cfg(feature = "handle")]
pub mod handle;

pub use adad_core::{Language, LanguageError};

/// Any error of the tag-based entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdadError {
    /// The language tag is not supported.
    #[error(transparent)]
    Language(#[from] LanguageError),

    /// The number cannot be spelled.
    #[error(transparent)]
    Encode(#[from] encoder::EncodeError),

    /// The words cannot be parsed.
    #[error(transparent)]
    Decode(#[from] decoder::DecodeError),
}

/// Spell `n` in the language named by `tag` ("fa", "en" or "ar").
pub fn number_to_words(n: i64, tag: &str) -> Result<String, AdadError> {
    let lang: Language = tag.parse()?;
    Ok(encoder::encode(n, lang)?)
}

/// Parse `text` as a number in the language named by `tag`.
///
/// Returns `None` for an unsupported tag, blank input, input without any
/// number word, or a value outside the i64 range.
pub fn words_to_number(text: &str, tag: &str) -> Option<i64> {
    let lang: Language = tag.parse().ok()?;
    decoder::decode(text, lang).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_to_words_by_tag() {
        assert_eq!(number_to_words(-5, "en").unwrap(), "Minus five");
        assert_eq!(
            number_to_words(1234, "fa").unwrap(),
            "یک هزار و دویست و سی و چهار"
        );
        assert!(matches!(
            number_to_words(1, "xx"),
            Err(AdadError::Language(LanguageError::Unsupported(_)))
        ));
        assert!(matches!(
            number_to_words(i64::MAX, "en"),
            Err(AdadError::Encode(_))
        ));
    }

    #[test]
    fn words_to_number_by_tag() {
        assert_eq!(words_to_number("one thousand two hundred thirty four", "en"), Some(1234));
        assert_eq!(words_to_number("", "fa"), None);
        assert_eq!(words_to_number("   ", "en"), None);
        assert_eq!(words_to_number("one", "xx"), None);
        assert_eq!(words_to_number("asdf qwerty", "en"), None);
    }
}
