// Character classification for splitting number phrases into words

use crate::language::Language;

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification, as far as the tokenizer cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// Part of a word.
    Word,
    /// Whitespace of any kind.
    Whitespace,
    /// Comma or hyphen; a word separator only in languages that say so.
    Punctuation,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if is_whitespace(c) {
        CharType::Whitespace
    } else if is_comma(c) || is_hyphen(c) {
        CharType::Punctuation
    } else {
        CharType::Word
    }
}

/// Check whether `c` separates two words of a number phrase in `lang`.
///
/// Every language splits on whitespace. English additionally splits on
/// commas (between scale groups) and hyphens (inside "thirty-four").
pub fn is_separator(c: char, lang: Language) -> bool {
    match get_char_type(c) {
        CharType::Whitespace => true,
        CharType::Punctuation => lang == Language::English,
        CharType::Word => false,
    }
}

/// Check whether a character is whitespace.
///
/// This is the Unicode `White_Space` set plus U+FEFF. The zero-width
/// non-joiner (U+200C) is deliberately absent: Persian writes it inside
/// words.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
        || cp == 0xFEFF
}

fn is_comma(c: char) -> bool {
    c == ','
}

fn is_hyphen(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2012}' // FIGURE DASH
            | '\u{2013}' // EN DASH
    )
}
