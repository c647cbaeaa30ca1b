// Words-to-number decoder
//
// Pipeline: trim, lowercase, collapse compound scale phrases, tokenize,
// classify tokens against the reverse lexicon (longest phrase first), then
// fold the lexemes through a `ParseState`.
//
// Decoding is lenient: words that are not number words are skipped. It
// fails only when nothing at all was recognized.

pub mod normalize;
pub mod state;

use adad_core::Language;

use crate::lexicon::reverse::{ReverseLexicon, reverse_lexicon};
use crate::lexicon::{Lexicon, lexicon};
use crate::tokenizer::tokenize;

pub use normalize::normalize_compound_scales;
pub use state::{Lexeme, ParseState};

/// Error type for words-to-number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input was empty or only whitespace.
    #[error("input is empty")]
    EmptyInput,

    /// No token of the input is a number word.
    #[error("no number words found in input")]
    NoValidNumber,

    /// The words describe a number outside the i64 range.
    #[error("number is too large")]
    Overflow,
}

/// Parse a spelled-out number in `lang`.
pub fn decode(text: &str, lang: Language) -> Result<i64, DecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        log::debug!("decode: empty input");
        return Err(DecodeError::EmptyInput);
    }

    let lowered = trimmed.to_lowercase();
    let normalized = normalize_compound_scales(&lowered, lang);
    let words: Vec<String> = tokenize(&normalized, lang)
        .into_iter()
        .map(|t| t.text)
        .collect();

    let lex = lexicon(lang);
    let result = classify(&words, lex, reverse_lexicon(lang))
        .into_iter()
        .try_fold(ParseState::new(), |state, lexeme| {
            state.apply(lexeme, lex.hundreds_rule)
        })?
        .finish();

    match &result {
        Ok(value) => log::debug!("decode: {trimmed:?} ({lang}) -> {value}"),
        Err(err) => log::debug!("decode: {trimmed:?} ({lang}) failed: {err}"),
    }
    result
}

/// Classify a token sequence into lexemes.
///
/// Multi-word phrases of the reverse lexicon are matched greedily, so a
/// phrase yields one lexeme for several tokens.
pub fn classify<S: AsRef<str>>(
    words: &[S],
    lex: &Lexicon,
    reverse: &ReverseLexicon,
) -> Vec<Lexeme> {
    let mut lexemes = Vec::with_capacity(words.len());
    let mut pos = 0;
    while pos < words.len() {
        let word = words[pos].as_ref();
        if lex.conjunction == Some(word) {
            lexemes.push(Lexeme::Conjunction);
            pos += 1;
        } else if let Some((value, used)) = reverse.longest_match(&words[pos..]) {
            lexemes.push(Lexeme::Number(value));
            pos += used;
        } else if word == lex.minus {
            lexemes.push(Lexeme::Minus);
            pos += 1;
        } else {
            log::trace!("decode: skipping unknown word {word:?}");
            lexemes.push(Lexeme::Unknown);
            pos += 1;
        }
    }
    lexemes
}
