// Number-to-words encoder
//
// Splits the magnitude into base-1000 chunks, renders each non-zero chunk
// with its scale word, and joins the groups most significant first. Sign,
// zero and capitalization are applied around the chunk logic.

use adad_core::Language;
use adad_core::case::capitalize_first;

use crate::lexicon::{Lexicon, MAX_MAGNITUDE, lexicon};
use crate::render::{Chunk, render};

/// Error type for number-to-words conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// The magnitude needs a scale word beyond trillion.
    #[error("magnitude of {value} exceeds the largest spellable number 999,999,999,999,999")]
    MagnitudeOutOfRange { value: i128 },

    /// A floating-point input was NaN or infinite.
    #[error("cannot spell a non-finite number")]
    NotFinite,
}

/// Spell `n` in `lang`.
///
/// Fails with [`EncodeError::MagnitudeOutOfRange`] when `|n|` is above
/// 999 trillion.
pub fn encode(n: i64, lang: Language) -> Result<String, EncodeError> {
    let lex = lexicon(lang);

    if n == 0 {
        return Ok(finish(lex.zero.to_string(), lex));
    }

    let magnitude = n.unsigned_abs();
    if magnitude > MAX_MAGNITUDE {
        log::debug!("encode: {n} is out of range for {lang}");
        return Err(EncodeError::MagnitudeOutOfRange { value: n as i128 });
    }

    let mut words = spell_magnitude(magnitude, lex)?;
    if n < 0 {
        words = format!("{} {}", lex.minus, words);
    }

    let result = finish(words, lex);
    log::debug!("encode: {n} ({lang}) -> {result:?}");
    Ok(result)
}

/// Spell a floating-point number in `lang`, discarding any fractional part.
///
/// The value is truncated toward zero, never rounded: `-7.9` spells as
/// minus seven.
pub fn encode_f64(value: f64, lang: Language) -> Result<String, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NotFinite);
    }
    let truncated = value.trunc();
    if truncated.abs() > MAX_MAGNITUDE as f64 {
        return Err(EncodeError::MagnitudeOutOfRange {
            value: truncated as i128,
        });
    }
    encode(truncated as i64, lang)
}

/// Spell a non-zero magnitude without sign or capitalization.
fn spell_magnitude(mut magnitude: u64, lex: &Lexicon) -> Result<String, EncodeError> {
    let mut groups: Vec<String> = Vec::new();
    let mut index = 0;

    while magnitude > 0 {
        let chunk = Chunk::low_of(magnitude);
        if !chunk.is_zero() {
            let scale = lex
                .scale(index)
                .ok_or(EncodeError::MagnitudeOutOfRange {
                    value: magnitude as i128,
                })?;
            let group = if lex.elide_singular_scale && chunk.value() == 1 && index > 0 {
                scale.to_string()
            } else if scale.is_empty() {
                render(chunk, lex)
            } else {
                format!("{} {}", render(chunk, lex), scale)
            };
            groups.push(group);
        }
        magnitude /= 1000;
        index += 1;
    }

    groups.reverse();
    Ok(groups.join(lex.separators.chunks))
}

fn finish(words: String, lex: &Lexicon) -> String {
    if lex.capitalize {
        capitalize_first(&words)
    } else {
        words
    }
}
