// Chunk renderer: spell one base-1000 group (0..=999)

use crate::lexicon::Lexicon;

/// A three-digit group of the base-1000 decomposition of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chunk(u16);

impl Chunk {
    /// Create a chunk, or `None` if `value` is above 999.
    pub fn new(value: u16) -> Option<Self> {
        (value <= 999).then_some(Self(value))
    }

    /// Split off the lowest group of `magnitude`.
    pub fn low_of(magnitude: u64) -> Self {
        Self((magnitude % 1000) as u16)
    }

    /// The numeric value of the chunk.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Whether the chunk is zero (renders as nothing).
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Render a chunk as words.
///
/// The hundreds word comes first, followed by the units, teen, or
/// tens-and-units part. A zero chunk renders as the empty string; callers
/// must not attach a scale word to it.
pub fn render(chunk: Chunk, lex: &Lexicon) -> String {
    let n = chunk.value() as usize;
    let hundreds = n / 100;
    let rest = n % 100;
    let tens = rest / 10;
    let units = rest % 10;

    let mut parts: Vec<String> = Vec::with_capacity(2);

    if hundreds > 0 {
        parts.push(lex.hundreds[hundreds].to_string());
    }

    if rest > 0 {
        if rest < 10 {
            parts.push(lex.units[units].to_string());
        } else if rest < 20 {
            parts.push(lex.teens[rest - 10].to_string());
        } else if units > 0 {
            parts.push(format!(
                "{}{}{}",
                lex.tens[tens], lex.separators.tens_units, lex.units[units]
            ));
        } else {
            parts.push(lex.tens[tens].to_string());
        }
    }

    parts.join(lex.separators.parts)
}
