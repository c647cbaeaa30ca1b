// Lexicon store: fixed per-language word tables and grammar switches
//
// Each supported language has exactly one `static` lexicon. Besides the
// word sequences, a lexicon records the few grammatical choices in which
// the languages differ (separators, capitalization, Arabic singular scale
// elision, how hundreds are tokenized) so that the renderer, encoder and
// decoder never branch on the language tag themselves.

pub mod arabic;
pub mod english;
pub mod persian;
pub mod reverse;

use adad_core::Language;

/// Number of scale tiers: units, thousand, million, billion, trillion.
pub const SCALE_COUNT: usize = 5;

/// Largest magnitude the lexicons can spell (999 trillion).
pub const MAX_MAGNITUDE: u64 = 999_999_999_999_999;

/// How hundreds appear in running text, which decides how the decoder
/// combines a hundreds value with the group before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HundredsRule {
    /// "hundred" is a bare multiplier token ("two hundred" is two tokens).
    /// Only the value 100 multiplies the running group.
    BareMultiplier,
    /// Every hundreds value has its own word (دویست = 200). Any value in
    /// 100..1000 replaces or multiplies the running group.
    FusedMultiples,
}

/// Strings placed between the words of a rendered number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Between a tens word and a units word: "thirty-four", "سی و چهار".
    pub tens_units: &'static str,
    /// Between the hundreds part and the rest of a chunk.
    pub parts: &'static str,
    /// Between two scale groups.
    pub chunks: &'static str,
}

/// A two-word scale phrase that stands for a single higher scale word,
/// e.g. "thousand billion" for "trillion".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundScale {
    /// The leading (lower) scale word.
    pub lower: &'static str,
    /// The trailing (higher) scale word.
    pub higher: &'static str,
    /// The single word the pair collapses into.
    pub replacement: &'static str,
}

/// The immutable word tables of one language.
///
/// All sequences are indexed by digit value. Empty strings are placeholders
/// for positions that never produce a word (`units[0]`, `tens[0..2]`,
/// `hundreds[0]`, `scales[0]`).
#[derive(Debug)]
pub struct Lexicon {
    /// The language these tables belong to.
    pub language: Language,
    /// Words for 0..=9 (`units[0]` is empty).
    pub units: [&'static str; 10],
    /// Words for 10..=19.
    pub teens: [&'static str; 10],
    /// Words for 20, 30, ..., 90 at indexes 2..=9.
    pub tens: [&'static str; 10],
    /// Words for 100, 200, ..., 900 at indexes 1..=9.
    pub hundreds: [&'static str; 10],
    /// Scale words for 1000^0 ..= 1000^4 (`scales[0]` is empty).
    pub scales: [&'static str; SCALE_COUNT],
    /// The word for zero, emitted instead of any chunk logic.
    pub zero: &'static str,
    /// The word prepended to negative numbers.
    pub minus: &'static str,
    /// A filler "and" token the decoder skips, if the language has one.
    pub conjunction: Option<&'static str>,
    /// Separators used when rendering.
    pub separators: Separators,
    /// Whether the first letter of the rendered result is uppercased.
    pub capitalize: bool,
    /// Whether a chunk equal to one above the units group is replaced by
    /// the bare scale word ("ألف", not "واحد ألف").
    pub elide_singular_scale: bool,
    /// How hundreds are tokenized.
    pub hundreds_rule: HundredsRule,
    /// Scale pairs collapsed before decoding, applied in order.
    pub compound_scales: [CompoundScale; 2],
    /// Words the decoder accepts that the renderer never produces.
    pub extra_words: &'static [(&'static str, u64)],
}

impl Lexicon {
    /// The scale word for the chunk at `index` (0 = units group).
    ///
    /// Returns `None` past the largest scale; `Some("")` for the units group.
    pub fn scale(&self, index: usize) -> Option<&'static str> {
        self.scales.get(index).copied()
    }
}

/// Return the lexicon of `lang`.
pub fn lexicon(lang: Language) -> &'static Lexicon {
    match lang {
        Language::Persian => &persian::PERSIAN,
        Language::English => &english::ENGLISH,
        Language::Arabic => &arabic::ARABIC,
    }
}
