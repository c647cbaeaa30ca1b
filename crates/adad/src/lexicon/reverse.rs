// Reverse lexicon: word and phrase to value lookup used by the decoder
//
// Built once per language from the forward tables plus each lexicon's
// decoder-only words. Keys may span several words (Arabic teens, the
// Persian trillion phrase); `longest_match` resolves them against a token
// stream.

use std::sync::LazyLock;

use adad_core::Language;
use hashbrown::HashMap;

use super::{HundredsRule, Lexicon, arabic, english, persian};

/// Word-to-value mapping for one language.
#[derive(Debug)]
pub struct ReverseLexicon {
    words: HashMap<&'static str, u64>,
    max_phrase_words: usize,
}

impl ReverseLexicon {
    /// Build the mapping for `lex`.
    ///
    /// Hundreds words are included only for languages that fuse hundreds
    /// into one word; bare-multiplier languages list "hundred" among their
    /// extra words instead.
    pub fn build(lex: &'static Lexicon) -> Self {
        let mut words = HashMap::new();

        words.insert(lex.zero, 0);
        for digit in 1..10u64 {
            words.insert(lex.units[digit as usize], digit);
            words.insert(lex.tens[digit as usize], digit * 10);
        }
        for (offset, teen) in lex.teens.iter().enumerate() {
            words.insert(*teen, 10 + offset as u64);
        }
        if lex.hundreds_rule == HundredsRule::FusedMultiples {
            for digit in 1..10u64 {
                words.insert(lex.hundreds[digit as usize], digit * 100);
            }
        }
        let mut multiplier = 1u64;
        for scale in &lex.scales[1..] {
            multiplier *= 1000;
            words.insert(*scale, multiplier);
        }
        for &(word, value) in lex.extra_words {
            words.insert(word, value);
        }
        // tens[1] is a placeholder
        words.remove("");

        let max_phrase_words = words
            .keys()
            .map(|k| k.split_whitespace().count())
            .max()
            .unwrap_or(1);

        Self {
            words,
            max_phrase_words,
        }
    }

    /// Look up a single word or a space-joined phrase.
    ///
    /// `None` means the text is not a number word; a recognized zero is
    /// `Some(0)`.
    pub fn value(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// Match the longest phrase at the start of `tokens`.
    ///
    /// Returns the value and the number of tokens consumed.
    pub fn longest_match<S: AsRef<str>>(&self, tokens: &[S]) -> Option<(u64, usize)> {
        let longest = self.max_phrase_words.min(tokens.len());
        for n in (2..=longest).rev() {
            let phrase = tokens[..n]
                .iter()
                .map(|t| t.as_ref())
                .collect::<Vec<&str>>()
                .join(" ");
            if let Some(value) = self.value(&phrase) {
                return Some((value, n));
            }
        }
        tokens
            .first()
            .and_then(|t| self.value(t.as_ref()))
            .map(|value| (value, 1))
    }

    /// The largest number of words in any key.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all keys and their values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.words.iter().map(|(k, v)| (*k, *v))
    }
}

static PERSIAN_REVERSE: LazyLock<ReverseLexicon> =
    LazyLock::new(|| ReverseLexicon::build(&persian::PERSIAN));
static ENGLISH_REVERSE: LazyLock<ReverseLexicon> =
    LazyLock::new(|| ReverseLexicon::build(&english::ENGLISH));
static ARABIC_REVERSE: LazyLock<ReverseLexicon> =
    LazyLock::new(|| ReverseLexicon::build(&arabic::ARABIC));

/// Return the shared reverse lexicon of `lang`.
pub fn reverse_lexicon(lang: Language) -> &'static ReverseLexicon {
    match lang {
        Language::Persian => &PERSIAN_REVERSE,
        Language::English => &ENGLISH_REVERSE,
        Language::Arabic => &ARABIC_REVERSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::lexicon;

    #[test]
    fn zero_is_distinguishable_from_unknown() {
        for lang in Language::ALL {
            let rev = reverse_lexicon(lang);
            assert_eq!(rev.value(lexicon(lang).zero), Some(0));
            assert_eq!(rev.value("qwerty"), None);
            assert_eq!(rev.value(""), None);
        }
    }

    #[test]
    fn english_values() {
        let rev = reverse_lexicon(Language::English);
        assert_eq!(rev.value("one"), Some(1));
        assert_eq!(rev.value("nineteen"), Some(19));
        assert_eq!(rev.value("ninety"), Some(90));
        assert_eq!(rev.value("hundred"), Some(100));
        assert_eq!(rev.value("thousand"), Some(1_000));
        assert_eq!(rev.value("trillion"), Some(1_000_000_000_000));
        // rendered hundreds are two tokens, never one key
        assert_eq!(rev.value("two hundred"), None);
        assert_eq!(rev.max_phrase_words(), 1);
    }

    #[test]
    fn persian_values() {
        let rev = reverse_lexicon(Language::Persian);
        assert_eq!(rev.value("یک"), Some(1));
        assert_eq!(rev.value("دوازده"), Some(12));
        assert_eq!(rev.value("سی"), Some(30));
        assert_eq!(rev.value("صد"), Some(100));
        assert_eq!(rev.value("یکصد"), Some(100));
        assert_eq!(rev.value("نهصد"), Some(900));
        assert_eq!(rev.value("میلیارد"), Some(1_000_000_000));
        assert_eq!(rev.value("تریلیون"), Some(1_000_000_000_000));
        assert_eq!(rev.value("هزار میلیارد"), Some(1_000_000_000_000));
        assert_eq!(rev.max_phrase_words(), 2);
    }

    #[test]
    fn arabic_values() {
        let rev = reverse_lexicon(Language::Arabic);
        assert_eq!(rev.value("واحد"), Some(1));
        assert_eq!(rev.value("عشرة"), Some(10));
        assert_eq!(rev.value("أحد عشر"), Some(11));
        assert_eq!(rev.value("تسعة عشر"), Some(19));
        assert_eq!(rev.value("مائتان"), Some(200));
        assert_eq!(rev.value("ألف"), Some(1_000));
        assert_eq!(rev.value("ترليون"), Some(1_000_000_000_000));
        assert_eq!(rev.value("عشر"), None);
    }

    #[test]
    fn longest_match_prefers_phrase() {
        let rev = reverse_lexicon(Language::Arabic);
        assert_eq!(rev.longest_match(&["ثلاثة", "عشر", "ألف"]), Some((13, 2)));
        assert_eq!(rev.longest_match(&["ثلاثة", "ألف"]), Some((3, 1)));
        assert_eq!(rev.longest_match(&["عشر"]), None);
        assert_eq!(rev.longest_match::<&str>(&[]), None);
    }

    #[test]
    fn every_forward_word_is_recognized() {
        for lang in Language::ALL {
            let lex = lexicon(lang);
            let rev = reverse_lexicon(lang);
            let forward = lex
                .units
                .iter()
                .chain(&lex.teens)
                .chain(&lex.tens)
                .chain(&lex.hundreds)
                .chain(&lex.scales)
                .filter(|w| !w.is_empty());
            for phrase in forward {
                let tokens: Vec<&str> = phrase.split_whitespace().collect();
                let mut pos = 0;
                while pos < tokens.len() {
                    let (_, used) = rev
                        .longest_match(&tokens[pos..])
                        .unwrap_or_else(|| panic!("{lang}: '{phrase}' not recognized"));
                    pos += used;
                }
            }
        }
    }

    #[test]
    fn sizes() {
        // zero + 9 units + 10 teens + 8 tens + 4 scales + "hundred"
        assert_eq!(reverse_lexicon(Language::English).len(), 33);
        assert!(!reverse_lexicon(Language::Arabic).is_empty());
        assert_eq!(
            reverse_lexicon(Language::Arabic).iter().count(),
            reverse_lexicon(Language::Arabic).len()
        );
    }
}
