// Compound scale normalization
//
// Natural text sometimes spells a high scale as two lower scale words
// ("thousand billion" for "trillion"). These pairs are collapsed on the
// raw text, before tokenizing, with whitespace-tolerant whole-word
// patterns compiled once per language.

use std::borrow::Cow;
use std::sync::LazyLock;

use adad_core::Language;
use regex::{NoExpand, Regex};

use crate::lexicon::{Lexicon, lexicon};

/// A compiled rewrite rule.
#[derive(Debug)]
struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

fn compile(lex: &'static Lexicon) -> Vec<Rewrite> {
    lex.compound_scales
        .iter()
        .map(|compound| {
            let source = format!(
                r"(?i)\b{}\s+{}\b",
                regex::escape(compound.lower),
                regex::escape(compound.higher)
            );
            Rewrite {
                pattern: Regex::new(&source).expect("escaped scale words form a valid pattern"),
                replacement: compound.replacement,
            }
        })
        .collect()
}

static PERSIAN_REWRITES: LazyLock<Vec<Rewrite>> =
    LazyLock::new(|| compile(lexicon(Language::Persian)));
static ENGLISH_REWRITES: LazyLock<Vec<Rewrite>> =
    LazyLock::new(|| compile(lexicon(Language::English)));
static ARABIC_REWRITES: LazyLock<Vec<Rewrite>> =
    LazyLock::new(|| compile(lexicon(Language::Arabic)));

fn rewrites(lang: Language) -> &'static [Rewrite] {
    match lang {
        Language::Persian => &PERSIAN_REWRITES,
        Language::English => &ENGLISH_REWRITES,
        Language::Arabic => &ARABIC_REWRITES,
    }
}

/// Collapse compound scale phrases in `text` into single scale words.
///
/// Rules apply in lexicon order, so the trillion pair is rewritten before
/// the billion pair. Text without compounds is returned borrowed.
pub fn normalize_compound_scales(text: &str, lang: Language) -> Cow<'_, str> {
    let mut result = Cow::Borrowed(text);
    for rewrite in rewrites(lang) {
        if rewrite.pattern.is_match(&result) {
            log::trace!("normalize: '{}' -> '{}'", rewrite.pattern, rewrite.replacement);
            let replaced = rewrite
                .pattern
                .replace_all(&result, NoExpand(rewrite.replacement))
                .into_owned();
            result = Cow::Owned(replaced);
        }
    }
    result
}
