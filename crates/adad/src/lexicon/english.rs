// English number words
//
// Hundreds are rendered as two words ("two hundred"), so the decoder only
// knows the bare multiplier "hundred" and never the rendered pairs.

use adad_core::Language;

use super::{CompoundScale, HundredsRule, Lexicon, Separators};

pub static ENGLISH: Lexicon = Lexicon {
    language: Language::English,
    units: [
        "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    teens: [
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    tens: [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundreds: [
        "",
        "one hundred",
        "two hundred",
        "three hundred",
        "four hundred",
        "five hundred",
        "six hundred",
        "seven hundred",
        "eight hundred",
        "nine hundred",
    ],
    scales: ["", "thousand", "million", "billion", "trillion"],
    zero: "zero",
    minus: "minus",
    conjunction: None,
    separators: Separators {
        tens_units: "-",
        parts: " ",
        chunks: ", ",
    },
    capitalize: true,
    elide_singular_scale: false,
    hundreds_rule: HundredsRule::BareMultiplier,
    compound_scales: [
        CompoundScale {
            lower: "thousand",
            higher: "billion",
            replacement: "trillion",
        },
        CompoundScale {
            lower: "thousand",
            higher: "million",
            replacement: "billion",
        },
    ],
    extra_words: &[("hundred", 100)],
};
