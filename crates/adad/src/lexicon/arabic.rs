// Arabic number words
//
// Teens from eleven up are two-word phrases ("أحد عشر"); the reverse
// lexicon stores them as phrases and the decoder matches them across
// token boundaries. A chunk of exactly one above the units group is
// spoken as the bare scale word: "ألف", "مليون".

use adad_core::Language;

use super::{CompoundScale, HundredsRule, Lexicon, Separators};

pub static ARABIC: Lexicon = Lexicon {
    language: Language::Arabic,
    units: [
        "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
    ],
    teens: [
        "عشرة",
        "أحد عشر",
        "اثنا عشر",
        "ثلاثة عشر",
        "أربعة عشر",
        "خمسة عشر",
        "ستة عشر",
        "سبعة عشر",
        "ثمانية عشر",
        "تسعة عشر",
    ],
    tens: [
        "", "", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
    ],
    hundreds: [
        "",
        "مائة",
        "مائتان",
        "ثلاثمائة",
        "أربعمائة",
        "خمسمائة",
        "ستمائة",
        "سبعمائة",
        "ثمانمائة",
        "تسعمائة",
    ],
    scales: ["", "ألف", "مليون", "مليار", "ترليون"],
    zero: "صفر",
    minus: "سالب",
    conjunction: Some("و"),
    separators: Separators {
        tens_units: " و ",
        parts: " و ",
        chunks: " و ",
    },
    capitalize: false,
    elide_singular_scale: true,
    hundreds_rule: HundredsRule::FusedMultiples,
    compound_scales: [
        CompoundScale {
            lower: "ألف",
            higher: "مليار",
            replacement: "ترليون",
        },
        CompoundScale {
            lower: "ألف",
            higher: "مليون",
            replacement: "مليار",
        },
    ],
    extra_words: &[],
};
