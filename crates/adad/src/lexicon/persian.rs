// Persian number words
//
// The trillion tier has no single word in common use; it is written as
// "هزار میلیارد" (thousand billion). The decoder also accepts the loanword
// "تریلیون" and the bare hundred "صد".

use adad_core::Language;

use super::{CompoundScale, HundredsRule, Lexicon, Separators};

pub static PERSIAN: Lexicon = Lexicon {
    language: Language::Persian,
    units: ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"],
    teens: [
        "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
    ],
    tens: [
        "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
    ],
    hundreds: [
        "", "یکصد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
    ],
    scales: ["", "هزار", "میلیون", "میلیارد", "هزار میلیارد"],
    zero: "صفر",
    minus: "منفی",
    conjunction: Some("و"),
    separators: Separators {
        tens_units: " و ",
        parts: " و ",
        chunks: " و ",
    },
    capitalize: false,
    elide_singular_scale: false,
    hundreds_rule: HundredsRule::FusedMultiples,
    compound_scales: [
        CompoundScale {
            lower: "هزار",
            higher: "میلیارد",
            replacement: "تریلیون",
        },
        CompoundScale {
            lower: "هزار",
            higher: "میلیون",
            replacement: "میلیارد",
        },
    ],
    extra_words: &[("صد", 100), ("تریلیون", 1_000_000_000_000)],
};
