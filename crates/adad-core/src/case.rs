// Case detection and conversion for rendered and parsed number words

/// Classification of character casing within a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No cased letters found (digits, punctuation, or an uncased script
    /// such as Persian and Arabic).
    NoLetters,
    /// All cased letters are lowercase: "one thousand".
    AllLower,
    /// First cased letter is uppercase, the rest lowercase: "One thousand".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "one Thousand".
    Complex,
    /// All cased letters are uppercase: "ONE THOUSAND".
    AllUpper,
}

/// Detect the case pattern of a phrase.
///
/// Uncased characters (whitespace, punctuation, Arabic script letters) are
/// ignored when determining the pattern.
pub fn detect_case(text: &str) -> CaseType {
    let mut cased = text.chars().filter(|c| c.is_uppercase() || c.is_lowercase());

    let Some(first) = cased.next() else {
        return CaseType::NoLetters;
    };

    let first_uc = first.is_uppercase();
    let mut rest_lc = true;
    let mut all_uc = first_uc;

    for c in cased {
        if c.is_uppercase() {
            rest_lc = false;
        } else {
            all_uc = false;
        }
    }

    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Uppercase the first character of `text`, leaving the rest untouched.
///
/// Characters without an uppercase form (including all Persian and Arabic
/// letters) are returned unchanged. A first character whose uppercase form
/// expands to several characters is expanded in full.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(text.len());
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- detect_case tests --

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(""), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case("123, 456"), CaseType::NoLetters);
        assert_eq!(detect_case("یک هزار"), CaseType::NoLetters);
        assert_eq!(detect_case("ألف"), CaseType::NoLetters);
    }

    #[test]
    fn detect_all_lower() {
        assert_eq!(detect_case("one thousand"), CaseType::AllLower);
    }

    #[test]
    fn detect_first_upper() {
        assert_eq!(detect_case("One thousand, two"), CaseType::FirstUpper);
        assert_eq!(detect_case("Minus twenty-one"), CaseType::FirstUpper);
    }

    #[test]
    fn detect_all_upper() {
        assert_eq!(detect_case("ONE THOUSAND"), CaseType::AllUpper);
        assert_eq!(detect_case("A"), CaseType::AllUpper);
    }

    #[test]
    fn detect_complex() {
        assert_eq!(detect_case("one Thousand"), CaseType::Complex);
        assert_eq!(detect_case("ONE thousand"), CaseType::Complex);
    }

    // -- capitalize_first tests --

    #[test]
    fn capitalize_ascii() {
        assert_eq!(capitalize_first("one thousand"), "One thousand");
        assert_eq!(capitalize_first("zero"), "Zero");
    }

    #[test]
    fn capitalize_already_upper() {
        assert_eq!(capitalize_first("Minus five"), "Minus five");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_uncased_script_is_noop() {
        assert_eq!(capitalize_first("یک هزار"), "یک هزار");
        assert_eq!(capitalize_first("سالب ألف"), "سالب ألف");
    }

    #[test]
    fn capitalize_expanding_character() {
        // U+00DF (ß) uppercases to "SS"
        assert_eq!(capitalize_first("\u{00DF}x"), "SSx");
    }
}
