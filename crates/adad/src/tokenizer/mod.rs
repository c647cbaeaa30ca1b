// Tokenizer: split a number phrase into words
//
// Works on a char slice so token positions are character offsets. A token
// is a maximal run of non-separator characters; what counts as a separator
// depends on the language (see `adad_core::character::is_separator`).

use adad_core::Language;
use adad_core::character::is_separator;
use adad_core::token::Token;

/// Kind of the run starting at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunType {
    /// End of text.
    None,
    /// A word.
    Word,
    /// One or more separator characters.
    Separator,
}

/// Classify the run starting at `pos` and return its length in characters.
///
/// Returns `(RunType::None, 0)` at or past the end of `text`.
pub fn next_run(text: &[char], pos: usize, lang: Language) -> (RunType, usize) {
    if pos >= text.len() {
        return (RunType::None, 0);
    }
    let separator = is_separator(text[pos], lang);
    let len = text[pos..]
        .iter()
        .take_while(|&&c| is_separator(c, lang) == separator)
        .count();
    let run_type = if separator {
        RunType::Separator
    } else {
        RunType::Word
    };
    (run_type, len)
}

/// Split `text` into word tokens, dropping separators.
pub fn tokenize(text: &str, lang: Language) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut result = Vec::new();
    let mut pos = 0;
    loop {
        let (run_type, len) = next_run(&chars, pos, lang);
        match run_type {
            RunType::None => break,
            RunType::Word => {
                let word: String = chars[pos..pos + len].iter().collect();
                result.push(Token::new(word, pos));
            }
            RunType::Separator => {}
        }
        pos += len;
    }
    result
}
