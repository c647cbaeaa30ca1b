// Parse state: the accumulator folded over classified tokens

use crate::lexicon::HundredsRule;

use super::DecodeError;

/// A classified unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// A number word or phrase with its value.
    Number(u64),
    /// The language's minus word.
    Minus,
    /// A filler conjunction ("و").
    Conjunction,
    /// Anything else; skipped.
    Unknown,
}

/// Running totals of a decode.
///
/// `total` holds everything already multiplied by a scale word,
/// `current_group` the partial sum waiting for the next scale word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseState {
    /// Scale-resolved sum so far.
    pub total: u64,
    /// Un-scaled sum below the next multiplier.
    pub current_group: u64,
    /// Whether any number word has been seen.
    pub has_valid_number: bool,
    /// Whether a minus word preceded the first number word.
    pub negative: bool,
}

impl ParseState {
    /// A fresh state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one lexeme into the state.
    pub fn apply(mut self, lexeme: Lexeme, rule: HundredsRule) -> Result<Self, DecodeError> {
        let value = match lexeme {
            Lexeme::Number(value) => value,
            Lexeme::Minus if !self.has_valid_number => {
                self.negative = true;
                return Ok(self);
            }
            Lexeme::Minus | Lexeme::Conjunction | Lexeme::Unknown => return Ok(self),
        };

        self.has_valid_number = true;

        if value >= 1000 {
            let multiplicand = if self.current_group > 0 {
                self.current_group
            } else {
                1
            };
            let scaled = multiplicand
                .checked_mul(value)
                .ok_or(DecodeError::Overflow)?;
            self.total = self
                .total
                .checked_add(scaled)
                .ok_or(DecodeError::Overflow)?;
            self.current_group = 0;
        } else if is_hundreds(value, rule) {
            self.current_group = if self.current_group > 0 {
                self.current_group
                    .checked_mul(value)
                    .ok_or(DecodeError::Overflow)?
            } else {
                value
            };
        } else {
            self.current_group = self
                .current_group
                .checked_add(value)
                .ok_or(DecodeError::Overflow)?;
        }

        Ok(self)
    }

    /// Fold the open group into the total and produce the signed result.
    pub fn finish(self) -> Result<i64, DecodeError> {
        if !self.has_valid_number {
            return Err(DecodeError::NoValidNumber);
        }
        let total = self
            .total
            .checked_add(self.current_group)
            .ok_or(DecodeError::Overflow)?;
        let magnitude = i64::try_from(total).map_err(|_| DecodeError::Overflow)?;
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

fn is_hundreds(value: u64, rule: HundredsRule) -> bool {
    match rule {
        HundredsRule::BareMultiplier => value == 100,
        HundredsRule::FusedMultiples => value >= 100,
    }
}
