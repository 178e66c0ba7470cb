//! # Modulus Check-Digit Engine
//!
//! The generic weighted-sum-modulo-N algorithm shared by every scheme.
//!
//! A scheme is a [`ModulusRule`] value: a modulus, a weight function, an
//! [`Alphabet`] and an optional fixed length. The engine walks the code,
//! converts each character through the alphabet, asks the weight function for
//! its weighted value by position, and reduces the sum modulo N. Schemes never
//! re-implement summation or conversion.
//!
//! ## Positions
//!
//! Each character has a `left_pos` (1-based from the start) and a `right_pos`
//! (1-based from the end). When validating, the supplied check character is
//! `right_pos == 1`. When calculating, the would-be check position is counted,
//! so the last body character is `right_pos == 2`. Weight functions therefore
//! see the same positions for the same body character in both directions.

use crate::alphabet::Alphabet;
use crate::error::CheckDigitError;

/// Weighting rule: `(char_value, left_pos, right_pos) -> weighted value`.
///
/// Must be pure and return a non-negative product.
pub type WeightFn = fn(char_value: u32, left_pos: usize, right_pos: usize) -> u64;

/// A modulus check-digit scheme expressed as plain data.
#[derive(Debug, Clone, Copy)]
pub struct ModulusRule {
    name: &'static str,
    modulus: u32,
    weighted_value: WeightFn,
    alphabet: Alphabet,
    length: Option<usize>,
}

impl ModulusRule {
    /// Create a length-agnostic rule.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero. Rules are declared as `static` items, so
    /// this surfaces at compile time.
    pub const fn new(
        name: &'static str,
        modulus: u32,
        weighted_value: WeightFn,
        alphabet: Alphabet,
    ) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        Self {
            name,
            modulus,
            weighted_value,
            alphabet,
            length: None,
        }
    }

    /// Require codes to be exactly `length` characters including the check
    /// character.
    pub const fn with_length(self, length: usize) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    /// Display name of the scheme (e.g. `"EAN-13"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The modulus N.
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Characters accepted by this rule.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Fixed code length including the check character, if enforced.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Weighted value of a character at the given positions.
    pub fn weighted_value(&self, char_value: u32, left_pos: usize, right_pos: usize) -> u64 {
        (self.weighted_value)(char_value, left_pos, right_pos)
    }

    /// Validate a code whose last character is the check character.
    ///
    /// Blank input, a length the rule does not accept, characters outside the
    /// alphabet and a checksum mismatch all yield `false`.
    pub fn is_valid(&self, code: &str) -> bool {
        if code.trim().is_empty() {
            return false;
        }
        let result = self
            .check_length(code, true)
            .and_then(|()| checksum(code, self, true));
        match result {
            Ok(0) => true,
            Ok(remainder) => {
                tracing::debug!(scheme = self.name, remainder, "check digit mismatch");
                false
            }
            Err(e) => {
                tracing::debug!(scheme = self.name, error = %e, "check digit validation rejected code");
                false
            }
        }
    }

    /// Calculate the check character for a code body.
    ///
    /// # Errors
    ///
    /// - [`CheckDigitError::MissingCode`] for blank input.
    /// - [`CheckDigitError::InvalidLength`] if the rule has a fixed length
    ///   and the body is not one character shorter than it.
    /// - [`CheckDigitError::Conversion`] for characters outside the alphabet.
    /// - [`CheckDigitError::ZeroSum`] if every character weighs zero.
    pub fn calculate(&self, code: &str) -> Result<char, CheckDigitError> {
        if code.trim().is_empty() {
            return Err(CheckDigitError::MissingCode);
        }
        self.check_length(code, false)?;
        let remainder = checksum(code, self, false)?;
        let value = (self.modulus - remainder) % self.modulus;
        let check = self.alphabet.to_check_char(value)?;
        tracing::trace!(scheme = self.name, %check, "calculated check digit");
        Ok(check)
    }

    fn check_length(&self, code: &str, includes_check_digit: bool) -> Result<(), CheckDigitError> {
        let Some(length) = self.length else {
            return Ok(());
        };
        let expected = if includes_check_digit {
            length
        } else {
            length.saturating_sub(1)
        };
        let actual = code.chars().count();
        if actual != expected {
            return Err(CheckDigitError::InvalidLength {
                scheme: self.name,
                actual,
                expected: expected.to_string(),
            });
        }
        Ok(())
    }
}

/// Weighted checksum of `code` under `rule`, reduced modulo the rule's modulus.
///
/// With `includes_check_digit` set, the last character is treated as the
/// check character (`right_pos == 1`); otherwise the positions leave room for
/// a check character still to be appended. A valid code has a result of zero.
///
/// # Errors
///
/// - [`CheckDigitError::Conversion`] if a character is outside the alphabet.
/// - [`CheckDigitError::ZeroSum`] if the unreduced total is zero.
pub fn checksum(
    code: &str,
    rule: &ModulusRule,
    includes_check_digit: bool,
) -> Result<u32, CheckDigitError> {
    let modulus = u64::from(rule.modulus);
    let lth = code.chars().count() + usize::from(!includes_check_digit);
    let mut remainder = 0u64;
    let mut nonzero = false;
    for (i, character) in code.chars().enumerate() {
        let left_pos = i + 1;
        let right_pos = lth - i;
        let char_value = rule.alphabet.to_value(character, left_pos, right_pos)?;
        let weighted = rule.weighted_value(char_value, left_pos, right_pos);
        nonzero |= weighted != 0;
        remainder = (remainder + weighted % modulus) % modulus;
    }
    if !nonzero {
        return Err(CheckDigitError::ZeroSum);
    }
    // remainder < modulus <= u32::MAX
    Ok(remainder as u32)
}

/// Sum of the decimal digits of `number` (e.g. `18 -> 9`).
pub fn sum_digits(number: u64) -> u64 {
    let mut total = 0;
    let mut n = number;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}
