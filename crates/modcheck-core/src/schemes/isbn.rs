//! # ISBN (10 or 13)
//!
//! Dispatches on length: ten-character codes use the modulus-11 ISBN-10
//! rule, thirteen-character codes the modulus-10 EAN-13 rule. Any other
//! length is invalid.

use crate::check_digit::CheckDigit;
use crate::error::CheckDigitError;
use crate::modulus::checksum;
use crate::schemes::ean13::EAN13_RULE;
use crate::schemes::isbn10::ISBN10_RULE;

/// Singleton ISBN-10/ISBN-13 check digit routine.
pub static ISBN_CHECK_DIGIT: IsbnCheckDigit = IsbnCheckDigit;

/// ISBN-10 or ISBN-13 check digit, selected by code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsbnCheckDigit;

impl IsbnCheckDigit {
    /// Convert a valid ISBN-10 to its ISBN-13 form (`978` prefix, recomputed
    /// check digit).
    ///
    /// # Errors
    ///
    /// - [`CheckDigitError::InvalidLength`] if the input is not ten characters.
    /// - [`CheckDigitError::Conversion`] for a character outside the ISBN-10
    ///   alphabet, positioned within `isbn10`.
    /// - [`CheckDigitError::CheckDigitMismatch`] if the ISBN-10 check
    ///   character is wrong.
    pub fn to_isbn13(&self, isbn10: &str) -> Result<String, CheckDigitError> {
        let chars: Vec<char> = isbn10.chars().collect();
        if chars.len() != 10 {
            return Err(CheckDigitError::InvalidLength {
                scheme: ISBN10_RULE.name(),
                actual: chars.len(),
                expected: "10".to_string(),
            });
        }
        if checksum(isbn10, &ISBN10_RULE, true)? != 0 {
            return Err(CheckDigitError::CheckDigitMismatch {
                scheme: ISBN10_RULE.name(),
            });
        }
        let mut isbn13: String = "978".chars().chain(chars[..9].iter().copied()).collect();
        let check = EAN13_RULE.calculate(&isbn13)?;
        isbn13.push(check);
        Ok(isbn13)
    }
}

impl CheckDigit for IsbnCheckDigit {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        if code.trim().is_empty() {
            return Err(CheckDigitError::MissingCode);
        }
        match code.chars().count() {
            9 => ISBN10_RULE.calculate(code).map(String::from),
            12 => EAN13_RULE.calculate(code).map(String::from),
            actual => Err(CheckDigitError::InvalidLength {
                scheme: "ISBN",
                actual,
                expected: "9 or 12".to_string(),
            }),
        }
    }

    fn is_valid(&self, code: &str) -> bool {
        match code.chars().count() {
            10 => ISBN10_RULE.is_valid(code),
            13 => EAN13_RULE.is_valid(code),
            actual => {
                tracing::debug!(scheme = "ISBN", actual, "ISBN validation rejected code length");
                false
            }
        }
    }
}
