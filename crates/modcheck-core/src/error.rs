//! # Error Hierarchy
//!
//! Structured error types for check-digit calculation, built with `thiserror`.
//!
//! Two layers:
//!
//! - [`ConversionError`] covers the per-character step: turning one character
//!   of a code into its numeric value, or a computed value back into a check
//!   character.
//! - [`CheckDigitError`] is what `calculate` returns. It wraps conversion
//!   failures and adds the operation-level failures (blank input, zero sum,
//!   wrong length, unknown scheme name).
//!
//! Validation never surfaces either type to the caller. A code that cannot be
//! converted is simply invalid.

use thiserror::Error;

/// Top-level error type for check-digit calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckDigitError {
    /// The code was empty or contained only whitespace.
    #[error("code is missing")]
    MissingCode,

    /// A character could not be converted to or from its numeric value.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Every character weighted to zero, so no meaningful check digit exists.
    #[error("invalid code, weighted sum is zero")]
    ZeroSum,

    /// The code length does not match what the scheme accepts.
    #[error("invalid {scheme} code length {actual} (expected {expected})")]
    InvalidLength {
        /// Scheme that rejected the code.
        scheme: &'static str,
        /// Length of the supplied code, in characters.
        actual: usize,
        /// Human-readable description of the accepted length(s).
        expected: String,
    },

    /// The supplied check character does not match the code body.
    #[error("invalid {scheme} code, check digit does not match")]
    CheckDigitMismatch {
        /// Scheme whose check digit failed.
        scheme: &'static str,
    },

    /// A scheme name did not match any known numbering scheme.
    #[error("unknown check digit scheme: \"{0}\"")]
    UnknownScheme(String),
}

/// Failure converting a single character of a code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The character is outside the scheme's alphabet at this position.
    #[error("invalid character[{position}] = '{character}'")]
    InvalidCharacter {
        /// 1-based position counted from the left.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A computed check value has no character in the scheme's alphabet.
    #[error("invalid check digit value = {0}")]
    InvalidCheckValue(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_code_display() {
        assert_eq!(format!("{}", CheckDigitError::MissingCode), "code is missing");
    }

    #[test]
    fn conversion_error_wraps_via_from() {
        let inner = ConversionError::InvalidCharacter {
            position: 3,
            character: 'a',
        };
        let err: CheckDigitError = inner.into();
        let msg = format!("{err}");
        assert!(msg.contains("conversion error"));
        assert!(msg.contains("[3]"));
        assert!(msg.contains("'a'"));
    }

    #[test]
    fn invalid_check_value_display() {
        let err = ConversionError::InvalidCheckValue(10);
        assert!(format!("{err}").contains("10"));
    }

    #[test]
    fn invalid_length_display() {
        let err = CheckDigitError::InvalidLength {
            scheme: "ISSN",
            actual: 5,
            expected: "8".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("ISSN"));
        assert!(msg.contains('5'));
        assert!(msg.contains("expected 8"));
    }

    #[test]
    fn unknown_scheme_display() {
        let err = CheckDigitError::UnknownScheme("ean99".to_string());
        assert!(format!("{err}").contains("ean99"));
    }

    #[test]
    fn check_digit_mismatch_display() {
        let err = CheckDigitError::CheckDigitMismatch { scheme: "ISBN-10" };
        let msg = format!("{err}");
        assert!(msg.contains("ISBN-10"));
        assert!(msg.contains("does not match"));
    }

    #[test]
    fn zero_sum_display() {
        assert!(format!("{}", CheckDigitError::ZeroSum).contains("zero"));
    }
}
