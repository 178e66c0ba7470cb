//! # CheckDigit Trait
//!
//! The public seam every scheme is consumed through. Validation answers a
//! yes/no question and never errors; calculation either produces the check
//! character(s) or fails with a [`CheckDigitError`].

use crate::error::CheckDigitError;
use crate::modulus::ModulusRule;

/// Calculate and validate check digits for one numbering scheme.
///
/// Implementations hold no per-call state and are shared freely across
/// threads.
pub trait CheckDigit {
    /// Calculate the check character(s) for a code body (no check character).
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError`] if the body is blank, has a length the
    /// scheme does not accept, or contains characters outside its alphabet.
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError>;

    /// Validate a code whose trailing character(s) are the check digit.
    fn is_valid(&self, code: &str) -> bool;

    /// Validate a possibly absent code. `None` is never valid.
    fn is_valid_opt(&self, code: Option<&str>) -> bool {
        code.is_some_and(|c| self.is_valid(c))
    }
}

impl CheckDigit for ModulusRule {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        ModulusRule::calculate(self, code).map(String::from)
    }

    fn is_valid(&self, code: &str) -> bool {
        ModulusRule::is_valid(self, code)
    }
}
