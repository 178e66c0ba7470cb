#![deny(missing_docs)]

//! # modcheck-core: Modulus Check-Digit Algorithms
//!
//! Computes and verifies the single redundancy character appended to product
//! codes, book numbers and serial numbers so that single-digit errors and most
//! transpositions are caught.
//!
//! ## Design Principles
//!
//! 1. **One engine, many schemes.** The weighted-sum-modulo-N algorithm lives
//!    once, in [`modulus::checksum`]. A scheme is a [`ModulusRule`] value:
//!    a modulus, a weight function pointer, an [`Alphabet`] and an optional
//!    fixed length. No scheme re-implements summation or digit conversion.
//!
//! 2. **Tagged variant, not a type hierarchy.** Callers pick a scheme through
//!    the [`Scheme`] enum or its singleton constants
//!    ([`EAN13_CHECK_DIGIT`], [`ISBN10_CHECK_DIGIT`], ...). All rules are
//!    immutable statics, shared across threads without locking.
//!
//! 3. **Two failure channels.** [`CheckDigit::is_valid`] answers `false` for
//!    any malformed or mismatching code and never errors.
//!    [`CheckDigit::calculate`] returns a [`CheckDigitError`] when the body
//!    cannot be converted.
//!
//! ## Example
//!
//! ```
//! use modcheck_core::{CheckDigit, EAN13_CHECK_DIGIT};
//!
//! assert_eq!(EAN13_CHECK_DIGIT.calculate("400638133393").unwrap(), "1");
//! assert!(EAN13_CHECK_DIGIT.is_valid("4006381333931"));
//! assert!(!EAN13_CHECK_DIGIT.is_valid("4006381333932"));
//! ```
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.
//! - Library code emits `tracing` events and never installs a subscriber.

pub mod alphabet;
pub mod check_digit;
pub mod error;
pub mod modulus;
pub mod scheme;
pub mod schemes;

// Re-export primary types at crate root for ergonomic imports.
pub use alphabet::Alphabet;
pub use check_digit::CheckDigit;
pub use error::{CheckDigitError, ConversionError};
pub use modulus::{checksum, sum_digits, ModulusRule, WeightFn};
pub use scheme::{
    Scheme, EAN13_CHECK_DIGIT, ISBN10_CHECK_DIGIT, ISBN13_CHECK_DIGIT, ISSN_CHECK_DIGIT,
    LUHN_CHECK_DIGIT, UPC_CHECK_DIGIT,
};
pub use schemes::isbn::{IsbnCheckDigit, ISBN_CHECK_DIGIT};
