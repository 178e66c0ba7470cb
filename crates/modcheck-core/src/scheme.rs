//! # Scheme Registry
//!
//! [`Scheme`] is the tagged variant callers select a numbering scheme with.
//! Each variant resolves to a `static` [`ModulusRule`]; there is no per-scheme
//! type and no lazy initialization. Several variants share a rule (UPC and
//! ISBN-13 are EAN-13 arithmetic) but stay distinct so callers can record
//! which standard a code follows.

use std::str::FromStr;

use crate::check_digit::CheckDigit;
use crate::error::CheckDigitError;
use crate::modulus::ModulusRule;
use crate::schemes::ean13::EAN13_RULE;
use crate::schemes::isbn10::ISBN10_RULE;
use crate::schemes::issn::ISSN_RULE;
use crate::schemes::luhn::LUHN_RULE;

/// A modulus-based numbering scheme.
///
/// Every `match` on this enum is exhaustive. Adding a scheme forces each
/// consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// EAN-13 product code (modulus 10, weights 1/3).
    Ean13,
    /// UPC-A product code (EAN-13 arithmetic).
    Upc,
    /// ISBN-13 book number (EAN-13 arithmetic).
    Isbn13,
    /// ISBN-10 book number (modulus 11, `X` check value).
    Isbn10,
    /// ISSN serial number (modulus 11, eight characters).
    Issn,
    /// Luhn modulus 10 (payment cards, IMEI).
    Luhn,
}

/// Singleton EAN-13 check digit routine.
pub const EAN13_CHECK_DIGIT: Scheme = Scheme::Ean13;
/// Singleton UPC check digit routine.
pub const UPC_CHECK_DIGIT: Scheme = Scheme::Upc;
/// Singleton ISBN-13 check digit routine.
pub const ISBN13_CHECK_DIGIT: Scheme = Scheme::Isbn13;
/// Singleton ISBN-10 check digit routine.
pub const ISBN10_CHECK_DIGIT: Scheme = Scheme::Isbn10;
/// Singleton ISSN check digit routine.
pub const ISSN_CHECK_DIGIT: Scheme = Scheme::Issn;
/// Singleton Luhn check digit routine.
pub const LUHN_CHECK_DIGIT: Scheme = Scheme::Luhn;

impl Scheme {
    /// All schemes, in declaration order.
    pub const ALL: [Scheme; 6] = [
        Self::Ean13,
        Self::Upc,
        Self::Isbn13,
        Self::Isbn10,
        Self::Issn,
        Self::Luhn,
    ];

    /// The modulus rule this scheme computes with.
    pub fn rule(self) -> &'static ModulusRule {
        match self {
            Self::Ean13 | Self::Upc | Self::Isbn13 => &EAN13_RULE,
            Self::Isbn10 => &ISBN10_RULE,
            Self::Issn => &ISSN_RULE,
            Self::Luhn => &LUHN_RULE,
        }
    }

    /// Display name of the standard.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ean13 => "EAN-13",
            Self::Upc => "UPC",
            Self::Isbn13 => "ISBN-13",
            Self::Isbn10 => "ISBN-10",
            Self::Issn => "ISSN",
            Self::Luhn => "Luhn",
        }
    }
}

impl CheckDigit for Scheme {
    fn calculate(&self, code: &str) -> Result<String, CheckDigitError> {
        self.rule().calculate(code).map(String::from)
    }

    fn is_valid(&self, code: &str) -> bool {
        self.rule().is_valid(code)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = CheckDigitError;

    /// Parse a scheme name, ignoring case, `-` and `_` (`"EAN-13"`,
    /// `"ean13"` and `"isbn_10"` all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "ean13" | "ean" => Ok(Self::Ean13),
            "upc" | "upca" => Ok(Self::Upc),
            "isbn13" => Ok(Self::Isbn13),
            "isbn10" => Ok(Self::Isbn10),
            "issn" => Ok(Self::Issn),
            "luhn" => Ok(Self::Luhn),
            _ => Err(CheckDigitError::UnknownScheme(s.to_string())),
        }
    }
}
