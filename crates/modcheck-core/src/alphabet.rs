//! # Code Alphabets
//!
//! The set of characters a scheme accepts, and the mapping between those
//! characters and their numeric values. Conversion is the only fallible
//! per-character step of the checksum, so it is modelled as a `Result`.

use crate::error::ConversionError;

/// Characters accepted by a numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// ASCII digits `0`-`9` in every position.
    Decimal,
    /// ASCII digits, plus uppercase `X` meaning ten in the check position.
    /// Used by the modulus-11 schemes (ISBN-10, ISSN).
    DecimalOrX,
}

impl Alphabet {
    /// Convert one character of a code to its numeric value.
    ///
    /// `right_pos == 1` identifies the check position; only there does
    /// [`Alphabet::DecimalOrX`] accept `X`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidCharacter`] if the character is not
    /// in the alphabet at this position.
    pub fn to_value(
        self,
        character: char,
        left_pos: usize,
        right_pos: usize,
    ) -> Result<u32, ConversionError> {
        if let Some(value) = character.to_digit(10) {
            return Ok(value);
        }
        match self {
            Self::DecimalOrX if right_pos == 1 && character == 'X' => Ok(10),
            _ => Err(ConversionError::InvalidCharacter {
                position: left_pos,
                character,
            }),
        }
    }

    /// Convert a computed check value back to its character.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidCheckValue`] if the value has no
    /// character in this alphabet.
    pub fn to_check_char(self, value: u32) -> Result<char, ConversionError> {
        match (self, value) {
            (_, 0..=9) => {
                char::from_digit(value, 10).ok_or(ConversionError::InvalidCheckValue(value))
            }
            (Self::DecimalOrX, 10) => Ok('X'),
            _ => Err(ConversionError::InvalidCheckValue(value)),
        }
    }
}
