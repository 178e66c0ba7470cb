//! # Luhn (modulus 10, "double-add-double")
//!
//! Used by payment card numbers and IMEIs. Reading right to left, the check
//! digit weighs 1 and the digits before it alternate 2, 1, 2, 1, ... A doubled
//! value above 9 is folded back to a single digit by summing its digits.
//!
//! Reference: <https://en.wikipedia.org/wiki/Luhn_algorithm>

use crate::alphabet::Alphabet;
use crate::modulus::{sum_digits, ModulusRule};

const POSITION_WEIGHT: [u64; 2] = [2, 1];

fn weighted_value(char_value: u32, _left_pos: usize, right_pos: usize) -> u64 {
    sum_digits(u64::from(char_value) * POSITION_WEIGHT[right_pos % 2])
}

/// Modulus 10 Luhn rule.
pub static LUHN_RULE: ModulusRule =
    ModulusRule::new("Luhn", 10, weighted_value, Alphabet::Decimal);
