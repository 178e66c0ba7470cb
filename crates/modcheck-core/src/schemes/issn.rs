//! # ISSN
//!
//! Modulus 11 over exactly eight characters. Reading left to right the first
//! seven digits weigh 8 down to 2 and the check character weighs 1. A check
//! value of ten is written `X`. Callers strip the hyphen (`0317-8471` →
//! `03178471`) before handing the code over.
//!
//! Reference: <https://en.wikipedia.org/wiki/International_Standard_Serial_Number>

use crate::alphabet::Alphabet;
use crate::modulus::ModulusRule;

fn weighted_value(char_value: u32, left_pos: usize, _right_pos: usize) -> u64 {
    u64::from(char_value) * 9usize.saturating_sub(left_pos) as u64
}

/// Modulus 11 ISSN rule, eight characters including the check character.
pub static ISSN_RULE: ModulusRule =
    ModulusRule::new("ISSN", 11, weighted_value, Alphabet::DecimalOrX).with_length(8);
