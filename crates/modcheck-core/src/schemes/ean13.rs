//! # EAN-13 / UPC / ISBN-13
//!
//! Modulus 10. Reading right to left, the check digit has weight 1 and the
//! digits before it alternate 3, 1, 3, 1, ...
//!
//! The same rule covers UPC-A (12 digits) and ISBN-13, so the rule does not
//! enforce a length.
//!
//! References:
//! - <https://en.wikipedia.org/wiki/International_Article_Number>
//! - <https://en.wikipedia.org/wiki/Universal_Product_Code>

use crate::alphabet::Alphabet;
use crate::modulus::ModulusRule;

/// Weight by `right_pos % 2`: even positions weigh 3, odd positions 1.
const POSITION_WEIGHT: [u64; 2] = [3, 1];

fn weighted_value(char_value: u32, _left_pos: usize, right_pos: usize) -> u64 {
    u64::from(char_value) * POSITION_WEIGHT[right_pos % 2]
}

/// Modulus 10 EAN-13 rule.
pub static EAN13_RULE: ModulusRule =
    ModulusRule::new("EAN-13", 10, weighted_value, Alphabet::Decimal);
