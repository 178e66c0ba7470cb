//! # ISBN-10
//!
//! Modulus 11. Each character is weighted by its position from the right, so
//! the check character weighs 1 and the first of ten characters weighs 10. A
//! check value of ten is written `X`.
//!
//! Reference: <https://en.wikipedia.org/wiki/ISBN>

use crate::alphabet::Alphabet;
use crate::modulus::ModulusRule;

fn weighted_value(char_value: u32, _left_pos: usize, right_pos: usize) -> u64 {
    u64::from(char_value) * right_pos as u64
}

/// Modulus 11 ISBN-10 rule.
pub static ISBN10_RULE: ModulusRule =
    ModulusRule::new("ISBN-10", 11, weighted_value, Alphabet::DecimalOrX);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_isbn10() {
        assert!(ISBN10_RULE.is_valid("1930110995"));
        assert!(ISBN10_RULE.is_valid("020161622X"));
        assert!(ISBN10_RULE.is_valid("0306406152"));
    }

    #[test]
    fn invalid_isbn10() {
        assert!(!ISBN10_RULE.is_valid("1930110996"));
        assert!(!ISBN10_RULE.is_valid("020161622x"));
        assert!(!ISBN10_RULE.is_valid("02016162X2"));
    }

    #[test]
    fn long_body_round_trips() {
        let body = "7".repeat(10_000);
        let check = ISBN10_RULE.calculate(&body).unwrap();
        assert!(ISBN10_RULE.is_valid(&format!("{body}{check}")));
    }

    #[test]
    fn long_zero_body_keeps_zero_sum_detection() {
        let zeros = "0".repeat(10_000);
        assert_eq!(
            ISBN10_RULE.calculate(&zeros),
            Err(crate::error::CheckDigitError::ZeroSum)
        );
        // A single non-zero digit far from the check position still counts.
        let body = format!("1{}", "0".repeat(9_999));
        assert!(ISBN10_RULE.calculate(&body).is_ok());
    }

    #[test]
    fn calculate_x() {
        assert_eq!(ISBN10_RULE.calculate("020161622").unwrap(), 'X');
        assert_eq!(ISBN10_RULE.calculate("193011099").unwrap(), '5');
    }
}
