//! # Cross-Scheme Property Tests
//!
//! Invariants every registered scheme must satisfy:
//! - appending the calculated check character yields a valid code
//! - any single-digit substitution of a valid code is rejected
//! - validation is total (never panics, never errors)
//! - singletons are shared across threads without synchronization

use modcheck_core::{CheckDigit, Scheme};
use proptest::prelude::*;

/// Body strategy matching the scheme's accepted length.
fn body_for(scheme: Scheme) -> BoxedStrategy<String> {
    match scheme {
        Scheme::Issn => "[0-9]{7}".boxed(),
        Scheme::Isbn10 => "[0-9]{9}".boxed(),
        Scheme::Upc => "[0-9]{11}".boxed(),
        Scheme::Ean13 | Scheme::Isbn13 => "[0-9]{12}".boxed(),
        Scheme::Luhn => "[0-9]{1,19}".boxed(),
    }
}

fn scheme_and_body() -> impl Strategy<Value = (Scheme, String)> {
    proptest::sample::select(Scheme::ALL.to_vec())
        .prop_flat_map(|scheme| (Just(scheme), body_for(scheme)))
}

proptest! {
    #[test]
    fn append_then_validate((scheme, body) in scheme_and_body()) {
        if let Ok(check) = scheme.calculate(&body) {
            let code = format!("{body}{check}");
            prop_assert!(scheme.is_valid(&code), "{} rejected {}", scheme, code);
        }
    }

    #[test]
    fn single_substitution_detected(
        (scheme, body) in scheme_and_body(),
        pos_seed in any::<prop::sample::Index>(),
        delta in 1u32..10,
    ) {
        let Ok(check) = scheme.calculate(&body) else {
            return Ok(());
        };
        let mut chars: Vec<char> = format!("{body}{check}").chars().collect();
        let pos = pos_seed.index(chars.len());
        let Some(digit) = chars[pos].to_digit(10) else {
            // `X` check character: nothing to substitute digit-for-digit.
            return Ok(());
        };
        chars[pos] = char::from_digit((digit + delta) % 10, 10).unwrap();
        let mutated: String = chars.into_iter().collect();
        prop_assert!(!scheme.is_valid(&mutated), "{} accepted {}", scheme, mutated);
    }

    #[test]
    fn validation_is_total(code in ".{0,32}") {
        for scheme in Scheme::ALL {
            let _ = scheme.is_valid(&code);
        }
    }
}

#[test]
fn singletons_shared_across_threads() {
    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..1_000 {
                    assert!(Scheme::Ean13.is_valid("4006381333931"));
                    assert_eq!(Scheme::Isbn10.calculate("020161622").unwrap(), "X");
                }
            });
        }
    });
}
