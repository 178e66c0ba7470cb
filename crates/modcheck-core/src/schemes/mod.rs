//! # Numbering Schemes
//!
//! One module per scheme. Each declares a `static` [`ModulusRule`] and the
//! weight function it carries; the generic engine in [`crate::modulus`] does
//! the rest. [`isbn`] is the exception: it dispatches between ISBN-10 and
//! ISBN-13 by length rather than defining a rule of its own.
//!
//! [`ModulusRule`]: crate::modulus::ModulusRule

pub mod ean13;
pub mod isbn;
pub mod isbn10;
pub mod issn;
pub mod luhn;
