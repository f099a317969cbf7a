//! Serial and book identifiers for catalog holdings
//!
//! This crate provides the identifier-level rules of the holdings pipeline:
//! - `IdentifierKind`: the four identifier columns (ISSN, e-ISSN, ISBN, e-ISBN)
//! - Validation: character-set and length checks that reject malformed values
//! - Comparison: equality that tolerates an `X` check-character wildcard
//!
//! Everything here is a total function over strings. Malformed input is never
//! an error; it simply fails validation or fails to match.

pub mod comparator;
pub mod kind;
pub mod validators;

pub use comparator::*;
pub use kind::*;
pub use validators::*;
