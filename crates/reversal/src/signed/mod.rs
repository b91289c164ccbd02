//! Signed elements and sequences (genes with a strand direction).
//!
//! Purpose
//! - Provide the immutable value types every engine consumes: `Sign`,
//!   `SignedElement`, and the `SignedSequence` snapshot.
//! - Own token parsing so callers never hand unchecked labels to the search.
//!
//! Conventions
//! - Labels are unsigned integers. A token is an optional `+`/`-` followed by
//!   base-10 digits; a missing sign means `+`.
//! - Sequences are never edited in place. Every operator returns a new value,
//!   which is what lets the search deduplicate states by hashing them.

mod parse;
mod types;

pub use parse::{parse_sequence, ParseError};
pub use types::{Sign, SignedElement, SignedSequence};

#[cfg(test)]
mod tests;
