//! Token parsing: `"+1, -2, 3"` → `SignedSequence`.
//!
//! Labels are integers only. A token that is not an optional sign followed by
//! decimal digits is rejected instead of being kept as an opaque label.

use std::fmt;
use std::str::FromStr;

use super::types::{Sign, SignedElement, SignedSequence};

/// Errors surfaced while turning user text into a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No tokens were found after splitting.
    Empty,
    /// A token lacks a numeric label (position is 0-based).
    InvalidToken { position: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "input contains no elements"),
            ParseError::InvalidToken { position, token } => write!(
                f,
                "element at position {position} ('{token}') is not a signed integer label"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for SignedElement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s, 0)
    }
}

fn parse_token(raw: &str, position: usize) -> Result<SignedElement, ParseError> {
    let invalid = || ParseError::InvalidToken {
        position,
        token: raw.to_string(),
    };
    let token = raw.trim();
    let (sign, digits) = match token.as_bytes().first() {
        Some(b'+') => (Sign::Plus, &token[1..]),
        Some(b'-') => (Sign::Minus, &token[1..]),
        _ => (Sign::Plus, token),
    };
    // `u32::from_str` accepts a leading '+', which would let "++3" through.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value = digits.parse::<u32>().map_err(|_| invalid())?;
    Ok(SignedElement::new(value, sign))
}

/// Split on commas and/or whitespace, drop empty pieces, and parse each token.
pub fn parse_sequence(input: &str) -> Result<SignedSequence, ParseError> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    tokens
        .iter()
        .enumerate()
        .map(|(k, t)| parse_token(t, k))
        .collect()
}

impl FromStr for SignedSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequence(s)
    }
}
