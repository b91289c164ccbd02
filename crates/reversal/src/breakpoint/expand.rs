use crate::signed::{Sign, SignedSequence};

use super::types::{ExpandedSequence, Token};

/// Expand each element into its two oriented extremities between `L` and `R`.
///
/// `+v` becomes `-v +v`, and `-v` becomes `+v -v`:
/// `[+1, -3, +2]` → `L -1 +1 +3 -3 -2 +2 R`.
pub fn expand(seq: &SignedSequence) -> ExpandedSequence {
    let mut tokens = Vec::with_capacity(2 * seq.len() + 2);
    tokens.push(Token::Left);
    for e in seq.elements() {
        let (first, second) = match e.sign {
            Sign::Plus => (Sign::Minus, Sign::Plus),
            Sign::Minus => (Sign::Plus, Sign::Minus),
        };
        tokens.push(Token::extremity(e.value, first));
        tokens.push(Token::extremity(e.value, second));
    }
    tokens.push(Token::Right);
    ExpandedSequence(tokens)
}
