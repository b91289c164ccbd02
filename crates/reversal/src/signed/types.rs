//! Value types for signed sequences.

use std::fmt;

/// Strand orientation of one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// `+1` or `-1`.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }

    #[inline]
    pub fn is_plus(self) -> bool {
        self == Sign::Plus
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => f.write_str("+"),
            Sign::Minus => f.write_str("-"),
        }
    }
}

/// A labeled unit with an orientation. Equality and hashing use `(value, sign)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignedElement {
    pub value: u32,
    pub sign: Sign,
}

impl SignedElement {
    #[inline]
    pub fn new(value: u32, sign: Sign) -> Self {
        Self { value, sign }
    }

    #[inline]
    pub fn plus(value: u32) -> Self {
        Self::new(value, Sign::Plus)
    }

    #[inline]
    pub fn minus(value: u32) -> Self {
        Self::new(value, Sign::Minus)
    }

    /// Same label, opposite orientation.
    #[inline]
    pub fn flip(self) -> Self {
        Self::new(self.value, self.sign.flip())
    }
}

impl fmt::Display for SignedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.value)
    }
}

/// Ordered snapshot of signed elements.
///
/// Length limits are not enforced here; the search checks its own cap before
/// it starts (see `search::SearchCfg`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignedSequence(Vec<SignedElement>);

impl SignedSequence {
    pub fn new(elements: Vec<SignedElement>) -> Self {
        Self(elements)
    }

    /// The sorted, all-positive sequence `[+1, +2, ..., +n]`.
    pub fn identity(n: u32) -> Self {
        Self((1..=n).map(SignedElement::plus).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn elements(&self) -> &[SignedElement] {
        &self.0
    }

    pub fn into_elements(self) -> Vec<SignedElement> {
        self.0
    }

    /// Sorted label multiset, ignoring orientation.
    ///
    /// Two sequences are mutually reachable by reversals iff these agree.
    pub fn unsigned_labels(&self) -> Vec<u32> {
        let mut labels: Vec<u32> = self.0.iter().map(|e| e.value).collect();
        labels.sort_unstable();
        labels
    }

    /// Reverse the sub-range `[i, j]` and flip the sign of every element in it.
    ///
    /// `i == j` is a single sign flip. The input is left untouched.
    ///
    /// # Panics
    /// If `i > j` or `j >= self.len()`.
    pub fn apply_reversal(&self, i: usize, j: usize) -> Self {
        assert!(
            i <= j && j < self.0.len(),
            "reversal range [{i}, {j}] out of bounds for length {}",
            self.0.len()
        );
        let mut out = self.0.clone();
        out[i..=j].reverse();
        for e in &mut out[i..=j] {
            *e = e.flip();
        }
        Self(out)
    }
}

impl From<Vec<SignedElement>> for SignedSequence {
    fn from(elements: Vec<SignedElement>) -> Self {
        Self(elements)
    }
}

impl FromIterator<SignedElement> for SignedSequence {
    fn from_iter<I: IntoIterator<Item = SignedElement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SignedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, e) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}
