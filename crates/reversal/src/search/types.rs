//! Data types for the reversal search: ranges, results, config, errors.

use std::fmt;

use crate::signed::SignedSequence;

/// Longest sequence the search accepts by default.
pub const MAX_SEQUENCE_LEN: usize = 10;

/// Inclusive index range `[start, end]` of one signed reversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reversal {
    pub start: usize,
    pub end: usize,
}

impl Reversal {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "reversal start {start} > end {end}");
        Self { start, end }
    }

    /// Number of elements inside the range.
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx <= self.end
    }

    /// # Panics
    /// If the range does not fit `seq`.
    #[inline]
    pub fn apply(&self, seq: &SignedSequence) -> SignedSequence {
        seq.apply_reversal(self.start, self.end)
    }

    /// All `n(n+1)/2` ranges for length `n`, ascending `start` then ascending `end`.
    pub fn all(n: usize) -> impl Iterator<Item = Reversal> {
        (0..n).flat_map(move |i| (i..n).map(move |j| Reversal::new(i, j)))
    }
}

impl fmt::Display for Reversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Inputs longer than this fail with `SearchError::LengthExceeded`.
    /// The state space grows as `2^n · n!`, so raising it is rarely useful.
    pub max_len: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            max_len: MAX_SEQUENCE_LEN,
        }
    }
}

/// Fatal input errors; the search never starts when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// One of the sequences is longer than the configured cap.
    LengthExceeded { len: usize, max: usize },
    /// Initial and target sequences differ in length.
    LengthMismatch { initial: usize, target: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::LengthExceeded { len, max } => write!(
                f,
                "sequence has {len} elements; at most {max} are supported"
            ),
            SearchError::LengthMismatch { initial, target } => write!(
                f,
                "sequences must have the same length (initial: {initial}, target: {target})"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// Result of a reversal-distance query.
///
/// `path[0]` is the initial sequence. When the target is reachable the last
/// path entry equals it and `reversals[k]` turns `path[k]` into `path[k + 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformation {
    /// `None` when the target is unreachable (different label multisets).
    pub distance: Option<usize>,
    pub path: Vec<SignedSequence>,
    pub reversals: Vec<Reversal>,
}

impl Transformation {
    pub(crate) fn unreachable(initial: SignedSequence) -> Self {
        Self {
            distance: None,
            path: vec![initial],
            reversals: Vec::new(),
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Distance with `-1` standing for "unreachable".
    pub fn signed_distance(&self) -> i64 {
        self.distance.map_or(-1, |d| d as i64)
    }

    /// Re-apply `reversals` to `path[0]`; yields the final state of the chain.
    pub fn replay(&self) -> SignedSequence {
        let first = self.path.first().cloned().unwrap_or_default();
        self.reversals.iter().fold(first, |s, r| r.apply(&s))
    }
}
