//! Recover the reversed range behind each transition of a state chain.

use crate::signed::SignedSequence;

use super::types::Reversal;

/// First range (ascending `start`, then `end`) whose reversal maps `current`
/// onto `next`. Scanning in search order keeps the answer consistent with the
/// search's own tie-break when labels repeat.
pub fn find_reversal(current: &SignedSequence, next: &SignedSequence) -> Option<Reversal> {
    if current.len() != next.len() {
        return None;
    }
    Reversal::all(current.len()).find(|r| &r.apply(current) == next)
}

/// Annotate every consecutive pair of `path`.
///
/// Returns `None` if some pair is not exactly one reversal apart.
pub fn reconstruct_reversals(path: &[SignedSequence]) -> Option<Vec<Reversal>> {
    path.windows(2)
        .map(|w| find_reversal(&w[0], &w[1]))
        .collect()
}
