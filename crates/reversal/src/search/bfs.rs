//! Breadth-first search over signed reversal states.

use std::collections::{HashSet, VecDeque};

use crate::signed::SignedSequence;

use super::reconstruct::reconstruct_reversals;
use super::types::{Reversal, SearchCfg, SearchError, Transformation};

/// Minimum number of signed reversals turning `initial` into `target`, with one
/// witnessing chain. Uses `SearchCfg::default()` (length cap 10).
pub fn reversal_distance(
    initial: &SignedSequence,
    target: &SignedSequence,
) -> Result<Transformation, SearchError> {
    reversal_distance_with(SearchCfg::default(), initial, target)
}

/// As [`reversal_distance`] with an explicit configuration.
pub fn reversal_distance_with(
    cfg: SearchCfg,
    initial: &SignedSequence,
    target: &SignedSequence,
) -> Result<Transformation, SearchError> {
    for len in [initial.len(), target.len()] {
        if len > cfg.max_len {
            return Err(SearchError::LengthExceeded {
                len,
                max: cfg.max_len,
            });
        }
    }
    if initial.len() != target.len() {
        return Err(SearchError::LengthMismatch {
            initial: initial.len(),
            target: target.len(),
        });
    }
    if initial == target {
        return Ok(Transformation {
            distance: Some(0),
            path: vec![initial.clone()],
            reversals: Vec::new(),
        });
    }
    // Reversals only permute labels, so a multiset mismatch can never close.
    if initial.unsigned_labels() != target.unsigned_labels() {
        tracing::debug!(len = initial.len(), "label multisets differ; target unreachable");
        return Ok(Transformation::unreachable(initial.clone()));
    }

    let Some(path) = BfsRunner::new(initial, target).solve() else {
        return Ok(Transformation::unreachable(initial.clone()));
    };
    // Every consecutive pair came from one generated reversal.
    let reversals = reconstruct_reversals(&path).unwrap_or_default();
    Ok(Transformation {
        distance: Some(path.len() - 1),
        path,
        reversals,
    })
}

/// Visited state plus the arena slot it was generated from.
struct Node {
    state: SignedSequence,
    parent: Option<usize>,
}

/// BFS runner carrying the arena, frontier, and visited set of one query.
struct BfsRunner<'a> {
    target: &'a SignedSequence,
    arena: Vec<Node>,
    frontier: VecDeque<usize>,
    visited: HashSet<SignedSequence>,
}

impl<'a> BfsRunner<'a> {
    fn new(initial: &SignedSequence, target: &'a SignedSequence) -> Self {
        let mut visited = HashSet::new();
        visited.insert(initial.clone());
        Self {
            target,
            arena: vec![Node {
                state: initial.clone(),
                parent: None,
            }],
            frontier: VecDeque::from([0]),
            visited,
        }
    }

    /// Run to completion; returns the state chain from initial to target.
    fn solve(&mut self) -> Option<Vec<SignedSequence>> {
        let n = self.target.len();
        tracing::debug!(len = n, "reversal search start");
        while let Some(cur) = self.frontier.pop_front() {
            for rev in Reversal::all(n) {
                let next = rev.apply(&self.arena[cur].state);
                // Checked on generation, not on dequeue, so the first hit wins
                // under the (i, j) ascending order.
                if &next == self.target {
                    tracing::debug!(explored = self.arena.len(), "reversal search hit target");
                    return Some(self.path_to(cur, next));
                }
                if self.visited.insert(next.clone()) {
                    self.arena.push(Node {
                        state: next,
                        parent: Some(cur),
                    });
                    self.frontier.push_back(self.arena.len() - 1);
                }
            }
        }
        tracing::debug!(explored = self.arena.len(), "reversal search exhausted");
        None
    }

    fn path_to(&self, last_parent: usize, last: SignedSequence) -> Vec<SignedSequence> {
        let mut path = vec![last];
        let mut slot = Some(last_parent);
        while let Some(k) = slot {
            path.push(self.arena[k].state.clone());
            slot = self.arena[k].parent;
        }
        path.reverse();
        path
    }
}
