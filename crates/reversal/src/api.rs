//! Curated entry points for callers (CLI, benches).
//!
//! Re-exports the three core queries (`reversal_distance`, `expand`,
//! `decompose_cycles`) and composes them into `explain`, which annotates every
//! state of an optimal chain with its breakpoint-graph decomposition.

pub use crate::breakpoint::{
    breakpoints, decompose_cycles, decompose_cycles_with, expand, DecomposeCfg, Decomposition,
    Edge, EdgeKind, ExpandedSequence, PairingRule, SentinelRule, Token,
};
pub use crate::rand::{draw_instance, random_signed_permutation, InstanceCfg};
pub use crate::search::{
    find_reversal, reconstruct_reversals, reversal_distance, reversal_distance_with, Reversal,
    SearchCfg, SearchError, Transformation,
};
pub use crate::signed::{parse_sequence, ParseError, Sign, SignedElement, SignedSequence};

/// One state of a chain together with the reversal leaving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepView {
    pub sequence: SignedSequence,
    /// `None` for the last state.
    pub reversal: Option<Reversal>,
    pub expanded: ExpandedSequence,
    pub decomposition: Decomposition,
}

/// Search result plus one `StepView` per path state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub transformation: Transformation,
    pub steps: Vec<StepView>,
}

/// Solve with default settings and decompose every state on the path.
pub fn explain(
    initial: &SignedSequence,
    target: &SignedSequence,
) -> Result<Explanation, SearchError> {
    explain_with(SearchCfg::default(), DecomposeCfg::default(), initial, target)
}

pub fn explain_with(
    scfg: SearchCfg,
    dcfg: DecomposeCfg,
    initial: &SignedSequence,
    target: &SignedSequence,
) -> Result<Explanation, SearchError> {
    let transformation = reversal_distance_with(scfg, initial, target)?;
    let steps = transformation
        .path
        .iter()
        .enumerate()
        .map(|(k, s)| {
            let expanded = expand(s);
            let decomposition = decompose_cycles_with(dcfg, &expanded);
            StepView {
                sequence: s.clone(),
                reversal: transformation.reversals.get(k).copied(),
                expanded,
                decomposition,
            }
        })
        .collect();
    Ok(Explanation {
        transformation,
        steps,
    })
}
