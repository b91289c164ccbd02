//! Breakpoint-graph expansion and cycle decomposition.
//!
//! Purpose
//! - Map a signed sequence onto its extremity nodes bounded by the sentinels
//!   `L` and `R` (`expand`).
//! - Pair extremities with union edges, point every extremity at the extremity
//!   it desires in sorted order, and group nodes into cycles
//!   (`decompose_cycles`).
//!
//! Design
//! - Every node's desire edge is computed exactly once in a single pass, and
//!   cycle groups are connected components of a disjoint-set forest over the
//!   emitted edges. There is no exploratory trace, so no reconciliation pass is
//!   needed afterwards.
//! - All bookkeeping is owned by the call; decompositions of different
//!   sequences can run concurrently.
//!
//! Conventions
//! - Node indices are 0-based positions in the expanded sequence: `L` is 0 and
//!   `R` is `2n + 1`.
//! - `SentinelRule::Inert` (default): sentinels desire nothing.
//!   `SentinelRule::Extremal`: `R` desires the `-v` token with the largest `v`,
//!   `L` desires the token right after it when that token is negative.
//! - `PairingRule::Element` (default): union edges join the two extremities of
//!   one element, `(2k+1, 2k+2)`.
//!   `PairingRule::Adjacency`: union edges join neighbouring extremities of
//!   consecutive elements, `(2k, 2k+1)`, sentinels included. This is the
//!   classical breakpoint graph whose cycle count `c` bounds the reversal
//!   distance from below by `n + 1 - c`.

mod cycles;
mod expand;
mod types;

pub use cycles::{
    breakpoints, decompose_cycles, decompose_cycles_with, union_partner, DesireFunction,
};
pub use expand::expand;
pub use types::{
    DecomposeCfg, Decomposition, Edge, EdgeKind, ExpandedSequence, PairingRule, SentinelRule,
    Token,
};

#[cfg(test)]
mod tests;
