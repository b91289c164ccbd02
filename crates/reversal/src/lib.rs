//! Sorting signed sequences by reversals.
//!
//! Two engines share one value model:
//! - `search`: exhaustive breadth-first search for a minimum chain of signed
//!   reversals between two sequences, plus recovery of each step's range.
//! - `breakpoint`: expansion of a sequence into extremity nodes and its
//!   decomposition into union/desire edges and cycle groups.
//!
//! Everything here is pure and synchronous. Inputs are immutable snapshots and
//! every operator returns a new value.

pub mod api;
pub mod breakpoint;
pub mod rand;
pub mod search;
pub mod signed;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use breakpoint::{decompose_cycles, expand};
pub use search::{reversal_distance, Reversal, Transformation};
pub use signed::{parse_sequence, Sign, SignedElement, SignedSequence};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{explain, explain_with, Explanation, StepView};
    pub use crate::breakpoint::{
        decompose_cycles, decompose_cycles_with, expand, DecomposeCfg, Decomposition, EdgeKind,
        PairingRule, SentinelRule,
    };
    pub use crate::search::{
        reversal_distance, reversal_distance_with, Reversal, SearchCfg, SearchError,
        Transformation,
    };
    pub use crate::signed::{parse_sequence, Sign, SignedElement, SignedSequence};
}
