//! Shortest reversal chains between signed sequences.
//!
//! Purpose
//! - Find a minimum-length chain of signed reversals turning `initial` into
//!   `target` with a breadth-first search over sequence states.
//! - Recover, for each step of a found chain, which index range was reversed.
//!
//! Tie-break
//! - Successors are generated with `(i, j)` in ascending `i`, then ascending `j`,
//!   and the frontier is FIFO. Among several optimal chains the one returned is
//!   the first reached under this order, and the reconstructor scans ranges in
//!   the same order. Golden outputs depend on both.
//!
//! Bounds
//! - Up to `2^n · n!` states are reachable; `SearchCfg::max_len` (10) is checked
//!   once before the search starts. There is no timeout inside the engine.
//!
//! Layout: `types.rs` (data types, errors), `bfs.rs` (search),
//! `reconstruct.rs` (transition recovery).

mod bfs;
mod reconstruct;
mod types;

pub use bfs::{reversal_distance, reversal_distance_with};
pub use reconstruct::{find_reversal, reconstruct_reversals};
pub use types::{Reversal, SearchCfg, SearchError, Transformation, MAX_SEQUENCE_LEN};
