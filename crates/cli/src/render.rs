//! Plain-text presentation of search results and decompositions.

use std::fmt::Write as _;

use reversal::api::{Decomposition, EdgeKind, ExpandedSequence, Reversal, SignedSequence, Transformation};

/// `[+1]  [-2]  [+3]`
pub fn format_sequence(seq: &SignedSequence) -> String {
    seq.elements()
        .iter()
        .map(|e| format!("[{e}]"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Line of `─` under the blocks covered by `rev`, blanks elsewhere, aligned
/// with `format_sequence`.
pub fn underline(seq: &SignedSequence, rev: Reversal) -> String {
    seq.elements()
        .iter()
        .enumerate()
        .map(|(k, e)| {
            let width = format!("[{e}]").chars().count();
            let fill = if rev.contains(k) { "─" } else { " " };
            fill.repeat(width)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// One block per path state, underlining the range reversed to reach the next.
pub fn format_steps(t: &Transformation) -> String {
    let mut out = String::new();
    let last = t.path.len().saturating_sub(1);
    for (k, step) in t.path.iter().enumerate() {
        let prefix = format!("Step {k}: ");
        let suffix = match k {
            0 => " - initial",
            _ if k == last => " - target",
            _ => "",
        };
        let _ = writeln!(out, "{prefix}{}{suffix}", format_sequence(step));
        if let Some(&rev) = t.reversals.get(k) {
            let pad = " ".repeat(prefix.chars().count());
            let _ = writeln!(out, "{pad}{}", underline(step, rev));
            out.push('\n');
        }
    }
    out
}

/// Human-readable duration: seconds, milliseconds, microseconds, or nanoseconds.
pub fn format_time(seconds: f64) -> String {
    if seconds >= 1.0 {
        format!("{seconds:.4} s")
    } else if seconds >= 1e-3 {
        format!("{:.4} ms", seconds * 1e3)
    } else if seconds >= 1e-6 {
        format!("{:.4} µs", seconds * 1e6)
    } else {
        format!("{:.4} ns", seconds * 1e9)
    }
}

/// `token(index)` label used when listing edges and groups.
fn node_label(expanded: &ExpandedSequence, idx: usize) -> String {
    match expanded.tokens().get(idx) {
        Some(t) => format!("{t}({idx})"),
        None => format!("?({idx})"),
    }
}

pub fn format_decomposition(expanded: &ExpandedSequence, d: &Decomposition) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "expanded: {expanded}");
    for (title, kind) in [("union edges", EdgeKind::Union), ("desire edges", EdgeKind::Desire)] {
        let _ = writeln!(out, "{title}:");
        for e in d.edges.iter().filter(|e| e.kind == kind) {
            let _ = writeln!(
                out,
                "  {} -> {}",
                node_label(expanded, e.source),
                node_label(expanded, e.target)
            );
        }
    }
    let _ = writeln!(out, "cycles: {}", d.cycle_count());
    for (k, c) in d.cycles.iter().enumerate() {
        let members: Vec<String> = c.iter().map(|&i| node_label(expanded, i)).collect();
        let _ = writeln!(out, "  #{k}: {}", members.join(" "));
    }
    out
}
