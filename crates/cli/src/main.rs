mod provenance;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use reversal::api::{
    decompose_cycles_with, draw_instance, expand, explain_with, parse_sequence,
    reversal_distance_with, DecomposeCfg, Decomposition, ExpandedSequence, InstanceCfg,
    PairingRule, SearchCfg, SentinelRule, SignedSequence, Transformation,
};
use serde::Serialize;
use serde_json::json;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::Provenance;

/// Example pairs offered by the `demo` command.
const DEMO_PAIRS: &[(&str, &str)] = &[
    ("+1, -2, +3, -4", "+1, +2, +3, +4"),
    ("-3, +1, -2", "+1, +2, +3"),
    ("+2, -1, +4, -3", "+1, +2, +3, +4"),
    ("-1, -2, +3, +4", "+1, +2, +3, +4"),
    ("+4, -1, -3, +2", "+1, +2, +3, +4"),
    ("-5, +3, -1, +2, -4", "+1, +2, +3, +4, +5"),
    ("+3, -4, +1, -2", "+1, +2, +3, +4"),
    ("-2, +4, -1, +3", "+1, +2, +3, +4"),
    ("+1, -3, +2, -4", "+1, +2, +3, +4"),
    ("-6, +5, -4, +3, -2, +1", "+1, +2, +3, +4, +5, +6"),
];

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Signed reversal distance and breakpoint-graph decomposition")]
struct Cmd {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Longest sequence the search accepts
    #[arg(long, global = true, default_value_t = reversal::search::MAX_SEQUENCE_LEN)]
    max_len: usize,

    /// What the L/R sentinels desire
    #[arg(long, global = true, value_enum, default_value_t = SentinelArg::Inert)]
    sentinel_rule: SentinelArg,

    /// Which extremities union edges join
    #[arg(long, global = true, value_enum, default_value_t = PairingArg::Element)]
    pairing: PairingArg,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum SentinelArg {
    Inert,
    Extremal,
}

#[derive(Clone, Copy, ValueEnum)]
enum PairingArg {
    Element,
    Adjacency,
}

#[derive(Subcommand)]
enum Action {
    /// Minimum reversal chain from --initial to --target
    Solve {
        #[arg(long, allow_hyphen_values = true)]
        initial: String,
        #[arg(long, allow_hyphen_values = true)]
        target: String,
    },
    /// Expand a sequence into L, extremities, R
    Expand {
        #[arg(long, allow_hyphen_values = true)]
        seq: String,
    },
    /// Union/desire edges and cycle groups of a sequence
    Cycles {
        #[arg(long, allow_hyphen_values = true)]
        seq: String,
    },
    /// Solve, then decompose every state along the chain
    Explain {
        #[arg(long, allow_hyphen_values = true)]
        initial: String,
        #[arg(long, allow_hyphen_values = true)]
        target: String,
    },
    /// Solve the bundled example pairs
    Demo,
    /// Draw a seeded random signed permutation and sort it to the identity
    Sample {
        #[arg(long, default_value_t = 6)]
        len: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Resolved settings shared by every command.
#[derive(Clone, Copy)]
struct Settings {
    json: bool,
    search: SearchCfg,
    decompose: DecomposeCfg,
}

impl From<&Cmd> for Settings {
    fn from(cmd: &Cmd) -> Self {
        Self {
            json: cmd.json,
            search: SearchCfg {
                max_len: cmd.max_len,
            },
            decompose: DecomposeCfg {
                sentinel_rule: match cmd.sentinel_rule {
                    SentinelArg::Inert => SentinelRule::Inert,
                    SentinelArg::Extremal => SentinelRule::Extremal,
                },
                pairing: match cmd.pairing {
                    PairingArg::Element => PairingRule::Element,
                    PairingArg::Adjacency => PairingRule::Adjacency,
                },
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let settings = Settings::from(&cmd);
    match cmd.action {
        Action::Solve { initial, target } => solve(settings, &initial, &target),
        Action::Expand { seq } => expand_cmd(settings, &seq),
        Action::Cycles { seq } => cycles(settings, &seq),
        Action::Explain { initial, target } => explain(settings, &initial, &target),
        Action::Demo => demo(settings),
        Action::Sample { len, seed } => sample(settings, len, seed),
        Action::Report => report(),
    }
}

fn parse_arg(name: &str, raw: &str) -> Result<SignedSequence> {
    parse_sequence(raw).with_context(|| format!("parsing --{name} '{raw}'"))
}

fn tokens(seq: &SignedSequence) -> Vec<String> {
    seq.elements().iter().map(|e| e.to_string()).collect()
}

#[derive(Serialize)]
struct SolveOutput {
    initial: Vec<String>,
    target: Vec<String>,
    steps: Vec<Vec<String>>,
    num_steps: i64,
    reversals: Vec<(usize, usize)>,
    time: f64,
}

impl SolveOutput {
    fn new(initial: &SignedSequence, target: &SignedSequence, t: &Transformation, time: f64) -> Self {
        Self {
            initial: tokens(initial),
            target: tokens(target),
            steps: t.path.iter().map(tokens).collect(),
            num_steps: t.signed_distance(),
            reversals: t.reversals.iter().map(|r| (r.start, r.end)).collect(),
            time,
        }
    }
}

#[derive(Serialize)]
struct EdgeOutput {
    source: usize,
    target: usize,
    kind: &'static str,
}

#[derive(Serialize)]
struct DecompositionOutput {
    expanded: Vec<String>,
    edges: Vec<EdgeOutput>,
    cycles: Vec<Vec<usize>>,
}

impl DecompositionOutput {
    fn new(expanded: &ExpandedSequence, d: &Decomposition) -> Self {
        Self {
            expanded: expanded.tokens().iter().map(|t| t.to_string()).collect(),
            edges: d
                .edges
                .iter()
                .map(|e| EdgeOutput {
                    source: e.source,
                    target: e.target,
                    kind: match e.kind {
                        reversal::api::EdgeKind::Union => "union",
                        reversal::api::EdgeKind::Desire => "desire",
                    },
                })
                .collect(),
            cycles: d.cycles.iter().map(|c| c.iter().copied().collect()).collect(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_search(
    settings: Settings,
    initial: &SignedSequence,
    target: &SignedSequence,
) -> Result<(Transformation, f64)> {
    let started = Instant::now();
    let t = reversal_distance_with(settings.search, initial, target)?;
    let elapsed = started.elapsed().as_secs_f64();
    tracing::info!(
        len = initial.len(),
        distance = t.signed_distance(),
        elapsed_s = elapsed,
        "solve"
    );
    if !t.is_reachable() {
        tracing::warn!("target is not reachable from initial (label multisets differ)");
    }
    Ok((t, elapsed))
}

fn print_solution(
    settings: Settings,
    initial: &SignedSequence,
    target: &SignedSequence,
    t: &Transformation,
    elapsed: f64,
) -> Result<()> {
    if settings.json {
        return print_json(&SolveOutput::new(initial, target, t, elapsed));
    }
    print!("{}", render::format_steps(t));
    println!("total steps: {}", t.signed_distance());
    println!("elapsed: {}", render::format_time(elapsed));
    Ok(())
}

fn solve(settings: Settings, initial: &str, target: &str) -> Result<()> {
    let initial = parse_arg("initial", initial)?;
    let target = parse_arg("target", target)?;
    let (t, elapsed) = run_search(settings, &initial, &target)?;
    print_solution(settings, &initial, &target, &t, elapsed)
}

fn expand_cmd(settings: Settings, seq: &str) -> Result<()> {
    let seq = parse_arg("seq", seq)?;
    let expanded = expand(&seq);
    tracing::info!(len = seq.len(), nodes = expanded.len(), "expand");
    if settings.json {
        let tokens: Vec<String> = expanded.tokens().iter().map(|t| t.to_string()).collect();
        return print_json(&tokens);
    }
    println!("{expanded}");
    Ok(())
}

fn cycles(settings: Settings, seq: &str) -> Result<()> {
    let seq = parse_arg("seq", seq)?;
    let expanded = expand(&seq);
    let d = decompose_cycles_with(settings.decompose, &expanded);
    tracing::info!(
        len = seq.len(),
        edges = d.edges.len(),
        cycles = d.cycle_count(),
        "cycles"
    );
    if settings.json {
        return print_json(&DecompositionOutput::new(&expanded, &d));
    }
    print!("{}", render::format_decomposition(&expanded, &d));
    Ok(())
}

#[derive(Serialize)]
struct ExplainStepOutput {
    sequence: Vec<String>,
    reversal: Option<(usize, usize)>,
    #[serde(flatten)]
    decomposition: DecompositionOutput,
}

fn explain(settings: Settings, initial: &str, target: &str) -> Result<()> {
    let initial = parse_arg("initial", initial)?;
    let target = parse_arg("target", target)?;
    let ex = explain_with(settings.search, settings.decompose, &initial, &target)?;
    tracing::info!(
        len = initial.len(),
        distance = ex.transformation.signed_distance(),
        "explain"
    );
    if settings.json {
        let steps: Vec<ExplainStepOutput> = ex
            .steps
            .iter()
            .map(|s| ExplainStepOutput {
                sequence: tokens(&s.sequence),
                reversal: s.reversal.map(|r| (r.start, r.end)),
                decomposition: DecompositionOutput::new(&s.expanded, &s.decomposition),
            })
            .collect();
        return print_json(&json!({
            "distance": ex.transformation.signed_distance(),
            "steps": steps,
        }));
    }
    for (k, s) in ex.steps.iter().enumerate() {
        println!("== step {k}: {}", render::format_sequence(&s.sequence));
        if let Some(rev) = s.reversal {
            println!("   reverse {rev}");
        }
        print!("{}", render::format_decomposition(&s.expanded, &s.decomposition));
    }
    println!("total steps: {}", ex.transformation.signed_distance());
    Ok(())
}

fn demo(settings: Settings) -> Result<()> {
    let mut outputs = Vec::new();
    for (k, (initial, target)) in DEMO_PAIRS.iter().enumerate() {
        let initial = parse_arg("initial", initial)?;
        let target = parse_arg("target", target)?;
        let (t, elapsed) = run_search(settings, &initial, &target)?;
        if settings.json {
            outputs.push(SolveOutput::new(&initial, &target, &t, elapsed));
            continue;
        }
        println!("--- example {k}: {initial} -> {target}");
        print_solution(settings, &initial, &target, &t, elapsed)?;
        println!();
    }
    if settings.json {
        return print_json(&outputs);
    }
    Ok(())
}

fn sample(settings: Settings, len: u32, seed: u64) -> Result<()> {
    let initial = draw_instance(InstanceCfg { len, seed });
    let target = SignedSequence::identity(len);
    tracing::info!(len, seed, initial = %initial, "sample");
    let (t, elapsed) = run_search(settings, &initial, &target)?;
    print_solution(settings, &initial, &target, &t, elapsed)
}

fn report() -> Result<()> {
    let p = Provenance::new(json!({}));
    print_json(&p)
}
