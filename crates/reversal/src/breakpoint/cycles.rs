//! Union pairing, desire function, and cycle grouping.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::signed::{Sign, SignedSequence};

use super::expand::expand;
use super::types::{
    DecomposeCfg, Decomposition, Edge, EdgeKind, ExpandedSequence, PairingRule, SentinelRule,
    Token,
};

/// Union partner of node `idx` in an expansion of length `len`.
///
/// Involutive; never maps a node to itself. Under `PairingRule::Element` the
/// sentinels have no partner.
pub fn union_partner(idx: usize, len: usize, pairing: PairingRule) -> Option<usize> {
    match pairing {
        PairingRule::Element => {
            if idx == 0 || idx + 1 >= len {
                None
            } else if idx % 2 == 1 {
                Some(idx + 1)
            } else {
                Some(idx - 1)
            }
        }
        PairingRule::Adjacency => {
            if idx >= len {
                None
            } else if idx % 2 == 0 {
                Some(idx + 1)
            } else {
                Some(idx - 1)
            }
        }
    }
}

/// Desire target of every node, computed once per expansion.
///
/// - `+v` desires `-(v+1)`, or `R` when no such token exists.
/// - `-v` desires `+(v-1)` when `v > 1` and the token exists, otherwise `L`.
/// - Sentinels follow the `SentinelRule`.
///
/// When a token occurs more than once, its first occurrence is the target.
#[derive(Clone, Debug)]
pub struct DesireFunction {
    targets: Vec<Option<usize>>,
}

impl DesireFunction {
    pub fn new(expanded: &ExpandedSequence, rule: SentinelRule) -> Self {
        let tokens = expanded.tokens();
        let mut first_at: HashMap<Token, usize> = HashMap::with_capacity(tokens.len());
        for (k, t) in tokens.iter().enumerate() {
            first_at.entry(*t).or_insert(k);
        }
        let (left, right) = (expanded.left(), expanded.right());
        let lookup = |value: u32, sign: Sign| first_at.get(&Token::extremity(value, sign)).copied();

        let targets = tokens
            .iter()
            .enumerate()
            .map(|(k, t)| match *t {
                Token::Extremity {
                    value,
                    sign: Sign::Plus,
                } => Some(
                    value
                        .checked_add(1)
                        .and_then(|w| lookup(w, Sign::Minus))
                        .unwrap_or(right),
                ),
                Token::Extremity {
                    value,
                    sign: Sign::Minus,
                } => Some(if value > 1 {
                    lookup(value - 1, Sign::Plus).unwrap_or(left)
                } else {
                    left
                }),
                Token::Left => match rule {
                    SentinelRule::Inert => None,
                    SentinelRule::Extremal => match tokens.get(k + 1) {
                        Some(Token::Extremity {
                            sign: Sign::Minus, ..
                        }) => Some(k + 1),
                        _ => None,
                    },
                },
                Token::Right => match rule {
                    SentinelRule::Inert => None,
                    SentinelRule::Extremal => most_negative(tokens),
                },
            })
            .collect();
        Self { targets }
    }

    #[inline]
    pub fn target(&self, idx: usize) -> Option<usize> {
        self.targets.get(idx).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Node holding the `-v` token with the largest `v` (first one on ties).
fn most_negative(tokens: &[Token]) -> Option<usize> {
    let mut best: Option<(u32, usize)> = None;
    for (k, t) in tokens.iter().enumerate() {
        if let Token::Extremity {
            value,
            sign: Sign::Minus,
        } = *t
        {
            if best.map_or(true, |(v, _)| value > v) {
                best = Some((value, k));
            }
        }
    }
    best.map(|(_, k)| k)
}

/// Disjoint-set forest with path compression and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Decompose with `DecomposeCfg::default()` (inert sentinels, element pairing).
pub fn decompose_cycles(expanded: &ExpandedSequence) -> Decomposition {
    decompose_cycles_with(DecomposeCfg::default(), expanded)
}

/// Emit every union edge and every desire edge exactly once, then group nodes
/// into connected components.
///
/// Under `PairingRule::Element` components are taken over extremities only and
/// each group additionally lists the sentinels its members touch, so `L`/`R`
/// can be shared between groups. Under `PairingRule::Adjacency` sentinels are
/// ordinary nodes of the graph.
pub fn decompose_cycles_with(cfg: DecomposeCfg, expanded: &ExpandedSequence) -> Decomposition {
    let len = expanded.len();
    let desire = DesireFunction::new(expanded, cfg.sentinel_rule);
    let mut edges = BTreeSet::new();

    for idx in 0..len {
        if let Some(partner) = union_partner(idx, len, cfg.pairing) {
            if idx < partner {
                edges.insert(Edge {
                    source: idx,
                    target: partner,
                    kind: EdgeKind::Union,
                });
            }
        }
        if let Some(target) = desire.target(idx) {
            edges.insert(Edge {
                source: idx,
                target,
                kind: EdgeKind::Desire,
            });
        }
    }

    let merges_through = |idx: usize| match cfg.pairing {
        PairingRule::Element => !expanded.is_sentinel(idx),
        PairingRule::Adjacency => true,
    };
    let mut dsu = DisjointSet::new(len);
    for e in &edges {
        if merges_through(e.source) && merges_through(e.target) {
            dsu.union(e.source, e.target);
        }
    }

    let mut groups: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    let mut order: Vec<usize> = Vec::new();
    for idx in (0..len).filter(|&i| merges_through(i)) {
        let root = dsu.find(idx);
        groups
            .entry(root)
            .or_insert_with(|| {
                order.push(root);
                BTreeSet::new()
            })
            .insert(idx);
    }
    if cfg.pairing == PairingRule::Element {
        // Attach sentinels to every group one of their edges touches.
        for e in &edges {
            let (inner, sentinel) = match (merges_through(e.source), merges_through(e.target)) {
                (true, false) => (e.source, e.target),
                (false, true) => (e.target, e.source),
                _ => continue,
            };
            let root = dsu.find(inner);
            if let Some(group) = groups.get_mut(&root) {
                group.insert(sentinel);
            }
        }
    }

    let cycles = order
        .into_iter()
        .filter_map(|root| groups.remove(&root))
        .collect();
    Decomposition { edges, cycles }
}

/// Adjacencies of the expanded sequence (`L` with the first extremity, each
/// element's tail with the next head, the last extremity with `R`) that are not
/// joined by a desire edge in either direction.
pub fn breakpoints(seq: &SignedSequence) -> usize {
    let expanded = expand(seq);
    let desire = DesireFunction::new(&expanded, SentinelRule::Inert);
    (0..=seq.len())
        .map(|k| (2 * k, 2 * k + 1))
        .filter(|&(a, b)| desire.target(a) != Some(b) && desire.target(b) != Some(a))
        .count()
}
