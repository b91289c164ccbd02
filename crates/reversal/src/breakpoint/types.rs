//! Data types for expanded sequences and their decomposition.

use std::collections::BTreeSet;
use std::fmt;

use crate::signed::Sign;

/// One node of an expanded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// Leading sentinel `L`.
    Left,
    /// Oriented end of an element, printed `+v` or `-v`.
    Extremity { value: u32, sign: Sign },
    /// Trailing sentinel `R`.
    Right,
}

impl Token {
    #[inline]
    pub fn extremity(value: u32, sign: Sign) -> Self {
        Token::Extremity { value, sign }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Token::Left | Token::Right)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Left => f.write_str("L"),
            Token::Right => f.write_str("R"),
            Token::Extremity { value, sign } => write!(f, "{sign}{value}"),
        }
    }
}

/// `[L, e1a, e1b, ..., ena, enb, R]`, length `2n + 2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpandedSequence(pub(crate) Vec<Token>);

impl ExpandedSequence {
    /// Accept a token list shaped like an expansion: `L` first, `R` last, an
    /// even number of extremities in between and no sentinel among them.
    pub fn from_tokens(tokens: Vec<Token>) -> Option<Self> {
        let (first, last) = (tokens.first()?, tokens.last()?);
        if tokens.len() < 2 || *first != Token::Left || *last != Token::Right {
            return None;
        }
        let inner = &tokens[1..tokens.len() - 1];
        if inner.len() % 2 != 0 || inner.iter().any(Token::is_sentinel) {
            return None;
        }
        Some(Self(tokens))
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for an expansion; both sentinels are always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of elements the expansion came from.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.0.len().saturating_sub(2) / 2
    }

    #[inline]
    pub fn left(&self) -> usize {
        0
    }

    #[inline]
    pub fn right(&self) -> usize {
        self.0.len() - 1
    }

    #[inline]
    pub fn is_sentinel(&self, idx: usize) -> bool {
        idx == self.left() || idx == self.right()
    }

    /// Index of the first node holding `token`.
    pub fn index_of(&self, token: Token) -> Option<usize> {
        self.0.iter().position(|t| *t == token)
    }
}

impl fmt::Display for ExpandedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, t) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    Union,
    Desire,
}

/// Directed edge between node indices. Union edges point from the lower index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub kind: EdgeKind,
}

/// What sentinel nodes desire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SentinelRule {
    /// Sentinels have no desire edge.
    #[default]
    Inert,
    /// `R` desires the most negative `-v` token, `L` a negative right neighbour.
    Extremal,
}

/// Which extremities union edges join.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairingRule {
    /// The two extremities of the same element.
    #[default]
    Element,
    /// Neighbouring extremities of consecutive elements (sentinels included).
    Adjacency,
}

/// Decomposition configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecomposeCfg {
    pub sentinel_rule: SentinelRule,
    pub pairing: PairingRule,
}

/// Structural result of a decomposition; carries no rendering information.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decomposition {
    pub edges: BTreeSet<Edge>,
    /// Node groups ordered by their smallest member. Under `PairingRule::Element`
    /// sentinels are not merged through, so they may appear in several groups.
    pub cycles: Vec<BTreeSet<usize>>,
}

impl Decomposition {
    pub fn union_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Union)
    }

    pub fn desire_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Desire)
    }

    /// Desire target recorded for `node`, if any.
    pub fn desire_of(&self, node: usize) -> Option<usize> {
        self.desire_edges()
            .find(|e| e.source == node)
            .map(|e| e.target)
    }

    #[inline]
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Position in `cycles` of the first group containing `node`.
    pub fn cycle_of(&self, node: usize) -> Option<usize> {
        self.cycles.iter().position(|c| c.contains(&node))
    }
}
