use super::*;
use crate::search::reversal_distance;
use crate::signed::{parse_sequence, Sign, SignedElement, SignedSequence};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn seq(s: &str) -> SignedSequence {
    parse_sequence(s).unwrap()
}

fn labels(e: &ExpandedSequence) -> Vec<String> {
    e.tokens().iter().map(|t| t.to_string()).collect()
}

#[test]
fn expand_golden() {
    let e = expand(&seq("+1, -3, +2"));
    assert_eq!(labels(&e), ["L", "-1", "+1", "+3", "-3", "-2", "+2", "R"]);
    assert_eq!(e.to_string(), "L -1 +1 +3 -3 -2 +2 R");
    assert_eq!(e.element_count(), 3);
    assert_eq!(e.index_of(Token::extremity(3, Sign::Minus)), Some(4));
}

#[test]
fn expand_empty_sequence_is_two_sentinels() {
    let e = expand(&SignedSequence::default());
    assert_eq!(e.tokens(), &[Token::Left, Token::Right]);
    let d = decompose_cycles(&e);
    assert!(d.edges.is_empty());
    assert!(d.cycles.is_empty());
}

#[test]
fn from_tokens_checks_shape() {
    let ok = vec![
        Token::Left,
        Token::extremity(1, Sign::Minus),
        Token::extremity(1, Sign::Plus),
        Token::Right,
    ];
    assert_eq!(
        ExpandedSequence::from_tokens(ok),
        Some(expand(&seq("+1")))
    );
    assert!(ExpandedSequence::from_tokens(vec![Token::Left]).is_none());
    assert!(ExpandedSequence::from_tokens(vec![
        Token::Left,
        Token::extremity(1, Sign::Minus),
        Token::Right
    ])
    .is_none());
    assert!(ExpandedSequence::from_tokens(vec![
        Token::Left,
        Token::Right,
        Token::Left,
        Token::Right
    ])
    .is_none());
}

#[test]
fn element_pairing_joins_extremities_of_one_element() {
    let len = 8; // three elements
    assert_eq!(union_partner(0, len, PairingRule::Element), None);
    assert_eq!(union_partner(7, len, PairingRule::Element), None);
    assert_eq!(union_partner(1, len, PairingRule::Element), Some(2));
    assert_eq!(union_partner(2, len, PairingRule::Element), Some(1));
    assert_eq!(union_partner(5, len, PairingRule::Element), Some(6));
    assert_eq!(union_partner(0, len, PairingRule::Adjacency), Some(1));
    assert_eq!(union_partner(7, len, PairingRule::Adjacency), Some(6));
    assert_eq!(union_partner(8, len, PairingRule::Adjacency), None);
}

#[test]
fn desire_targets_golden() {
    // L -1 +1 +3 -3 -2 +2 R
    let e = expand(&seq("+1, -3, +2"));
    let d = DesireFunction::new(&e, SentinelRule::Inert);
    assert_eq!(d.target(0), None);
    assert_eq!(d.target(1), Some(0)); // -1 -> L
    assert_eq!(d.target(2), Some(5)); // +1 -> -2
    assert_eq!(d.target(3), Some(7)); // +3 -> R (no -4)
    assert_eq!(d.target(4), Some(6)); // -3 -> +2
    assert_eq!(d.target(5), Some(2)); // -2 -> +1
    assert_eq!(d.target(6), Some(4)); // +2 -> -3
    assert_eq!(d.target(7), None);
}

#[test]
fn desire_falls_back_to_left_for_missing_predecessor() {
    // -3 has no +2 here
    let e = expand(&seq("+1, +3"));
    let d = DesireFunction::new(&e, SentinelRule::Inert);
    // L -1 +1 -3 +3 R
    assert_eq!(d.target(3), Some(0));
    assert_eq!(d.target(2), Some(5)); // +1 -> R (no -2)
}

#[test]
fn extremal_sentinels() {
    // L +1 -1 -2 +2 R : L is followed by a positive token
    let e = expand(&seq("-1, +2"));
    let d = DesireFunction::new(&e, SentinelRule::Extremal);
    assert_eq!(d.target(0), None);
    assert_eq!(d.target(5), Some(3)); // -2 is the most negative

    // L -2 +2 ... : L desires its negative neighbour
    let e = expand(&seq("+2, -1"));
    let d = DesireFunction::new(&e, SentinelRule::Extremal);
    assert_eq!(d.target(0), Some(1));
    assert_eq!(d.target(e.right()), Some(1));

    let dec = decompose_cycles_with(
        DecomposeCfg {
            sentinel_rule: SentinelRule::Extremal,
            ..DecomposeCfg::default()
        },
        &e,
    );
    assert_eq!(dec.desire_of(0), Some(1));
    assert_eq!(dec.desire_of(e.right()), Some(1));
}

#[test]
fn element_decomposition_golden() {
    // L -1 +1 +3 -3 -2 +2 R
    let e = expand(&seq("+1, -3, +2"));
    let d = decompose_cycles(&e);
    let unions: Vec<(usize, usize)> = d.union_edges().map(|e| (e.source, e.target)).collect();
    assert_eq!(unions, vec![(1, 2), (3, 4), (5, 6)]);
    let desires: Vec<(usize, usize)> = d.desire_edges().map(|e| (e.source, e.target)).collect();
    assert_eq!(desires, vec![(1, 0), (2, 5), (3, 7), (4, 6), (5, 2), (6, 4)]);
    // one chain L .. R through every element
    assert_eq!(d.cycle_count(), 1);
    assert_eq!(d.cycles[0], (0..8).collect::<BTreeSet<_>>());
}

#[test]
fn element_groups_share_sentinels() {
    // labels 1 and 3 never desire each other: two groups, both touching L and R
    let e = expand(&seq("+1, +3"));
    let d = decompose_cycles(&e);
    assert_eq!(d.cycle_count(), 2);
    assert_eq!(d.cycles[0], BTreeSet::from([0, 1, 2, 5]));
    assert_eq!(d.cycles[1], BTreeSet::from([0, 3, 4, 5]));
    assert_eq!(d.cycle_of(3), Some(1));
    assert_eq!(d.cycle_of(0), Some(0));
}

#[test]
fn adjacency_decomposition_of_identity_is_all_trivial_cycles() {
    let n = 5;
    let e = expand(&SignedSequence::identity(n));
    let cfg = DecomposeCfg {
        pairing: PairingRule::Adjacency,
        ..DecomposeCfg::default()
    };
    let d = decompose_cycles_with(cfg, &e);
    assert_eq!(d.cycle_count(), n as usize + 1);
    for (k, c) in d.cycles.iter().enumerate() {
        assert_eq!(*c, BTreeSet::from([2 * k, 2 * k + 1]));
    }
}

#[test]
fn adjacency_decomposition_of_single_flip() {
    // L +1 -1 R: one cycle through both sentinels
    let cfg = DecomposeCfg {
        pairing: PairingRule::Adjacency,
        ..DecomposeCfg::default()
    };
    let d = decompose_cycles_with(cfg, &expand(&seq("-1")));
    assert_eq!(d.cycles, vec![BTreeSet::from([0, 1, 2, 3])]);
}

#[test]
fn breakpoints_count() {
    assert_eq!(breakpoints(&SignedSequence::identity(4)), 0);
    assert_eq!(breakpoints(&seq("-1")), 2);
    // +1 -2 +3 -4: every adjacency except L|+1 is broken
    assert_eq!(breakpoints(&seq("+1, -2, +3, -4")), 4);
}

fn signed_permutation(n: u32) -> impl Strategy<Value = SignedSequence> {
    (
        Just((1..=n).collect::<Vec<u32>>()).prop_shuffle(),
        prop::collection::vec(any::<bool>(), n as usize),
    )
        .prop_map(|(labels, signs)| {
            labels
                .into_iter()
                .zip(signs)
                .map(|(v, plus)| SignedElement::new(v, if plus { Sign::Plus } else { Sign::Minus }))
                .collect::<SignedSequence>()
        })
}

fn any_signed_sequence() -> impl Strategy<Value = SignedSequence> {
    prop::collection::vec((1u32..=12, any::<bool>()), 0..=10).prop_map(|v| {
        v.into_iter()
            .map(|(value, plus)| {
                SignedElement::new(value, if plus { Sign::Plus } else { Sign::Minus })
            })
            .collect::<SignedSequence>()
    })
}

proptest! {
    #[test]
    fn expansion_shape(s in any_signed_sequence()) {
        let e = expand(&s);
        prop_assert_eq!(e.len(), 2 * s.len() + 2);
        prop_assert_eq!(e.tokens()[0], Token::Left);
        prop_assert_eq!(*e.tokens().last().unwrap(), Token::Right);
        prop_assert!(e.tokens()[1..e.len() - 1].iter().all(|t| !t.is_sentinel()));
        for k in 0..s.len() {
            prop_assert_ne!(e.tokens()[2 * k + 1], e.tokens()[2 * k + 2]);
        }
    }

    #[test]
    fn element_pairing_is_fixed_point_free_involution(n in 0usize..=10) {
        let len = 2 * n + 2;
        for idx in 1..len - 1 {
            let p = union_partner(idx, len, PairingRule::Element).unwrap();
            prop_assert_ne!(p, idx);
            prop_assert!(p >= 1 && p < len - 1);
            prop_assert_eq!(union_partner(p, len, PairingRule::Element), Some(idx));
        }
    }

    #[test]
    fn every_extremity_has_exactly_one_desire_edge(s in any_signed_sequence(), extremal in any::<bool>()) {
        let e = expand(&s);
        let cfg = DecomposeCfg {
            sentinel_rule: if extremal { SentinelRule::Extremal } else { SentinelRule::Inert },
            pairing: PairingRule::Element,
        };
        let d = decompose_cycles_with(cfg, &e);
        for idx in 1..e.len() - 1 {
            prop_assert_eq!(d.desire_edges().filter(|x| x.source == idx).count(), 1);
        }
        // every extremity sits in exactly one group
        for idx in 1..e.len() - 1 {
            prop_assert_eq!(d.cycles.iter().filter(|c| c.contains(&idx)).count(), 1);
        }
    }

    #[test]
    fn adjacency_cycles_bound_the_distance(
        s in (1u32..=5).prop_flat_map(signed_permutation)
    ) {
        let n = s.len();
        let cfg = DecomposeCfg { pairing: PairingRule::Adjacency, ..DecomposeCfg::default() };
        let c = decompose_cycles_with(cfg, &expand(&s)).cycle_count();
        let d = reversal_distance(&s, &SignedSequence::identity(n as u32))
            .unwrap()
            .distance
            .unwrap();
        prop_assert!(d + c >= n + 1, "d={} c={} n={}", d, c, n);
    }
}
