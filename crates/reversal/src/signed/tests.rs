use super::*;
use proptest::prelude::*;

fn seq(s: &str) -> SignedSequence {
    parse_sequence(s).unwrap()
}

#[test]
fn parse_explicit_and_implied_signs() {
    let s = seq("+1, -2, 3");
    assert_eq!(
        s.elements(),
        &[
            SignedElement::plus(1),
            SignedElement::minus(2),
            SignedElement::plus(3)
        ]
    );
    // whitespace-only separators work too
    assert_eq!(seq("+1 -2 +3"), seq("+1,-2,+3"));
    assert_eq!(s.to_string(), "+1, -2, +3");
}

#[test]
fn parse_rejects_non_numeric_labels() {
    let err = parse_sequence("+1, -x, +3").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidToken {
            position: 1,
            token: "-x".to_string()
        }
    );
    assert!(parse_sequence("+").is_err());
    assert!(parse_sequence("++3").is_err());
    assert!(parse_sequence("+-3").is_err());
    assert!("1.5".parse::<SignedElement>().is_err());
}

#[test]
fn parse_empty_input() {
    assert_eq!(parse_sequence("").unwrap_err(), ParseError::Empty);
    assert_eq!(parse_sequence(" , ,  ").unwrap_err(), ParseError::Empty);
}

#[test]
fn reversal_flips_and_reverses_range_only() {
    let s = seq("+1, -2, +3, -4");
    let r = s.apply_reversal(1, 2);
    assert_eq!(r, seq("+1, -3, +2, -4"));
    // input untouched
    assert_eq!(s, seq("+1, -2, +3, -4"));
    // single element flip
    assert_eq!(s.apply_reversal(3, 3), seq("+1, -2, +3, +4"));
    // whole sequence
    assert_eq!(s.apply_reversal(0, 3), seq("+4, -3, +2, -1"));
}

#[test]
#[should_panic]
fn reversal_out_of_bounds_panics() {
    seq("+1, +2").apply_reversal(1, 2);
}

#[test]
fn identity_and_labels() {
    assert_eq!(SignedSequence::identity(3), seq("+1, +2, +3"));
    assert_eq!(seq("-3, +1, -1").unsigned_labels(), vec![1, 1, 3]);
    assert_eq!(Sign::Minus.as_i8(), -1);
    assert_eq!(Sign::Minus.flip(), Sign::Plus);
}

fn signed_sequence(max_len: usize) -> impl Strategy<Value = SignedSequence> {
    prop::collection::vec((1u32..=12, any::<bool>()), 1..=max_len).prop_map(|v| {
        v.into_iter()
            .map(|(value, plus)| {
                SignedElement::new(value, if plus { Sign::Plus } else { Sign::Minus })
            })
            .collect::<SignedSequence>()
    })
}

proptest! {
    #[test]
    fn double_reversal_is_identity((s, i, j) in signed_sequence(10).prop_flat_map(|s| {
        let n = s.len();
        (Just(s), 0..n).prop_flat_map(move |(s, i)| (Just(s), Just(i), i..n))
    })) {
        prop_assert_eq!(s.apply_reversal(i, j).apply_reversal(i, j), s);
    }

    #[test]
    fn display_round_trips_through_parser(s in signed_sequence(10)) {
        prop_assert_eq!(parse_sequence(&s.to_string()).unwrap(), s);
    }
}
