use rule_rail::types::{Accumulator, Grouping};
use rule_rail::{Error, Validation};

#[test]
fn test_accumulator_new_is_empty() {
    let acc = Accumulator::new(Grouping::All);
    assert!(acc.is_empty());
    assert_eq!(acc.len(), 0);
    assert_eq!(acc.grouping(), Grouping::All);
    assert_eq!(acc.into_error(), None);
}

#[test]
fn test_accumulator_empty_finishes_valid() {
    assert_eq!(Accumulator::all().finish(), Validation::Valid);
    assert_eq!(Accumulator::any().finish(), Validation::Valid);
}

#[test]
fn test_accumulator_single_error_is_unwrapped() {
    let mut acc = Accumulator::any();
    acc.push(Error::single("only"));
    assert_eq!(acc.len(), 1);
    assert_eq!(acc.into_error(), Some(Error::single("only")));
}

#[test]
fn test_accumulator_all_groups_three_with_and() {
    let mut acc = Accumulator::all();
    acc.push(Error::single("a"));
    acc.push(Error::single("b"));
    acc.push(Error::single("c"));

    assert_eq!(
        acc.into_error(),
        Some(Error::and(Error::and(Error::single("a"), Error::single("b")), Error::single("c")))
    );
}

#[test]
fn test_accumulator_any_groups_two_with_or() {
    let mut acc = Accumulator::any();
    acc.extend([Error::single("a"), Error::single("b")]);

    assert_eq!(acc.into_error(), Some(Error::or(Error::single("a"), Error::single("b"))));
}

#[test]
fn test_accumulator_pairs_neighbours() {
    let mut acc = Accumulator::all();
    acc.extend(["a", "b", "c", "d", "e"].map(Error::single));

    assert_eq!(
        acc.into_error(),
        Some(Error::and(
            Error::and(
                Error::and(Error::single("a"), Error::single("b")),
                Error::and(Error::single("c"), Error::single("d")),
            ),
            Error::single("e"),
        ))
    );
}

#[test]
fn test_accumulator_depth_grows_logarithmically() {
    fn depth(error: &Error) -> usize {
        match error {
            Error::Single(_) => 0,
            Error::And(left, right) | Error::Or(left, right) => 1 + depth(left).max(depth(right)),
        }
    }

    let mut acc = Accumulator::any();
    acc.extend((0..1_024).map(|i| Error::single(i.to_string())));
    assert_eq!(acc.len(), 1_024);

    let error = acc.into_error().unwrap();
    assert_eq!(depth(&error), 10);
    assert_eq!(error.flatten(), (0..1_024).map(|i| i.to_string()).collect::<Vec<_>>());
}

#[test]
fn test_accumulator_push_validation_skips_valid() {
    let mut acc = Accumulator::all();
    acc.push_validation(Validation::valid());
    acc.push_validation(Validation::invalid("x"));
    acc.push_validation(Validation::valid());

    assert_eq!(acc.len(), 1);
    assert_eq!(acc.finish(), Validation::invalid("x"));
}

#[test]
fn test_accumulator_extend_with_validations() {
    let mut acc = Accumulator::all();
    acc.extend(vec![
        Validation::invalid("first"),
        Validation::valid(),
        Validation::invalid("second"),
    ]);

    assert_eq!(acc.finish().errors(), vec!["first", "second"]);
}

#[test]
fn test_accumulator_keeps_nested_trees_intact() {
    let nested = Error::or(Error::single("b1"), Error::single("b2"));
    let mut acc = Accumulator::all();
    acc.push(Error::single("a"));
    acc.push(nested.clone());

    assert_eq!(acc.into_error(), Some(Error::and(Error::single("a"), nested)));
}

#[cfg(feature = "serde")]
#[test]
fn test_accumulator_serde_round_trip() {
    let mut acc = Accumulator::any();
    acc.push(Error::single("a"));
    acc.push(Error::single("b"));

    let json = serde_json::to_string(&acc).unwrap();
    let decoded: Accumulator = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, acc);
}
