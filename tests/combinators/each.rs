use rule_rail::checks::{number_greater_than, string_non_empty};
use rule_rail::combinators::*;
use rule_rail::{Error, Validation};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Order {
    quantities: Vec<i32>,
    notes: Option<Vec<String>>,
}

fn order(quantities: Vec<i32>) -> Order {
    Order { quantities, notes: None }
}

fn positive() -> rule_rail::Validate<i32> {
    number_greater_than(0, "must be positive")
}

#[test]
fn only_failing_element_is_reported_unwrapped() {
    let rule = check_each(|o: &Order| o.quantities.as_slice(), positive());
    assert_eq!(
        rule.validate(&order(vec![1, 0, 2])),
        Validation::Invalid(Error::single("item 1: must be positive"))
    );
}

#[test]
fn several_failing_elements_keep_index_order() {
    let rule = check_each(|o: &Order| o.quantities.as_slice(), positive());
    assert_eq!(
        rule.validate(&order(vec![-1, 3, -2])),
        Validation::Invalid(Error::and(
            Error::single("item 0: must be positive"),
            Error::single("item 2: must be positive"),
        ))
    );
}

#[test]
fn million_failing_elements_stay_usable() {
    let rule = check_each(|o: &Order| o.quantities.as_slice(), positive());
    let input = order(vec![0; 1_000_000]);

    let outcome = rule.validate(&input);
    let errors = outcome.errors();
    assert_eq!(errors.len(), 1_000_000);
    assert_eq!(errors[0], "item 0: must be positive");
    assert_eq!(errors[999_999], "item 999999: must be positive");
    drop(errors);

    let prefixed = outcome.clone().with_error_prefix("order: ");
    assert_eq!(prefixed.messages().last(), Some("order: item 999999: must be positive"));
    drop(prefixed);

    assert_eq!(rule.validate(&input), outcome);
    drop(outcome);
}

#[test]
fn empty_sequence_is_valid() {
    let rule = check_each(|o: &Order| o.quantities.as_slice(), positive());
    assert!(rule.validate(&order(vec![])).is_valid());
}

#[test]
fn custom_prefix_function() {
    let rule = check_each_with_error_prefix(
        |o: &Order| o.quantities.as_slice(),
        positive(),
        |i| format!("quantities[{}] ", i + 1),
    );
    assert_eq!(rule.validate(&order(vec![5, -5])).errors(), vec!["quantities[2] must be positive"]);
}

#[test]
fn nested_element_errors_are_prefixed_at_every_leaf() {
    let element = all([positive(), number_greater_than(10, "must exceed 10")]);
    let rule = check_each(|o: &Order| o.quantities.as_slice(), element);
    assert_eq!(
        rule.validate(&order(vec![20, -1])).errors(),
        vec!["item 1: must be positive", "item 1: must exceed 10"]
    );
}

#[test]
fn if_non_empty_skips_empty_sequences() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let element = rule_rail::Validate::new(move |n: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        Validation::from_bool(*n > 0, "must be positive")
    });
    let rule = check_each_if_non_empty(|o: &Order| o.quantities.as_slice(), element);

    assert!(rule.validate(&order(vec![])).is_valid());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(rule.validate(&order(vec![1, -1])).errors(), vec!["item 1: must be positive"]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let prefixed = check_each_if_non_empty_with_error_prefix(
        |o: &Order| o.quantities.as_slice(),
        positive(),
        |i| format!("#{i} "),
    );
    assert_eq!(prefixed.validate(&order(vec![0])).errors(), vec!["#0 must be positive"]);
}

#[test]
fn if_some_handles_absent_sequences() {
    let note = string_non_empty("note is empty").on_deref::<String>();
    let lenient = check_each_if_some(|o: &Order| o.notes.as_deref(), note.clone(), true);
    let strict = check_each_if_some(|o: &Order| o.notes.as_deref(), note.clone(), false);

    assert!(lenient.validate(&order(vec![])).is_valid());
    assert_eq!(strict.validate(&order(vec![])).errors(), vec![MISSING_VALUE_MESSAGE]);

    let with_notes = Order { quantities: vec![], notes: Some(vec!["ok".into(), String::new()]) };
    assert_eq!(lenient.validate(&with_notes).errors(), vec!["item 1: note is empty"]);

    let prefixed = check_each_if_some_with_error_prefix(
        |o: &Order| o.notes.as_deref(),
        note,
        |i| format!("note {i}: "),
        true,
    );
    assert_eq!(prefixed.validate(&with_notes).errors(), vec!["note 1: note is empty"]);
}

#[test]
fn item_prefix_is_zero_based() {
    assert_eq!(item_prefix(0), "item 0: ");
    assert_eq!(item_prefix(12), "item 12: ");
}
