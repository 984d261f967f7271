use rule_rail::combinators::*;
use rule_rail::{Presence, Test, Validation};

struct Flags {
    a: bool,
    b: bool,
    c: bool,
}

fn flags(a: bool, b: bool, c: bool) -> Flags {
    Flags { a, b, c }
}

fn tests() -> Vec<Test<Flags>> {
    vec![Test::new(|f: &Flags| f.a), Test::new(|f: &Flags| f.b), Test::new(|f: &Flags| f.c)]
}

struct Filter {
    from: Option<u32>,
    to: Option<u32>,
    tag: Option<String>,
}

fn filter(from: Option<u32>, to: Option<u32>, tag: Option<&str>) -> Filter {
    Filter { from, to, tag: tag.map(String::from) }
}

fn presences() -> Vec<Presence<Filter>> {
    vec![
        Presence::of(|f: &Filter| f.from.as_ref()),
        Presence::of(|f: &Filter| f.to.as_ref()),
        Presence::of(|f: &Filter| f.tag.as_deref()),
    ]
}

/// Validity of `rule` for every combination of three flags, in binary order.
fn truth_table(rule: &rule_rail::Validate<Flags>) -> Vec<bool> {
    (0..8u8)
        .map(|bits| rule.is_valid(&flags(bits & 4 != 0, bits & 2 != 0, bits & 1 != 0)))
        .collect()
}

#[test]
fn boolean_cardinality_counts_hits() {
    let f = false;
    let t = true;
    assert_eq!(truth_table(&check_if_all_true(tests(), "e")), [f, f, f, f, f, f, f, t]);
    assert_eq!(truth_table(&check_if_all_false(tests(), "e")), [t, f, f, f, f, f, f, f]);
    assert_eq!(truth_table(&check_if_at_least_one_is_true(tests(), "e")), [f, t, t, t, t, t, t, t]);
    assert_eq!(truth_table(&check_if_at_most_one_is_true(tests(), "e")), [t, t, t, f, t, f, f, f]);
    assert_eq!(truth_table(&check_if_only_one_is_true(tests(), "e")), [f, t, t, f, t, f, f, f]);
}

#[test]
fn violation_reports_expectations_verbatim() {
    let rule = check_if_only_one_is_true(tests(), "exactly one of a, b, c must be set");
    assert_eq!(
        rule.validate(&flags(true, true, false)),
        Validation::invalid("exactly one of a, b, c must be set")
    );
}

#[test]
fn only_one_set_is_true() {
    let rule = check_if_only_one_set_is_true(
        vec![
            vec![Test::new(|f: &Flags| f.a), Test::new(|f: &Flags| f.b)],
            vec![Test::new(|f: &Flags| f.c)],
            vec![],
        ],
        "choose a+b or c",
    );

    assert!(rule.validate(&flags(true, true, false)).is_valid());
    assert!(rule.validate(&flags(false, false, true)).is_valid());
    // a alone does not complete the first set
    assert!(rule.validate(&flags(true, false, true)).is_valid());
    assert!(rule.validate(&flags(true, true, true)).is_invalid());
    assert_eq!(rule.validate(&flags(true, false, false)).errors(), vec!["choose a+b or c"]);
}

#[test]
fn empty_probe_lists() {
    let none: Vec<Test<Flags>> = Vec::new();
    let input = flags(false, false, false);
    assert!(check_if_all_true(none.clone(), "e").validate(&input).is_valid());
    assert!(check_if_all_false(none.clone(), "e").validate(&input).is_valid());
    assert!(check_if_at_least_one_is_true(none.clone(), "e").validate(&input).is_invalid());
    assert!(check_if_only_one_is_true(none, "e").validate(&input).is_invalid());
}

#[test]
fn presence_cardinality_counts_defined_values() {
    let all_defined = check_if_all_defined(presences(), "all required");
    let all_empty = check_if_all_empty(presences(), "none allowed");
    let all_or_none = check_if_all_or_none_defined(presences(), "all or nothing");
    let at_least_one = check_if_at_least_one_is_defined(presences(), "need one");
    let at_most_one = check_if_at_most_one_is_defined(presences(), "too many");
    let only_one = check_if_only_one_is_defined(presences(), "exactly one");

    let empty = filter(None, None, None);
    let one = filter(Some(1), None, None);
    let two = filter(Some(1), Some(2), None);
    let full = filter(Some(1), Some(2), Some("x"));

    assert_eq!(
        [&empty, &one, &two, &full].map(|f| all_defined.is_valid(f)),
        [false, false, false, true]
    );
    assert_eq!(
        [&empty, &one, &two, &full].map(|f| all_empty.is_valid(f)),
        [true, false, false, false]
    );
    assert_eq!(
        [&empty, &one, &two, &full].map(|f| all_or_none.is_valid(f)),
        [true, false, false, true]
    );
    assert_eq!(
        [&empty, &one, &two, &full].map(|f| at_least_one.is_valid(f)),
        [false, true, true, true]
    );
    assert_eq!(
        [&empty, &one, &two, &full].map(|f| at_most_one.is_valid(f)),
        [true, true, false, false]
    );
    assert_eq!(
        [&empty, &one, &two, &full].map(|f| only_one.is_valid(f)),
        [false, true, false, false]
    );
    assert_eq!(all_or_none.validate(&two).errors(), vec!["all or nothing"]);
}

#[test]
fn only_one_set_is_defined() {
    let rule = check_if_only_one_set_is_defined(
        vec![
            vec![
                Presence::of(|f: &Filter| f.from.as_ref()),
                Presence::of(|f: &Filter| f.to.as_ref()),
            ],
            vec![Presence::of(|f: &Filter| f.tag.as_deref())],
        ],
        "filter by range or by tag",
    );

    assert!(rule.validate(&filter(Some(1), Some(2), None)).is_valid());
    assert!(rule.validate(&filter(None, None, Some("x"))).is_valid());
    assert!(rule.validate(&filter(Some(1), None, Some("x"))).is_valid());
    assert!(rule.validate(&filter(Some(1), Some(2), Some("x"))).is_invalid());
    assert!(rule.validate(&filter(None, None, None)).is_invalid());
}
