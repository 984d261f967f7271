use rule_rail::checks::*;
use rule_rail::{Either, Error, Validation};

pub mod collection;

struct Account {
    password: String,
    confirmation: String,
    backup_email: Option<String>,
    nickname: Option<String>,
}

fn account() -> Account {
    Account {
        password: "correct horse".into(),
        confirmation: "correct horse".into(),
        backup_email: None,
        nickname: Some("neo".into()),
    }
}

#[test]
fn always_and_never() {
    assert!(always::<str>().validate("anything").is_valid());
    assert_eq!(never::<str>().validate("anything"), Validation::invalid(NEVER_MESSAGE));
}

#[test]
fn check_is_true_and_false() {
    let even = check_is_true(|n: &u32| n % 2 == 0, "must be even");
    let odd = check_is_false(|n: &u32| n % 2 == 0, "must be odd");

    assert!(even.validate(&2).is_valid());
    assert_eq!(even.validate(&3), Validation::Invalid(Error::single("must be even")));
    assert!(odd.validate(&3).is_valid());
    assert_eq!(odd.validate(&2).errors(), vec!["must be odd"]);
}

#[test]
fn computed_messages_see_the_rejected_value() {
    let short = check_is_true_with_computed_message(
        |s: &str| s.len() <= 3,
        |s| format!("'{s}' is longer than 3"),
    );
    let not_admin = check_is_false_with_computed_message(
        |s: &str| s == "admin",
        |s| format!("'{s}' is reserved"),
    );

    assert_eq!(short.validate("abcd").errors(), vec!["'abcd' is longer than 3"]);
    assert!(short.validate("abc").is_valid());
    assert_eq!(not_admin.validate("admin").errors(), vec!["'admin' is reserved"]);
    assert!(not_admin.validate("root").is_valid());
}

#[test]
fn equals_and_not_equals_compare_extracted_values() {
    let same = check_equals(
        |a: &Account| a.password.as_str(),
        |a: &Account| a.confirmation.as_str(),
        "passwords differ",
    );
    let different = check_not_equals(
        |a: &Account| a.password.as_str(),
        |a: &Account| a.confirmation.as_str(),
        "confirmation must differ",
    );

    let mut input = account();
    assert!(same.validate(&input).is_valid());
    assert_eq!(different.validate(&input).errors(), vec!["confirmation must differ"]);

    input.confirmation.push('!');
    assert_eq!(same.validate(&input).errors(), vec!["passwords differ"]);
    assert!(different.validate(&input).is_valid());
}

#[test]
fn defined_and_empty() {
    let backup = check_is_defined(|a: &Account| a.backup_email.as_ref(), "backup email required");
    let no_nick = check_is_empty(|a: &Account| a.nickname.as_ref(), "nickname not allowed");

    let input = account();
    assert_eq!(backup.validate(&input).errors(), vec!["backup email required"]);
    assert_eq!(no_nick.validate(&input).errors(), vec!["nickname not allowed"]);

    let cleared = Account { backup_email: Some("b@c.d".into()), nickname: None, ..account() };
    assert!(backup.validate(&cleared).is_valid());
    assert!(no_nick.validate(&cleared).is_valid());
}

#[test]
fn from_result_lifts_existing_checks() {
    let port = check_from_result(|s: &str| {
        s.parse::<u16>().map_err(|e| format!("invalid port '{s}': {e}"))
    });

    assert!(port.validate("443").is_valid());
    let errors = port.validate("99999").errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("invalid port '99999'"));
}

#[test]
fn from_either_treats_left_as_failure() {
    let rule = check_from_either(|n: &i64| {
        if *n >= 0 {
            Either::Right(*n as u64)
        } else {
            Either::Left("negative")
        }
    });

    assert!(rule.validate(&5).is_valid());
    assert_eq!(rule.validate(&-5).errors(), vec!["negative"]);
}
