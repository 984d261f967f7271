//! Conjunction and disjunction over lists of rules.

use crate::checks::{always, never};
use crate::rule::Validate;
use crate::types::alloc_type::{String, Vec};
use crate::types::Accumulator;
use crate::validation::core::Validation;

/// Every rule must pass; every failure is reported.
///
/// All rules run against the same input regardless of earlier failures. Two
/// or more failures are grouped with [`Error::And`](crate::Error::And) in rule
/// order, a single failure is returned unwrapped, and an empty list behaves
/// like [`always`].
///
/// # Examples
///
/// ```
/// use rule_rail::checks::{check_is_true, string_non_empty};
/// use rule_rail::combinators::{all, check_prop};
///
/// struct User {
///     name: String,
///     age: u8,
/// }
///
/// let rule = all([
///     check_prop(|u: &User| u.name.as_str(), string_non_empty("name is required")),
///     check_is_true(|u: &User| u.age >= 18, "must be an adult"),
/// ]);
///
/// let user = User { name: String::new(), age: 12 };
/// assert_eq!(rule.validate(&user).errors(), vec!["name is required", "must be an adult"]);
/// ```
pub fn all<T, I>(rules: I) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Validate<T>>,
{
    let rules: Vec<Validate<T>> = rules.into_iter().collect();
    match rules.len() {
        0 => always(),
        1 => rules.into_iter().next().unwrap_or_else(always),
        _ => Validate::new(move |value| {
            let mut acc = Accumulator::all();
            acc.extend(rules.iter().map(|rule| rule.validate(value)));
            acc.finish()
        }),
    }
}

/// [`all`], with `prefix` prepended to every failure message.
pub fn all_with_prefix<T, I>(prefix: impl Into<String>, rules: I) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Validate<T>>,
{
    all(rules).with_error_prefix(prefix)
}

/// [`all`], with a prefix computed from the input prepended to every failure message.
pub fn all_with_computed_prefix<T, I, P>(prefix: P, rules: I) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Validate<T>>,
    P: Fn(&T) -> String + Send + Sync + 'static,
{
    all(rules).with_computed_prefix(prefix)
}

/// Every rule must pass; evaluation stops at the first failure.
///
/// Use this when later rules presuppose earlier ones, e.g. a presence check
/// before a format check. Only the first failure is returned and the rules
/// after it are never evaluated.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::{check_from_result, string_non_empty};
/// use rule_rail::combinators::all_with_short_circuit;
///
/// let port = all_with_short_circuit([
///     string_non_empty("port is required"),
///     check_from_result(|s: &str| s.parse::<u16>().map_err(|_| "port must be a number")),
/// ]);
///
/// assert_eq!(port.validate("").errors(), vec!["port is required"]);
/// assert_eq!(port.validate("x").errors(), vec!["port must be a number"]);
/// ```
pub fn all_with_short_circuit<T, I>(rules: I) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Validate<T>>,
{
    let rules: Vec<Validate<T>> = rules.into_iter().collect();
    Validate::new(move |value| {
        for rule in &rules {
            if let invalid @ Validation::Invalid(_) = rule.validate(value) {
                return invalid;
            }
        }
        Validation::Valid
    })
}

/// At least one rule must pass.
///
/// Rules run in order and evaluation stops at the first success. When all
/// fail, the failures are grouped with [`Error::Or`](crate::Error::Or) in rule
/// order. An empty list behaves like [`never`].
///
/// # Examples
///
/// ```
/// use rule_rail::checks::{string_all_chars, string_starts_with};
/// use rule_rail::combinators::any;
///
/// let id = any([
///     string_starts_with("usr_", "not a user id"),
///     string_all_chars(|c| c.is_ascii_digit(), "not a numeric id"),
/// ]);
///
/// assert!(id.validate("usr_42").is_valid());
/// assert!(id.validate("42").is_valid());
/// assert_eq!(id.validate("grp_7").errors(), vec!["not a user id", "not a numeric id"]);
/// ```
pub fn any<T, I>(rules: I) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Validate<T>>,
{
    let rules: Vec<Validate<T>> = rules.into_iter().collect();
    match rules.len() {
        0 => never(),
        1 => rules.into_iter().next().unwrap_or_else(never),
        _ => Validate::new(move |value| {
            let mut acc = Accumulator::any();
            for rule in &rules {
                match rule.validate(value) {
                    Validation::Valid => return Validation::Valid,
                    Validation::Invalid(error) => acc.push(error),
                }
            }
            acc.finish()
        }),
    }
}

/// [`any`], with `prefix` prepended to every failure message.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_starts_with;
/// use rule_rail::combinators::any_with_prefix;
///
/// let rule = any_with_prefix(
///     "contact: ",
///     [string_starts_with("+", "not a phone"), string_starts_with("mailto:", "not an email")],
/// );
/// assert_eq!(rule.validate("x").errors(), vec!["contact: not a phone", "contact: not an email"]);
/// ```
pub fn any_with_prefix<T, I>(prefix: impl Into<String>, rules: I) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Validate<T>>,
{
    any(rules).with_error_prefix(prefix)
}

/// [`any`], with a prefix computed from the input prepended to every failure message.
pub fn any_with_computed_prefix<T, I, P>(prefix: P, rules: I) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Validate<T>>,
    P: Fn(&T) -> String + Send + Sync + 'static,
{
    any(rules).with_computed_prefix(prefix)
}
