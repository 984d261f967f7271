//! Per-element validation of sequences.
//!
//! Indices are zero-based. Unless a custom prefix function is given, the error
//! of a failing element is prefixed with `"item {index}: "`, see
//! [`item_prefix`]. Failures of several elements are grouped with
//! [`Error::And`](crate::Error::And) in element order; a single failing
//! element comes out unwrapped.

use crate::combinators::nested::none_outcome;
use crate::rule::Validate;
use crate::types::alloc_type::{format, String};
use crate::types::Accumulator;
use crate::validation::core::Validation;

/// Default per-element prefix: `"item {index}: "`, with a zero-based index.
///
/// # Examples
///
/// ```
/// use rule_rail::combinators::item_prefix;
///
/// assert_eq!(item_prefix(1), "item 1: ");
/// ```
#[inline]
pub fn item_prefix(index: usize) -> String {
    format!("item {index}: ")
}

fn validate_elements<E, P>(elements: &[E], rule: &Validate<E>, prefix: &P) -> Validation
where
    E: 'static,
    P: Fn(usize) -> String,
{
    let mut acc = Accumulator::all();
    for (index, element) in elements.iter().enumerate() {
        if let Validation::Invalid(error) = rule.validate(element) {
            acc.push(error.with_prefix(&prefix(index)));
        }
    }
    acc.finish()
}

/// Applies `rule` to every element of the extracted sequence.
///
/// An empty sequence is valid.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_non_empty;
/// use rule_rail::combinators::check_each;
///
/// struct Tags {
///     values: Vec<String>,
/// }
///
/// let rule = check_each(
///     |t: &Tags| t.values.as_slice(),
///     string_non_empty("tag is empty").on_deref(),
/// );
/// let tags = Tags { values: vec!["rust".into(), String::new(), "cli".into()] };
/// assert_eq!(rule.validate(&tags).errors(), vec!["item 1: tag is empty"]);
/// ```
pub fn check_each<T, E, F>(extract: F, rule: Validate<E>) -> Validate<T>
where
    T: ?Sized + 'static,
    E: 'static,
    F: for<'a> Fn(&'a T) -> &'a [E] + Send + Sync + 'static,
{
    check_each_with_error_prefix(extract, rule, item_prefix)
}

/// [`check_each`] with a custom index-based prefix.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::number_greater_than;
/// use rule_rail::combinators::check_each_with_error_prefix;
///
/// let rule = check_each_with_error_prefix(
///     |v: &Vec<i32>| v.as_slice(),
///     number_greater_than(0, "must be positive"),
///     |i| format!("quantities[{i}] "),
/// );
/// assert_eq!(
///     rule.validate(&vec![1, -2, 0]).errors(),
///     vec!["quantities[1] must be positive", "quantities[2] must be positive"]
/// );
/// ```
pub fn check_each_with_error_prefix<T, E, F, P>(
    extract: F,
    rule: Validate<E>,
    prefix: P,
) -> Validate<T>
where
    T: ?Sized + 'static,
    E: 'static,
    F: for<'a> Fn(&'a T) -> &'a [E] + Send + Sync + 'static,
    P: Fn(usize) -> String + Send + Sync + 'static,
{
    Validate::new(move |value| validate_elements(extract(value), &rule, &prefix))
}

/// Like [`check_each`], but an empty sequence is skipped without running anything.
pub fn check_each_if_non_empty<T, E, F>(extract: F, rule: Validate<E>) -> Validate<T>
where
    T: ?Sized + 'static,
    E: 'static,
    F: for<'a> Fn(&'a T) -> &'a [E] + Send + Sync + 'static,
{
    check_each_if_non_empty_with_error_prefix(extract, rule, item_prefix)
}

pub fn check_each_if_non_empty_with_error_prefix<T, E, F, P>(
    extract: F,
    rule: Validate<E>,
    prefix: P,
) -> Validate<T>
where
    T: ?Sized + 'static,
    E: 'static,
    F: for<'a> Fn(&'a T) -> &'a [E] + Send + Sync + 'static,
    P: Fn(usize) -> String + Send + Sync + 'static,
{
    Validate::new(move |value| {
        let elements = extract(value);
        if elements.is_empty() {
            Validation::Valid
        } else {
            validate_elements(elements, &rule, &prefix)
        }
    })
}

/// Applies `rule` to every element of an optional sequence.
///
/// An absent sequence is valid when `is_valid_if_none` is set, and otherwise
/// fails with [`MISSING_VALUE_MESSAGE`](crate::combinators::MISSING_VALUE_MESSAGE).
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_non_empty;
/// use rule_rail::combinators::check_each_if_some;
///
/// struct Draft {
///     reviewers: Option<Vec<String>>,
/// }
///
/// let rule = check_each_if_some(
///     |d: &Draft| d.reviewers.as_deref(),
///     string_non_empty("reviewer is empty").on_deref(),
///     false,
/// );
/// assert_eq!(
///     rule.validate(&Draft { reviewers: None }).errors(),
///     vec!["required value is missing"]
/// );
/// assert!(rule.validate(&Draft { reviewers: Some(vec!["kim".into()]) }).is_valid());
/// ```
pub fn check_each_if_some<T, E, F>(
    extract: F,
    rule: Validate<E>,
    is_valid_if_none: bool,
) -> Validate<T>
where
    T: ?Sized + 'static,
    E: 'static,
    F: for<'a> Fn(&'a T) -> Option<&'a [E]> + Send + Sync + 'static,
{
    check_each_if_some_with_error_prefix(extract, rule, item_prefix, is_valid_if_none)
}

pub fn check_each_if_some_with_error_prefix<T, E, F, P>(
    extract: F,
    rule: Validate<E>,
    prefix: P,
    is_valid_if_none: bool,
) -> Validate<T>
where
    T: ?Sized + 'static,
    E: 'static,
    F: for<'a> Fn(&'a T) -> Option<&'a [E]> + Send + Sync + 'static,
    P: Fn(usize) -> String + Send + Sync + 'static,
{
    Validate::new(move |value| match extract(value) {
        Some(elements) => validate_elements(elements, &rule, &prefix),
        None => none_outcome(is_valid_if_none),
    })
}
