//! Delegation of a derived part of the input to a nested rule.
//!
//! Failures of the nested rule surface unchanged: no extra wrapping, no
//! rewritten messages.

use crate::rule::Validate;
use crate::types::Either;
use crate::validation::core::Validation;

/// Leaf message reported when an optional part is required but absent.
pub const MISSING_VALUE_MESSAGE: &str = "required value is missing";

/// Validates a value computed from the input.
///
/// Use this when the extractor produces an owned value; see [`check_prop`] for
/// borrowed fields.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::number_less_or_equal;
/// use rule_rail::combinators::check_with;
///
/// struct Basket {
///     prices: Vec<u32>,
/// }
///
/// let rule = check_with(
///     |b: &Basket| b.prices.iter().sum::<u32>(),
///     number_less_or_equal(100, "basket total exceeds 100"),
/// );
/// assert!(rule.validate(&Basket { prices: vec![40, 50] }).is_valid());
/// assert!(rule.validate(&Basket { prices: vec![60, 50] }).is_invalid());
/// ```
pub fn check_with<T, E, F>(extract: F, rule: Validate<E>) -> Validate<T>
where
    T: ?Sized + 'static,
    E: 'static,
    F: Fn(&T) -> E + Send + Sync + 'static,
{
    Validate::new(move |value| rule.validate(&extract(value)))
}

/// Validates a part of the input borrowed from it, typically a field.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_non_empty;
/// use rule_rail::combinators::check_prop;
///
/// struct City {
///     name: String,
/// }
///
/// let rule = check_prop(|c: &City| c.name.as_str(), string_non_empty("city name is required"));
/// assert_eq!(
///     rule.validate(&City { name: String::new() }).errors(),
///     vec!["city name is required"]
/// );
/// ```
pub fn check_prop<T, E, F>(extract: F, rule: Validate<E>) -> Validate<T>
where
    T: ?Sized + 'static,
    E: ?Sized + 'static,
    F: for<'a> Fn(&'a T) -> &'a E + Send + Sync + 'static,
{
    Validate::new(move |value| rule.validate(extract(value)))
}

/// Validates an optional part of the input when it is present.
///
/// When the extractor finds nothing the outcome is `Valid` if `is_valid_if_none`
/// is set, and otherwise a failure with [`MISSING_VALUE_MESSAGE`].
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_non_blank;
/// use rule_rail::combinators::check_if_some;
///
/// struct Profile {
///     nickname: Option<String>,
/// }
///
/// let rule = check_if_some(
///     |p: &Profile| p.nickname.as_deref(),
///     string_non_blank("nickname cannot be blank"),
///     true,
/// );
/// assert!(rule.validate(&Profile { nickname: None }).is_valid());
/// assert!(rule.validate(&Profile { nickname: Some("  ".into()) }).is_invalid());
/// ```
pub fn check_if_some<T, E, F>(extract: F, rule: Validate<E>, is_valid_if_none: bool) -> Validate<T>
where
    T: ?Sized + 'static,
    E: ?Sized + 'static,
    F: for<'a> Fn(&'a T) -> Option<&'a E> + Send + Sync + 'static,
{
    Validate::new(move |value| match extract(value) {
        Some(element) => rule.validate(element),
        None => none_outcome(is_valid_if_none),
    })
}

/// Validates whichever side of a two-variant value is present.
///
/// Exactly one of the two rules is evaluated, chosen by the value's own tag.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::{check_is_true, number_greater_than};
/// use rule_rail::combinators::check_either;
/// use rule_rail::Either;
///
/// struct Payment {
///     method: Either<String, u64>,
/// }
///
/// let rule = check_either(
///     |p: &Payment| p.method.as_ref(),
///     check_is_true(|iban: &String| !iban.is_empty(), "iban is required")
///         .with_error_prefix("transfer: "),
///     number_greater_than(0, "card number is required").with_error_prefix("card: "),
/// );
///
/// let by_card = Payment { method: Either::Right(0) };
/// assert_eq!(rule.validate(&by_card).errors(), vec!["card: card number is required"]);
/// ```
pub fn check_either<T, L, R, F>(
    extract: F,
    left_rule: Validate<L>,
    right_rule: Validate<R>,
) -> Validate<T>
where
    T: ?Sized + 'static,
    L: ?Sized + 'static,
    R: ?Sized + 'static,
    F: for<'a> Fn(&'a T) -> Either<&'a L, &'a R> + Send + Sync + 'static,
{
    Validate::new(move |value| match extract(value) {
        Either::Left(left) => left_rule.validate(left),
        Either::Right(right) => right_rule.validate(right),
    })
}

pub(crate) fn none_outcome(is_valid_if_none: bool) -> Validation {
    if is_valid_if_none {
        Validation::Valid
    } else {
        Validation::invalid(MISSING_VALUE_MESSAGE)
    }
}
