//! Builders for single-leaf rules.
//!
//! Each builder turns a predicate, an extractor, or a pair of extractors plus
//! a message into a [`Validate<T>`]. A failing predicate always produces
//! `Invalid(Error::Single(message))`; nothing here panics on ordinary failure.
//!
//! The [`string`], [`number`] and [`collection`] submodules specialise the same
//! shape to common domain tests.
//!
//! # Examples
//!
//! ```
//! use rule_rail::checks::{check_equals, check_is_true};
//! use rule_rail::combinators::all;
//!
//! struct SignUp {
//!     password: String,
//!     confirmation: String,
//!     accepted_terms: bool,
//! }
//!
//! let rule = all([
//!     check_equals(
//!         |s: &SignUp| s.password.as_str(),
//!         |s: &SignUp| s.confirmation.as_str(),
//!         "passwords do not match",
//!     ),
//!     check_is_true(|s: &SignUp| s.accepted_terms, "terms must be accepted"),
//! ]);
//!
//! let input = SignUp {
//!     password: "hunter2".into(),
//!     confirmation: "hunter3".into(),
//!     accepted_terms: false,
//! };
//! assert_eq!(
//!     rule.validate(&input).errors(),
//!     vec!["passwords do not match", "terms must be accepted"]
//! );
//! ```

pub mod collection;
pub mod number;
pub mod string;

pub use collection::*;
pub use number::*;
pub use string::*;

use crate::rule::Validate;
use crate::types::alloc_type::String;
use crate::types::Either;
use crate::validation::core::Validation;

/// Leaf message reported by [`never`].
pub const NEVER_MESSAGE: &str = "validation never succeeds";

/// A rule that accepts every value.
#[inline]
pub fn always<T: ?Sized + 'static>() -> Validate<T> {
    Validate::new(|_| Validation::Valid)
}

/// A rule that rejects every value with [`NEVER_MESSAGE`].
#[inline]
pub fn never<T: ?Sized + 'static>() -> Validate<T> {
    Validate::new(|_| Validation::invalid(NEVER_MESSAGE))
}

/// Passes when `test` returns `true`.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::check_is_true;
///
/// let positive = check_is_true(|n: &i64| *n > 0, "must be positive");
/// assert!(positive.validate(&3).is_valid());
/// assert_eq!(positive.validate(&0).errors(), vec!["must be positive"]);
/// ```
pub fn check_is_true<T, F>(test: F, message: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value| Validation::from_bool(test(value), message.as_str()))
}

/// Passes when `test` returns `false`.
pub fn check_is_false<T, F>(test: F, message: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value| Validation::from_bool(!test(value), message.as_str()))
}

/// Like [`check_is_true`], with the failure message computed from the rejected value.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::check_is_true_with_computed_message;
///
/// let small = check_is_true_with_computed_message(
///     |n: &u32| *n < 10,
///     |n| format!("{n} is not below 10"),
/// );
/// assert_eq!(small.validate(&12).errors(), vec!["12 is not below 10"]);
/// ```
pub fn check_is_true_with_computed_message<T, F, M>(test: F, message: M) -> Validate<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
    M: Fn(&T) -> String + Send + Sync + 'static,
{
    Validate::new(move |value| {
        if test(value) {
            Validation::Valid
        } else {
            Validation::invalid(message(value))
        }
    })
}

/// Like [`check_is_false`], with the failure message computed from the rejected value.
pub fn check_is_false_with_computed_message<T, F, M>(test: F, message: M) -> Validate<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
    M: Fn(&T) -> String + Send + Sync + 'static,
{
    check_is_true_with_computed_message(move |value: &T| !test(value), message)
}

/// Passes when both extracted values are equal.
pub fn check_equals<T, A, F, G>(value1: F, value2: G, message: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    A: PartialEq + ?Sized,
    F: for<'a> Fn(&'a T) -> &'a A + Send + Sync + 'static,
    G: for<'a> Fn(&'a T) -> &'a A + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value| {
        Validation::from_bool(value1(value) == value2(value), message.as_str())
    })
}

/// Passes when the extracted values differ.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::check_not_equals;
///
/// struct Transfer {
///     from: String,
///     to: String,
/// }
///
/// let rule = check_not_equals(
///     |t: &Transfer| t.from.as_str(),
///     |t: &Transfer| t.to.as_str(),
///     "cannot transfer to the same account",
/// );
/// let same = Transfer { from: "A-1".into(), to: "A-1".into() };
/// assert!(rule.validate(&same).is_invalid());
/// ```
pub fn check_not_equals<T, A, F, G>(value1: F, value2: G, message: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    A: PartialEq + ?Sized,
    F: for<'a> Fn(&'a T) -> &'a A + Send + Sync + 'static,
    G: for<'a> Fn(&'a T) -> &'a A + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value| {
        Validation::from_bool(value1(value) != value2(value), message.as_str())
    })
}

/// Passes when the extractor finds a value.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::check_is_defined;
///
/// struct Order {
///     coupon: Option<String>,
/// }
///
/// let rule = check_is_defined(|o: &Order| o.coupon.as_ref(), "coupon is required");
/// assert!(rule.validate(&Order { coupon: Some("SPRING".into()) }).is_valid());
/// assert!(rule.validate(&Order { coupon: None }).is_invalid());
/// ```
pub fn check_is_defined<T, A, F>(extract: F, message: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    A: ?Sized,
    F: for<'a> Fn(&'a T) -> Option<&'a A> + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value| Validation::from_bool(extract(value).is_some(), message.as_str()))
}

/// Passes when the extractor finds nothing.
pub fn check_is_empty<T, A, F>(extract: F, message: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    A: ?Sized,
    F: for<'a> Fn(&'a T) -> Option<&'a A> + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value| Validation::from_bool(extract(value).is_none(), message.as_str()))
}

/// Lifts an outcome that already encodes the rule: `Err(message)` fails, `Ok(_)` passes.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::check_from_result;
///
/// let port = check_from_result(|s: &str| {
///     s.parse::<u16>().map_err(|_| format!("'{s}' is not a port number"))
/// });
/// assert!(port.validate("8080").is_valid());
/// assert_eq!(port.validate("http").errors(), vec!["'http' is not a port number"]);
/// ```
pub fn check_from_result<T, A, M, F>(test: F) -> Validate<T>
where
    T: ?Sized + 'static,
    M: Into<String>,
    F: Fn(&T) -> Result<A, M> + Send + Sync + 'static,
{
    Validate::new(move |value| match test(value) {
        Ok(_) => Validation::Valid,
        Err(message) => Validation::invalid(message),
    })
}

/// Lifts an [`Either`]: `Left(message)` fails, `Right(_)` passes.
pub fn check_from_either<T, A, M, F>(test: F) -> Validate<T>
where
    T: ?Sized + 'static,
    M: Into<String>,
    F: Fn(&T) -> Either<M, A> + Send + Sync + 'static,
{
    check_from_result(move |value: &T| test(value).into_result())
}
