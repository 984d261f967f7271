//! Conditional dispatch between two rules.
//!
//! A guard, either a boolean test or another rule used as a gate, picks exactly
//! one branch. The other branch is never evaluated, and the guard's own
//! failure messages are never reported.

use crate::checks::always;
use crate::rule::Validate;

/// Applies `when_true` if `test` holds, otherwise `when_false`.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::{check_is_defined, check_is_true};
/// use rule_rail::combinators::conditionally;
///
/// struct Shipment {
///     international: bool,
///     customs_code: Option<String>,
///     weight_kg: u32,
/// }
///
/// let rule = conditionally(
///     |s: &Shipment| s.international,
///     check_is_defined(|s: &Shipment| s.customs_code.as_ref(), "customs code is required"),
///     check_is_true(|s: &Shipment| s.weight_kg <= 30, "domestic parcels are limited to 30 kg"),
/// );
///
/// let parcel = Shipment { international: true, customs_code: None, weight_kg: 50 };
/// assert_eq!(rule.validate(&parcel).errors(), vec!["customs code is required"]);
/// ```
pub fn conditionally<T, F>(test: F, when_true: Validate<T>, when_false: Validate<T>) -> Validate<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Validate::new(move |value| {
        if test(value) {
            when_true.validate(value)
        } else {
            when_false.validate(value)
        }
    })
}

/// Applies `rule` only if `test` holds; otherwise the value is valid.
pub fn when_true<T, F>(test: F, rule: Validate<T>) -> Validate<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    conditionally(test, rule, always())
}

/// Applies `rule` only if `test` does not hold; otherwise the value is valid.
pub fn when_false<T, F>(test: F, rule: Validate<T>) -> Validate<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    conditionally(test, always(), rule)
}

/// Applies `when_valid` if `guard` passes, otherwise `when_invalid`.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::{check_is_true, number_less_than};
/// use rule_rail::combinators::when;
///
/// let small = number_less_than(10, "not small");
/// let rule = when(
///     small,
///     check_is_true(|n: &i32| n % 2 == 0, "small numbers must be even"),
///     check_is_true(|n: &i32| n % 10 == 0, "large numbers must be multiples of 10"),
/// );
///
/// assert!(rule.validate(&4).is_valid());
/// assert_eq!(rule.validate(&3).errors(), vec!["small numbers must be even"]);
/// assert_eq!(rule.validate(&15).errors(), vec!["large numbers must be multiples of 10"]);
/// ```
pub fn when<T>(
    guard: Validate<T>,
    when_valid: Validate<T>,
    when_invalid: Validate<T>,
) -> Validate<T>
where
    T: ?Sized + 'static,
{
    Validate::new(move |value| {
        if guard.validate(value).is_valid() {
            when_valid.validate(value)
        } else {
            when_invalid.validate(value)
        }
    })
}

/// Applies `rule` only if `guard` passes; otherwise the value is valid.
pub fn when_valid<T>(guard: Validate<T>, rule: Validate<T>) -> Validate<T>
where
    T: ?Sized + 'static,
{
    when(guard, rule, always())
}

/// Applies `rule` only if `guard` fails; otherwise the value is valid.
pub fn when_invalid<T>(guard: Validate<T>, rule: Validate<T>) -> Validate<T>
where
    T: ?Sized + 'static,
{
    when(guard, always(), rule)
}
