//! Ordering rules for numbers and anything else that is `PartialOrd`.
//!
//! Values that do not compare (such as `NaN`) fail every rule here.

use crate::rule::Validate;
use crate::types::alloc_type::String;
use crate::validation::core::Validation;
use core::ops::RangeBounds;

pub fn number_greater_than<N>(bound: N, message: impl Into<String>) -> Validate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value: &N| Validation::from_bool(*value > bound, message.as_str()))
}

pub fn number_greater_or_equal<N>(bound: N, message: impl Into<String>) -> Validate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value: &N| Validation::from_bool(*value >= bound, message.as_str()))
}

pub fn number_less_than<N>(bound: N, message: impl Into<String>) -> Validate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value: &N| Validation::from_bool(*value < bound, message.as_str()))
}

pub fn number_less_or_equal<N>(bound: N, message: impl Into<String>) -> Validate<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value: &N| Validation::from_bool(*value <= bound, message.as_str()))
}

/// Passes when the value lies in `range`.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::number_in_range;
///
/// let percent = number_in_range(0.0..=100.0, "must be a percentage");
/// assert!(percent.validate(&42.5).is_valid());
/// assert!(percent.validate(&100.1).is_invalid());
/// assert!(percent.validate(&f64::NAN).is_invalid());
///
/// let hour = number_in_range(0u8..24, "not an hour of the day");
/// assert!(hour.validate(&24).is_invalid());
/// ```
pub fn number_in_range<N, R>(range: R, message: impl Into<String>) -> Validate<N>
where
    N: PartialOrd + 'static,
    R: RangeBounds<N> + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value: &N| Validation::from_bool(range.contains(value), message.as_str()))
}
