//! Size rules for slices, all of type `Validate<[E]>`.
//!
//! Combine with [`check_prop`](crate::combinators::check_prop) to apply them to
//! a `Vec` field: `check_prop(|o: &Order| o.lines.as_slice(), collection_non_empty("..."))`.

use crate::rule::Validate;
use crate::types::alloc_type::String;
use crate::validation::core::Validation;

/// Passes when the slice has at least one element.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::collection_non_empty;
///
/// let rule = collection_non_empty::<u32>("at least one item is required");
/// assert!(rule.validate(&[7]).is_valid());
/// assert!(rule.validate(&[]).is_invalid());
/// ```
pub fn collection_non_empty<E: 'static>(message: impl Into<String>) -> Validate<[E]> {
    let message = message.into();
    Validate::new(move |value: &[E]| Validation::from_bool(!value.is_empty(), message.as_str()))
}

pub fn collection_min_size<E: 'static>(min: usize, message: impl Into<String>) -> Validate<[E]> {
    let message = message.into();
    Validate::new(move |value: &[E]| Validation::from_bool(value.len() >= min, message.as_str()))
}

pub fn collection_max_size<E: 'static>(max: usize, message: impl Into<String>) -> Validate<[E]> {
    let message = message.into();
    Validate::new(move |value: &[E]| Validation::from_bool(value.len() <= max, message.as_str()))
}

/// Passes when the element count lies in `min..=max`.
pub fn collection_size_in_range<E: 'static>(
    min: usize,
    max: usize,
    message: impl Into<String>,
) -> Validate<[E]> {
    let message = message.into();
    Validate::new(move |value: &[E]| {
        Validation::from_bool(value.len() >= min && value.len() <= max, message.as_str())
    })
}
