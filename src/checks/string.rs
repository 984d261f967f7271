//! String rules, all of type `Validate<str>`.
//!
//! Lengths are counted in `char`s, not bytes.

use crate::rule::Validate;
use crate::types::alloc_type::String;
use crate::validation::core::Validation;

/// Passes when the string has at least one character.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_non_empty;
///
/// let rule = string_non_empty("name is required");
/// assert!(rule.validate("Ada").is_valid());
/// assert_eq!(rule.validate("").errors(), vec!["name is required"]);
/// ```
pub fn string_non_empty(message: impl Into<String>) -> Validate<str> {
    let message = message.into();
    Validate::new(move |value: &str| Validation::from_bool(!value.is_empty(), message.as_str()))
}

/// Passes when the string contains something other than whitespace.
pub fn string_non_blank(message: impl Into<String>) -> Validate<str> {
    let message = message.into();
    Validate::new(move |value: &str| {
        Validation::from_bool(!value.trim().is_empty(), message.as_str())
    })
}

pub fn string_min_length(min: usize, message: impl Into<String>) -> Validate<str> {
    let message = message.into();
    Validate::new(move |value: &str| {
        Validation::from_bool(value.chars().count() >= min, message.as_str())
    })
}

pub fn string_max_length(max: usize, message: impl Into<String>) -> Validate<str> {
    let message = message.into();
    Validate::new(move |value: &str| {
        Validation::from_bool(value.chars().count() <= max, message.as_str())
    })
}

/// Passes when the character count lies in `min..=max`.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_length_in_range;
///
/// let rule = string_length_in_range(2, 4, "code must have 2 to 4 characters");
/// assert!(rule.validate("PL").is_valid());
/// assert!(rule.validate("POLAND").is_invalid());
/// ```
pub fn string_length_in_range(min: usize, max: usize, message: impl Into<String>) -> Validate<str> {
    let message = message.into();
    Validate::new(move |value: &str| {
        let length = value.chars().count();
        Validation::from_bool(length >= min && length <= max, message.as_str())
    })
}

/// Passes when every character satisfies `test`. The empty string passes.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::string_all_chars;
///
/// let digits = string_all_chars(|c| c.is_ascii_digit(), "must contain only digits");
/// assert!(digits.validate("0042").is_valid());
/// assert!(digits.validate("42a").is_invalid());
/// ```
pub fn string_all_chars<F>(test: F, message: impl Into<String>) -> Validate<str>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Validate::new(move |value: &str| {
        Validation::from_bool(value.chars().all(&test), message.as_str())
    })
}

pub fn string_starts_with(prefix: impl Into<String>, message: impl Into<String>) -> Validate<str> {
    let prefix = prefix.into();
    let message = message.into();
    Validate::new(move |value: &str| {
        Validation::from_bool(value.starts_with(prefix.as_str()), message.as_str())
    })
}

/// Passes when `pattern` matches somewhere in the string.
///
/// Anchor the pattern with `^...$` to require a full match.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use rule_rail::checks::string_matches;
///
/// let rule = string_matches(Regex::new(r"^[a-z]+@[a-z]+\.[a-z]{2,}$").unwrap(), "invalid email");
/// assert!(rule.validate("ada@example.org").is_valid());
/// assert!(rule.validate("ada.example.org").is_invalid());
/// ```
#[cfg(feature = "regex")]
pub fn string_matches(pattern: regex::Regex, message: impl Into<String>) -> Validate<str> {
    let message = message.into();
    Validate::new(move |value: &str| {
        Validation::from_bool(pattern.is_match(value), message.as_str())
    })
}
