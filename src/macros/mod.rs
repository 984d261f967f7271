//! Shorthand macros for building rules.
//!
//! - [`macro@crate::all`] - Conjunction over a comma-separated list of rules.
//! - [`macro@crate::any`] - Disjunction over a comma-separated list of rules.
//! - [`macro@crate::rule`] - A boolean check with a `format!`-style message.
//!
//! # Examples
//!
//! ```
//! use rule_rail::{all, any, rule};
//!
//! let limit = 10;
//! let small_or_round = any![
//!     rule!(move |n: &u32| *n < limit, "{} is not below {}", "value", limit),
//!     rule!(|n: &u32| n % 100 == 0, "value is not a round hundred"),
//! ];
//! let valid = all![small_or_round, rule!(|n: &u32| *n != 0, "value is zero")];
//!
//! assert!(valid.validate(&300).is_valid());
//! assert_eq!(
//!     valid.validate(&0).errors(),
//!     vec!["value is zero"]
//! );
//! assert_eq!(
//!     valid.validate(&42).errors(),
//!     vec!["value is not below 10", "value is not a round hundred"]
//! );
//! ```

/// Combines rules with [`all`](crate::combinators::all).
///
/// ```
/// use rule_rail::{all, rule};
///
/// let rule = all![
///     rule!(|s: &str| !s.is_empty(), "empty"),
///     rule!(|s: &str| s.is_ascii(), "not ascii"),
/// ];
/// assert!(rule.validate("ok").is_valid());
/// ```
#[macro_export]
macro_rules! all {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::all([$($rule),*])
    };
}

/// Combines rules with [`any`](crate::combinators::any).
#[macro_export]
macro_rules! any {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::any([$($rule),*])
    };
}

/// Builds a [`check_is_true`](crate::checks::check_is_true) rule whose message
/// is formatted once, when the rule is built.
///
/// ```
/// use rule_rail::rule;
///
/// let max = 3;
/// let short = rule!(move |s: &str| s.len() <= max, "at most {max} bytes");
/// assert_eq!(short.validate("four").errors(), vec!["at most 3 bytes"]);
/// ```
#[macro_export]
macro_rules! rule {
    ($test:expr, $($arg:tt)+) => {
        $crate::checks::check_is_true($test, $crate::types::alloc_type::format!($($arg)+))
    };
}
