//! The [`Validation`] outcome and iteration over its messages.
//!
//! Every rule returns a [`Validation`]: `Valid`, or `Invalid` with an
//! [`Error`](crate::Error) tree. [`Messages`] walks that tree depth-first so the
//! same failing input always yields the same message sequence.
//!
//! # Examples
//!
//! ```
//! use rule_rail::validation::Validation;
//!
//! let v = Validation::invalid("a").and(Validation::invalid("b").or(Validation::invalid("c")));
//! assert_eq!(v.messages().collect::<Vec<_>>(), ["a", "b", "c"]);
//! assert_eq!(v.error_string("; "), "a; b; c");
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
