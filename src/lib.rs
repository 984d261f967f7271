//! Composable validation rules with structured error trees.
//!
//! A rule is a [`Validate<T>`]: a pure function from `&T` to a [`Validation`],
//! which is either `Valid` or `Invalid` with an [`Error`] tree. Rules are built
//! from the primitive checks in [`checks`] and composed with the combinators in
//! [`combinators`]. The [`prelude`] brings all of them into scope at once;
//! the submodules can also be imported piecemeal.
//!
//! # Examples
//!
//! ## Accumulating every violation
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! struct Registration {
//!     email: String,
//!     password: String,
//!     age: u8,
//! }
//!
//! let rule = all([
//!     check_prop(|r: &Registration| r.email.as_str(), string_non_empty("email is required")),
//!     check_prop(
//!         |r: &Registration| r.password.as_str(),
//!         string_min_length(8, "password is too short"),
//!     ),
//!     check_is_true(|r: &Registration| r.age >= 16, "must be at least 16"),
//! ]);
//!
//! let input = Registration { email: String::new(), password: "abc".into(), age: 20 };
//! assert_eq!(
//!     rule.validate(&input).errors(),
//!     vec!["email is required", "password is too short"]
//! );
//! ```
//!
//! ## Alternatives
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! let id = any_with_prefix(
//!     "id: ",
//!     [string_starts_with("usr_", "not a user"), string_starts_with("grp_", "not a group")],
//! );
//! assert_eq!(id.validate("x").errors(), vec!["id: not a user", "id: not a group"]);
//! ```
//!
//! ## Failing at a boundary
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! fn parse_port(input: &str) -> Result<u16, rule_rail::Error> {
//!     let rule = all_with_short_circuit([
//!         string_non_empty("port is required"),
//!         string_all_chars(|c| c.is_ascii_digit(), "port must be numeric"),
//!     ]);
//!     rule.check(input)?;
//!     input.parse().map_err(|_| Error::single("port is out of range"))
//! }
//!
//! assert_eq!(parse_port("8080").ok(), Some(8080));
//! assert_eq!(parse_port("").unwrap_err().to_string(), "port is required");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Primitive single-leaf rule builders
pub mod checks;
/// Higher-order functions composing rules
pub mod combinators;
/// Conversions between Result, Either and Validation
pub mod convert;
/// Shorthand macros for building rules
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The rule abstraction and boolean probes
pub mod rule;
/// Error tree, accumulation and rendering
pub mod types;
/// Validation outcome and message iteration
pub mod validation;

pub use rule::{Presence, Test, Validate};
pub use types::{Either, Error, ErrorFormatConfig};
pub use validation::{Messages, Validation};
