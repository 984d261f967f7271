//! Error tree and supporting types.
//!
//! This module holds the [`Error`] tree produced by failing rules, the
//! [`Accumulator`] that groups many failures into one tree, the [`Either`]
//! sum value, and the formatter that renders flattened messages.
//!
//! # Examples
//!
//! ```
//! use rule_rail::types::{Accumulator, Error};
//!
//! let mut acc = Accumulator::any();
//! acc.push(Error::single("not an email"));
//! acc.push(Error::single("not a phone number"));
//!
//! let error = acc.into_error().unwrap();
//! assert_eq!(error.formatted().compact().to_string(), "not an email | not a phone number");
//! ```

pub mod accumulator;
pub mod alloc_type;
pub mod either;
pub mod error;
pub mod error_formatter;

pub use accumulator::*;
pub use either::*;
pub use error::*;
pub use error_formatter::*;
