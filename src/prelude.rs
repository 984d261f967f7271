//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! struct Order {
//!     id: String,
//!     quantities: Vec<u32>,
//! }
//!
//! let order_rule = all([
//!     check_prop(|o: &Order| o.id.as_str(), string_non_empty("id is required")),
//!     check_each(
//!         |o: &Order| o.quantities.as_slice(),
//!         number_greater_than(0, "quantity must be positive"),
//!     ),
//! ]);
//!
//! let order = Order { id: "A-17".into(), quantities: vec![2, 0, 1] };
//! assert_eq!(
//!     order_rule.validate(&order).errors(),
//!     vec!["item 1: quantity must be positive"]
//! );
//! ```

// Macros
pub use crate::{all, any, rule};

// Core types
pub use crate::rule::{Presence, Test, Validate};
pub use crate::types::{Either, Error};
pub use crate::validation::Validation;

// Builders and combinators
pub use crate::checks::*;
pub use crate::combinators::*;
