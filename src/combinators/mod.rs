//! Higher-order functions composing rules into rules.
//!
//! | Combinator | Evaluation | Failures |
//! |------------|------------|----------|
//! | [`all`] | every rule | grouped with `And` |
//! | [`all_with_short_circuit`] | stops at first failure | first failure only |
//! | [`any`] | stops at first success | grouped with `Or` |
//! | [`check_each`] | every element | prefixed, grouped with `And` |
//! | [`product`] | every slot | grouped with `And` |
//! | [`conditionally`], [`when`] | guard + one branch | chosen branch only |
//! | [`check_if_all_true`] and friends | every probe | `expectations` leaf |
//!
//! # Examples
//!
//! ```
//! use rule_rail::checks::{check_is_true, string_min_length, string_non_empty};
//! use rule_rail::combinators::{all, all_with_short_circuit, check_prop};
//!
//! struct Account {
//!     login: String,
//!     age: u32,
//! }
//!
//! let login = all_with_short_circuit([
//!     string_non_empty("login is required"),
//!     string_min_length(3, "login is too short"),
//! ]);
//!
//! let account = all([
//!     check_prop(|a: &Account| a.login.as_str(), login),
//!     check_is_true(|a: &Account| a.age >= 13, "account holder is too young"),
//! ]);
//!
//! let input = Account { login: String::new(), age: 9 };
//! assert_eq!(
//!     account.validate(&input).errors(),
//!     vec!["login is required", "account holder is too young"]
//! );
//! ```

pub mod cardinality;
pub mod conditional;
pub mod each;
pub mod logic;
pub mod nested;
pub mod product;

pub use cardinality::*;
pub use conditional::*;
pub use each::*;
pub use logic::*;
pub use nested::*;
pub use product::*;
