//! Validation of tuples, one rule per slot.

use crate::rule::Validate;
use crate::types::Accumulator;

/// A tuple of rules that can be combined into one rule over the tuple of their inputs.
///
/// Implemented for tuples of two to four [`Validate`]s.
pub trait Product {
    type Output;

    fn product(self) -> Self::Output;
}

macro_rules! impl_product {
    ($($ty:ident $idx:tt),+) => {
        impl<$($ty: 'static),+> Product for ($(Validate<$ty>,)+) {
            type Output = Validate<($($ty,)+)>;

            fn product(self) -> Self::Output {
                Validate::new(move |value: &($($ty,)+)| {
                    let mut acc = Accumulator::all();
                    $(acc.push_validation(self.$idx.validate(&value.$idx));)+
                    acc.finish()
                })
            }
        }
    };
}

impl_product!(A 0, B 1);
impl_product!(A 0, B 1, C 2);
impl_product!(A 0, B 1, C 2, D 3);

/// Validates a tuple slot by slot.
///
/// Every slot is checked; failures are grouped with
/// [`Error::And`](crate::Error::And) in slot order, as [`all`](crate::combinators::all) does.
///
/// # Examples
///
/// ```
/// use rule_rail::checks::{number_in_range, string_non_empty};
/// use rule_rail::combinators::product;
///
/// let rule = product((
///     string_non_empty("label is required").on_deref::<String>(),
///     number_in_range(1u32..=12, "month out of range"),
/// ));
///
/// assert!(rule.validate(&("spring".to_string(), 3)).is_valid());
/// assert_eq!(
///     rule.validate(&(String::new(), 13)).errors(),
///     vec!["label is required", "month out of range"]
/// );
/// ```
#[inline]
pub fn product<P: Product>(rules: P) -> P::Output {
    rules.product()
}
