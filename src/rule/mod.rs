//! The rule abstraction.
//!
//! A [`Validate<T>`] is a pure function from `&T` to [`Validation`]. Rules are
//! built once, usually by composing the builders in [`crate::checks`] and
//! [`crate::combinators`], and then applied to as many values as needed,
//! from as many threads as needed.
//!
//! [`Test<T>`] and [`Presence<T>`] are the boolean probes consumed by the
//! cardinality combinators.

#[cfg(feature = "tracing")]
mod traced;

use crate::types::alloc_type::{Arc, String};
use crate::types::Error;
use crate::validation::core::Validation;
use core::fmt;
use core::ops::Deref;

/// A reusable validation rule for values of type `T`.
///
/// Cloning is cheap: clones share the same underlying closure. The closure
/// must be `Send + Sync`, so a rule can be stored in a `static` or shared
/// across threads and invoked concurrently.
///
/// # Examples
///
/// ```
/// use rule_rail::Validate;
///
/// let even = Validate::<i32>::new(|n| {
///     if n % 2 == 0 {
///         rule_rail::Validation::valid()
///     } else {
///         rule_rail::Validation::invalid(format!("{n} is odd"))
///     }
/// });
///
/// assert!(even.validate(&4).is_valid());
/// assert_eq!(even.validate(&3).errors(), vec!["3 is odd"]);
/// ```
pub struct Validate<T: ?Sized> {
    rule: Arc<dyn Fn(&T) -> Validation + Send + Sync>,
}

impl<T: ?Sized> Clone for Validate<T> {
    fn clone(&self) -> Self {
        Self { rule: Arc::clone(&self.rule) }
    }
}

impl<T: ?Sized> fmt::Debug for Validate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validate").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Validate<T> {
    /// Wraps a closure as a rule.
    #[inline]
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(&T) -> Validation + Send + Sync + 'static,
    {
        Self { rule: Arc::new(rule) }
    }

    /// Applies the rule to `value`.
    #[inline]
    pub fn validate(&self, value: &T) -> Validation {
        (self.rule)(value)
    }

    /// Applies the rule and converts the outcome into a `Result`.
    ///
    /// This is the adapter for callers that want failures to travel through `?`.
    #[inline]
    pub fn check(&self, value: &T) -> Result<(), Error> {
        self.validate(value).into_result()
    }

    /// Returns `true` when `value` passes the rule.
    #[inline]
    pub fn is_valid(&self, value: &T) -> bool {
        self.validate(value).is_valid()
    }

    /// Both rules must pass; failures of both are reported.
    ///
    /// Equivalent to [`all`](crate::combinators::all) over `self` and `other`.
    pub fn and(self, other: Validate<T>) -> Self {
        Self::new(move |value| self.validate(value).and(other.validate(value)))
    }

    /// Both rules must pass; `other` runs only when `self` passed.
    ///
    /// Equivalent to [`all_with_short_circuit`](crate::combinators::all_with_short_circuit).
    pub fn and_then(self, other: Validate<T>) -> Self {
        Self::new(move |value| self.validate(value).and_then(|| other.validate(value)))
    }

    /// At least one rule must pass; `other` runs only when `self` failed.
    ///
    /// Equivalent to [`any`](crate::combinators::any) over `self` and `other`.
    pub fn or(self, other: Validate<T>) -> Self {
        Self::new(move |value| self.validate(value).or_else(|| other.validate(value)))
    }

    /// Prefixes every failure message with a fixed string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::checks::check_is_true;
    ///
    /// let rule = check_is_true(|n: &i32| *n > 0, "must be positive").with_error_prefix("age ");
    /// assert_eq!(rule.validate(&-1).errors(), vec!["age must be positive"]);
    /// ```
    pub fn with_error_prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::new(move |value| self.validate(value).with_error_prefix(&prefix))
    }

    /// Prefixes every failure message with a string computed from the input.
    pub fn with_computed_prefix<P>(self, prefix: P) -> Self
    where
        P: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::new(move |value| match self.validate(value) {
            Validation::Valid => Validation::Valid,
            Validation::Invalid(error) => Validation::Invalid(error.with_prefix(&prefix(value))),
        })
    }

    /// Applies the rule to any owner that dereferences to `T`.
    ///
    /// Turns a `Validate<str>` into a `Validate<String>`, a `Validate<[E]>`
    /// into a `Validate<Vec<E>>`, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::checks::string_non_empty;
    /// use rule_rail::Validate;
    ///
    /// let rule: Validate<String> = string_non_empty("required").on_deref();
    /// assert!(rule.validate(&String::new()).is_invalid());
    /// ```
    pub fn on_deref<U>(self) -> Validate<U>
    where
        U: Deref<Target = T> + 'static,
    {
        Validate::new(move |value: &U| self.validate(value))
    }
}

/// A boolean test over `T`, used by the `check_if_*_true` combinators.
///
/// # Examples
///
/// ```
/// use rule_rail::Test;
///
/// let adult = Test::new(|age: &u32| *age >= 18);
/// assert!(adult.test(&30));
/// ```
pub struct Test<T: ?Sized> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Clone for Test<T> {
    fn clone(&self) -> Self {
        Self { test: Arc::clone(&self.test) }
    }
}

impl<T: ?Sized> fmt::Debug for Test<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Test<T> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self { test: Arc::new(test) }
    }

    #[inline]
    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }
}

/// Whether an optional part of `T` is present, used by the `check_if_*_defined` combinators.
///
/// # Examples
///
/// ```
/// use rule_rail::Presence;
///
/// struct Contact {
///     email: Option<String>,
/// }
///
/// let email = Presence::of(|c: &Contact| c.email.as_ref());
/// assert!(email.is_defined(&Contact { email: Some("a@b.c".into()) }));
/// assert!(!email.is_defined(&Contact { email: None }));
/// ```
pub struct Presence<T: ?Sized> {
    defined: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Clone for Presence<T> {
    fn clone(&self) -> Self {
        Self { defined: Arc::clone(&self.defined) }
    }
}

impl<T: ?Sized> fmt::Debug for Presence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presence").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Presence<T> {
    /// Builds a probe from an extractor returning an optional borrow.
    pub fn of<A, F>(extract: F) -> Self
    where
        A: ?Sized,
        F: for<'a> Fn(&'a T) -> Option<&'a A> + Send + Sync + 'static,
    {
        Self { defined: Arc::new(move |value: &T| extract(value).is_some()) }
    }

    /// Builds a probe from an extractor returning an owned optional value.
    pub fn of_owned<A, F>(extract: F) -> Self
    where
        F: Fn(&T) -> Option<A> + Send + Sync + 'static,
    {
        Self { defined: Arc::new(move |value: &T| extract(value).is_some()) }
    }

    #[inline]
    pub fn is_defined(&self, value: &T) -> bool {
        (self.defined)(value)
    }
}
