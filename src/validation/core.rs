use crate::types::alloc_type::{String, Vec};
use crate::types::Error;
use crate::validation::iter::Messages;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of applying a rule to a value.
///
/// `Validation` is either `Valid`, carrying nothing, or `Invalid` with an
/// [`Error`] tree preserving every leaf message produced by the failing rules.
/// A rule never produces any other shape.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` with the `serde` feature.
///
/// # Examples
///
/// ```
/// use rule_rail::Validation;
///
/// let valid = Validation::valid();
/// assert!(valid.is_valid());
///
/// let invalid = Validation::invalid("must not be empty");
/// assert!(invalid.is_invalid());
/// assert_eq!(invalid.errors(), vec!["must not be empty"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub enum Validation {
    #[default]
    Valid,
    Invalid(Error),
}

impl Validation {
    /// Creates the successful outcome.
    #[inline]
    pub fn valid() -> Self {
        Self::Valid
    }

    /// Creates a failed outcome with a single leaf message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{Error, Validation};
    ///
    /// let v = Validation::invalid("missing field");
    /// assert_eq!(v.error(), Some(&Error::single("missing field")));
    /// ```
    #[inline]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(Error::single(message))
    }

    /// Wraps an existing error tree.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self::Invalid(error)
    }

    /// `Valid` when `condition` holds, otherwise a single failure with `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validation;
    ///
    /// let age = 17;
    /// assert!(Validation::from_bool(age >= 16, "too young").is_valid());
    /// assert!(Validation::from_bool(age >= 18, "too young").is_invalid());
    /// ```
    #[inline]
    pub fn from_bool(condition: bool, message: impl Into<String>) -> Self {
        if condition {
            Self::Valid
        } else {
            Self::invalid(message)
        }
    }

    /// Returns `true` if the outcome is `Valid`.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the outcome is `Invalid`.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the error tree, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Extracts the error tree, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<Error> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Combines two outcomes that must both be valid, keeping every failure.
    ///
    /// When both are invalid the errors are grouped with [`Error::And`],
    /// `self` on the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validation;
    ///
    /// let v = Validation::invalid("a").and(Validation::invalid("b"));
    /// assert_eq!(v.errors(), vec!["a", "b"]);
    ///
    /// let v = Validation::valid().and(Validation::invalid("b"));
    /// assert_eq!(v, Validation::invalid("b"));
    /// ```
    #[inline]
    pub fn and(self, other: Validation) -> Self {
        match (self, other) {
            (Self::Valid, other) => other,
            (invalid, Self::Valid) => invalid,
            (Self::Invalid(left), Self::Invalid(right)) => Self::Invalid(Error::and(left, right)),
        }
    }

    /// Evaluates `f` only when `self` is valid; otherwise returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validation;
    ///
    /// let mut called = false;
    /// let v = Validation::invalid("first").and_then(|| {
    ///     called = true;
    ///     Validation::invalid("second")
    /// });
    /// assert_eq!(v.errors(), vec!["first"]);
    /// assert!(!called);
    /// ```
    #[inline]
    pub fn and_then<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Validation,
    {
        match self {
            Self::Valid => f(),
            invalid => invalid,
        }
    }

    /// Succeeds when either outcome is valid.
    ///
    /// When both are invalid the errors are grouped with [`Error::Or`],
    /// `self` on the left.
    #[inline]
    pub fn or(self, other: Validation) -> Self {
        match (self, other) {
            (Self::Valid, _) | (_, Self::Valid) => Self::Valid,
            (Self::Invalid(left), Self::Invalid(right)) => Self::Invalid(Error::or(left, right)),
        }
    }

    /// Evaluates `f` only when `self` is invalid, combining both failures with [`Error::Or`].
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Validation,
    {
        match self {
            Self::Valid => Self::Valid,
            Self::Invalid(left) => match f() {
                Self::Valid => Self::Valid,
                Self::Invalid(right) => Self::Invalid(Error::or(left, right)),
            },
        }
    }

    /// Prefixes every leaf message of a failure with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validation;
    ///
    /// let v = Validation::invalid("is required").with_error_prefix("email ");
    /// assert_eq!(v.errors(), vec!["email is required"]);
    /// ```
    #[inline]
    pub fn with_error_prefix(self, prefix: &str) -> Self {
        self.map_error(|error| error.with_prefix(prefix))
    }

    /// Transforms the error tree of a failure, leaving `Valid` untouched.
    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Valid => Self::Valid,
            Self::Invalid(error) => Self::Invalid(f(error)),
        }
    }

    /// Iterates over the leaf messages; empty when valid.
    #[inline]
    pub fn messages(&self) -> Messages<'_> {
        match self {
            Self::Valid => Messages::empty(),
            Self::Invalid(error) => error.messages(),
        }
    }

    /// Flattened leaf messages; empty when valid.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages().map(String::from).collect()
    }

    /// Leaf messages joined with `separator`; empty when valid.
    #[must_use]
    pub fn error_string(&self, separator: &str) -> String {
        self.messages().collect::<Vec<_>>().join(separator)
    }

    /// Converts into a `Result` so failures can cross a `?` boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{Error, Validation};
    ///
    /// fn register(name: &str) -> Result<(), Error> {
    ///     Validation::from_bool(!name.is_empty(), "name is required").into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(register("ana").is_ok());
    /// assert_eq!(register("").unwrap_err().to_string(), "name is required");
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(error) => Err(error),
        }
    }
}
