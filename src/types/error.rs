use crate::types::alloc_type::{format, Arc, String, Vec};
use crate::validation::iter::Messages;
use core::fmt::{self, Display};
use smallvec::{smallvec, SmallVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tree of validation failures.
///
/// Every failing rule contributes a [`Single`](Error::Single) leaf. Leaves are
/// grouped with [`And`](Error::And) when all of them apply at once (accumulated
/// conjunction) and with [`Or`](Error::Or) when any of them would have been
/// enough to pass (failed disjunction).
///
/// Subtrees are shared through `Arc`, so cloning an error is cheap. Equality is
/// structural: two errors are equal when they have the same shape and the same
/// leaf text in the same order.
///
/// The grouping produced by the combinators is an implementation detail. The
/// stable observable is the leaf order returned by [`Error::messages`] and
/// [`Error::flatten`].
///
/// # Examples
///
/// ```
/// use rule_rail::Error;
///
/// let error = Error::and(
///     Error::single("m1"),
///     Error::or(Error::single("m2"), Error::single("m3")),
/// );
///
/// assert_eq!(error.flatten(), vec!["m1", "m2", "m3"]);
/// assert_eq!(error.to_string(), "m1, m2, m3");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Error {
    /// One atomic violation message.
    Single(String),
    /// Both sub-errors apply.
    And(Arc<Error>, Arc<Error>),
    /// Either sub-error would explain the failure.
    Or(Arc<Error>, Arc<Error>),
}

impl Error {
    /// Creates a leaf error from a message.
    #[must_use]
    #[inline]
    pub fn single(message: impl Into<String>) -> Self {
        Self::Single(message.into())
    }

    /// Groups two errors that both apply.
    #[must_use]
    #[inline]
    pub fn and(left: Error, right: Error) -> Self {
        Self::And(Arc::new(left), Arc::new(right))
    }

    /// Groups two errors of which either would explain the failure.
    #[must_use]
    #[inline]
    pub fn or(left: Error, right: Error) -> Self {
        Self::Or(Arc::new(left), Arc::new(right))
    }

    /// Returns `true` for a [`Single`](Error::Single) leaf.
    #[must_use]
    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Returns the leaf message, if this error is a single leaf.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Single(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Iterates over every leaf message, left subtree before right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Error;
    ///
    /// let error = Error::or(Error::single("too short"), Error::single("not a number"));
    /// let messages: Vec<&str> = error.messages().collect();
    /// assert_eq!(messages, ["too short", "not a number"]);
    /// ```
    #[inline]
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    /// Collects the leaf messages into owned strings, in [`messages`](Error::messages) order.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        self.messages().map(String::from).collect()
    }

    /// Number of leaf messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages().count()
    }

    /// An error always holds at least one leaf.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns a tree of the same shape where every leaf message starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Error;
    ///
    /// let error = Error::and(Error::single("is empty"), Error::single("is too long"))
    ///     .with_prefix("name ");
    /// assert_eq!(error.flatten(), vec!["name is empty", "name is too long"]);
    /// ```
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self.clone();
        }
        self.map_messages(&|message| format!("{prefix}{message}"))
    }

    /// Rebuilds the tree, transforming every leaf message with `f`.
    ///
    /// Leaves are visited in [`messages`](Error::messages) order. The rebuild
    /// keeps its own stack and does not recurse.
    #[must_use]
    pub fn map_messages<F>(&self, f: &F) -> Self
    where
        F: Fn(&str) -> String,
    {
        enum Step<'a> {
            Visit(&'a Error),
            Join(fn(Error, Error) -> Error),
        }

        let mut pending: SmallVec<[Step<'_>; 8]> = smallvec![Step::Visit(self)];
        let mut built: SmallVec<[Error; 8]> = SmallVec::new();
        while let Some(step) = pending.pop() {
            match step {
                Step::Visit(Self::Single(message)) => built.push(Self::Single(f(message))),
                Step::Visit(Self::And(left, right)) => {
                    pending.extend([Step::Join(Self::and), Step::Visit(right), Step::Visit(left)]);
                },
                Step::Visit(Self::Or(left, right)) => {
                    pending.extend([Step::Join(Self::or), Step::Visit(right), Step::Visit(left)]);
                },
                Step::Join(join) => {
                    if let (Some(right), Some(left)) = (built.pop(), built.pop()) {
                        built.push(join(left, right));
                    }
                },
            }
        }
        built.pop().unwrap_or_else(|| self.clone())
    }

    /// Joins the leaf messages with `separator`.
    #[must_use]
    pub fn error_string(&self, separator: &str) -> String {
        self.messages().collect::<Vec<_>>().join(separator)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, message) in self.messages().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::Single(message)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::Single(message.into())
    }
}
