use crate::types::Error;
use crate::validation::core::Validation;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an [`Accumulator`] groups the errors pushed into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Grouping {
    /// Every pushed error applies: grouped with [`Error::And`].
    All,
    /// Any pushed error would explain the failure: grouped with [`Error::Or`].
    Any,
}

/// Collects errors and groups them into a single tree.
///
/// Errors are kept in push order and grouped only when the tree is taken out.
/// A single failure comes out unwrapped, and the leaf order of the resulting
/// tree matches push order. The tree is balanced, so its depth grows with the
/// logarithm of the number of pushed errors rather than linearly.
///
/// # Examples
///
/// ```
/// use rule_rail::types::Accumulator;
/// use rule_rail::{Error, Validation};
///
/// let mut acc = Accumulator::all();
/// acc.push(Error::single("a"));
/// assert_eq!(acc.clone().finish(), Validation::invalid("a"));
///
/// acc.push(Error::single("b"));
/// acc.push(Error::single("c"));
/// assert_eq!(
///     acc.into_error(),
///     Some(Error::and(Error::and(Error::single("a"), Error::single("b")), Error::single("c")))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accumulator {
    grouping: Grouping,
    errors: SmallVec<[Error; 4]>,
}

impl Accumulator {
    /// Creates an empty accumulator with the given grouping.
    #[inline]
    pub fn new(grouping: Grouping) -> Self {
        Self { grouping, errors: SmallVec::new() }
    }

    /// Accumulator for conjunctions.
    #[inline]
    pub fn all() -> Self {
        Self::new(Grouping::All)
    }

    /// Accumulator for disjunctions.
    #[inline]
    pub fn any() -> Self {
        Self::new(Grouping::Any)
    }

    /// Adds one error to the right of everything pushed so far.
    #[inline]
    pub fn push(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Pushes the error of an invalid outcome; valid outcomes are ignored.
    #[inline]
    pub fn push_validation(&mut self, validation: Validation) {
        if let Validation::Invalid(error) = validation {
            self.push(error);
        }
    }

    /// Returns true if nothing has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors pushed.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The grouping this accumulator applies.
    #[inline]
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Consumes the accumulator and returns the combined tree, if any.
    ///
    /// Neighbouring errors are paired level by level until one tree is left.
    pub fn into_error(self) -> Option<Error> {
        let grouping = self.grouping;
        let mut level = self.errors;
        while level.len() > 1 {
            let mut next = SmallVec::with_capacity(level.len().div_ceil(2));
            let mut errors = level.into_iter();
            while let Some(left) = errors.next() {
                next.push(match errors.next() {
                    Some(right) => grouping.join(left, right),
                    None => left,
                });
            }
            level = next;
        }
        level.pop()
    }

    /// `Valid` when nothing was pushed, otherwise `Invalid` with the combined tree.
    #[inline]
    pub fn finish(self) -> Validation {
        match self.into_error() {
            None => Validation::Valid,
            Some(error) => Validation::Invalid(error),
        }
    }
}

impl Grouping {
    #[inline]
    fn join(self, left: Error, right: Error) -> Error {
        match self {
            Self::All => Error::and(left, right),
            Self::Any => Error::or(left, right),
        }
    }
}

impl Extend<Error> for Accumulator {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl Extend<Validation> for Accumulator {
    fn extend<I: IntoIterator<Item = Validation>>(&mut self, iter: I) {
        for validation in iter {
            self.push_validation(validation);
        }
    }
}
