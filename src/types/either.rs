#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value holding exactly one of two alternatives.
///
/// Used by [`check_either`](crate::combinators::check_either) to pick which
/// rule applies, and by [`check_from_either`](crate::checks::check_from_either)
/// where `Left` carries a failure message.
///
/// # Examples
///
/// ```
/// use rule_rail::Either;
///
/// let contact: Either<&str, u32> = Either::Right(5550100);
/// assert!(contact.is_right());
/// assert_eq!(contact.right(), Some(5550100));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    #[must_use]
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[must_use]
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    #[must_use]
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Borrows whichever side is present.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}
