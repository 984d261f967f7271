//! Conversion helpers between `Result`, [`Either`] and [`Validation`].
//!
//! These adapters sit at the edge of the library: they let rule outcomes
//! travel through `?` and let existing fallible code feed the combinators.
//!
//! # Examples
//!
//! ```
//! use rule_rail::convert::*;
//! use rule_rail::{Error, Validation};
//!
//! let validation = result_to_validation(Err::<u8, _>("not a number"));
//! assert_eq!(validation, Validation::invalid("not a number"));
//!
//! let result: Result<(), Error> = validation_to_result(validation);
//! assert_eq!(result.unwrap_err().to_string(), "not a number");
//! ```

use crate::types::alloc_type::String;
use crate::types::{Either, Error};
use crate::validation::core::Validation;

/// Converts a [`Validation`] into a `Result`, keeping the whole error tree.
///
/// # Examples
///
/// ```
/// use rule_rail::convert::validation_to_result;
/// use rule_rail::Validation;
///
/// assert_eq!(validation_to_result(Validation::valid()), Ok(()));
/// assert!(validation_to_result(Validation::invalid("boom")).is_err());
/// ```
#[inline]
pub fn validation_to_result(validation: Validation) -> Result<(), Error> {
    validation.into_result()
}

/// Converts a `Result` into a [`Validation`]; the error becomes a single leaf.
///
/// The success value is discarded.
#[inline]
pub fn result_to_validation<T, M>(result: Result<T, M>) -> Validation
where
    M: Into<String>,
{
    match result {
        Ok(_) => Validation::Valid,
        Err(message) => Validation::invalid(message),
    }
}

/// Converts an [`Either`] into a [`Validation`]: `Left` carries the failure message.
///
/// # Examples
///
/// ```
/// use rule_rail::convert::either_to_validation;
/// use rule_rail::Either;
///
/// assert!(either_to_validation(Either::<&str, u8>::Right(1)).is_valid());
/// assert_eq!(either_to_validation(Either::<_, u8>::Left("bad")).errors(), vec!["bad"]);
/// ```
#[inline]
pub fn either_to_validation<A, M>(either: Either<M, A>) -> Validation
where
    M: Into<String>,
{
    result_to_validation(either.into_result())
}

impl From<Validation> for Result<(), Error> {
    #[inline]
    fn from(validation: Validation) -> Self {
        validation.into_result()
    }
}

impl From<Result<(), Error>> for Validation {
    #[inline]
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Validation::Valid,
            Err(error) => Validation::Invalid(error),
        }
    }
}

impl From<Error> for Validation {
    #[inline]
    fn from(error: Error) -> Self {
        Validation::Invalid(error)
    }
}
