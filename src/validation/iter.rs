use crate::types::{Accumulator, Error};
use crate::validation::core::Validation;
use core::iter::FusedIterator;
use smallvec::{smallvec, SmallVec};

/// Depth-first, left-to-right iterator over the leaf messages of an [`Error`].
///
/// Both [`Error::And`] and [`Error::Or`] yield their left subtree before the
/// right one, so the sequence follows the order in which failures were
/// combined. The walk keeps its own stack and does not recurse.
#[derive(Clone, Debug)]
pub struct Messages<'a> {
    stack: SmallVec<[&'a Error; 8]>,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(root: &'a Error) -> Self {
        Self { stack: smallvec![root] }
    }

    pub(crate) fn empty() -> Self {
        Self { stack: SmallVec::new() }
    }
}

impl<'a> Iterator for Messages<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Error::Single(message) => return Some(message.as_str()),
                Error::And(left, right) | Error::Or(left, right) => {
                    self.stack.push(&**right);
                    self.stack.push(&**left);
                },
            }
        }
        None
    }
}

impl FusedIterator for Messages<'_> {}

impl<'a> IntoIterator for &'a Error {
    type Item = &'a str;
    type IntoIter = Messages<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages()
    }
}

impl<'a> IntoIterator for &'a Validation {
    type Item = &'a str;
    type IntoIter = Messages<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages()
    }
}

/// Collects many outcomes into one, accumulating failures with [`Error::And`].
///
/// # Examples
///
/// ```
/// use rule_rail::Validation;
///
/// let combined: Validation = vec![
///     Validation::valid(),
///     Validation::invalid("first"),
///     Validation::invalid("second"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(combined.errors(), vec!["first", "second"]);
/// ```
impl FromIterator<Validation> for Validation {
    fn from_iter<I: IntoIterator<Item = Validation>>(iter: I) -> Self {
        let mut acc = Accumulator::all();
        acc.extend(iter);
        acc.finish()
    }
}

impl<T> FromIterator<Result<T, Error>> for Validation {
    fn from_iter<I: IntoIterator<Item = Result<T, Error>>>(iter: I) -> Self {
        iter.into_iter()
            .map(|result| match result {
                Ok(_) => Validation::Valid,
                Err(error) => Validation::Invalid(error),
            })
            .collect()
    }
}
