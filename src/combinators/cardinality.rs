//! Cardinality constraints over a vector of boolean probes.
//!
//! These are primitive checks: the probes are evaluated against the input,
//! the number of hits is compared with the constraint, and a violation is
//! reported as a single leaf carrying `expectations` verbatim.
//!
//! The `*_set_*` variants take groups of probes. A group counts as a hit when
//! every probe in it hits; an empty group never counts.

use crate::rule::{Presence, Test, Validate};
use crate::types::alloc_type::{String, Vec};
use crate::validation::core::Validation;
use smallvec::SmallVec;

/// Probe lists rarely exceed a handful of entries.
type Probes<P> = SmallVec<[P; 4]>;

fn count_rule<T, P, H, C>(
    probes: Probes<P>,
    hit: H,
    constraint: C,
    expectations: impl Into<String>,
) -> Validate<T>
where
    T: ?Sized + 'static,
    P: Send + Sync + 'static,
    H: Fn(&P, &T) -> bool + Send + Sync + 'static,
    C: Fn(usize, usize) -> bool + Send + Sync + 'static,
{
    let expectations = expectations.into();
    Validate::new(move |value: &T| {
        let hits = probes.iter().filter(|&probe| hit(probe, value)).count();
        Validation::from_bool(constraint(hits, probes.len()), expectations.as_str())
    })
}

fn test_hit<T: ?Sized + 'static>(test: &Test<T>, value: &T) -> bool {
    test.test(value)
}

fn presence_hit<T: ?Sized + 'static>(presence: &Presence<T>, value: &T) -> bool {
    presence.is_defined(value)
}

fn all_tests_hit<T: ?Sized + 'static>(set: &Vec<Test<T>>, value: &T) -> bool {
    !set.is_empty() && set.iter().all(|test| test.test(value))
}

fn all_presences_hit<T: ?Sized + 'static>(set: &Vec<Presence<T>>, value: &T) -> bool {
    !set.is_empty() && set.iter().all(|presence| presence.is_defined(value))
}

/// Passes when every test holds.
///
/// # Examples
///
/// ```
/// use rule_rail::combinators::check_if_all_true;
/// use rule_rail::Test;
///
/// let rule = check_if_all_true(
///     [Test::new(|n: &i32| *n > 0), Test::new(|n: &i32| n % 2 == 0)],
///     "expected a positive even number",
/// );
/// assert!(rule.validate(&4).is_valid());
/// assert_eq!(rule.validate(&3).errors(), vec!["expected a positive even number"]);
/// ```
pub fn check_if_all_true<T, I>(tests: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Test<T>>,
{
    count_rule(tests.into_iter().collect(), test_hit, |hits, total| hits == total, expectations)
}

/// Passes when no test holds.
pub fn check_if_all_false<T, I>(tests: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Test<T>>,
{
    count_rule(tests.into_iter().collect(), test_hit, |hits, _| hits == 0, expectations)
}

pub fn check_if_at_least_one_is_true<T, I>(tests: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Test<T>>,
{
    count_rule(tests.into_iter().collect(), test_hit, |hits, _| hits >= 1, expectations)
}

pub fn check_if_at_most_one_is_true<T, I>(tests: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Test<T>>,
{
    count_rule(tests.into_iter().collect(), test_hit, |hits, _| hits <= 1, expectations)
}

pub fn check_if_only_one_is_true<T, I>(tests: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Test<T>>,
{
    count_rule(tests.into_iter().collect(), test_hit, |hits, _| hits == 1, expectations)
}

/// Passes when exactly one group has all of its tests holding.
pub fn check_if_only_one_set_is_true<T, I>(sets: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Vec<Test<T>>>,
{
    count_rule(sets.into_iter().collect(), all_tests_hit, |hits, _| hits == 1, expectations)
}

/// Passes when every extractor finds a value.
pub fn check_if_all_defined<T, I>(extractors: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Presence<T>>,
{
    count_rule(
        extractors.into_iter().collect(),
        presence_hit,
        |hits, total| hits == total,
        expectations,
    )
}

/// Passes when no extractor finds a value.
pub fn check_if_all_empty<T, I>(extractors: I, expectations: impl Into<String>) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Presence<T>>,
{
    count_rule(extractors.into_iter().collect(), presence_hit, |hits, _| hits == 0, expectations)
}

/// Passes when either every extractor or none of them finds a value.
///
/// # Examples
///
/// ```
/// use rule_rail::combinators::check_if_all_or_none_defined;
/// use rule_rail::Presence;
///
/// struct Range {
///     from: Option<u32>,
///     to: Option<u32>,
/// }
///
/// let rule = check_if_all_or_none_defined(
///     [Presence::of(|r: &Range| r.from.as_ref()), Presence::of(|r: &Range| r.to.as_ref())],
///     "from and to must be given together",
/// );
/// assert!(rule.validate(&Range { from: None, to: None }).is_valid());
/// assert!(rule.validate(&Range { from: Some(1), to: Some(5) }).is_valid());
/// assert!(rule.validate(&Range { from: Some(1), to: None }).is_invalid());
/// ```
pub fn check_if_all_or_none_defined<T, I>(
    extractors: I,
    expectations: impl Into<String>,
) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Presence<T>>,
{
    count_rule(
        extractors.into_iter().collect(),
        presence_hit,
        |hits, total| hits == 0 || hits == total,
        expectations,
    )
}

pub fn check_if_at_least_one_is_defined<T, I>(
    extractors: I,
    expectations: impl Into<String>,
) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Presence<T>>,
{
    count_rule(extractors.into_iter().collect(), presence_hit, |hits, _| hits >= 1, expectations)
}

pub fn check_if_at_most_one_is_defined<T, I>(
    extractors: I,
    expectations: impl Into<String>,
) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Presence<T>>,
{
    count_rule(extractors.into_iter().collect(), presence_hit, |hits, _| hits <= 1, expectations)
}

/// Passes when exactly one extractor finds a value.
///
/// # Examples
///
/// ```
/// use rule_rail::combinators::check_if_only_one_is_defined;
/// use rule_rail::Presence;
///
/// struct Contact {
///     email: Option<String>,
///     phone: Option<String>,
/// }
///
/// let rule = check_if_only_one_is_defined(
///     [
///         Presence::of(|c: &Contact| c.email.as_ref()),
///         Presence::of(|c: &Contact| c.phone.as_ref()),
///     ],
///     "give either an email or a phone number",
/// );
/// let both = Contact { email: Some("a@b.c".into()), phone: Some("555".into()) };
/// assert_eq!(rule.validate(&both).errors(), vec!["give either an email or a phone number"]);
/// ```
pub fn check_if_only_one_is_defined<T, I>(
    extractors: I,
    expectations: impl Into<String>,
) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Presence<T>>,
{
    count_rule(extractors.into_iter().collect(), presence_hit, |hits, _| hits == 1, expectations)
}

/// Passes when exactly one group has all of its extractors finding a value.
pub fn check_if_only_one_set_is_defined<T, I>(
    sets: I,
    expectations: impl Into<String>,
) -> Validate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Vec<Presence<T>>>,
{
    count_rule(sets.into_iter().collect(), all_presences_hit, |hits, _| hits == 1, expectations)
}
