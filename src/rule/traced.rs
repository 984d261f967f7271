//! Tracing integration for rules.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rule-rail = { version = "0.1", features = ["tracing"] }
//! ```

use super::Validate;
use crate::validation::core::Validation;

impl<T: ?Sized + 'static> Validate<T> {
    /// Emits a `tracing` event every time the rule is applied.
    ///
    /// Failures are reported at `debug` level with the rendered messages,
    /// successes at `trace` level. The outcome itself is returned unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use rule_rail::checks::string_non_empty;
    ///
    /// let name = string_non_empty("name is required").traced("user.name");
    /// name.validate("");
    /// // DEBUG rule="user.name" failures=1 errors="name is required" validation failed
    /// ```
    pub fn traced(self, name: &'static str) -> Self {
        Self::new(move |value| {
            let outcome = self.validate(value);
            match &outcome {
                Validation::Valid => tracing::trace!(rule = name, "validation passed"),
                Validation::Invalid(error) => tracing::debug!(
                    rule = name,
                    failures = error.len(),
                    errors = %error,
                    "validation failed"
                ),
            }
            outcome
        })
    }
}
