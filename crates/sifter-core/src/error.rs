//! Error types for the sifter core library
//!
//! Two disjoint failure classes exist, and they never mix:
//!
//! - [`Error::InvalidConstraints`] signals a programming mistake by the
//!   integrator (e.g. a minimum bound above the maximum). It is raised
//!   before any input is inspected and never appears inside a violation
//!   collection.
//! - [`Error::Validation`] signals bad input. It carries every violation
//!   found during the pass; a converter raises it at most once per call.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

use crate::violation::ViolationCollection;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Main error type for denormalization operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller configured impossible constraints. Fatal, independent of
    /// the input data.
    #[error("invalid converter constraints: {message}")]
    InvalidConstraints { message: String },

    /// The input did not meet the converter's contract.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience alias for results using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// The failure signal raised when validation finds violations.
///
/// Always wraps a non-empty [`ViolationCollection`]: "has violations" and
/// "should fail" are the same condition, enforced at construction.
#[derive(Error, Debug, Serialize)]
pub struct ValidationError {
    violations: ViolationCollection,
}

impl ValidationError {
    /// Wraps a collection into a failure signal.
    ///
    /// # Panics
    ///
    /// Panics if `violations` is empty; raising a failure without a single
    /// violation is a bug in the calling converter.
    pub fn new(violations: ViolationCollection) -> Self {
        assert!(
            !violations.is_empty(),
            "a validation failure must carry at least one violation"
        );
        Self { violations }
    }

    pub fn violations(&self) -> &ViolationCollection {
        &self.violations
    }

    pub fn into_violations(self) -> ViolationCollection {
        self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "input validation failed with {} violation(s):",
            self.violations.len()
        )?;
        write!(f, "{}", self.violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::Pointer;
    use crate::violation::{JsonType, Violation};
    use serde_json::json;

    fn one_violation() -> ViolationCollection {
        ViolationCollection::from(Violation::wrong_type(
            Pointer::root(),
            &json!(null),
            vec![JsonType::Boolean],
        ))
    }

    #[test]
    fn test_display_lists_violations() {
        let error = ValidationError::new(one_violation());
        let text = error.to_string();
        assert!(text.contains("1 violation(s)"));
        assert!(text.contains("wrong_property_type"));
    }

    #[test]
    #[should_panic(expected = "at least one violation")]
    fn test_empty_collection_is_rejected_at_construction() {
        let _ = ValidationError::new(ViolationCollection::new());
    }

    #[test]
    fn test_error_conversion() {
        let error: Error = ValidationError::new(one_violation()).into();
        assert!(matches!(error, Error::Validation(_)));
    }
}
