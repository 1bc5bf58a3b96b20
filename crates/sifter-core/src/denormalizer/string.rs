//! Converter for fields where a string is expected
//!
//! Length constraints count Unicode scalar values, not bytes.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

use super::raise;
use crate::error::{Error, Result};
use crate::observer::FailureObserver;
use crate::pointer::Pointer;
use crate::violation::{JsonType, Violation, ViolationCollection};
use serde_json::Value;
use std::sync::Arc;

/// Optional length constraints for [`StringDenormalizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConstraints {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl StringConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    fn check(&self) -> Result<()> {
        if let (Some(min_length), Some(max_length)) = (self.min_length, self.max_length) {
            if min_length > max_length {
                return Err(Error::InvalidConstraints {
                    message: format!(
                        "min length constraint ({}) can not be bigger than max length ({})",
                        min_length, max_length
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Validates that the input is a string within the configured length bounds.
#[derive(Clone, Default)]
pub struct StringDenormalizer {
    observer: Option<Arc<dyn FailureObserver>>,
}

impl StringDenormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn FailureObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Validates and denormalizes `data`. Length bounds are evaluated
    /// independently.
    pub fn denormalize(
        &self,
        data: &Value,
        pointer: &Pointer,
        constraints: &StringConstraints,
    ) -> Result<String> {
        constraints.check()?;

        let mut violations = ViolationCollection::new();

        let Value::String(value) = data else {
            violations.push(Violation::wrong_type(
                pointer.clone(),
                data,
                vec![JsonType::String],
            ));
            return Err(raise(self.observer.as_ref(), pointer, violations));
        };

        let length = value.chars().count();

        if let Some(min_length) = constraints.min_length {
            if length < min_length {
                violations.push(Violation::StringIsTooShort {
                    pointer: pointer.clone(),
                    min_length,
                });
            }
        }

        if let Some(max_length) = constraints.max_length {
            if length > max_length {
                violations.push(Violation::StringIsTooLong {
                    pointer: pointer.clone(),
                    max_length,
                });
            }
        }

        if !violations.is_empty() {
            return Err(raise(self.observer.as_ref(), pointer, violations));
        }

        Ok(value.clone())
    }

    /// As [`denormalize`](Self::denormalize), but null input short-circuits
    /// to `None`. The constraint-configuration check still runs first.
    pub fn denormalize_nullable(
        &self,
        data: &Value,
        pointer: &Pointer,
        constraints: &StringConstraints,
    ) -> Result<Option<String>> {
        constraints.check()?;
        if data.is_null() {
            return Ok(None);
        }
        self.denormalize(data, pointer, constraints).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations_of(result: Result<String>) -> ViolationCollection {
        match result {
            Err(Error::Validation(failure)) => failure.into_violations(),
            other => panic!("expected a validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_strings_in_bounds() {
        let denormalizer = StringDenormalizer::new();
        let constraints = StringConstraints::new().min_length(2).max_length(8);
        let value = denormalizer
            .denormalize(&json!("hello"), &Pointer::root(), &constraints)
            .expect("in-bounds string");
        assert_eq!(value, "hello");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let denormalizer = StringDenormalizer::new();
        let constraints = StringConstraints::new().max_length(3);
        // Three scalar values, nine bytes.
        denormalizer
            .denormalize(&json!("äöü"), &Pointer::root(), &constraints)
            .expect("character count is within bounds");
    }

    #[test]
    fn test_length_violations() {
        let denormalizer = StringDenormalizer::new();
        let constraints = StringConstraints::new().min_length(3);
        let violations =
            violations_of(denormalizer.denormalize(&json!("no"), &Pointer::root(), &constraints));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.as_slice()[0].kind(), "string_is_too_short");
    }

    #[test]
    fn test_rejects_non_strings() {
        let denormalizer = StringDenormalizer::new();
        let violations = violations_of(denormalizer.denormalize(
            &json!(5),
            &Pointer::root(),
            &StringConstraints::new(),
        ));
        assert_eq!(violations.as_slice()[0].kind(), "wrong_property_type");
    }
}
