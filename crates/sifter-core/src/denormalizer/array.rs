//! Converter for fields where an indexed array (list) is expected
//!
//! Fails on associative structures; use
//! [`ObjectDenormalizer`](super::ObjectDenormalizer) for those. Element
//! conversion is delegated to a caller-supplied closure, invoked once per
//! entry in index order with the entry's own pointer.
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

/// Optional length constraints for [`ArrayDenormalizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayConstraints {
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
}

impl ArrayConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_items(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    fn check(&self) -> Result<()> {
        if let (Some(min_items), Some(max_items)) = (self.min_items, self.max_items) {
            if min_items > max_items {
                return Err(Error::InvalidConstraints {
                    message: format!(
                        "min items constraint ({}) can not be bigger than max items ({})",
                        min_items, max_items
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Validates list shape and length, then applies an element converter to
/// every entry, merging all element-level violations into one failure.
#[derive(Clone, Default)]
pub struct ArrayDenormalizer {
    observer: Option<Arc<dyn FailureObserver>>,
}

impl ArrayDenormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn FailureObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Validates and denormalizes `data`.
    ///
    /// `element` is called once per entry, in index order, with the entry's
    /// value and pointer. A failed entry does not stop the loop: its
    /// violations are merged and the remaining siblings still get validated.
    /// A length violation, on the other hand, raises before any entry is
    /// visited; per-element reports on a structurally wrong list are noise.
    ///
    /// On success the output has the same length and order as the input.
    pub fn denormalize<T, F>(
        &self,
        data: &Value,
        pointer: &Pointer,
        constraints: &ArrayConstraints,
        mut element: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(&Value, &Pointer) -> Result<T>,
    {
        constraints.check()?;

        let mut violations = ViolationCollection::new();

        let Value::Array(entries) = data else {
            violations.push(Violation::wrong_type(
                pointer.clone(),
                data,
                vec![JsonType::Array],
            ));
            return Err(raise(self.observer.as_ref(), pointer, violations));
        };

        if let Some(min_items) = constraints.min_items {
            if entries.len() < min_items {
                violations.push(Violation::ArrayIsTooShort {
                    pointer: pointer.clone(),
                    min_items,
                });
            }
        }

        if let Some(max_items) = constraints.max_items {
            if entries.len() > max_items {
                violations.push(Violation::ArrayIsTooLong {
                    pointer: pointer.clone(),
                    max_items,
                });
            }
        }

        if !violations.is_empty() {
            return Err(raise(self.observer.as_ref(), pointer, violations));
        }

        let mut output = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            match element(entry, &pointer.append(index)) {
                Ok(converted) => output.push(converted),
                Err(Error::Validation(failure)) => violations.merge(failure.into_violations()),
                // Configuration errors are a programming mistake, not input
                // noise; they abort the whole call.
                Err(fatal) => return Err(fatal),
            }
        }

        if !violations.is_empty() {
            return Err(raise(self.observer.as_ref(), pointer, violations));
        }

        Ok(output)
    }

    /// As [`denormalize`](Self::denormalize), but null input short-circuits
    /// to `None`. The constraint-configuration check still runs first.
    pub fn denormalize_nullable<T, F>(
        &self,
        data: &Value,
        pointer: &Pointer,
        constraints: &ArrayConstraints,
        element: F,
    ) -> Result<Option<Vec<T>>>
    where
        F: FnMut(&Value, &Pointer) -> Result<T>,
    {
        constraints.check()?;
        if data.is_null() {
            return Ok(None);
        }
        self.denormalize(data, pointer, constraints, element)
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denormalizer::{IntegerConstraints, IntegerDenormalizer};
    use serde_json::json;

    fn violations_of<T: std::fmt::Debug>(result: Result<T>) -> ViolationCollection {
        match result {
            Err(Error::Validation(failure)) => failure.into_violations(),
            other => panic!("expected a validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_success_preserves_shape() {
        let arrays = ArrayDenormalizer::new();
        let integers = IntegerDenormalizer::new();
        let values = arrays
            .denormalize(
                &json!([3, 1, 2]),
                &Pointer::root(),
                &ArrayConstraints::new(),
                |entry, pointer| integers.denormalize(entry, pointer, &IntegerConstraints::new()),
            )
            .expect("all entries valid");
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_rejects_objects_as_wrong_type() {
        let arrays = ArrayDenormalizer::new();
        let violations = violations_of(arrays.denormalize(
            &json!({"0": 1}),
            &Pointer::root(),
            &ArrayConstraints::new(),
            |entry, _| Ok(entry.clone()),
        ));
        let serialized = serde_json::to_value(&violations).expect("serializes");
        assert_eq!(serialized[0]["type"], json!("wrong_property_type"));
        assert_eq!(serialized[0]["given_type"], json!("object"));
        assert_eq!(serialized[0]["allowed_types"], json!(["array"]));
    }

    #[test]
    fn test_length_violation_skips_element_conversion() {
        let arrays = ArrayDenormalizer::new();
        let constraints = ArrayConstraints::new().min_items(2).max_items(4);
        let mut calls = 0;
        let violations = violations_of(arrays.denormalize(
            &json!([1]),
            &Pointer::root(),
            &constraints,
            |entry, _| {
                calls += 1;
                Ok(entry.clone())
            },
        ));
        assert_eq!(calls, 0);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.as_slice()[0].kind(), "array_is_too_short");
        assert!(violations.as_slice()[0].pointer().is_root());
    }

    #[test]
    fn test_bad_element_does_not_abort_siblings() {
        let arrays = ArrayDenormalizer::new();
        let integers = IntegerDenormalizer::new();
        let violations = violations_of(arrays.denormalize(
            &json!([1, "x", 3, "y"]),
            &Pointer::root(),
            &ArrayConstraints::new(),
            |entry, pointer| integers.denormalize(entry, pointer, &IntegerConstraints::new()),
        ));
        let pointers: Vec<String> = violations
            .iter()
            .map(|violation| violation.pointer().to_string())
            .collect();
        assert_eq!(pointers, vec!["/1", "/3"]);
    }

    #[test]
    fn test_element_configuration_error_is_fatal() {
        let arrays = ArrayDenormalizer::new();
        let integers = IntegerDenormalizer::new();
        let bad = IntegerConstraints::new().minimum(9).maximum(1);
        let error = arrays
            .denormalize(
                &json!([1, 2]),
                &Pointer::root(),
                &ArrayConstraints::new(),
                |entry, pointer| integers.denormalize(entry, pointer, &bad),
            )
            .expect_err("child configuration error must propagate");
        assert!(matches!(error, Error::InvalidConstraints { .. }));
    }

    #[test]
    fn test_nullable_short_circuits() {
        let arrays = ArrayDenormalizer::new();
        let result: Option<Vec<Value>> = arrays
            .denormalize_nullable(
                &json!(null),
                &Pointer::root(),
                &ArrayConstraints::new(),
                |entry, _| Ok(entry.clone()),
            )
            .expect("null is allowed");
        assert_eq!(result, None);
    }
}
