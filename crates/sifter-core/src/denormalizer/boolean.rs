//! Converter for fields where a boolean is expected
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

use super::raise;
use crate::error::Result;
use crate::observer::FailureObserver;
use crate::pointer::Pointer;
use crate::violation::{JsonType, Violation, ViolationCollection};
use serde_json::Value;
use std::sync::Arc;

/// Validates that the input is a boolean and returns it unchanged.
#[derive(Clone, Default)]
pub struct BooleanDenormalizer {
    observer: Option<Arc<dyn FailureObserver>>,
}

impl BooleanDenormalizer {
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
    /// No coercion is performed: strings like `"true"` or the numbers 0/1
    /// fail with a `wrong_property_type` violation.
    pub fn denormalize(&self, data: &Value, pointer: &Pointer) -> Result<bool> {
        match data {
            Value::Bool(value) => Ok(*value),
            _ => {
                let violations = ViolationCollection::from(Violation::wrong_type(
                    pointer.clone(),
                    data,
                    vec![JsonType::Boolean],
                ));
                Err(raise(self.observer.as_ref(), pointer, violations))
            }
        }
    }

    /// As [`denormalize`](Self::denormalize), but null input short-circuits
    /// to `None`.
    pub fn denormalize_nullable(&self, data: &Value, pointer: &Pointer) -> Result<Option<bool>> {
        if data.is_null() {
            return Ok(None);
        }
        self.denormalize(data, pointer).map(Some)
    }
}
