//! Converter for fields where an object (associative structure) is expected
//!
//! Fails on arrays; use [`ArrayDenormalizer`](super::ArrayDenormalizer) for
//! those. The accepted key set is declared up front as an [`ObjectShape`];
//! field conversion is delegated to a caller-supplied closure that receives
//! the field name, value, and pointer and usually dispatches to per-field
//! converters.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

use super::raise;
use crate::error::{Error, Result};
use crate::observer::FailureObserver;
use crate::pointer::Pointer;
use crate::violation::{JsonType, Violation, ViolationCollection};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSpec {
    name: String,
    required: bool,
}

/// The key set an object converter accepts, in declaration order.
///
/// Required keys that are absent produce `mandatory_field_missing`
/// violations; optional keys are simply skipped when absent. Keys outside
/// the shape are ignored — a stricter additional-properties policy belongs
/// to the layer above this engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectShape {
    fields: Vec<FieldSpec>,
}

impl ObjectShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            required: true,
        });
        self
    }

    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            required: false,
        });
        self
    }

    /// `(name, required)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, bool)> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), field.required))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Validates object shape and key presence, then applies a field converter
/// per declared key, merging all key-level violations into one failure.
#[derive(Clone, Default)]
pub struct ObjectDenormalizer {
    observer: Option<Arc<dyn FailureObserver>>,
}

impl ObjectDenormalizer {
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
    /// Fields are processed in shape declaration order, so the violation
    /// order is deterministic for a given shape and input. A failed field
    /// does not stop the walk; its violations are merged and the remaining
    /// fields still get validated.
    pub fn denormalize<T, F>(
        &self,
        data: &Value,
        pointer: &Pointer,
        shape: &ObjectShape,
        mut field: F,
    ) -> Result<BTreeMap<String, T>>
    where
        F: FnMut(&str, &Value, &Pointer) -> Result<T>,
    {
        let mut violations = ViolationCollection::new();

        let Value::Object(entries) = data else {
            violations.push(Violation::wrong_type(
                pointer.clone(),
                data,
                vec![JsonType::Object],
            ));
            return Err(raise(self.observer.as_ref(), pointer, violations));
        };

        let mut output = BTreeMap::new();

        for (name, required) in shape.fields() {
            let field_pointer = pointer.append(name);
            match entries.get(name) {
                None => {
                    if required {
                        violations.push(Violation::MandatoryFieldMissing {
                            pointer: field_pointer,
                        });
                    }
                }
                Some(value) => match field(name, value, &field_pointer) {
                    Ok(converted) => {
                        output.insert(name.to_string(), converted);
                    }
                    Err(Error::Validation(failure)) => violations.merge(failure.into_violations()),
                    Err(fatal) => return Err(fatal),
                },
            }
        }

        if !violations.is_empty() {
            return Err(raise(self.observer.as_ref(), pointer, violations));
        }

        Ok(output)
    }

    /// As [`denormalize`](Self::denormalize), but null input short-circuits
    /// to `None`.
    pub fn denormalize_nullable<T, F>(
        &self,
        data: &Value,
        pointer: &Pointer,
        shape: &ObjectShape,
        field: F,
    ) -> Result<Option<BTreeMap<String, T>>>
    where
        F: FnMut(&str, &Value, &Pointer) -> Result<T>,
    {
        if data.is_null() {
            return Ok(None);
        }
        self.denormalize(data, pointer, shape, field).map(Some)
    }
}
