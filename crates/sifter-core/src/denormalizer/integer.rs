//! Converter for fields where an integer is expected
//!
//! Fails on floats and numeric strings; the caller is expected to fix the
//! producer rather than rely on coercion.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

use super::raise;
use crate::error::{Error, Result};
use crate::observer::FailureObserver;
use crate::pointer::Pointer;
use crate::violation::{JsonType, Violation, ViolationCollection};
use serde_json::{Number, Value};
use std::sync::Arc;

/// Optional bounds for [`IntegerDenormalizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerConstraints {
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl IntegerConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Rejects impossible bound pairs before any input is inspected.
    fn check(&self) -> Result<()> {
        if let (Some(minimum), Some(maximum)) = (self.minimum, self.maximum) {
            if minimum > maximum {
                return Err(Error::InvalidConstraints {
                    message: format!(
                        "minimum constraint ({}) can not be bigger than maximum ({})",
                        minimum, maximum
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Validates that the input is an integer within the configured bounds.
#[derive(Clone, Default)]
pub struct IntegerDenormalizer {
    observer: Option<Arc<dyn FailureObserver>>,
}

impl IntegerDenormalizer {
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
    /// Minimum and maximum are evaluated independently; a breach of one does
    /// not stop the other from being checked.
    pub fn denormalize(
        &self,
        data: &Value,
        pointer: &Pointer,
        constraints: &IntegerConstraints,
    ) -> Result<i64> {
        constraints.check()?;

        let mut violations = ViolationCollection::new();

        let number = match data {
            Value::Number(number) if number.is_i64() || number.is_u64() => number,
            _ => {
                violations.push(Violation::wrong_type(
                    pointer.clone(),
                    data,
                    vec![JsonType::Integer],
                ));
                return Err(raise(self.observer.as_ref(), pointer, violations));
            }
        };

        let Some(value) = number.as_i64() else {
            // A u64-only JSON integer is still `integer` in the type
            // vocabulary but cannot be represented; report it against the
            // representable bound.
            violations.push(Violation::NumberIsTooBig {
                pointer: pointer.clone(),
                maximum: Number::from(i64::MAX),
            });
            return Err(raise(self.observer.as_ref(), pointer, violations));
        };

        if let Some(minimum) = constraints.minimum {
            if value < minimum {
                violations.push(Violation::NumberIsTooSmall {
                    pointer: pointer.clone(),
                    minimum: Number::from(minimum),
                });
            }
        }

        if let Some(maximum) = constraints.maximum {
            if value > maximum {
                violations.push(Violation::NumberIsTooBig {
                    pointer: pointer.clone(),
                    maximum: Number::from(maximum),
                });
            }
        }

        if !violations.is_empty() {
            return Err(raise(self.observer.as_ref(), pointer, violations));
        }

        Ok(value)
    }

    /// As [`denormalize`](Self::denormalize), but null input short-circuits
    /// to `None`. The constraint-configuration check still runs first.
    pub fn denormalize_nullable(
        &self,
        data: &Value,
        pointer: &Pointer,
        constraints: &IntegerConstraints,
    ) -> Result<Option<i64>> {
        constraints.check()?;
        if data.is_null() {
            return Ok(None);
        }
        self.denormalize(data, pointer, constraints).map(Some)
    }
}
