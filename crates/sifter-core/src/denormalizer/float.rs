//! Converter for fields where a float is expected
//!
//! Strict about the numeric kind: a JSON number that decodes as an integer
//! is `integer` in the type vocabulary and fails here, mirroring the
//! no-coercion rule everywhere else in the engine.
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

/// Optional bounds for [`FloatDenormalizer`]. Bounds must be finite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatConstraints {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl FloatConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    fn check(&self) -> Result<()> {
        for bound in [self.minimum, self.maximum].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(Error::InvalidConstraints {
                    message: format!("float bounds must be finite, got {}", bound),
                });
            }
        }
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

/// Validates that the input is a float within the configured bounds.
#[derive(Clone, Default)]
pub struct FloatDenormalizer {
    observer: Option<Arc<dyn FailureObserver>>,
}

impl FloatDenormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn FailureObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Validates and denormalizes `data`. Minimum and maximum are evaluated
    /// independently.
    pub fn denormalize(
        &self,
        data: &Value,
        pointer: &Pointer,
        constraints: &FloatConstraints,
    ) -> Result<f64> {
        constraints.check()?;

        let mut violations = ViolationCollection::new();

        let value = match data {
            Value::Number(number) if number.is_f64() => match number.as_f64() {
                Some(value) => value,
                None => {
                    violations.push(Violation::wrong_type(
                        pointer.clone(),
                        data,
                        vec![JsonType::Float],
                    ));
                    return Err(raise(self.observer.as_ref(), pointer, violations));
                }
            },
            _ => {
                violations.push(Violation::wrong_type(
                    pointer.clone(),
                    data,
                    vec![JsonType::Float],
                ));
                return Err(raise(self.observer.as_ref(), pointer, violations));
            }
        };

        if let Some(minimum) = constraints.minimum {
            if value < minimum {
                violations.push(Violation::NumberIsTooSmall {
                    pointer: pointer.clone(),
                    minimum: bound_number(minimum),
                });
            }
        }

        if let Some(maximum) = constraints.maximum {
            if value > maximum {
                violations.push(Violation::NumberIsTooBig {
                    pointer: pointer.clone(),
                    maximum: bound_number(maximum),
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
        constraints: &FloatConstraints,
    ) -> Result<Option<f64>> {
        constraints.check()?;
        if data.is_null() {
            return Ok(None);
        }
        self.denormalize(data, pointer, constraints).map(Some)
    }
}

/// Bounds are validated finite in `check`, so the conversion cannot fail;
/// the fallback exists only to keep this path panic-free.
fn bound_number(bound: f64) -> Number {
    Number::from_f64(bound).unwrap_or_else(|| Number::from(0))
}
