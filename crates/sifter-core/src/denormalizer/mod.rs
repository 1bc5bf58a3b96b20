//! Type-specific converters from untrusted decoded input to typed values
//!
//! Every converter follows the same contract. Constraint configuration is
//! checked first and rejects with [`Error::InvalidConstraints`] before the
//! input is even looked at. A wrong runtime type yields exactly one
//! `wrong_property_type` violation and raises immediately; further checks on
//! a structurally wrong value would be meaningless. Constraint breaches are
//! collected, not thrown per occurrence, and a converter raises at most once
//! per call with everything it found. Composite converters catch each failed
//! child, merge its violations, and keep going, so one bad element never
//! hides its siblings' problems.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod boolean;
pub mod float;
pub mod integer;
pub mod object;
pub mod string;

pub use array::{ArrayConstraints, ArrayDenormalizer};
pub use boolean::BooleanDenormalizer;
pub use float::{FloatConstraints, FloatDenormalizer};
pub use integer::{IntegerConstraints, IntegerDenormalizer};
pub use object::{ObjectDenormalizer, ObjectShape};
pub use string::{StringConstraints, StringDenormalizer};

use crate::error::{Error, ValidationError};
use crate::observer::FailureObserver;
use crate::pointer::Pointer;
use crate::violation::ViolationCollection;
use std::sync::Arc;

/// Notifies the observer, then wraps the collection into a failure.
///
/// Single raise point shared by all converters, so the observer sees every
/// failure exactly once with the final violation count.
pub(crate) fn raise(
    observer: Option<&Arc<dyn FailureObserver>>,
    pointer: &Pointer,
    violations: ViolationCollection,
) -> Error {
    if let Some(observer) = observer {
        observer.on_failure(&pointer.to_string(), violations.len());
    }
    Error::Validation(ValidationError::new(violations))
}
