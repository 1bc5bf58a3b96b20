//! Sifter Core - Denormalization engine for untrusted decoded input
//!
//! This crate validates dynamically-typed input (a decoded JSON-like value
//! tree) and converts it into strongly-typed values, collecting *every*
//! constraint violation found in one pass rather than stopping at the first.
//! Each violation carries a stable machine-readable kind and an RFC 6901
//! pointer to the offending field.
//!
//! # Main Components
//!
//! - **Pointer**: immutable structural address into the input document
//! - **Violations**: stable-kind violation taxonomy plus the ordered
//!   collection they aggregate into
//! - **Error Handling**: typed failure values via `thiserror`; caller
//!   configuration mistakes and bad input are disjoint error classes
//! - **Denormalizers**: boolean, integer, float, string, array, and object
//!   converters with accumulate-and-continue recursion
//!
//! # Example
//!
//! ```
//! use sifter_core::denormalizer::{
//!     ArrayConstraints, ArrayDenormalizer, IntegerConstraints, IntegerDenormalizer,
//! };
//! use sifter_core::Pointer;
//! use serde_json::json;
//!
//! let integers = IntegerDenormalizer::new();
//! let arrays = ArrayDenormalizer::new();
//!
//! let data = json!([1, 2, 3]);
//! let values = arrays.denormalize(
//!     &data,
//!     &Pointer::root(),
//!     &ArrayConstraints::new().max_items(10),
//!     |entry, pointer| integers.denormalize(entry, pointer, &IntegerConstraints::new()),
//! )?;
//! assert_eq!(values, vec![1, 2, 3]);
//! # Ok::<(), sifter_core::Error>(())
//! ```
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

pub mod denormalizer;
pub mod error;
pub mod observer;
pub mod pointer;
pub mod violation;

// Re-export main types for convenience
pub use denormalizer::{
    ArrayConstraints, ArrayDenormalizer, BooleanDenormalizer, FloatConstraints, FloatDenormalizer,
    IntegerConstraints, IntegerDenormalizer, ObjectDenormalizer, ObjectShape, StringConstraints,
    StringDenormalizer,
};
pub use error::{Error, Result, ValidationError};
pub use observer::{FailureObserver, TracingObserver};
pub use pointer::{Pointer, PointerSegment};
pub use violation::{JsonType, Violation, ViolationCollection};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
