//! Constraint violation taxonomy
//!
//! Every failed check a converter performs produces one [`Violation`]: a
//! machine-stable kind, the payload of that kind, and a [`Pointer`] snapshot
//! taken at detection time. The kind identifiers are part of the wire
//! contract and must never be renamed or repurposed; descriptions are
//! human-readable and free to change.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

mod collection;

pub use collection::ViolationCollection;

use crate::pointer::Pointer;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// The fixed type vocabulary used by wrong-type violations.
///
/// Exactly these seven tokens may appear in a report; the mapping from a
/// runtime [`Value`] is part of the boundary contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Array,
    Boolean,
    Float,
    Integer,
    Null,
    Object,
    String,
}

impl JsonType {
    /// Classifies a decoded value into the vocabulary.
    ///
    /// Numbers representable as an integer are `integer`; everything else
    /// numeric is `float`. Arrays are the only sequential container in this
    /// data model, so the associative-but-sequential ambiguity of loosely
    /// typed hosts cannot arise here.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(number) => {
                if number.is_i64() || number.is_u64() {
                    JsonType::Integer
                } else {
                    JsonType::Float
                }
            }
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Array => "array",
            JsonType::Boolean => "boolean",
            JsonType::Float => "float",
            JsonType::Integer => "integer",
            JsonType::Null => "null",
            JsonType::Object => "object",
            JsonType::String => "string",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected constraint breach.
///
/// Violations are created at the point of detection and immutable
/// thereafter; each owns the pointer to the field it was detected at.
/// Serialization tags each entry with its stable kind under `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    /// The value's runtime type is outside the converter's acceptance set.
    WrongPropertyType {
        pointer: Pointer,
        given_type: JsonType,
        allowed_types: Vec<JsonType>,
    },
    /// A numeric value breached its configured minimum.
    NumberIsTooSmall { pointer: Pointer, minimum: Number },
    /// A numeric value breached its configured maximum.
    NumberIsTooBig { pointer: Pointer, maximum: Number },
    /// An array has fewer entries than `min_items`.
    ArrayIsTooShort { pointer: Pointer, min_items: usize },
    /// An array has more entries than `max_items`.
    ArrayIsTooLong { pointer: Pointer, max_items: usize },
    /// A string has fewer characters than `min_length`.
    StringIsTooShort { pointer: Pointer, min_length: usize },
    /// A string has more characters than `max_length`.
    StringIsTooLong { pointer: Pointer, max_length: usize },
    /// A required object key is absent.
    MandatoryFieldMissing { pointer: Pointer },
    /// Domain-specific kind: the value does not name a valid timezone.
    #[serde(rename = "timezone_is_not_valid")]
    InvalidTimeZone { pointer: Pointer, description: String },
}

impl Violation {
    /// Builds a wrong-type violation, classifying `given` into the type
    /// vocabulary.
    pub fn wrong_type(pointer: Pointer, given: &Value, allowed_types: Vec<JsonType>) -> Self {
        Violation::WrongPropertyType {
            pointer,
            given_type: JsonType::of(given),
            allowed_types,
        }
    }

    /// The stable machine-readable identifier of this violation.
    ///
    /// These strings are a wire contract: new kinds may be added, existing
    /// ones must never change.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::WrongPropertyType { .. } => "wrong_property_type",
            Violation::NumberIsTooSmall { .. } => "number_is_too_small",
            Violation::NumberIsTooBig { .. } => "number_is_too_big",
            Violation::ArrayIsTooShort { .. } => "array_is_too_short",
            Violation::ArrayIsTooLong { .. } => "array_is_too_long",
            Violation::StringIsTooShort { .. } => "string_is_too_short",
            Violation::StringIsTooLong { .. } => "string_is_too_long",
            Violation::MandatoryFieldMissing { .. } => "mandatory_field_missing",
            Violation::InvalidTimeZone { .. } => "timezone_is_not_valid",
        }
    }

    /// Where in the input document the violation was detected.
    pub fn pointer(&self) -> &Pointer {
        match self {
            Violation::WrongPropertyType { pointer, .. }
            | Violation::NumberIsTooSmall { pointer, .. }
            | Violation::NumberIsTooBig { pointer, .. }
            | Violation::ArrayIsTooShort { pointer, .. }
            | Violation::ArrayIsTooLong { pointer, .. }
            | Violation::StringIsTooShort { pointer, .. }
            | Violation::StringIsTooLong { pointer, .. }
            | Violation::MandatoryFieldMissing { pointer }
            | Violation::InvalidTimeZone { pointer, .. } => pointer,
        }
    }

    /// Human-readable description. Unlike [`kind`](Self::kind), this text
    /// carries no stability guarantee.
    pub fn description(&self) -> String {
        match self {
            Violation::WrongPropertyType {
                given_type,
                allowed_types,
                ..
            } => {
                let allowed: Vec<&str> = allowed_types.iter().map(JsonType::as_str).collect();
                format!(
                    "Property is {} type, but only following types are allowed: {}",
                    given_type,
                    allowed.join(", ")
                )
            }
            Violation::NumberIsTooSmall { minimum, .. } => {
                format!("Number must not be less than {}", minimum)
            }
            Violation::NumberIsTooBig { maximum, .. } => {
                format!("Number must not be greater than {}", maximum)
            }
            Violation::ArrayIsTooShort { min_items, .. } => {
                format!("Array must contain at least {} entries", min_items)
            }
            Violation::ArrayIsTooLong { max_items, .. } => {
                format!("Array must contain at most {} entries", max_items)
            }
            Violation::StringIsTooShort { min_length, .. } => {
                format!("String must be at least {} characters long", min_length)
            }
            Violation::StringIsTooLong { max_length, .. } => {
                format!("String must be at most {} characters long", max_length)
            }
            Violation::MandatoryFieldMissing { .. } => "Mandatory field is missing".to_string(),
            Violation::InvalidTimeZone { description, .. } => description.clone(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at \"{}\": {}",
            self.kind(),
            self.pointer(),
            self.description()
        )
    }
}
