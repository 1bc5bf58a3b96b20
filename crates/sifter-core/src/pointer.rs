//! Structural addresses into a decoded input document
//!
//! A [`Pointer`] names one location inside the dynamic value tree being
//! validated: a sequence of object keys and array indexes, printed in the
//! RFC 6901 slash-delimited form. Pointers are immutable value objects;
//! `append` returns a new pointer and shares no mutable state with its
//! parent, so a violation's pointer snapshot stays valid no matter what the
//! traversal does afterwards.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

use serde::{Serialize, Serializer};
use std::fmt;

/// One step of a [`Pointer`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointerSegment {
    /// A key inside an object.
    Key(String),
    /// An index inside an array.
    Index(usize),
}

impl From<&str> for PointerSegment {
    fn from(key: &str) -> Self {
        PointerSegment::Key(key.to_string())
    }
}

impl From<String> for PointerSegment {
    fn from(key: String) -> Self {
        PointerSegment::Key(key)
    }
}

impl From<usize> for PointerSegment {
    fn from(index: usize) -> Self {
        PointerSegment::Index(index)
    }
}

impl fmt::Display for PointerSegment {
    /// Prints the segment with RFC 6901 escaping: `~` becomes `~0` and `/`
    /// becomes `~1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerSegment::Key(key) => {
                for ch in key.chars() {
                    match ch {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        other => write!(f, "{}", other)?,
                    }
                }
                Ok(())
            }
            PointerSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Immutable path from the document root to one field.
///
/// The root pointer is the empty segment sequence and prints as the empty
/// string; `/foo/3` addresses index 3 of the array under key `foo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pointer {
    segments: Vec<PointerSegment>,
}

impl Pointer {
    /// The empty pointer addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new pointer with `segment` pushed after this pointer's
    /// segments. `self` is left untouched.
    pub fn append(&self, segment: impl Into<PointerSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The segments in traversal order.
    pub fn segments(&self) -> &[PointerSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for Pointer {
    /// Pointers serialize as their RFC 6901 string form, which is what API
    /// consumers expect in a violation report.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_prints_empty_string() {
        assert_eq!(Pointer::root().to_string(), "");
        assert!(Pointer::root().is_root());
    }

    #[test]
    fn test_append_preserves_order() {
        let pointer = Pointer::root().append("items").append(2).append("name");
        assert_eq!(pointer.to_string(), "/items/2/name");
        assert_eq!(pointer.segments().len(), 3);
    }

    #[test]
    fn test_append_does_not_mutate_parent() {
        let parent = Pointer::root().append("a");
        let child = parent.append("b");
        assert_eq!(parent.to_string(), "/a");
        assert_eq!(child.to_string(), "/a/b");
    }

    #[test]
    fn test_escaping_per_rfc_6901() {
        let pointer = Pointer::root().append("a/b").append("m~n");
        assert_eq!(pointer.to_string(), "/a~1b/m~0n");
    }

    #[test]
    fn test_equal_segment_sequences_are_equal_pointers() {
        let a = Pointer::root().append("x").append(0);
        let b = Pointer::root().append("x").append(0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_string() {
        let pointer = Pointer::root().append("tags").append(1);
        let json = serde_json::to_value(&pointer).expect("pointer serializes");
        assert_eq!(json, serde_json::json!("/tags/1"));
    }
}
