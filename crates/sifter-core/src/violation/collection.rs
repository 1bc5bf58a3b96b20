//! Ordered, append-only aggregate of violations
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

use super::Violation;
use serde::Serialize;
use std::fmt;

/// All violations detected during one validation pass.
///
/// Insertion order is detection order: a converter records its own findings
/// first, then merges each failed child's collection in input order. Entries
/// are never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViolationCollection {
    violations: Vec<Violation>,
}

impl ViolationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one violation at the end.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Appends all of `other`'s violations after this collection's own,
    /// preserving `other`'s internal order.
    pub fn merge(&mut self, other: ViolationCollection) {
        self.violations.extend(other.violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Violation> for ViolationCollection {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl IntoIterator for ViolationCollection {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationCollection {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ViolationCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}
