//! Optional failure-reporting hook
//!
//! Converters accept an observer at construction time; when a call fails,
//! the observer sees the pointer string and the violation count. This is a
//! side channel only: it never affects control flow or violation content.
//!
//! Copyright (c) 2025 Sifter Team
//! Licensed under the Apache-2.0 license

/// Sink notified once per failed converter call.
pub trait FailureObserver {
    /// `pointer` is the RFC 6901 string form of the failing field's pointer;
    /// `violation_count` is the number of violations attached to the raised
    /// failure.
    fn on_failure(&self, pointer: &str, violation_count: usize);
}

/// Reports failures as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FailureObserver for TracingObserver {
    fn on_failure(&self, pointer: &str, violation_count: usize) {
        tracing::info!(
            field = pointer,
            violations = violation_count,
            "input validation failed"
        );
    }
}
