//! Property-based tests for pointers and report determinism
//!
//! These verify that pointer printing matches the per-segment escaping rule
//! for arbitrary segment sequences, and that validation reports are a pure
//! function of (input, constraints).

use proptest::prelude::*;
use serde_json::{json, Value};
use sifter_core::denormalizer::{
    ArrayConstraints, ArrayDenormalizer, IntegerConstraints, IntegerDenormalizer,
};
use sifter_core::{Error, Pointer, PointerSegment};

fn segment_strategy() -> impl Strategy<Value = PointerSegment> {
    prop_oneof![
        // Keys deliberately include the characters the escaping rule cares
        // about.
        "[a-zA-Z0-9_/~ -]{0,12}".prop_map(PointerSegment::from),
        (0usize..1000).prop_map(PointerSegment::from),
    ]
}

fn escape(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

proptest! {
    /// Property: a pointer built by repeated appends prints as the
    /// slash-joined, per-segment-escaped concatenation of its segments.
    #[test]
    fn prop_pointer_round_trip(segments in proptest::collection::vec(segment_strategy(), 0..8)) {
        let mut pointer = Pointer::root();
        let mut expected = String::new();
        for segment in &segments {
            pointer = pointer.append(segment.clone());
            expected.push('/');
            match segment {
                PointerSegment::Key(key) => expected.push_str(&escape(key)),
                PointerSegment::Index(index) => expected.push_str(&index.to_string()),
            }
        }
        prop_assert_eq!(pointer.to_string(), expected);
        prop_assert_eq!(pointer.segments(), segments.as_slice());
    }

    /// Property: equal segment sequences are equal pointers.
    #[test]
    fn prop_pointer_equality(segments in proptest::collection::vec(segment_strategy(), 0..8)) {
        let build = || {
            segments
                .iter()
                .fold(Pointer::root(), |pointer, segment| pointer.append(segment.clone()))
        };
        prop_assert_eq!(build(), build());
    }

    /// Property: validating the same input twice yields byte-for-byte
    /// identical reports (same kinds, same pointers, same order).
    #[test]
    fn prop_reports_are_deterministic(
        entries in proptest::collection::vec(
            prop_oneof![
                any::<i64>().prop_map(|n| json!(n)),
                "[a-z]{0,5}".prop_map(|s| json!(s)),
                Just(json!(null)),
                Just(json!(true)),
            ],
            0..12,
        )
    ) {
        let arrays = ArrayDenormalizer::new();
        let integers = IntegerDenormalizer::new();
        let constraints = IntegerConstraints::new().minimum(-1000).maximum(1000);
        let data = Value::Array(entries);

        let run = || {
            arrays.denormalize(&data, &Pointer::root(), &ArrayConstraints::new(), |entry, pointer| {
                integers.denormalize(entry, pointer, &constraints)
            })
        };

        match (run(), run()) {
            (Ok(first), Ok(second)) => prop_assert_eq!(first, second),
            (Err(Error::Validation(first)), Err(Error::Validation(second))) => {
                let first = serde_json::to_string(first.violations()).expect("report serializes");
                let second = serde_json::to_string(second.violations()).expect("report serializes");
                prop_assert_eq!(first, second);
            }
            (first, second) => {
                prop_assert!(false, "runs disagree: {:?} vs {:?}", first, second);
            }
        }
    }
}
