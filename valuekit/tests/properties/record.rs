use std::collections::HashMap;

use proptest::prelude::*;
use valuekit::core::field::FieldValue;
use valuekit::core::record::ValueRecord;
use valuekit::test_support::{sample, sample_schema, sample_values};

fn label() -> impl Strategy<Value = String> {
    "[a-z]{0,12}"
}

proptest! {
    #[test]
    fn destructure_round_trips_construction(
        flag in any::<bool>(),
        count in any::<i64>(),
        ratio in any::<f64>(),
        label in label(),
    ) {
        let values = sample_values(flag, count, ratio, &label);
        let record = ValueRecord::new(&sample_schema(), values.clone()).expect("record");
        prop_assert_eq!(record.destructure(), values);
    }

    #[test]
    fn equal_fields_mean_equal_records_and_hashes(
        flag in any::<bool>(),
        count in any::<i64>(),
        ratio in any::<f64>(),
        label in label(),
    ) {
        let a = sample(flag, count, ratio, &label);
        let b = sample(flag, count, ratio, &label);
        prop_assert!(!std::ptr::eq(&a, &b));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_value(), b.hash_value());
    }

    #[test]
    fn copy_matches_construction_from_merged_fields(
        count in any::<i64>(),
        new_count in any::<i64>(),
        label in label(),
        new_label in label(),
        override_label in any::<bool>(),
    ) {
        let source = sample(true, count, 0.5, &label);

        let mut overrides: HashMap<&str, FieldValue> = HashMap::new();
        overrides.insert("count", new_count.into());
        if override_label {
            overrides.insert("label", new_label.as_str().into());
        }

        let mut merged = source.destructure();
        for (name, value) in &overrides {
            let index = source.schema().index_of(name).expect("known field");
            merged[index] = value.clone();
        }

        let copy = source.copy_with(overrides).expect("copy");
        let expected = ValueRecord::new(&sample_schema(), merged).expect("merged");
        prop_assert_eq!(&copy, &expected);
        prop_assert_eq!(copy.hash_value(), expected.hash_value());
    }

    #[test]
    fn copy_shares_untouched_reference_fields(count in any::<i64>(), label in label()) {
        let source = sample(false, count, 1.0, &label);
        let copy = source.copy_with([("count", count.wrapping_add(1))]).expect("copy");
        for name in ["label", "tags", "note"] {
            let before = source.get(name).expect("field");
            let after = copy.get(name).expect("field");
            prop_assert!(before.same_entity(after), "{} not shared", name);
        }
    }
}
