use proptest::prelude::*;
use valuekit::core::bounded::BoundedProperty;
use valuekit::core::clamp::clamp;
use valuekit::core::error::RangeError;

fn ordered_bounds() -> impl Strategy<Value = (i64, i64)> {
    (any::<i64>(), any::<i64>()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

proptest! {
    #[test]
    fn clamp_lands_in_range((min, max) in ordered_bounds(), value in any::<i64>()) {
        let clamped = clamp(value, &min, &max);
        prop_assert!(min <= clamped && clamped <= max);
    }

    #[test]
    fn clamp_is_idempotent((min, max) in ordered_bounds(), value in any::<i64>()) {
        let once = clamp(value, &min, &max);
        prop_assert_eq!(clamp(once, &min, &max), once);
    }

    #[test]
    fn float_clamp_lands_in_range(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
        value in any::<f64>(),
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let clamped = clamp(value, &min, &max);
        prop_assert!(min <= clamped && clamped <= max);
    }

    #[test]
    fn bounded_property_invariant_survives_writes(
        (min, max) in ordered_bounds(),
        initial in any::<i64>(),
        writes in proptest::collection::vec(any::<i64>(), 0..16),
    ) {
        let mut property = BoundedProperty::new(min, max, initial).expect("range");
        prop_assert!(property.contains(property.read()));
        for value in writes {
            let stored = property.write(value);
            prop_assert_eq!(stored, clamp(value, &min, &max));
            prop_assert_eq!(*property.read(), stored);
        }
    }

    #[test]
    fn inverted_bounds_always_fail(a in any::<i64>(), b in any::<i64>(), initial in any::<i64>()) {
        prop_assume!(a != b);
        let (min, max) = if a > b { (a, b) } else { (b, a) };
        let err = BoundedProperty::new(min, max, initial).expect_err("inverted");
        let is_invalid_range = matches!(err, RangeError::InvalidRange { .. });
        prop_assert!(is_invalid_range);
    }
}
