//! A mutable value that is kept inside a fixed inclusive range.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::clamp::clamp;
use crate::core::error::RangeError;

/// Scalar whose every write is clamped into `[min, max]`.
///
/// `min <= value <= max` holds from construction on. The bounds never change
/// and the only way to change the value is [`BoundedProperty::write`].
/// Deserialization goes through [`BoundedProperty::new`] as well, so a
/// persisted out-of-range value is clamped and inverted bounds are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawBoundedProperty<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + Clone + fmt::Debug")
)]
pub struct BoundedProperty<T> {
    min: T,
    max: T,
    value: T,
}

#[derive(Deserialize)]
struct RawBoundedProperty<T> {
    min: T,
    max: T,
    value: T,
}

impl<T: PartialOrd + Clone + fmt::Debug> BoundedProperty<T> {
    /// Fails with [`RangeError::InvalidRange`] unless `min <= max`.
    pub fn new(min: T, max: T, initial: T) -> Result<Self, RangeError> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less | Ordering::Equal) => {}
            _ => {
                return Err(RangeError::InvalidRange {
                    min: format!("{:?}", min),
                    max: format!("{:?}", max),
                });
            }
        }
        let value = clamp(initial, &min, &max);
        Ok(Self { min, max, value })
    }

    /// Store `clamp(value, min, max)` and return the stored value.
    ///
    /// Never fails; compare the result with the request to detect clamping.
    pub fn write(&mut self, value: T) -> T {
        let stored = clamp(value.clone(), &self.min, &self.max);
        if stored != value {
            trace!(requested = ?value, stored = ?stored, "write clamped");
        }
        self.value = stored.clone();
        stored
    }

    pub fn contains(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }
}

impl<T> BoundedProperty<T> {
    pub fn read(&self) -> &T {
        &self.value
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T: PartialOrd + Clone + fmt::Debug> TryFrom<RawBoundedProperty<T>> for BoundedProperty<T> {
    type Error = RangeError;

    fn try_from(raw: RawBoundedProperty<T>) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_initial_value() {
        let high = BoundedProperty::new(1, 5, 42).expect("range");
        assert_eq!(*high.read(), 5);
        let low = BoundedProperty::new(1, 5, -3).expect("range");
        assert_eq!(*low.read(), 1);
    }

    #[test]
    fn writes_are_clamped_into_range() {
        let mut priority = BoundedProperty::new(1, 5, 3).expect("range");

        assert_eq!(priority.write(10), 5);
        assert_eq!(*priority.read(), 5);

        assert_eq!(priority.write(-2), 1);
        assert_eq!(*priority.read(), 1);

        assert_eq!(priority.write(3), 3);
        assert_eq!(*priority.read(), 3);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = BoundedProperty::new(5, 1, 3).expect_err("inverted");
        assert_eq!(
            err,
            RangeError::InvalidRange {
                min: "5".to_string(),
                max: "1".to_string(),
            }
        );
    }

    #[test]
    fn inverted_text_bounds_keep_debug_quotes() {
        let err = BoundedProperty::new("z", "a", "m").expect_err("inverted");
        assert_eq!(
            err,
            RangeError::InvalidRange {
                min: "\"z\"".to_string(),
                max: "\"a\"".to_string(),
            }
        );
        assert_eq!(err.to_string(), r#"invalid range: min "z" is greater than max "a""#);
    }

    #[test]
    fn nan_bounds_are_rejected() {
        assert!(BoundedProperty::new(f64::NAN, 1.0, 0.5).is_err());
        assert!(BoundedProperty::new(0.0, f64::NAN, 0.5).is_err());
    }

    #[test]
    fn nan_write_lands_on_min() {
        let mut ratio = BoundedProperty::new(0.0, 1.0, 0.5).expect("range");
        assert_eq!(ratio.write(f64::NAN), 0.0);
        assert!(ratio.contains(ratio.read()));
    }

    #[test]
    fn deserialize_reclamps_value() {
        let property: BoundedProperty<i64> =
            serde_json::from_str(r#"{"min":1,"max":5,"value":99}"#).expect("parse");
        assert_eq!(*property.read(), 5);
    }

    #[test]
    fn deserialize_rejects_inverted_bounds() {
        let err = serde_json::from_str::<BoundedProperty<i64>>(r#"{"min":9,"max":5,"value":6}"#)
            .expect_err("inverted");
        assert!(err.to_string().contains("invalid range"));
    }

    #[test]
    fn serialize_emits_bounds_and_value() {
        let property = BoundedProperty::new(1, 5, 4).expect("range");
        let json = serde_json::to_string(&property).expect("json");
        assert_eq!(json, r#"{"min":1,"max":5,"value":4}"#);
    }
}
