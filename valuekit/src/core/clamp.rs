//! Total clamping into a closed range.

use std::cmp::Ordering;

/// Map `value` into `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `value > max`, and `value`
/// otherwise. A value that does not compare with the bounds (e.g. NaN) maps
/// to `min`, so the result is always inside the range. Callers must ensure
/// `min <= max`.
pub fn clamp<T: PartialOrd + Clone>(value: T, min: &T, max: &T) -> T {
    match value.partial_cmp(min) {
        None | Some(Ordering::Less) => return min.clone(),
        Some(_) => {}
    }
    match value.partial_cmp(max) {
        Some(Ordering::Greater) => max.clone(),
        None => min.clone(),
        Some(_) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_passes_values_inside_range() {
        assert_eq!(clamp(3, &1, &5), 3);
        assert_eq!(clamp(1, &1, &5), 1);
        assert_eq!(clamp(5, &1, &5), 5);
    }

    #[test]
    fn clamp_pins_values_outside_range() {
        assert_eq!(clamp(10, &1, &5), 5);
        assert_eq!(clamp(-2, &1, &5), 1);
    }

    #[test]
    fn clamp_single_point_range() {
        assert_eq!(clamp(-7, &4, &4), 4);
        assert_eq!(clamp(9, &4, &4), 4);
    }

    #[test]
    fn clamp_nan_maps_to_min() {
        assert_eq!(clamp(f64::NAN, &0.0, &1.0), 0.0);
    }

    #[test]
    fn clamp_strings_lexicographically() {
        let min = "b".to_string();
        let max = "d".to_string();
        assert_eq!(clamp("a".to_string(), &min, &max), "b");
        assert_eq!(clamp("c".to_string(), &min, &max), "c");
        assert_eq!(clamp("z".to_string(), &min, &max), "d");
    }
}
