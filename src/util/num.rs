/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Converts a number used as a list index into a `usize` position.
///
/// The value must be finite, integral, non-negative and smaller than
/// `length`.
///
/// ## Returns
/// - `Some(usize)`: The index if it addresses an element.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use pilcrow::util::num::f64_to_index_checked;
///
/// assert_eq!(f64_to_index_checked(1.0, 3), Some(1));
/// assert_eq!(f64_to_index_checked(3.0, 3), None);
/// assert_eq!(f64_to_index_checked(-1.0, 3), None);
/// assert_eq!(f64_to_index_checked(0.5, 3), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_index_checked(value: f64, length: usize) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    if value > MAX_SAFE_INT as f64 {
        return None;
    }
    let index = value as u64;
    usize::try_from(index).ok().filter(|index| *index < length)
}

/// Converts a length or count to `f64`.
///
/// Counts above `MAX_SAFE_INT` lose precision; no list or string in memory
/// gets that long.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_indices() {
        assert_eq!(f64_to_index_checked(f64::NAN, 10), None);
        assert_eq!(f64_to_index_checked(f64::INFINITY, 10), None);
    }

    #[test]
    fn negative_zero_is_index_zero() {
        assert_eq!(f64_to_index_checked(-0.0, 1), Some(0));
    }

    #[test]
    fn lengths_convert_exactly() {
        assert!((usize_to_f64(42) - 42.0).abs() < f64::EPSILON);
    }
}
