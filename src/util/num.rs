/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `i64` to the nearest `f64`.
///
/// Values whose magnitude exceeds [`MAX_SAFE_I64_INT`] are rounded.
///
/// ## Example
/// ```
/// use shunt::util::num::{MAX_SAFE_I64_INT, i64_to_f64};
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(MAX_SAFE_I64_INT), 9_007_199_254_740_991.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `i64` to `u32` if and only if it is exactly representable.
///
/// ## Returns
/// - `Some(u32)`: The converted value.
/// - `None`: If the value is negative or larger than `u32::MAX`.
///
/// ## Example
/// ```
/// use shunt::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45), Some(45));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Converts an `f64` to `i64` if and only if it holds exactly that integer.
///
/// ## Returns
/// - `Some(i64)`: The value, for finite, integral reals in `i64` range.
/// - `None`: For fractional, non-finite, or out-of-range values.
///
/// ## Example
/// ```
/// use shunt::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// // 2^63 is one past i64::MAX.
/// assert_eq!(f64_to_i64_exact(9_223_372_036_854_775_808.0), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    // i64::MIN is -2^63 exactly; i64::MAX rounds up to 2^63, which is excluded.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i64)
}
