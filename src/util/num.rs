/// Truncates `value` toward zero into an `i32`.
///
/// Values beyond the `i32` range saturate at `i32::MIN` or `i32::MAX`, and
/// `NaN` becomes `0`.
///
/// # Example
/// ```
/// use scical::util::num::truncate_to_i32;
///
/// assert_eq!(truncate_to_i32(4.9), 4);
/// assert_eq!(truncate_to_i32(-4.9), -4);
/// assert_eq!(truncate_to_i32(1e12), i32::MAX);
/// assert_eq!(truncate_to_i32(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn truncate_to_i32(value: f64) -> i32 {
    value as i32
}

/// Computes `n!` in a 32-bit accumulator that wraps on overflow.
///
/// Values of `n` below one yield `1`. Results are exact up to `12!`; larger
/// inputs wrap around the `i32` range. From `34!` on the product carries a
/// factor of `2^32` and wraps to `0`, where it stays, so the loop stops
/// there.
///
/// # Example
/// ```
/// use scical::util::num::wrapping_factorial;
///
/// assert_eq!(wrapping_factorial(0), 1);
/// assert_eq!(wrapping_factorial(5), 120);
/// assert_eq!(wrapping_factorial(12), 479_001_600);
/// assert_eq!(wrapping_factorial(13), 1_932_053_504);
/// assert_eq!(wrapping_factorial(34), 0);
/// assert_eq!(wrapping_factorial(i32::MAX), 0);
/// ```
#[must_use]
pub fn wrapping_factorial(n: i32) -> i32 {
    let mut product: i32 = 1;
    for i in 1..=n {
        product = product.wrapping_mul(i);
        if product == 0 {
            break;
        }
    }
    product
}
