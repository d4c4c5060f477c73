#![allow(clippy::unnecessary_wraps)]

use crate::{
    error::EvalError,
    interpreter::parser::core::EvalResult,
    util::num::{truncate_to_i32, wrapping_factorial},
};

/// Square root. Negative input yields `NaN`.
pub fn sqrt(x: f64) -> EvalResult<f64> {
    Ok(x.sqrt())
}

/// Cube root, defined for every real input.
pub fn cbrt(x: f64) -> EvalResult<f64> {
    Ok(x.cbrt())
}

/// Base-10 logarithm. Zero yields negative infinity and negative input
/// yields `NaN`.
pub fn log(x: f64) -> EvalResult<f64> {
    Ok(x.log10())
}

/// Sine of an angle given in degrees.
///
/// # Example
/// ```
/// use scical::interpreter::function::builtin::sin;
///
/// assert!((sin(30.0).unwrap() - 0.5).abs() < 1e-12);
/// ```
pub fn sin(x: f64) -> EvalResult<f64> {
    Ok(x.to_radians().sin())
}

/// Cosine of an angle given in degrees.
pub fn cos(x: f64) -> EvalResult<f64> {
    Ok(x.to_radians().cos())
}

/// Tangent of an angle given in degrees.
///
/// `tan(90)` is a very large finite number rather than infinity, because
/// 90 degrees has no exact radian representation.
pub fn tan(x: f64) -> EvalResult<f64> {
    Ok(x.to_radians().tan())
}

/// Inverse sine, returning degrees. Input outside `[-1, 1]` yields `NaN`.
///
/// # Example
/// ```
/// use scical::interpreter::function::builtin::asin;
///
/// assert!((asin(1.0).unwrap() - 90.0).abs() < 1e-12);
/// assert!(asin(2.0).unwrap().is_nan());
/// ```
pub fn asin(x: f64) -> EvalResult<f64> {
    Ok(x.asin().to_degrees())
}

/// Inverse cosine, returning degrees. Input outside `[-1, 1]` yields `NaN`.
pub fn acos(x: f64) -> EvalResult<f64> {
    Ok(x.acos().to_degrees())
}

/// Inverse tangent, returning degrees.
pub fn atan(x: f64) -> EvalResult<f64> {
    Ok(x.atan().to_degrees())
}

/// Factorial of `x` truncated toward zero.
///
/// The product is accumulated in 32 bits and wraps past `12!`.
///
/// # Errors
/// [`EvalError::NegativeFactorial`] if the truncated argument is negative.
///
/// # Example
/// ```
/// use scical::{error::EvalError, interpreter::function::builtin::factorial};
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(5.9).unwrap(), 120.0);
/// assert_eq!(factorial(-0.5).unwrap(), 1.0);
/// assert_eq!(factorial(-3.0).unwrap_err(),
///            EvalError::NegativeFactorial { value: -3 });
/// ```
pub fn factorial(x: f64) -> EvalResult<f64> {
    let n = truncate_to_i32(x);
    if n < 0 {
        return Err(EvalError::NegativeFactorial { value: n });
    }

    Ok(f64::from(wrapping_factorial(n)))
}

/// Percent: `x / 100`.
pub fn percent(x: f64) -> EvalResult<f64> {
    Ok(x / 100.0)
}

/// Absolute value.
pub fn abs(x: f64) -> EvalResult<f64> {
    Ok(x.abs())
}
