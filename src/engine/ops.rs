//! Stateless arithmetic and scientific functions
//!
//! Each function validates its input and either returns the native `f64`
//! result or a [`CalcError`]. None of them touch history.

use std::f64::consts::PI;

use crate::error::{CalcError, Result};

const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";
const MODULO_BY_ZERO: &str = "Cannot perform modulo with zero";
const ZERO_NEGATIVE_POWER: &str = "Cannot raise zero to a negative power";
const NEGATIVE_SQRT: &str = "Cannot calculate square root of negative number";
const NON_POSITIVE_LOG: &str = "Logarithm undefined for non-positive numbers";
const TOO_LARGE: &str = "Result too large to compute";

pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

pub fn divide(x: f64, y: f64) -> Result<f64> {
    if y == 0.0 {
        return Err(CalcError::division_by_zero(DIVIDE_BY_ZERO));
    }
    Ok(x / y)
}

/// `x` raised to `y`.
///
/// Only finite inputs can overflow; `inf ** 2` is simply `inf`.
pub fn power(x: f64, y: f64) -> Result<f64> {
    if x == 0.0 && y < 0.0 {
        return Err(CalcError::division_by_zero(ZERO_NEGATIVE_POWER));
    }
    check_overflow(x.powf(y), x.is_finite() && y.is_finite())
}

/// Floor-style modulo: a non-zero result takes the sign of the divisor.
pub fn modulo(x: f64, y: f64) -> Result<f64> {
    if y == 0.0 {
        return Err(CalcError::division_by_zero(MODULO_BY_ZERO));
    }
    let rem = x % y;
    if rem != 0.0 && (rem < 0.0) != (y < 0.0) {
        Ok(rem + y)
    } else {
        // zero keeps the divisor's sign too
        Ok(if rem == 0.0 { 0.0_f64.copysign(y) } else { rem })
    }
}

pub fn square_root(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(CalcError::domain(NEGATIVE_SQRT));
    }
    Ok(x.sqrt())
}

pub fn sine(x: f64) -> f64 {
    x.sin()
}

pub fn cosine(x: f64) -> f64 {
    x.cos()
}

pub fn tangent(x: f64) -> f64 {
    x.tan()
}

pub fn natural_log(x: f64) -> Result<f64> {
    if x <= 0.0 {
        return Err(CalcError::domain(NON_POSITIVE_LOG));
    }
    Ok(x.ln())
}

pub fn log_base_10(x: f64) -> Result<f64> {
    if x <= 0.0 {
        return Err(CalcError::domain(NON_POSITIVE_LOG));
    }
    Ok(x.log10())
}

pub fn exponential(x: f64) -> Result<f64> {
    check_overflow(x.exp(), x.is_finite())
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

fn check_overflow(result: f64, finite_inputs: bool) -> Result<f64> {
    if finite_inputs && result.is_infinite() {
        return Err(CalcError::overflow(TOO_LARGE));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_addition() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.0, 1.0), 0.0);
        assert_close(add(0.1, 0.2), 0.3);
        assert_eq!(add(-5.0, -3.0), -8.0);
        assert_eq!(add(1e10, 1e10), 2e10);
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(-1.0, -1.0), 0.0);
        assert_close(subtract(0.5, 0.3), 0.2);
        assert_close(subtract(1.0, 0.9), 0.1);
        assert_eq!(subtract(10.0, 15.0), -5.0);
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(multiply(0.0, 5.0), 0.0);
        assert_eq!(multiply(-2.0, -3.0), 6.0);
        assert_eq!(multiply(0.5, 4.0), 2.0);
        assert_close(multiply(1e-10, 2.0), 2e-10);
    }

    #[test]
    fn test_division() {
        assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(divide(-8.0, 2.0).unwrap(), -4.0);
        assert_eq!(divide(-8.0, -2.0).unwrap(), 4.0);
        assert!((divide(1.0, 3.0).unwrap() - 0.333333).abs() < 1e-5);
    }

    #[test]
    fn test_division_by_zero() {
        let err = divide(10.0, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero(_)));
        assert_eq!(err.to_string(), "Cannot divide by zero");
        assert!(divide(-5.0, -0.0).is_err());
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 3.0).unwrap(), 8.0);
        assert_eq!(power(2.0, 0.0).unwrap(), 1.0);
        assert_eq!(power(0.0, 5.0).unwrap(), 0.0);
        assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
        assert_eq!(power(-2.0, 2.0).unwrap(), 4.0);
        assert_eq!(power(4.0, 0.5).unwrap(), 2.0);
    }

    #[test]
    fn test_power_overflow() {
        let err = power(10.0, 1000.0).unwrap_err();
        assert!(matches!(err, CalcError::Overflow(_)));
        assert_eq!(err.to_string(), "Result too large to compute");
    }

    #[test]
    fn test_power_infinite_input_is_not_overflow() {
        assert_eq!(power(f64::INFINITY, 2.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_power_zero_negative_exponent() {
        let err = power(0.0, -1.0).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero(_)));
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_nan() {
        assert!(power(-8.0, 1.0 / 3.0).unwrap().is_nan());
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(10.0, 3.0).unwrap(), 1.0);
        assert_eq!(modulo(15.0, 5.0).unwrap(), 0.0);
        assert_eq!(modulo(-10.0, 3.0).unwrap(), 2.0);
        assert_eq!(modulo(10.0, -3.0).unwrap(), -2.0);
        assert_eq!(modulo(-10.0, -3.0).unwrap(), -1.0);
        assert_close(modulo(10.5, 3.0).unwrap(), 1.5);
    }

    #[test]
    fn test_modulo_zero_result_takes_divisor_sign() {
        let r = modulo(6.0, -3.0).unwrap();
        assert_eq!(r, 0.0);
        assert!(r.is_sign_negative());
    }

    #[test]
    fn test_modulo_by_zero() {
        let err = modulo(10.0, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero(_)));
        assert_eq!(err.to_string(), "Cannot perform modulo with zero");
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(9.0).unwrap(), 3.0);
        assert_eq!(square_root(0.0).unwrap(), 0.0);
        assert_eq!(square_root(0.25).unwrap(), 0.5);
        assert!((square_root(2.0).unwrap() - 1.414213).abs() < 1e-5);
    }

    #[test]
    fn test_square_root_negative() {
        for x in [-1.0, -9.0] {
            let err = square_root(x).unwrap_err();
            assert!(matches!(err, CalcError::Domain(_)));
            assert_eq!(
                err.to_string(),
                "Cannot calculate square root of negative number"
            );
        }
    }

    #[test]
    fn test_trigonometry() {
        assert_close(sine(0.0), 0.0);
        assert_close(sine(PI / 2.0), 1.0);
        assert!(sine(PI).abs() < 1e-10);
        assert_close(sine(-PI / 2.0), -1.0);

        assert_close(cosine(0.0), 1.0);
        assert!(cosine(PI / 2.0).abs() < 1e-10);
        assert_close(cosine(PI), -1.0);
        assert_close(cosine(2.0 * PI), 1.0);

        assert_close(tangent(0.0), 0.0);
        assert_close(tangent(PI / 4.0), 1.0);
        assert_close(tangent(-PI / 4.0), -1.0);
    }

    #[test]
    fn test_natural_log() {
        assert_close(natural_log(E).unwrap(), 1.0);
        assert_close(natural_log(1.0).unwrap(), 0.0);
        assert_close(natural_log(E * E).unwrap(), 2.0);
        assert!((natural_log(0.5).unwrap() + 0.693147).abs() < 1e-5);
    }

    #[test]
    fn test_log_base_10() {
        assert_close(log_base_10(10.0).unwrap(), 1.0);
        assert_close(log_base_10(100.0).unwrap(), 2.0);
        assert_close(log_base_10(1.0).unwrap(), 0.0);
        assert_close(log_base_10(0.1).unwrap(), -1.0);
    }

    #[test]
    fn test_logarithms_reject_non_positive() {
        for x in [0.0, -1.0, -5.0] {
            assert!(matches!(natural_log(x), Err(CalcError::Domain(_))));
            assert!(matches!(log_base_10(x), Err(CalcError::Domain(_))));
        }
        assert_eq!(
            natural_log(0.0).unwrap_err().to_string(),
            "Logarithm undefined for non-positive numbers"
        );
    }

    #[test]
    fn test_exponential() {
        assert_close(exponential(0.0).unwrap(), 1.0);
        assert_close(exponential(1.0).unwrap(), E);
        assert_close(exponential(2.0).unwrap(), E * E);
        assert_close(exponential(-1.0).unwrap(), 1.0 / E);
    }

    #[test]
    fn test_exponential_overflow() {
        assert!(matches!(exponential(1000.0), Err(CalcError::Overflow(_))));
        assert_eq!(exponential(f64::INFINITY).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_angle_conversion() {
        assert_close(degrees_to_radians(0.0), 0.0);
        assert_close(degrees_to_radians(90.0), PI / 2.0);
        assert_close(degrees_to_radians(180.0), PI);
        assert_close(degrees_to_radians(-90.0), -PI / 2.0);

        assert_close(radians_to_degrees(PI / 2.0), 90.0);
        assert_close(radians_to_degrees(2.0 * PI), 360.0);
        assert_close(radians_to_degrees(-PI / 2.0), -90.0);
    }
}
