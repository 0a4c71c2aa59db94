use num_traits::Float;

use crate::error::{IntervalError, Result};
use crate::util::{negate, shift_decimal, ten};

/// A number split into a signed mantissa and a base-10 exponent.
///
/// For nonzero inputs `1 <= |mantissa| < 10` and
/// `mantissa * 10^exponent` reproduces the original value up to rounding.
/// Zero normalizes to `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized<T> {
    pub mantissa: T,
    pub exponent: i32,
}

/// Decompose `value` into mantissa and exponent.
///
/// NaN and infinities are rejected; they have no meaningful magnitude.
///
/// # Examples
///
/// ```
/// use gridline::interval::normalize;
///
/// let n = normalize(-4200.0_f64).unwrap();
/// assert_eq!(n.exponent, 3);
/// assert!((n.mantissa + 4.2).abs() < 1e-12);
/// ```
pub fn normalize<T: Float>(value: T) -> Result<Normalized<T>> {
    if value.is_nan() || value.is_infinite() {
        return Err(IntervalError::invalid("cannot normalize a non-finite value"));
    }
    if value == T::zero() {
        return Ok(Normalized {
            mantissa: T::zero(),
            exponent: 0,
        });
    }

    let magnitude = value.abs();
    let mut exponent = magnitude
        .log10()
        .floor()
        .to_i32()
        .ok_or_else(|| IntervalError::invalid("exponent out of range"))?;
    let mut mantissa = shift_decimal(magnitude, -exponent);

    // log10 can land one ulp off at exact powers of ten.
    if mantissa >= ten() {
        mantissa = mantissa / ten();
        exponent += 1;
    } else if mantissa < T::one() {
        mantissa = mantissa * ten();
        exponent -= 1;
    }

    if !mantissa.is_finite() || mantissa == T::zero() {
        return Err(IntervalError::invalid("magnitude cannot be normalized"));
    }

    if value < T::zero() {
        mantissa = negate(mantissa);
    }

    Ok(Normalized { mantissa, exponent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_is_zero_zero() {
        let n = normalize(0.0_f64).unwrap();
        assert_eq!(n.mantissa, 0.0);
        assert_eq!(n.exponent, 0);
    }

    #[test]
    fn positive_and_negative_values() {
        let n = normalize(9.0_f64).unwrap();
        assert_eq!((n.mantissa, n.exponent), (9.0, 0));

        let n = normalize(250.0_f64).unwrap();
        assert_eq!(n.exponent, 2);
        assert_relative_eq!(n.mantissa, 2.5);

        let n = normalize(-0.05_f64).unwrap();
        assert_eq!(n.exponent, -2);
        assert_relative_eq!(n.mantissa, -5.0);
    }

    #[test]
    fn exact_powers_of_ten() {
        for exponent in -6..=12 {
            let value = shift_decimal(1.0_f64, exponent);
            let n = normalize(value).unwrap();
            assert_eq!(n.exponent, exponent, "value {value}");
            assert_relative_eq!(n.mantissa, 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn mantissa_stays_in_decade() {
        for value in [1.0_f64, 9.999, 10.0, 0.1, 123456.789, 7e-9, 3.3e15] {
            let n = normalize(value).unwrap();
            assert!(n.mantissa >= 1.0 && n.mantissa < 10.0, "{value} -> {n:?}");
        }
    }

    #[test]
    fn rejects_non_finite() {
        assert!(normalize(f64::NAN).is_err());
        assert!(normalize(f64::INFINITY).is_err());
        assert!(normalize(f64::NEG_INFINITY).is_err());
    }
}
