use num_traits::Float;

use crate::error::{IntervalError, Result};

pub(crate) fn ten<T: Float>() -> T {
    let two = T::one() + T::one();
    let five = two + two + T::one();
    five + five
}

/// One tenth, the padding applied around normalized bounds.
pub(crate) fn tenth<T: Float>() -> T {
    T::one() / ten::<T>()
}

/// Negate without producing a signed zero.
pub(crate) fn negate<T: Float>(value: T) -> T {
    T::zero() - value
}

/// Largest power of ten an `f64` represents exactly.
const EXACT_POWER: i32 = 22;

/// Multiply `value` by `10^exponent`.
///
/// Negative exponents divide by the positive power instead of multiplying by
/// an inexact reciprocal, so `20 * 10^-3` lands exactly on `0.02`. The result
/// is correctly rounded while `|exponent| <= 22` for `f64`. Shifts too large
/// for one power of `T` are taken in two steps.
pub fn shift_decimal<T: Float>(value: T, exponent: i32) -> T {
    if exponent.unsigned_abs() > max_power::<T>() {
        let half = exponent / 2;
        return shift_decimal(shift_decimal(value, half), exponent - half);
    }
    if exponent >= 0 {
        value * ten::<T>().powi(exponent)
    } else {
        value / ten::<T>().powi(-exponent)
    }
}

/// Largest `p` with a finite `10^p` in `T`.
fn max_power<T: Float>() -> u32 {
    T::max_value()
        .log10()
        .floor()
        .to_u32()
        .filter(|power| *power > 0)
        .unwrap_or(1)
}

/// `digits * 10^exponent` for an integral `digits`.
///
/// Past `10^22` a binary float no longer holds the power exactly and the
/// product rounds twice (`6 * 1e30 != 6e30`). Those values are rebuilt from
/// their decimal form, which is correctly rounded. Wider types keep the plain
/// shift.
pub(crate) fn decimal_value<T: Float>(digits: T, exponent: i32) -> T {
    if exponent.abs() <= EXACT_POWER || !binary_precision::<T>() {
        return shift_decimal(digits, exponent);
    }
    digits
        .to_i64()
        .and_then(|digits| format!("{digits}e{exponent}").parse::<f64>().ok())
        .and_then(T::from)
        .unwrap_or_else(|| shift_decimal(digits, exponent))
}

/// True when `T` carries no more precision than `f64`.
fn binary_precision<T: Float>() -> bool {
    T::from(f64::EPSILON).is_some_and(|epsilon| T::epsilon() >= epsilon)
}

/// Round to `places` decimal places, halves away from zero.
pub fn round_to<T: Float>(value: T, places: i32) -> T {
    shift_decimal(shift_decimal(value, places).round(), -places)
}

/// Round to a single decimal place, the precision used by the interval algorithm.
pub fn round1<T: Float>(value: T) -> T {
    round_to(value, 1)
}

/// Round a normalized value to one decimal and scale it back by `10^exponent`.
///
/// The result is an integer multiple of `10^(exponent - 1)`.
pub(crate) fn restore_magnitude<T: Float>(normalized: T, exponent: i32) -> T {
    let tenths = (normalized * ten::<T>()).round();
    decimal_value(tenths, exponent - 1)
}

/// Snap an original-scale value onto the `10^(exponent - 1)` grid.
pub(crate) fn snap_to_magnitude<T: Float>(value: T, exponent: i32) -> T {
    restore_magnitude(shift_decimal(value, -exponent), exponent)
}

pub(crate) fn ensure_finite<T: Float>(values: &[T]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(IntervalError::invalid(format!(
            "value at index {index} is not finite"
        ))),
        None => Ok(()),
    }
}

/// Return `(min, max)` over a non-empty slice.
pub(crate) fn min_max<T: Float>(values: &[T]) -> Result<(T, T)> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| IntervalError::invalid("no data values"))?;
    Ok(rest
        .iter()
        .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v))))
}

pub(crate) fn index_value<T: Float>(index: usize) -> Result<T> {
    T::from(index)
        .ok_or_else(|| IntervalError::invalid(format!("index {index} is not representable")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn round_to_places() {
        assert_eq!(round1(9.1_f64 + 1.0), 10.1);
        assert_eq!(round_to(1.25_f64, 1), 1.3);
        assert_eq!(round_to(-1.25_f64, 1), -1.3);
        assert_eq!(round_to(1234.5_f64, -2), 1200.0);
        // 0.35 scales to exactly 3.5 and rounds up
        assert_eq!(round1(0.35_f64), 0.4);
    }

    #[test]
    fn shift_decimal_is_exact_for_small_powers() {
        assert_eq!(shift_decimal(20.0_f64, -3), 0.02);
        assert_eq!(shift_decimal(3.0_f64, 2), 300.0);
        assert_eq!(shift_decimal(7.0_f64, 0), 7.0);
    }

    #[test]
    fn shift_decimal_splits_powers_beyond_range() {
        assert!(shift_decimal(5e-308_f64, 308).is_finite());
        let mantissa = shift_decimal(5e-310_f64, 310);
        assert!(mantissa.is_finite());
        assert_abs_diff_eq!(mantissa, 5.0, epsilon = 1e-3);
        assert_eq!(shift_decimal(1.0_f64, -400), 0.0);
    }

    #[test]
    fn decimal_value_is_correctly_rounded_for_large_powers() {
        assert_eq!(decimal_value(60.0_f64, 29), 6e30);
        assert_eq!(decimal_value(20.0_f64, 29), 2e30);
        assert_eq!(decimal_value(10.0_f64, -101), 1e-100);
        assert_eq!(decimal_value(19.0_f64, 307), f64::INFINITY);
        assert_eq!(decimal_value(20.0_f64, -309), 2e-308);
    }

    #[test]
    fn restore_magnitude_lands_on_grid() {
        assert_eq!(restore_magnitude(0.3_f64, 1), 3.0);
        assert_eq!(restore_magnitude(2.0_f64, -2), 0.02);
        assert_eq!(restore_magnitude(5.1_f64, 3), 5100.0);
        assert_eq!(snap_to_magnitude(0.6000000000000001_f64, 0), 0.6);
    }

    #[test]
    fn negate_avoids_signed_zero() {
        let zero = negate(0.0_f64);
        assert!(zero.is_sign_positive());
        assert_abs_diff_eq!(negate(2.5_f64), -2.5);
    }

    #[test]
    fn min_max_and_finiteness() {
        assert_eq!(min_max(&[3.0_f64, -1.0, 7.0]).unwrap(), (-1.0, 7.0));
        assert!(min_max::<f64>(&[]).is_err());
        assert!(ensure_finite(&[1.0_f64, 2.0]).is_ok());
        assert!(ensure_finite(&[1.0_f64, f64::NAN]).is_err());
        assert!(ensure_finite(&[f64::NEG_INFINITY]).is_err());
    }
}
