use num_traits::Float;

use super::normalize::normalize;
use super::partition::Partition;
use crate::error::{IntervalError, Result};
use crate::util::{restore_magnitude, shift_decimal};

/// Ticks in the original scale together with the decade they were built in.
pub(crate) struct Composed<T> {
    pub ticks: Vec<T>,
    pub exponent: i32,
}

pub(crate) fn compose<T: Float>(max: T, min: T) -> Result<Composed<T>> {
    let exponent = normalize(max)?.exponent;
    let normal_max = shift_decimal(max, -exponent);
    let normal_min = if min == T::zero() {
        T::zero()
    } else {
        shift_decimal(min, -exponent)
    };

    let ticks: Vec<T> = Partition::plan(normal_max, normal_min)
        .iter()
        .map(|value| restore_magnitude(value, exponent))
        .collect();

    // Ticks past the float range overflow or collapse into each other.
    if ticks.iter().any(|tick| !tick.is_finite()) {
        return Err(IntervalError::invalid(format!(
            "ticks for decade 10^{exponent} overflow"
        )));
    }
    if ticks.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(IntervalError::invalid(format!(
            "ticks for decade 10^{exponent} are not distinct"
        )));
    }

    Ok(Composed { ticks, exponent })
}

/// Nice ticks for a single non-negative region `min..=max`.
///
/// Both bounds are scaled by the decade of `max`, partitioned, and scaled
/// back. Precision follows the normalized magnitude: every tick is a multiple
/// of `10^(exponent - 1)`.
///
/// # Examples
///
/// ```
/// use gridline::interval::chart_intervals;
///
/// assert_eq!(chart_intervals(250.0_f64, 0.0).unwrap(), vec![0.0, 100.0, 200.0, 300.0]);
/// assert_eq!(chart_intervals(0.05_f64, 0.0).unwrap(), vec![0.0, 0.02, 0.04, 0.06]);
/// ```
pub fn chart_intervals<T: Float>(max: T, min: T) -> Result<Vec<T>> {
    compose(max, min).map(|composed| composed.ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescales_by_exponent() {
        let composed = compose(250.0_f64, 0.0).unwrap();
        assert_eq!(composed.exponent, 2);
        assert_eq!(composed.ticks, vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn small_magnitudes_keep_precision() {
        assert_eq!(
            chart_intervals(0.05_f64, 0.0).unwrap(),
            vec![0.0, 0.02, 0.04, 0.06]
        );
    }

    #[test]
    fn minimum_is_scaled_with_max() {
        assert_eq!(
            chart_intervals(58.0_f64, 52.0).unwrap(),
            vec![51.0, 53.0, 55.0, 57.0, 59.0]
        );
    }

    #[test]
    fn large_magnitudes() {
        assert_eq!(
            chart_intervals(9_000_000.0_f64, 0.0).unwrap(),
            vec![0.0, 2e6, 4e6, 6e6, 8e6, 1e7]
        );
    }

    #[test]
    fn rejects_non_finite_max() {
        assert!(chart_intervals(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn rejects_ticks_beyond_float_range() {
        assert!(chart_intervals(f64::MAX, 0.0).is_err());
    }

    #[test]
    fn tiny_magnitudes_stay_distinct() {
        assert_eq!(
            chart_intervals(5e-308_f64, 0.0).unwrap(),
            vec![0.0, 2e-308, 4e-308, 6e-308]
        );
        assert_eq!(
            chart_intervals(f64::MIN_POSITIVE, 0.0).unwrap(),
            vec![0.0, 1e-308, 2e-308, 3e-308]
        );
    }

    #[test]
    fn decades_past_exact_powers() {
        assert_eq!(
            chart_intervals(7.3e30_f64, 0.0).unwrap(),
            vec![0.0, 2e30, 4e30, 6e30, 8e30]
        );
        assert_eq!(
            chart_intervals(4.2e-100_f64, 0.0).unwrap(),
            vec![0.0, 1e-100, 2e-100, 3e-100, 4e-100, 5e-100]
        );
    }
}
