use log::debug;
use num_traits::Float;

use super::compose::{Composed, chart_intervals, compose};
use crate::axis::interval_size;
use crate::error::{IntervalError, Result};
use crate::util::{ensure_finite, min_max, negate, snap_to_magnitude};

/// Where a data range sits relative to zero.
///
/// Each region has its own computation path; the negative-side paths are
/// mirror images of the positive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignRegion {
    /// `min >= 0`.
    NonNegative,
    /// `min < 0 < max`.
    Straddling,
    /// `max <= 0` and `min < 0`.
    NonPositive,
}

impl SignRegion {
    pub fn classify<T: Float>(max: T, min: T) -> Self {
        let zero = T::zero();
        if max >= zero && min >= zero {
            Self::NonNegative
        } else if max > zero && min < zero {
            Self::Straddling
        } else {
            Self::NonPositive
        }
    }
}

/// Compute nice, strictly increasing axis ticks covering `values`.
///
/// Without `with_minimum` the axis is anchored at zero on the side of the
/// data; with it, the lower end follows the data minimum (useful for line
/// charts). Ranges that cross zero always include zero and use one step size
/// on both sides.
///
/// # Errors
///
/// [`IntervalError::InvalidInput`] when `values` is empty or contains a
/// non-finite value.
///
/// # Examples
///
/// ```
/// use gridline::calc_chart_intervals;
///
/// let ticks = calc_chart_intervals(&[7.0, 2.0, 9.0], false).unwrap();
/// assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
///
/// let ticks = calc_chart_intervals(&[-3.0, 5.0], false).unwrap();
/// assert_eq!(ticks, vec![-4.0, -2.0, 0.0, 2.0, 4.0, 6.0]);
/// ```
pub fn calc_chart_intervals<T: Float>(values: &[T], with_minimum: bool) -> Result<Vec<T>> {
    ensure_finite(values)?;
    let (min, max) = min_max(values)?;
    intervals_for_bounds(max, min, with_minimum)
}

/// Like [`calc_chart_intervals`], for data with gaps.
///
/// With `with_minimum`, missing entries are dropped before the bounds are
/// taken. Otherwise they count as zero.
///
/// ```
/// use gridline::calc_chart_intervals_sparse;
///
/// let data = [Some(52.0), None, Some(58.0)];
/// let ticks = calc_chart_intervals_sparse(&data, true).unwrap();
/// assert_eq!(ticks, vec![51.0, 53.0, 55.0, 57.0, 59.0]);
/// ```
pub fn calc_chart_intervals_sparse<T: Float>(
    values: &[Option<T>],
    with_minimum: bool,
) -> Result<Vec<T>> {
    let present: Vec<T> = if with_minimum {
        values.iter().flatten().copied().collect()
    } else {
        values.iter().map(|v| v.unwrap_or_else(T::zero)).collect()
    };
    calc_chart_intervals(&present, with_minimum)
}

fn intervals_for_bounds<T: Float>(max: T, min: T, with_minimum: bool) -> Result<Vec<T>> {
    let region = SignRegion::classify(max, min);
    debug!(
        "data range [{:?}, {:?}] is {region:?}",
        min.to_f64(),
        max.to_f64()
    );

    match region {
        SignRegion::NonNegative => non_negative(max, min, with_minimum),
        SignRegion::Straddling => straddling(max, min),
        SignRegion::NonPositive => non_positive(max, min, with_minimum),
    }
}

fn non_negative<T: Float>(max: T, min: T, with_minimum: bool) -> Result<Vec<T>> {
    let min = if with_minimum { min } else { T::zero() };
    chart_intervals(max, min)
}

fn straddling<T: Float>(max: T, min: T) -> Result<Vec<T>> {
    let abs_min = min.abs();
    if max >= abs_min {
        positive_first(max, abs_min)
    } else {
        positive_first(abs_min, max).map(mirror)
    }
}

fn non_positive<T: Float>(max: T, min: T, with_minimum: bool) -> Result<Vec<T>> {
    non_negative(min.abs(), max.abs(), with_minimum).map(mirror)
}

/// Ticks from zero up to `max`, extended below zero with the same step until
/// `-abs_min` is covered.
fn positive_first<T: Float>(max: T, abs_min: T) -> Result<Vec<T>> {
    let Composed { ticks, exponent } = compose(max, T::zero())?;
    let step = interval_size(&ticks)?;
    if step <= T::zero() {
        return Err(IntervalError::invalid("positive ticks have no step"));
    }

    let mut below = Vec::new();
    let mut covered = T::zero();
    let mut count = T::zero();
    while covered < abs_min {
        count = count + T::one();
        covered = snap_to_magnitude(step * count, exponent);
        below.push(negate(covered));
    }

    below.reverse();
    below.extend(ticks);
    Ok(below)
}

fn mirror<T: Float>(ticks: Vec<T>) -> Vec<T> {
    ticks.into_iter().rev().map(negate).collect()
}
