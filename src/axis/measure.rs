use num_traits::Float;

use crate::error::{IntervalError, Result};
use crate::util::index_value;

/// `count` equal parts between `min` and `max`, as `count + 1` boundaries.
///
/// Unlike [`calc_chart_intervals`](crate::calc_chart_intervals) no rounding
/// or "nice" step selection happens here. With `ascending == false` the
/// boundaries run from `max` down to `min`.
///
/// ```
/// use gridline::real_intervals;
///
/// assert_eq!(real_intervals(10.0, 5, 0.0, true).unwrap(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// assert_eq!(real_intervals(3.0, 3, 0.0, false).unwrap(), vec![3.0, 2.0, 1.0, 0.0]);
/// ```
pub fn real_intervals<T: Float>(max: T, count: usize, min: T, ascending: bool) -> Result<Vec<T>> {
    if count == 0 {
        return Err(IntervalError::invalid("interval count must be positive"));
    }

    let part = (max - min) / index_value(count)?;
    let mut intervals = (0..=count)
        .map(|i| -> Result<T> { Ok(min + part * index_value(i)?) })
        .collect::<Result<Vec<T>>>()?;

    if !ascending {
        intervals.reverse();
    }
    Ok(intervals)
}

/// Distance between the first two ticks.
pub fn interval_size<T: Float>(ticks: &[T]) -> Result<T> {
    match ticks {
        [first, second, ..] => Ok(*second - *first),
        _ => Err(IntervalError::invalid(format!(
            "interval size needs at least two ticks, got {}",
            ticks.len()
        ))),
    }
}

/// Distance from the first tick to the last.
pub fn value_range<T: Float>(ticks: &[T]) -> Result<T> {
    match (ticks.first(), ticks.last()) {
        (Some(first), Some(last)) => Ok(*last - *first),
        _ => Err(IntervalError::invalid("value range of an empty tick sequence")),
    }
}
