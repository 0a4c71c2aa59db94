use num_traits::Float;

use crate::error::{IntervalError, Result};
use crate::util::{ensure_finite, index_value, min_max};

/// `count` evenly spaced checkpoints from zero to the largest value.
///
/// The data is assumed non-negative, so the distribution always starts at
/// zero and ends at `max(values)`.
///
/// ```
/// use gridline::{calc_distribution, max_checkpoint};
///
/// let distribution = calc_distribution(&[10.0, 3.0, 7.0], 3).unwrap();
/// assert_eq!(distribution, vec![0.0, 5.0, 10.0]);
/// assert_eq!(max_checkpoint(6.0, &distribution).unwrap(), 2);
/// ```
pub fn calc_distribution<T: Float>(values: &[T], count: usize) -> Result<Vec<T>> {
    if count < 2 {
        return Err(IntervalError::invalid(format!(
            "distribution needs at least two checkpoints, got {count}"
        )));
    }
    ensure_finite(values)?;
    let (_, max) = min_max(values)?;

    let step = T::one() / index_value(count - 1)?;
    (0..count)
        .map(|i| -> Result<T> { Ok(max * (step * index_value(i)?)) })
        .collect()
}

/// Number of checkpoints strictly below `value`.
pub fn max_checkpoint<T: Float>(value: T, distribution: &[T]) -> Result<usize> {
    if distribution.is_empty() {
        return Err(IntervalError::invalid("empty distribution"));
    }
    Ok(distribution.iter().filter(|checkpoint| **checkpoint < value).count())
}
