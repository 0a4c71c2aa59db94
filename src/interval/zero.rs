use num_traits::Float;

use crate::axis::interval_size;
use crate::error::Result;
use crate::util::{index_value, negate};

/// Index at which zero falls within an evenly spaced tick sequence.
///
/// When zero is one of the ticks its index is returned. Otherwise the
/// position is extrapolated from the step: negative when zero lies below
/// the first tick, past the last index when it lies above the last one.
///
/// # Examples
///
/// ```
/// use gridline::zero_index;
///
/// assert_eq!(zero_index(&[-4.0, -2.0, 0.0, 2.0, 4.0]).unwrap(), 2.0);
/// assert_eq!(zero_index(&[2.0, 4.0, 6.0, 8.0]).unwrap(), -1.0);
/// ```
pub fn zero_index<T: Float>(ticks: &[T]) -> Result<T> {
    let interval = interval_size(ticks)?;

    if let Some(index) = ticks.iter().position(|tick| *tick == T::zero()) {
        return index_value(index);
    }

    let first = ticks[0];
    if first > T::zero() {
        return Ok(negate(first) / interval);
    }

    let last_index = ticks.len() - 1;
    Ok(negate(ticks[last_index]) / interval + index_value(last_index)?)
}
