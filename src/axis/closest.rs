use num_traits::Float;

use crate::error::{IntervalError, Result};

fn closest_entry<T: Float>(target: T, values: &[T]) -> Result<(usize, T)> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| IntervalError::invalid("no candidates to search"))?;

    // Strict comparison keeps the earliest of equally close candidates.
    Ok(rest
        .iter()
        .enumerate()
        .fold((0, *first), |(best_index, best), (i, candidate)| {
            if (*candidate - target).abs() < (best - target).abs() {
                (i + 1, *candidate)
            } else {
                (best_index, best)
            }
        }))
}

/// Value in `values` nearest to `target`; ties go to the earlier element.
///
/// ```
/// use gridline::closest_in;
///
/// assert_eq!(closest_in(4.4, &[1.0, 4.0, 5.0]).unwrap(), 4.0);
/// assert_eq!(closest_in(4.5, &[5.0, 4.0]).unwrap(), 5.0);
/// ```
pub fn closest_in<T: Float>(target: T, values: &[T]) -> Result<T> {
    closest_entry(target, values).map(|(_, value)| value)
}

/// Index of the value nearest to `target`.
///
/// The index is the first occurrence of the chosen value.
pub fn closest_index_in<T: Float>(target: T, values: &[T]) -> Result<usize> {
    closest_entry(target, values).map(|(index, _)| index)
}
