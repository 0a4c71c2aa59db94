use log::trace;
use num_traits::Float;

use crate::util::{round1, tenth};

/// Evenly spaced partition of a normalized range.
///
/// Produced by [`Partition::plan`] from bounds that have already been scaled
/// into roughly `[0, 10)`. Iterating yields `lower + step * i` for
/// `i = 0..=parts`, each rounded to one decimal, stopping right after the
/// first value above the data maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition<T> {
    pub lower: T,
    pub step: T,
    pub parts: usize,
    limit: Option<T>,
}

fn ceil_count<T: Float>(value: T) -> usize {
    value.ceil().to_usize().unwrap_or(0)
}

impl<T: Float> Partition<T> {
    /// Choose lower bound, step and part count for `min..=max`.
    ///
    /// `min` must not exceed `max`; pass zero to anchor the partition at zero.
    pub fn plan(max: T, min: T) -> Self {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let four = two + two;
        let five = four + one;

        // All-zero data: nothing to fit, show a default 0..=5 axis.
        if max == zero && min == zero {
            return Self {
                lower: zero,
                step: one,
                parts: 5,
                limit: None,
            };
        }

        let mut upper = round1(max + tenth());
        let mut lower = if min < one {
            zero
        } else {
            round1(min - tenth())
        };
        let mut range = round1(upper - lower);

        let mut parts = ceil_count(range);
        let mut step = one;

        if range > five {
            // Even ranges halve cleanly into steps of two.
            if range % two != zero {
                upper = upper + one;
                range = round1(upper - lower);
            }
            parts = ceil_count(range / two);
            step = two;
        }

        if range <= two {
            parts = 4;
            step = range / four;
            if round1(lower + step * two) <= min {
                lower = lower + step;
            }
        }

        trace!(
            "partition: upper={:?} lower={:?} range={:?} parts={parts} step={:?}",
            upper.to_f64(),
            lower.to_f64(),
            range.to_f64(),
            step.to_f64()
        );

        Self {
            lower,
            step,
            parts,
            limit: Some(max),
        }
    }

    pub fn iter(&self) -> PartitionIter<T> {
        PartitionIter {
            partition: *self,
            index: 0,
            last_value: None,
            done: false,
        }
    }
}

/// Iterator over the rounded values of a [`Partition`].
pub struct PartitionIter<T> {
    partition: Partition<T>,
    index: usize,
    last_value: Option<T>,
    done: bool,
}

impl<T: Float> Iterator for PartitionIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.index <= self.partition.parts {
            let multiplier = T::from(self.index)?;
            let value = round1(self.partition.lower + self.partition.step * multiplier);
            self.index += 1;

            if self.partition.limit.is_some_and(|limit| value > limit) {
                self.done = true;
            }

            // Rounding can collapse neighbouring small steps onto one value.
            if self.last_value == Some(value) {
                continue;
            }
            self.last_value = Some(value);

            return Some(value);
        }
        None
    }
}

/// Nice partition values covering the normalized range `min..=max`.
///
/// # Examples
///
/// ```
/// use gridline::interval::range_intervals;
///
/// assert_eq!(range_intervals(9.0_f64, 0.0), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// assert_eq!(range_intervals(2.5_f64, 0.0), vec![0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn range_intervals<T: Float>(max: T, min: T) -> Vec<T> {
    Partition::plan(max, min).iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_range_uses_step_two() {
        let plan = Partition::plan(9.0_f64, 0.0);
        assert_eq!(plan.step, 2.0);
        assert_eq!(plan.parts, 6);
        assert_eq!(plan.lower, 0.0);
        assert_eq!(
            range_intervals(9.0_f64, 0.0),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
    }

    #[test]
    fn truncates_after_first_value_above_max() {
        assert_eq!(range_intervals(5.0_f64, 0.0), vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(range_intervals(2.5_f64, 0.0), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn medium_range_uses_unit_step() {
        let plan = Partition::plan(4.0_f64, 0.0);
        assert_eq!(plan.step, 1.0);
        assert_eq!(plan.parts, 5);
        assert_eq!(range_intervals(4.0_f64, 0.0), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn all_zero_gives_default_axis() {
        assert_eq!(
            range_intervals(0.0_f64, 0.0),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn small_range_with_minimum() {
        let plan = Partition::plan(5.8_f64, 5.2);
        assert_eq!(plan.parts, 4);
        assert_eq!(plan.lower, 5.1);
        assert_eq!(
            range_intervals(5.8_f64, 5.2),
            vec![5.1, 5.3, 5.5, 5.7, 5.9]
        );
    }

    #[test]
    fn identical_bounds_shift_lower_and_stay_increasing() {
        let plan = Partition::plan(5.0_f64, 5.0);
        assert!(plan.lower > 4.9);

        let values = range_intervals(5.0_f64, 5.0);
        assert!(values.len() >= 2);
        assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
        assert!(values[0] <= 5.0);
        assert!(*values.last().unwrap() >= 5.0);
    }
}
