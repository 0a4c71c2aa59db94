use num_traits::Float;

use super::measure::{interval_size, value_range};
use crate::error::{IntervalError, Result};
use crate::interval::zero_index;
use crate::util::round1;

/// Maps data values onto a vertical pixel axis.
///
/// `zero_line` is the pixel position of the value zero and
/// `scale_multiplier` the number of pixels per data unit. Screen Y grows
/// downward, so larger values map to smaller pixel positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping<T = f64> {
    pub zero_line: T,
    pub scale_multiplier: T,
}

impl<T: Float> AxisMapping<T> {
    pub const fn new(zero_line: T, scale_multiplier: T) -> Self {
        Self {
            zero_line,
            scale_multiplier,
        }
    }

    /// Fit a tick sequence into an axis `height` pixels tall.
    ///
    /// The first tick lands on `height` and the last on `0`.
    ///
    /// ```
    /// use gridline::AxisMapping;
    ///
    /// let axis = AxisMapping::fit(&[-4.0, -2.0, 0.0, 2.0, 4.0], 80.0).unwrap();
    /// assert_eq!(axis.zero_line, 40.0);
    /// assert_eq!(axis.scale(-4.0), 80.0);
    /// assert_eq!(axis.scale(4.0), 0.0);
    /// ```
    pub fn fit(ticks: &[T], height: T) -> Result<Self> {
        let range = value_range(ticks)?;
        if range == T::zero() {
            return Err(IntervalError::invalid("ticks span no values"));
        }

        let scale_multiplier = height / range;
        let interval_height = interval_size(ticks)? * scale_multiplier;
        let zero_line = height - zero_index(ticks)? * interval_height;

        Ok(Self::new(zero_line, scale_multiplier))
    }

    /// Pixel position of `value`, rounded to one decimal place.
    pub fn scale(&self, value: T) -> T {
        round1(self.zero_line - value * self.scale_multiplier)
    }
}

/// Free-function form of [`AxisMapping::scale`].
///
/// ```
/// use gridline::{AxisMapping, scale};
///
/// assert_eq!(scale(5.0, &AxisMapping::new(100.0, 10.0)), 50.0);
/// ```
pub fn scale<T: Float>(value: T, axis: &AxisMapping<T>) -> T {
    axis.scale(value)
}
