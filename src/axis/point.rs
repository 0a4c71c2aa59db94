use num_traits::Float;

/// A point in plot/chart coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotPoint<D = f64> {
    /// X coordinate in domain units.
    pub x: D,
    /// Y coordinate in domain units.
    pub y: D,
}

impl<D> PlotPoint<D> {
    /// Creates a new plot point at the given data coordinates.
    pub const fn new(x: D, y: D) -> Self {
        Self { x, y }
    }
}

impl<D> From<(D, D)> for PlotPoint<D> {
    fn from((x, y): (D, D)) -> Self {
        Self { x, y }
    }
}

/// True when `value` lies strictly between `min` and `max`.
///
/// Both bounds are exclusive.
pub fn is_in_range<T: Float>(value: T, min: T, max: T) -> bool {
    value > min && value < max
}

/// [`is_in_range`] applied to both coordinates.
///
/// ```
/// use gridline::{PlotPoint, is_in_range_2d};
///
/// let min = PlotPoint::new(0.0, 0.0);
/// let max = PlotPoint::new(10.0, 5.0);
/// assert!(is_in_range_2d(&PlotPoint::new(3.0, 2.0), &min, &max));
/// assert!(!is_in_range_2d(&PlotPoint::new(3.0, 5.0), &min, &max));
/// ```
pub fn is_in_range_2d<T: Float>(
    point: &PlotPoint<T>,
    min_point: &PlotPoint<T>,
    max_point: &PlotPoint<T>,
) -> bool {
    is_in_range(point.x, min_point.x, max_point.x)
        && is_in_range(point.y, min_point.y, max_point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        assert!(is_in_range(5.0, 0.0, 10.0));
        assert!(!is_in_range(0.0, 0.0, 10.0));
        assert!(!is_in_range(10.0, 0.0, 10.0));
        assert!(!is_in_range(-1.0, 0.0, 10.0));
    }

    #[test]
    fn point_in_box() {
        let min = PlotPoint::from((-5.0, -5.0));
        let max = PlotPoint::from((5.0, 5.0));

        assert!(is_in_range_2d(&PlotPoint::new(0.0, 0.0), &min, &max));
        assert!(!is_in_range_2d(&PlotPoint::new(-10.0, 0.0), &min, &max));
        assert!(!is_in_range_2d(&PlotPoint::new(0.0, 5.0), &min, &max));
    }
}
