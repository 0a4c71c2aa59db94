//! Leaf helpers consumed by a rendering layer.
//!
//! None of these depend on the nice-number algorithm except
//! [`AxisMapping::fit`], which uses the zero index of a finished tick
//! sequence.

mod closest;
mod distribution;
mod mapping;
mod measure;
mod point;

pub use closest::{closest_in, closest_index_in};
pub use distribution::{calc_distribution, max_checkpoint};
pub use mapping::{AxisMapping, scale};
pub use measure::{interval_size, real_intervals, value_range};
pub use point::{PlotPoint, is_in_range, is_in_range_2d};
