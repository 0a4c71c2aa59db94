//! Nice axis tick intervals for charts
//!
//! `gridline` computes human-friendly gridline values for a chart axis from
//! raw data, plus the small set of coordinate helpers a renderer needs to
//! place those gridlines on screen. It does no drawing itself.
//!
//! # Core Concepts
//!
//! ## Intervals
//!
//! [`calc_chart_intervals`] turns a slice of data into a strictly increasing
//! sequence of round tick values covering that data:
//! - The data is classified by [`SignRegion`] (all non-negative, straddling
//!   zero, all non-positive)
//! - Values are normalized to a single decade so the step choice is
//!   scale-invariant
//! - Negative data is handled by mirroring the positive computation
//! - Ranges crossing zero always include zero and share one step size
//!
//! [`zero_index`] then tells the renderer where the zero baseline falls,
//! even when zero is not itself a tick.
//!
//! ## Axis helpers
//!
//! - [`AxisMapping`] converts data values to pixel positions
//!   (`zero_line - value * scale_multiplier`)
//! - [`real_intervals`], [`interval_size`], [`value_range`] measure plain
//!   linear partitions
//! - [`is_in_range`] / [`is_in_range_2d`] test exclusive bounds
//! - [`closest_in`] finds the nearest candidate value
//! - [`calc_distribution`] / [`max_checkpoint`] bucket values against evenly
//!   spaced checkpoints
//!
//! Every function is generic over [`Float`], so `f32`, `f64` and decimal
//! types implementing `num_traits::Float` all work.
//!
//! # Examples
//!
//! ## Ticks for Positive Data
//!
//! ```rust
//! use gridline::calc_chart_intervals;
//!
//! let ticks = calc_chart_intervals(&[7.0, 2.0, 9.0], false).unwrap();
//! assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//! ```
//!
//! ## Following the Data Minimum
//!
//! ```rust
//! use gridline::calc_chart_intervals;
//!
//! // Line charts usually want the axis to start near the data.
//! let ticks = calc_chart_intervals(&[52.0, 58.0, 55.0], true).unwrap();
//! assert_eq!(ticks, vec![51.0, 53.0, 55.0, 57.0, 59.0]);
//! ```
//!
//! ## Placing Ticks on Screen
//!
//! ```rust
//! use gridline::{AxisMapping, calc_chart_intervals, zero_index};
//!
//! let ticks = calc_chart_intervals(&[-3.0, 5.0], false).unwrap();
//! assert_eq!(zero_index(&ticks).unwrap(), 2.0);
//!
//! // 100 pixel tall axis, top tick at y = 0
//! let axis = AxisMapping::fit(&ticks, 100.0).unwrap();
//! for tick in &ticks {
//!     println!("gridline {tick} at y = {}", axis.scale(*tick));
//! }
//! assert_eq!(axis.scale(ticks[0]), 100.0);
//! ```
//!

pub mod axis;
mod error;
pub mod interval;
mod util;

pub use axis::{
    AxisMapping, PlotPoint, calc_distribution, closest_in, closest_index_in, interval_size,
    is_in_range, is_in_range_2d, max_checkpoint, real_intervals, scale, value_range,
};
pub use error::{IntervalError, Result};
pub use interval::{
    SignRegion, calc_chart_intervals, calc_chart_intervals_sparse, chart_intervals, zero_index,
};
pub use num_traits::Float;
pub use util::{round_to, round1, shift_decimal};
