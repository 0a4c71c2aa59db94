//! Nice tick interval generation.
//!
//! The pipeline runs leaves first:
//!
//! 1. [`normalize`] splits a value into mantissa and base-10 exponent.
//! 2. [`Partition`] picks a lower bound, step and part count for a range
//!    already scaled into a single decade.
//! 3. [`chart_intervals`] scales bounds into that decade, partitions, and
//!    scales the result back.
//! 4. [`calc_chart_intervals`] classifies the data into a [`SignRegion`] and
//!    runs the matching path, mirroring for negative data.
//! 5. [`zero_index`] locates zero within a finished tick sequence.
//!
//! Every intermediate value is rounded to one decimal in the normalized
//! domain so boundary comparisons are not thrown off by binary drift.

mod compose;
mod normalize;
mod partition;
mod region;
mod zero;

pub use compose::chart_intervals;
pub use normalize::{Normalized, normalize};
pub use partition::{Partition, PartitionIter, range_intervals};
pub use region::{SignRegion, calc_chart_intervals, calc_chart_intervals_sparse};
pub use zero::zero_index;
