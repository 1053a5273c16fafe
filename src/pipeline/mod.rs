//! Data-transformation pipeline from raw observations to chart inputs
//!
//! Every stage is a pure function of its inputs:
//!
//! - **filter**: records narrowed to one currency
//! - **series**: deduplicated period axis and aligned values
//! - **range**: value-axis bounds and tick spacing
//! - **average**: ceiling-rounded summary mean

pub mod average;
pub mod filter;
pub mod range;
pub mod series;

pub use average::{average, mean, NO_DATA};
pub use filter::{filter, values};
pub use range::{axis_range, axis_range_with_padding, AxisRange, Padding};
pub use series::{build, PeriodAxis, ValueSeries};
