//! Range calculator: value-axis bounds and tick spacing
//!
//! The axis is padded by a proportional `step` on both sides, except where
//! the extreme value sits at a position that would make the padding read as
//! a continuing trend:
//!
//! - the maximum is the second-to-last raw value: the top is pinned to it,
//! - the minimum is the first raw value: the bottom is pinned to it.
//!
//! The top pin is checked first. Tick spacing always yields four intervals
//! between five gridlines.

use serde::{Deserialize, Serialize};

/// Number of gridline intervals on the value axis
pub const TICK_INTERVALS: f64 = 4.0;

/// Divisor of the data span used to size the padding step
pub const STEP_DIVISOR: f64 = 5.0;

/// Value-axis display bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    #[serde(rename = "tickInterval")]
    pub tick_interval: f64,
}

impl AxisRange {
    fn from_bounds(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            tick_interval: (max - min) / TICK_INTERVALS,
        }
    }

    /// Axis span, zero for a constant series pinned on both sides
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Which padding rule produced an [`AxisRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Maximum is the second-to-last value; top pinned
    PinnedTop,
    /// Minimum is the first value; bottom pinned
    PinnedBottom,
    /// Both sides padded
    Both,
}

/// Compute the axis range for a raw (non-deduplicated) value sequence
///
/// Returns `None` for an empty sequence.
pub fn axis_range(values: &[f64]) -> Option<AxisRange> {
    axis_range_with_padding(values).map(|(range, _)| range)
}

/// Like [`axis_range`], also reporting the padding rule applied
pub fn axis_range_with_padding(values: &[f64]) -> Option<(AxisRange, Padding)> {
    let first = *values.first()?;
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let step = ((max_value - min_value) / STEP_DIVISOR).floor();

    let second_to_last = values.len().checked_sub(2).map(|i| values[i]);

    let (y_min, y_max, padding) = if second_to_last == Some(max_value) {
        ((min_value - step).floor(), max_value, Padding::PinnedTop)
    } else if first == min_value {
        (min_value, (max_value + step).ceil(), Padding::PinnedBottom)
    } else {
        (
            (min_value - step).floor(),
            (max_value + step).ceil(),
            Padding::Both,
        )
    };

    Some((AxisRange::from_bounds(y_min, y_max), padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bottom_pinned_when_min_is_first() {
        let (range, padding) = axis_range_with_padding(&[70.0, 75.0, 72.0, 73.0]).unwrap();

        assert_eq!(padding, Padding::PinnedBottom);
        assert_eq!(range.min, 70.0);
        assert_eq!(range.max, 76.0);
        assert_relative_eq!(range.tick_interval, 1.5);
    }

    #[test]
    fn test_top_pin_wins_over_bottom_pin() {
        // min is first, but max sits one before the end
        let (range, padding) = axis_range_with_padding(&[70.0, 75.0, 72.0]).unwrap();

        assert_eq!(padding, Padding::PinnedTop);
        assert_eq!(range.min, 69.0);
        assert_eq!(range.max, 75.0);
        assert_relative_eq!(range.tick_interval, 1.5);
    }

    #[test]
    fn test_top_pinned_when_max_is_second_to_last() {
        let (range, padding) = axis_range_with_padding(&[70.0, 78.0, 75.0]).unwrap();

        assert_eq!(padding, Padding::PinnedTop);
        assert_eq!(range.max, 78.0);
        assert_eq!(range.min, 69.0);
        assert_relative_eq!(range.tick_interval, 2.25);
    }

    #[test]
    fn test_both_padded_by_default() {
        let (range, padding) = axis_range_with_padding(&[72.0, 70.0, 74.0, 78.0]).unwrap();

        assert_eq!(padding, Padding::Both);
        assert_eq!(range.max, 79.0);
        assert_eq!(range.min, 69.0);
        assert_relative_eq!(range.tick_interval, 2.5);
    }

    #[test]
    fn test_top_pin_checked_before_bottom_pin() {
        // min is first AND max is second-to-last
        let (range, padding) = axis_range_with_padding(&[60.0, 90.0, 70.0]).unwrap();

        assert_eq!(padding, Padding::PinnedTop);
        assert_eq!(range.max, 90.0);
        assert_eq!(range.min, 54.0);
    }

    #[test]
    fn test_last_element_max_is_not_pinned() {
        let (range, padding) = axis_range_with_padding(&[72.0, 70.0, 78.0]).unwrap();

        assert_eq!(padding, Padding::Both);
        assert_eq!(range.max, 79.0);
        assert_eq!(range.min, 69.0);
    }

    #[test]
    fn test_max_before_last_pins_top_even_mid_series() {
        let (range, padding) = axis_range_with_padding(&[72.0, 70.0, 78.0, 74.0]).unwrap();

        assert_eq!(padding, Padding::PinnedTop);
        assert_eq!(range.max, 78.0);
        assert_eq!(range.min, 69.0);
    }

    #[test]
    fn test_single_value_falls_through_to_bottom_pin() {
        let (range, padding) = axis_range_with_padding(&[42.5]).unwrap();

        assert_eq!(padding, Padding::PinnedBottom);
        assert_eq!(range.min, 42.5);
        assert_eq!(range.max, 43.0);
        assert_relative_eq!(range.tick_interval, 0.125);
    }

    #[test]
    fn test_constant_series_is_degenerate_but_defined() {
        let range = axis_range(&[5.0, 5.0, 5.0]).unwrap();

        // second-to-last equals max, so the top is pinned
        assert_eq!(range.max, 5.0);
        assert_eq!(range.min, 5.0);
        assert_eq!(range.tick_interval, 0.0);
        assert_eq!(range.span(), 0.0);
    }

    #[test]
    fn test_fractional_step_is_floored() {
        // span 4 -> step floor(0.8) = 0
        let range = axis_range(&[71.0, 73.0, 75.0]).unwrap();
        assert_eq!(range.min, 71.0);
        assert_eq!(range.max, 75.0);
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(axis_range(&[]), None);
    }
}
