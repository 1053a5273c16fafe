//! Chart spec assembler
//!
//! Produces a declarative line-chart configuration in the option shape
//! understood by ECharts. Behaviour that the chart library normally takes
//! as callbacks (tooltip text, axis-label suppression) is kept on the spec
//! as pure functions and serialized as the equivalent static option.

use super::style::{ChartStyle, Grid};
use super::tooltip::{HoverParam, TooltipFormatter};
use crate::currency::Currency;
use crate::pipeline::{AxisRange, PeriodAxis, ValueSeries};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Assembled chart configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Nothing to render; serializes to `{}`
    Empty,
    Line(Box<LineChart>),
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        matches!(self, ChartSpec::Empty)
    }

    pub fn as_line(&self) -> Option<&LineChart> {
        match self {
            ChartSpec::Empty => None,
            ChartSpec::Line(chart) => Some(&**chart),
        }
    }

    /// Tooltip text for a hover context; empty for an empty spec
    pub fn tooltip_text(&self, params: &[HoverParam]) -> String {
        match self {
            ChartSpec::Empty => String::new(),
            ChartSpec::Line(chart) => chart.tooltip.formatter.format_params(params),
        }
    }
}

impl Serialize for ChartSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChartSpec::Empty => serializer.serialize_map(Some(0))?.end(),
            ChartSpec::Line(chart) => chart.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub tooltip: Tooltip,
    pub grid: Grid,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Tooltip {
    pub trigger: &'static str,
    #[serde(skip)]
    pub formatter: TooltipFormatter,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Toggle {
    pub show: bool,
}

impl Toggle {
    const HIDDEN: Toggle = Toggle { show: false };
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: PeriodAxis,
    pub axis_line: Toggle,
    pub axis_tick: Toggle,
    pub boundary_gap: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub min: f64,
    pub max: f64,
    pub interval: f64,
    pub axis_line: Toggle,
    pub split_line: SplitLine,
    pub axis_label: AxisLabel,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub line_style: SplitLineStyle,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SplitLineStyle {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub color: String,
}

/// Value-axis label rule: the label at the axis minimum is hidden
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub show_min_label: bool,
    #[serde(skip)]
    pub hidden_value: f64,
}

impl AxisLabel {
    fn hiding(value: f64) -> Self {
        Self {
            show_min_label: false,
            hidden_value: value,
        }
    }

    /// Label text for a tick value
    pub fn format(&self, value: f64) -> String {
        if value == self.hidden_value {
            String::new()
        } else {
            value.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ValueSeries,
    pub smooth: bool,
    pub show_symbol: bool,
    pub emphasis: Emphasis,
    pub item_style: ItemStyle,
    pub line_style: LineStyle,
}

/// Hover highlighting, disabled so only the tooltip reacts to the pointer
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    pub disabled: bool,
    pub item_style: Opacity,
    pub label: Toggle,
    pub symbol: &'static str,
}

impl Emphasis {
    fn disabled() -> Self {
        Self {
            disabled: true,
            item_style: Opacity { opacity: 0.0 },
            label: Toggle::HIDDEN,
            symbol: "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Opacity {
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ItemStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LineStyle {
    pub width: u32,
    pub color: String,
}

/// Compose series, axes and tooltip into one chart configuration
///
/// Returns [`ChartSpec::Empty`] when there is nothing to plot: an empty
/// axis or series, no range, or an axis and series of different lengths.
pub fn assemble(
    period_axis: &[String],
    value_series: &[Option<f64>],
    range: Option<AxisRange>,
    currency: Currency,
    style: &ChartStyle,
) -> ChartSpec {
    let Some(range) = range else {
        return ChartSpec::Empty;
    };
    if period_axis.is_empty() || value_series.is_empty() {
        return ChartSpec::Empty;
    }
    if period_axis.len() != value_series.len() {
        log::warn!(
            "Period axis ({}) and value series ({}) are misaligned; nothing to render",
            period_axis.len(),
            value_series.len()
        );
        return ChartSpec::Empty;
    }

    let chart = LineChart {
        tooltip: Tooltip {
            trigger: "axis",
            formatter: TooltipFormatter::new(style.tooltip.clone()),
        },
        grid: style.grid,
        x_axis: CategoryAxis {
            kind: "category",
            data: period_axis.to_vec(),
            axis_line: Toggle::HIDDEN,
            axis_tick: Toggle::HIDDEN,
            boundary_gap: false,
        },
        y_axis: ValueAxis {
            kind: "value",
            min: range.min,
            max: range.max,
            interval: range.tick_interval,
            axis_line: Toggle::HIDDEN,
            split_line: SplitLine {
                line_style: SplitLineStyle {
                    kind: "dashed",
                    color: style.split_line_color.clone(),
                },
            },
            axis_label: AxisLabel::hiding(range.min),
        },
        series: vec![LineSeries {
            name: currency.indicator_name(),
            kind: "line",
            data: value_series.to_vec(),
            smooth: false,
            show_symbol: false,
            emphasis: Emphasis::disabled(),
            item_style: ItemStyle {
                color: style.line_color.clone(),
            },
            line_style: LineStyle {
                width: style.line_width,
                color: style.line_color.clone(),
            },
        }],
    };

    ChartSpec::Line(Box::new(chart))
}
