//! Chart style passed explicitly into the assembler

use serde::{Deserialize, Serialize};

/// Visual settings for the rate chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Line and swatch color
    pub line_color: String,
    pub line_width: u32,
    /// Color of the dashed horizontal gridlines
    pub split_line_color: String,
    pub grid: Grid,
    pub tooltip: TooltipClasses,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: "#F38B00".to_string(),
            line_width: 3,
            split_line_color: "#00416633".to_string(),
            grid: Grid::default(),
            tooltip: TooltipClasses::default(),
        }
    }
}

/// Plot-area padding in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    #[serde(rename = "containLabel", alias = "contain_label")]
    pub contain_label: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            left: 30,
            right: 30,
            top: 40,
            bottom: 40,
            contain_label: true,
        }
    }
}

/// CSS class names and unit suffixes used by the tooltip template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipClasses {
    pub wrapper: String,
    pub period: String,
    pub line: String,
    pub color: String,
    pub label: String,
    pub value: String,
    /// Appended to the period label
    pub period_suffix: String,
    /// Appended to the value
    pub value_suffix: String,
}

impl Default for TooltipClasses {
    fn default() -> Self {
        Self {
            wrapper: "tooltipWrapper".to_string(),
            period: "tooltipMonth".to_string(),
            line: "tooltipLine".to_string(),
            color: "tooltipColor".to_string(),
            label: "tooltipLabel".to_string(),
            value: "tooltipValue".to_string(),
            period_suffix: " год".to_string(),
            value_suffix: "₽".to_string(),
        }
    }
}
