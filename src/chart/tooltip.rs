//! Tooltip formatter: hover context to display markup

use super::style::TooltipClasses;
use serde::{Deserialize, Serialize};

/// Rendered in place of a missing value
pub const MISSING_VALUE: &str = "-";

/// One entry of the hover context handed over by the chart library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverParam {
    /// Period label under the pointer
    pub axis_value: String,
    pub data: Option<f64>,
    pub series_name: String,
    pub color: String,
}

/// Pure tooltip template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipFormatter {
    classes: TooltipClasses,
}

impl TooltipFormatter {
    pub fn new(classes: TooltipClasses) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &TooltipClasses {
        &self.classes
    }

    /// Format a single hover point
    pub fn format(&self, period: &str, value: f64, series_name: &str, color: &str) -> String {
        self.render(period, &value.to_string(), series_name, color)
    }

    /// Format an axis-trigger hover context; only the first entry is shown
    pub fn format_params(&self, params: &[HoverParam]) -> String {
        let Some(first) = params.first() else {
            return String::new();
        };

        let value = first
            .data
            .map(|v| v.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string());
        self.render(&first.axis_value, &value, &first.series_name, &first.color)
    }

    fn render(&self, period: &str, value: &str, series_name: &str, color: &str) -> String {
        let c = &self.classes;
        format!(
            concat!(
                r#"<div class="{wrapper}">"#,
                r#"<div class="{period_class}">{period}{period_suffix}</div>"#,
                r#"<div class="{line}">"#,
                r#"<span class="{color_class}" style="background-color:{color};"></span>"#,
                r#"<span class="{label}">{series_name}</span>"#,
                r#"<b class="{value_class}">{value}{value_suffix}</b>"#,
                "</div></div>"
            ),
            wrapper = c.wrapper,
            period_class = c.period,
            period = escape(period),
            period_suffix = c.period_suffix,
            line = c.line,
            color_class = c.color,
            color = escape(color),
            label = c.label,
            series_name = escape(series_name),
            value_class = c.value,
            value = value,
            value_suffix = c.value_suffix,
        )
    }
}

// Single quotes pass through: every attribute in the template is double-quoted.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
