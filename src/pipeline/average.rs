//! Average calculator: the summary statistic shown beside the chart

/// Placeholder shown when there is nothing to average
pub const NO_DATA: &str = "Нет данных";

/// Arithmetic mean rounded *up* to one decimal place
///
/// Returns `None` for an empty slice. The result is formatted with exactly
/// one digit after a `.` separator and is never below the true mean.
pub fn average(values: &[f64]) -> Option<String> {
    let mean = mean(values)?;
    Some(format!("{:.1}", ceil_to_tenth(mean)))
}

/// Plain arithmetic mean (sum over count)
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn ceil_to_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}
