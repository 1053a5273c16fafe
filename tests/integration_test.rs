//! End-to-end tests of the chart pipeline

use chrono::NaiveDate;
use rusty_ratechart::chart::{assemble, ChartSpec, ChartStyle};
use rusty_ratechart::pipeline::{average, axis_range, build, filter, values};
use rusty_ratechart::prelude::*;
use serde_json::json;

fn obs(period: &str, indicator: &str, value: f64) -> Observation {
    Observation::new(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        period,
        indicator,
        value,
    )
}

#[test]
fn test_end_to_end_dollar_scenario() {
    let records = vec![obs("Jan", "Курс доллара", 70.0), obs("Feb", "Курс доллара", 75.0)];

    let view = compute_view(&records, Currency::USD, &ChartStyle::default());

    assert_eq!(view.period_axis, vec!["Jan", "Feb"]);
    assert_eq!(view.value_series, vec![Some(70.0), Some(75.0)]);
    assert_eq!(view.average.as_deref(), Some("72.5"));

    let range = view.range.unwrap();
    assert_eq!(range.min, 70.0);
    assert_eq!(range.max, 76.0);
    assert_eq!(range.tick_interval, 1.5);

    let chart = view.chart.as_line().unwrap();
    assert_eq!(chart.y_axis.min, 70.0);
    assert_eq!(chart.y_axis.max, 76.0);
    assert_eq!(chart.y_axis.interval, 1.5);
    assert_eq!(chart.series[0].name, "Курс доллара");
}

#[test]
fn test_stages_compose_like_compute_view() {
    let records = vec![
        obs("Jan", "Курс евро", 80.0),
        obs("Jan", "Курс доллара", 70.0),
        obs("Feb", "Курс евро", 88.0),
        obs("Feb", "Курс евро", 60.0),
        obs("Mar", "Курс евро", 84.0),
    ];
    let style = ChartStyle::default();

    let filtered = filter(&records, Currency::EUR);
    let raw = values(&filtered);
    let (axis, series) = build(&filtered);
    let range = axis_range(&raw);
    let spec = assemble(&axis, &series, range, Currency::EUR, &style);

    let view = compute_view(&records, Currency::EUR, &style);
    assert_eq!(view.period_axis, axis);
    assert_eq!(view.value_series, series);
    assert_eq!(view.range, range);
    assert_eq!(view.average, average(&raw));
    assert_eq!(view.chart, spec);

    // duplicate Feb keeps its first value, but the range sees every raw value
    assert_eq!(series, vec![Some(80.0), Some(88.0), Some(84.0)]);
    assert_eq!(view.range.unwrap().min, 55.0);
}

#[test]
fn test_range_cases_from_reference_values() {
    let bottom = axis_range(&[70.0, 75.0, 72.0, 73.0]).unwrap();
    assert_eq!((bottom.min, bottom.max), (70.0, 76.0));

    // first value is the minimum, yet the second-to-last maximum pins the top
    let short = axis_range(&[70.0, 75.0, 72.0]).unwrap();
    assert_eq!((short.min, short.max), (69.0, 75.0));
    assert_eq!(short.tick_interval, 1.5);

    let top = axis_range(&[70.0, 78.0, 75.0]).unwrap();
    assert_eq!((top.min, top.max), (69.0, 78.0));

    let both = axis_range(&[72.0, 70.0, 74.0, 78.0]).unwrap();
    assert_eq!((both.min, both.max), (69.0, 79.0));

    // maximum one before the end pins the top wherever the minimum sits
    let pinned = axis_range(&[72.0, 70.0, 78.0, 74.0]).unwrap();
    assert_eq!((pinned.min, pinned.max), (69.0, 78.0));
}

#[test]
fn test_average_ceiling_rounding() {
    assert_eq!(average(&[70.0, 75.0]).as_deref(), Some("72.5"));
    assert_eq!(average(&[70.01, 70.02]).as_deref(), Some("70.1"));
}

#[test]
fn test_empty_data_for_every_currency() {
    let style = ChartStyle::default();
    let unrelated = vec![obs("Jan", "Курс фунта", 100.0)];

    for currency in Currency::all() {
        for records in [&[][..], &unrelated[..]] {
            let view = compute_view(records, currency, &style);
            assert_eq!(view.average, None);
            assert_eq!(view.chart, ChartSpec::Empty);
            assert_eq!(serde_json::to_value(&view.chart).unwrap(), json!({}));
        }
    }
}

#[test]
fn test_view_model_json() {
    let records = vec![obs("Jan", "Курс юаня", 10.2), obs("Feb", "Курс юаня", 10.9)];
    let view = compute_view(&records, Currency::CNY, &ChartStyle::default());

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["currency"], "CNY");
    assert_eq!(value["title"], "КУРС ЮАНЯ, ¥/₽");
    assert_eq!(value["average"], "10.6");
    assert_eq!(value["range"]["tickInterval"], json!(view.range.unwrap().tick_interval));
    assert_eq!(value["chart"]["xAxis"]["data"], json!(["Jan", "Feb"]));
    assert_eq!(value["chart"]["series"][0]["name"], "Курс юаня");
}

#[test]
fn test_selection_changes_recompute_from_scratch() {
    let records = vec![
        obs("Jan", "Курс доллара", 70.0),
        obs("Jan", "Курс евро", 80.0),
        obs("Feb", "Курс доллара", 75.0),
    ];

    let mut session = ChartSession::default();
    session.load(records);

    session.select(Currency::EUR);
    let eur = session.render().clone();
    session.select(Currency::USD);
    let usd = session.render().clone();
    session.select(Currency::EUR);
    let eur_again = session.render().clone();

    assert_eq!(eur, eur_again);
    assert_ne!(eur, usd);
    assert_eq!(eur.average_text(), "80.0₽");
}
