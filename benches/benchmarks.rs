use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_ratechart::{
    chart::{ChartStyle, HoverParam, TooltipFormatter},
    currency::Currency,
    data::{parse_json, RecordStore},
    types::Observation,
    view::{compute_view, ViewCache},
};

fn sample_records(n: usize) -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let currency = Currency::all()[i % 3];
            let month = i / 3;
            Observation::new(
                start + Duration::days(30 * month as i64),
                &format!("{:04}-{:02}", 2015 + month / 12, month % 12 + 1),
                currency.indicator_name(),
                60.0 + (i as f64 * 0.37).sin() * 15.0,
            )
        })
        .collect()
}

fn benchmark_compute_view(c: &mut Criterion) {
    let records = sample_records(1000);
    let style = ChartStyle::default();

    c.bench_function("compute_view_1000", |b| {
        b.iter(|| compute_view(black_box(&records), Currency::EUR, &style));
    });
}

fn benchmark_cached_render(c: &mut Criterion) {
    let store = RecordStore::from_records(sample_records(1000));
    let style = ChartStyle::default();

    c.bench_function("cached_view_1000", |b| {
        let mut cache = ViewCache::new();
        b.iter(|| {
            for currency in Currency::all() {
                black_box(cache.get_or_compute(&store, currency, &style));
            }
        });
    });
}

fn benchmark_ingest(c: &mut Criterion) {
    let payload = serde_json::to_string(&sample_records(1000)).unwrap();

    c.bench_function("parse_json_1000", |b| {
        b.iter(|| parse_json(black_box(&payload)));
    });
}

fn benchmark_tooltip(c: &mut Criterion) {
    let formatter = TooltipFormatter::new(ChartStyle::default().tooltip);
    let params = vec![HoverParam {
        axis_value: "2023-06".to_string(),
        data: Some(82.4),
        series_name: "Курс евро".to_string(),
        color: "#F38B00".to_string(),
    }];

    c.bench_function("tooltip_format", |b| {
        b.iter(|| formatter.format_params(black_box(&params)));
    });
}

criterion_group!(
    benches,
    benchmark_compute_view,
    benchmark_cached_render,
    benchmark_ingest,
    benchmark_tooltip
);
criterion_main!(benches);
