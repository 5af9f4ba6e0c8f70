// File: crates/dashboard-core/tests/properties.rs
// Purpose: Generation ranges, metric formulas, chart dispatch and CSV round trip on fixed and seeded datasets.

use chrono::NaiveDate;
use dashboard_core::{
    analyze, export_csv, generate, parse_csv, render_chart, Category, ChartOutcome, ChartSpec, Dataset, Record,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn rec(date: NaiveDate, category: Category, value: f64, quantity: u32, customer_id: u32) -> Record {
    Record { date, category, value, quantity, customer_id }
}

/// Three rows: quantities 5/10/20, values 10/20/30, customers 1001/1001/1002.
fn fixed() -> Dataset {
    Dataset::from_records(vec![
        rec(day(1), Category::A, 10.0, 5, 1001),
        rec(day(2), Category::B, 20.0, 10, 1001),
        rec(day(3), Category::A, 30.0, 20, 1002),
    ])
}

#[test]
fn generate_returns_exact_row_counts() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in [0usize, 1, 50, 51, 100, 257, 499, 500] {
        assert_eq!(generate(n, &mut rng).len(), n, "rows = {n}");
    }
}

#[test]
fn generated_fields_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..5 {
        let ds = generate(500, &mut rng);
        for r in &ds {
            assert!(Category::ALL.contains(&r.category));
            assert!((1..100).contains(&r.quantity), "quantity {}", r.quantity);
            assert!((1000..10000).contains(&r.customer_id), "customer {}", r.customer_id);
            assert!(r.value.is_finite());
        }
    }
}

#[test]
fn every_category_shows_up_in_a_large_sample() {
    let ds = generate(500, &mut StdRng::seed_from_u64(13));
    let seen: HashSet<Category> = ds.iter().map(|r| r.category).collect();
    assert_eq!(seen.len(), 4);
}

#[test]
fn metrics_on_fixed_dataset() {
    let analysis = analyze(&fixed());
    let m = analysis.metrics().expect("non-empty dataset has metrics");
    assert_eq!(m.row_count, 3);
    assert_eq!(m.total_quantity, 35);
    assert_eq!(m.unique_customers, 2);
    assert!((m.total_value - 60.0).abs() < 1e-9);
    assert!((m.avg_value - 20.0).abs() < 1e-9);
    assert_eq!(m.category_distribution, vec![(Category::A, 2), (Category::B, 1)]);
}

#[test]
fn metrics_match_direct_sums_on_generated_data() {
    let ds = generate(321, &mut StdRng::seed_from_u64(14));
    let analysis = analyze(&ds);
    let m = analysis.metrics().unwrap();
    let qty: u64 = ds.iter().map(|r| u64::from(r.quantity)).sum();
    let total: f64 = ds.iter().map(|r| r.value).sum();
    let distinct: HashSet<u32> = ds.iter().map(|r| r.customer_id).collect();
    assert_eq!(m.total_quantity, qty);
    assert_eq!(m.unique_customers, distinct.len());
    assert!((m.avg_value - total / 321.0).abs() < 1e-9);
    assert_eq!(m.category_distribution.iter().map(|(_, n)| n).sum::<usize>(), 321);
    assert!(m.category_distribution.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn empty_dataset_does_not_divide_by_zero() {
    assert!(analyze(&Dataset::default()).is_empty());
}

#[test]
fn line_chart_sums_per_date() {
    let ds = Dataset::from_records(vec![
        rec(day(2), Category::A, 5.0, 1, 1000),
        rec(day(1), Category::B, 1.5, 1, 1000),
        rec(day(2), Category::C, 7.0, 1, 1000),
    ]);
    match render_chart("line", &ds) {
        ChartOutcome::Chart(ChartSpec::Line(points)) => {
            assert_eq!(points, vec![(day(1), 1.5), (day(2), 12.0)]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn pie_chart_sums_per_present_category() {
    match render_chart("pie", &fixed()) {
        ChartOutcome::Chart(ChartSpec::Pie(slices)) => {
            assert_eq!(slices, vec![(Category::A, 40.0), (Category::B, 20.0)]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scatter_has_one_point_per_record() {
    let ds = generate(137, &mut StdRng::seed_from_u64(15));
    match render_chart("scatter", &ds) {
        ChartOutcome::Chart(ChartSpec::Scatter(points)) => {
            assert_eq!(points.len(), 137);
            for (p, r) in points.iter().zip(ds.iter()) {
                assert_eq!((p.value, p.quantity, p.category), (r.value, r.quantity, r.category));
            }
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn histogram_uses_thirty_bins() {
    let ds = generate(200, &mut StdRng::seed_from_u64(16));
    let outcome = render_chart("histogram", &ds);
    let spec = outcome.chart().expect("histogram is supported");
    match spec {
        ChartSpec::Histogram(bins) => {
            assert_eq!(bins.len(), 30);
            assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 200);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unknown_mode_is_a_notice() {
    assert_eq!(
        render_chart("heatmap", &fixed()),
        ChartOutcome::Unsupported { mode: "heatmap".to_string() }
    );
}

#[test]
fn csv_round_trip_preserves_records() {
    let mut rng = StdRng::seed_from_u64(17);
    for n in [0usize, 1, 73, 500] {
        let ds = generate(n, &mut rng);
        let text = export_csv(&ds).unwrap();
        assert_eq!(text.lines().count(), n + 1);
        let back = parse_csv(&text).unwrap();
        assert_eq!(back, ds, "rows = {n}");
    }
}
