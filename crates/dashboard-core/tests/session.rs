// File: crates/dashboard-core/tests/session.rs
// Purpose: Session lifecycle (lazy generation, regeneration, isolation) and CSV export to disk.

use chrono::{Local, TimeZone};
use dashboard_core::{parse_csv, ChartMode, DashboardConfig, DashboardSession};

fn session(seed: u64) -> DashboardSession {
    DashboardSession::new(DashboardConfig { seed: Some(seed), ..Default::default() }).expect("valid config")
}

#[test]
fn regenerate_replaces_rather_than_appends() {
    let mut s = session(1);
    assert_eq!(s.dataset().len(), 100);
    s.set_row_count(60).unwrap();
    assert_eq!(s.regenerate().len(), 60);
    s.set_row_count(400).unwrap();
    s.regenerate();
    assert_eq!(s.dataset().len(), 400);
}

#[test]
fn regenerate_draws_new_data() {
    let mut s = session(2);
    let first = s.dataset().clone();
    let second = s.regenerate().clone();
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn metrics_follow_current_dataset() {
    let mut s = session(3);
    s.set_row_count(50).unwrap();
    s.regenerate();
    let analysis = s.get_metrics();
    let m = analysis.metrics().expect("metrics after generation");
    assert_eq!(m.row_count, 50);
}

#[test]
fn sessions_do_not_share_datasets() {
    let mut a = session(4);
    let mut b = session(4);
    b.set_row_count(200).unwrap();
    b.regenerate();
    assert_eq!(a.dataset().len(), 100);
    assert_eq!(b.dataset().len(), 200);
}

#[test]
fn chart_mode_is_session_state() {
    let mut s = session(5);
    assert_eq!(s.chart_mode(), ChartMode::Line);
    s.set_chart_mode(ChartMode::Pie);
    let spec = s.current_chart();
    assert_eq!(spec.mode(), ChartMode::Pie);
    assert!(spec.len() <= 4);
}

#[test]
fn write_export_creates_named_file() {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("session_export");
    let mut s = DashboardSession::new(DashboardConfig {
        seed: Some(6),
        export_dir: dir.clone(),
        ..Default::default()
    })
    .unwrap();
    let now = Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).single().expect("unambiguous local time");
    let path = s.write_export(&now).expect("export written");
    assert_eq!(path, dir.join("data_export_20240601_093000.csv"));

    let text = std::fs::read_to_string(&path).expect("read export");
    assert!(text.starts_with("Date,Category,Value,Quantity,Customer_ID"));
    assert_eq!(&parse_csv(&text).unwrap(), s.dataset());
}
