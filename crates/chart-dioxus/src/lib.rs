// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus desktop dashboard (row slider, regenerate, data table, metric cards, chart select, CSV download).
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The view helpers below are plain functions over dashboard-core types and are
//   compiled (and tested) without the feature.

use anyhow::Result;
use chart_core::{RenderOptions, Theme};
use dashboard_core::format::{format_currency, group_thousands};
use dashboard_core::plot::render_png;
use dashboard_core::{build_chart, render_chart, Analysis, ChartMode, ChartOutcome, DashboardSession, Dataset};

pub const CHART_WIDTH: i32 = 900;
pub const CHART_HEIGHT: i32 = 480;

#[derive(Clone, Debug, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

/// The four headline cards. An empty dataset has no cards.
pub fn metric_cards(analysis: &Analysis) -> Vec<MetricCard> {
    let Some(m) = analysis.metrics() else { return Vec::new() };
    vec![
        MetricCard { label: "Total Value", value: format_currency(m.total_value) },
        MetricCard { label: "Average Value", value: format_currency(m.avg_value) },
        MetricCard { label: "Total Quantity", value: group_thousands(m.total_quantity) },
        MetricCard { label: "Unique Customers", value: group_thousands(m.unique_customers as u64) },
    ]
}

/// Table cells in export column order, one row per record.
pub fn table_rows(dataset: &Dataset) -> Vec<[String; 5]> {
    dataset
        .iter()
        .map(|r| {
            [
                r.date.format("%Y-%m-%d").to_string(),
                r.category.to_string(),
                format!("{:.2}", r.value),
                r.quantity.to_string(),
                r.customer_id.to_string(),
            ]
        })
        .collect()
}

/// Chart for the session's mode and histogram bins. `selected` is the raw picker value;
/// a name the session could not accept yields the unsupported outcome.
pub fn session_chart(session: &DashboardSession, selected: &str) -> Option<ChartOutcome> {
    let ds = session.current_dataset()?;
    Some(match selected.parse::<ChartMode>() {
        Ok(_) => ChartOutcome::Chart(build_chart(session.chart_mode(), ds, session.config().histogram_bins)),
        Err(_) => render_chart(selected, ds),
    })
}

/// Text shown in place of a chart, if any.
pub fn chart_notice(outcome: &ChartOutcome) -> Option<String> {
    match outcome {
        ChartOutcome::Unsupported { mode } => Some(format!("No chart for mode '{mode}'")),
        ChartOutcome::Chart(spec) if spec.is_empty() => Some("Nothing to plot".to_string()),
        ChartOutcome::Chart(_) => None,
    }
}

/// PNG bytes for a chart outcome, `None` when there is nothing to draw.
pub fn chart_png(outcome: &ChartOutcome, theme: &Theme) -> Result<Option<Vec<u8>>> {
    let Some(spec) = outcome.chart() else { return Ok(None) };
    let opts = RenderOptions {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        theme: theme.clone(),
        ..RenderOptions::default()
    };
    Ok(Some(render_png(spec, &opts)?))
}

/// Install the tracing subscriber used by the launchers (`RUST_LOG` aware).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use base64::Engine as _;
    use chrono::Local;
    use dashboard_core::config::{MAX_ROWS, MIN_ROWS};
    use dashboard_core::{analyze, DashboardConfig};
    use dioxus::prelude::*;
    use tracing::{error, info};

    fn data_url(png: &[u8]) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(png);
        format!("data:image/png;base64,{}", b64)
    }

    /// Whole dashboard; the session comes from the launch context.
    #[component]
    pub fn Dashboard() -> Element {
        let config = use_context::<DashboardConfig>();
        let theme = chart_core::theme::find(&config.theme);

        let mut session = use_signal(|| match DashboardSession::new(config.clone()) {
            Ok(mut s) => {
                s.dataset();
                Some(s)
            }
            Err(e) => {
                error!(error = %e, "could not start dashboard session");
                None
            }
        });
        let mut rows = use_signal(|| config.initial_rows);
        let mut mode = use_signal(|| ChartMode::default().as_str().to_string());
        let mut notice = use_signal(|| Option::<String>::None);

        let guard = session.read();
        let Some((s, ds)) = guard.as_ref().and_then(|s| Some((s, s.current_dataset()?))) else {
            return rsx! { div { class: "error", "Dashboard session unavailable; check DASHBOARD_* settings." } };
        };

        let cards = metric_cards(&analyze(ds));
        let table = table_rows(ds);
        let total_rows = ds.len();
        let Some(outcome) = session_chart(s, &mode.read()) else {
            return rsx! { div { class: "error", "No dataset" } };
        };
        let chart_msg = chart_notice(&outcome);
        let img_src = match chart_png(&outcome, &theme) {
            Ok(png) => png.map(|b| data_url(&b)),
            Err(e) => {
                error!(error = %e, "chart render failed");
                None
            }
        };
        drop(guard);

        rsx! {
            div { style: "font-family:sans-serif; padding:16px; background:#121214; color:#ddd; min-height:100vh;",
                h1 { "Data Dashboard" }
                div { style: "display:flex; gap:12px; align-items:center;",
                    label { "Rows: {rows}" }
                    input {
                        r#type: "range",
                        min: "{MIN_ROWS}",
                        max: "{MAX_ROWS}",
                        value: "{rows}",
                        oninput: move |e| {
                            let Ok(n) = e.value().parse::<usize>() else { return };
                            if let Some(s) = session.write().as_mut() {
                                match s.set_row_count(n) {
                                    Ok(()) => rows.set(n),
                                    Err(err) => notice.set(Some(err.to_string())),
                                }
                            }
                        },
                    }
                    button {
                        onclick: move |_| {
                            if let Some(s) = session.write().as_mut() {
                                s.regenerate();
                            }
                            notice.set(None);
                        },
                        "Regenerate"
                    }
                    button {
                        onclick: move |_| {
                            let written = session.write().as_mut().map(|s| s.write_export(&Local::now()));
                            match written {
                                Some(Ok(path)) => {
                                    info!(path = %path.display(), "csv downloaded");
                                    notice.set(Some(format!("Saved {}", path.display())));
                                }
                                Some(Err(err)) => notice.set(Some(format!("Export failed: {err}"))),
                                None => {}
                            }
                        },
                        "Download CSV"
                    }
                }
                if let Some(msg) = &*notice.read() {
                    p { style: "color:#e0b060;", "{msg}" }
                }
                div { style: "display:flex; gap:12px; margin:16px 0;",
                    if cards.is_empty() {
                        p { "No data" }
                    }
                    for card in cards {
                        div { style: "background:#1e1e22; padding:12px 16px; border-radius:6px; min-width:160px;",
                            div { style: "font-size:12px; color:#999;", "{card.label}" }
                            div { style: "font-size:22px;", "{card.value}" }
                        }
                    }
                }
                div { style: "display:flex; gap:8px; align-items:center;",
                    label { "Chart" }
                    select {
                        value: "{mode}",
                        onchange: move |e| {
                            let picked = e.value();
                            if let (Ok(m), Some(s)) = (picked.parse::<ChartMode>(), session.write().as_mut()) {
                                s.set_chart_mode(m);
                            }
                            mode.set(picked);
                        },
                        for m in ChartMode::ALL {
                            option { value: m.as_str(), {m.title()} }
                        }
                    }
                }
                if let Some(msg) = chart_msg {
                    p { "{msg}" }
                }
                if let Some(src) = img_src {
                    img { style: "margin-top:12px; max-width:100%;", src: src }
                }
                h2 { "Data ({total_rows} rows)" }
                div { style: "max-height:420px; overflow-y:auto; border:1px solid #2a2a30;",
                table { style: "border-collapse:collapse; font-size:13px; width:100%;",
                    thead {
                        tr {
                            for h in ["Date", "Category", "Value", "Quantity", "Customer_ID"] {
                                th { style: "text-align:left; padding:2px 10px;", "{h}" }
                            }
                        }
                    }
                    tbody {
                        for row in table {
                            tr {
                                for cell in row {
                                    td { style: "padding:2px 10px;", "{cell}" }
                                }
                            }
                        }
                    }
                }
                }
            }
        }
    }

    /// Launch the desktop dashboard with `config` available as context.
    pub fn run_dashboard(config: DashboardConfig) -> Result<(), String> {
        // Surface config problems before a window opens.
        DashboardSession::new(config.clone()).map_err(|e| e.to_string())?;

        let contexts: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> =
            vec![Box::new(move || Box::new(config.clone()) as Box<dyn std::any::Any>)];
        let cfg = dioxus_desktop::Config::new().with_window(
            dioxus_desktop::WindowBuilder::new().with_title("Data Dashboard"),
        );
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(Dashboard, contexts, globals);
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_dashboard(_config: dashboard_core::DashboardConfig) -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run the dashboard")
}
