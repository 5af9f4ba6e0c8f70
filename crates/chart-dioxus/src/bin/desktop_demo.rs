// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the Dioxus desktop dashboard.

#[cfg(feature = "desktop")]
fn main() {
    chart_dioxus::init_tracing();
    let config = match dashboard_core::DashboardConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("dashboard config error: {e:#}");
            std::process::exit(2);
        }
    };
    if let Err(e) = chart_dioxus::ui::run_dashboard(config) {
        eprintln!("chart-dioxus dashboard error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    chart_dioxus::init_tracing();
    if let Err(e) = chart_dioxus::run_dashboard(dashboard_core::DashboardConfig::default()) {
        eprintln!("{e}");
    }
}
