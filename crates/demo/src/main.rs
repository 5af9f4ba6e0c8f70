// File: crates/demo/src/main.rs
// Summary: Demo generates a synthetic dataset, prints its metrics, renders the selected charts to PNGs and writes a CSV export.

use anyhow::{Context, Result};
use chart_core::RenderOptions;
use chrono::Local;
use clap::Parser;
use dashboard_core::format::{format_currency, group_thousands};
use dashboard_core::plot::to_chart;
use dashboard_core::{Analysis, ChartMode, DashboardConfig, DashboardSession};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "constellation-demo", about = "Synthetic data dashboard, headless")]
struct Args {
    /// Rows to generate (50..=500). Defaults to DASHBOARD_ROWS or 100.
    #[arg(long)]
    rows: Option<usize>,

    /// Fixed RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Chart to render: line, histogram, pie, scatter or all.
    #[arg(long, default_value = "all")]
    mode: String,

    /// Where PNGs and the CSV export are written.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Theme preset name (dark, light, solarized-dark, solarized-light, high-contrast-dark).
    #[arg(long)]
    theme: Option<String>,

    /// Skip writing the CSV export.
    #[arg(long)]
    no_export: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let env = DashboardConfig::from_env().context("reading DASHBOARD_* environment")?;
    let config = apply_args(&args, env);

    let out_dir = config.export_dir.clone();
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output dir '{}'", out_dir.display()))?;

    let mut opts = RenderOptions::default();
    opts.theme = chart_core::theme::find(&config.theme);

    let mut session = DashboardSession::new(config)?;
    println!("Generated {} rows", session.dataset().len());
    print_metrics(&session.get_metrics());

    for mode in selected_modes(&args.mode)? {
        session.set_chart_mode(mode);
        let spec = session.current_chart();
        let chart = to_chart(&spec);
        let out = chart_path(&out_dir, mode);
        chart.render_to_png(&opts, &out)?;
        info!(mode = %mode, points = spec.len(), "chart rendered");
        println!("Wrote {}", out.display());
    }

    if !args.no_export {
        let path = session.write_export(&Local::now())?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// CLI flags win over environment values; bounds are checked by the session afterwards.
fn apply_args(args: &Args, mut config: DashboardConfig) -> DashboardConfig {
    if let Some(rows) = args.rows {
        config.initial_rows = rows;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(dir) = &args.out_dir {
        config.export_dir = dir.clone();
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    config
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn selected_modes(name: &str) -> Result<Vec<ChartMode>> {
    if name.trim().eq_ignore_ascii_case("all") {
        return Ok(ChartMode::ALL.to_vec());
    }
    let mode = name
        .parse::<ChartMode>()
        .context("expected one of line, histogram, pie, scatter, all")?;
    Ok(vec![mode])
}

fn chart_path(dir: &Path, mode: ChartMode) -> PathBuf {
    dir.join(format!("chart_{}.png", mode.as_str()))
}

fn print_metrics(analysis: &Analysis) {
    let Some(m) = analysis.metrics() else {
        println!("No data");
        return;
    };
    println!("Total value:      {}", format_currency(m.total_value));
    println!("Average value:    {}", format_currency(m.avg_value));
    println!("Total quantity:   {}", group_thousands(m.total_quantity));
    println!("Unique customers: {}", group_thousands(m.unique_customers as u64));
    let dist = m
        .category_distribution
        .iter()
        .map(|(c, n)| format!("{c}={n}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Categories:       {dist}");
}
