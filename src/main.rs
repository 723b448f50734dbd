//! Launchboard - Interactive Launch Records Dashboard
//!
//! Loads a CSV of rocket launch records once at startup and serves two
//! linked charts: launch outcome proportions and payload-vs-outcome.

mod analysis;
mod charts;
mod data;
mod gui;

use anyhow::Context;
use data::DatasetLoader;
use eframe::egui;
use gui::DashboardApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Dataset path, resolved against the working directory.
const DATASET_PATH: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // The dashboard must not start without data
    let table = DatasetLoader::load_csv(DATASET_PATH)
        .with_context(|| format!("failed to load launch dataset from {DATASET_PATH}"))?;
    info!(
        rows = table.len(),
        sites = table.sites().len(),
        "launch dataset loaded"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([1024.0, 700.0])
            .with_title("Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, table)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start dashboard: {e}"))
}
