mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use app::SpaceXDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::load();
    let source = config.source();

    // The table is read exactly once; without it there is nothing to show.
    let dataset = data::loader::load_dataset(&source, config.request_timeout())
        .inspect_err(|e| log::error!("Failed to load launch dataset: {e}"))
        .with_context(|| format!("loading launch dataset from {source}"))?;

    let state = AppState::new(Arc::new(dataset), config.slider.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SpaceXDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
