mod app;
mod chart;
mod color;
mod controls;
mod data;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use app::FacetApp;
use data::model::DatasetStore;
use eframe::egui;

const OBSERVATIONS_PATH: &str = "data/diamonds.csv";
const REGRESSION_PATH: &str = "data/regression.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let store = DatasetStore::load(Path::new(OBSERVATIONS_PATH), Path::new(REGRESSION_PATH))
        .context("loading startup data (generate demo files with `cargo run --bin generate_sample`)")?;
    log::info!(
        "loaded {} observations and {} regression samples, fit R² {:.3}",
        store.observations.len(),
        store.regression.len(),
        store.regression.model.r_squared
    );
    if store.observations.is_empty() {
        log::warn!("{OBSERVATIONS_PATH} has a header but no rows; charts will be empty");
    }
    let store = Arc::new(store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Facet – Diamond Analytics",
        options,
        Box::new(move |_cc| Ok(Box::new(FacetApp::new(store)))),
    )
    .map_err(|e| anyhow::anyhow!("running ui: {e}"))
}
