mod app;
mod color;
mod config;
mod data;
mod error;
mod reactive;
mod state;
mod ui;
mod views;

use std::sync::Arc;

use anyhow::{Context, Result};
use app::PenguinDashApp;
use clap::Parser;
use config::Cli;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = Cli::parse()
        .resolve()
        .context("loading dashboard configuration")?;

    // Loaded once; every session component gets a shared read-only handle.
    let dataset = data::loader::load_file(&config.data_path).with_context(|| {
        format!(
            "loading penguin data from {} (download the palmerpenguins penguins.csv or pass --data)",
            config.data_path.display()
        )
    })?;
    log::info!("Loaded {} penguins", dataset.len());
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(dataset, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
