use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{messages, ClientConfig, EstimatorBackend, HttpBackend};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::EstimatorApp;

#[derive(Parser, Debug)]
struct Args {
    /// TOML config file; defaults to `<config dir>/experience_estimator/config.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    base_url: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("experience_estimator").join("config.toml"))
        .filter(|path| path.is_file())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let config_path = args.config.or_else(default_config_path);
    let mut config = ClientConfig::load(config_path.as_deref())?;
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url)?;
    }
    tracing::info!(base_url = %config.base_url, "using estimator backend");
    let backend: Arc<dyn EstimatorBackend> = Arc::new(HttpBackend::new(&config)?);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, backend);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(messages::TITLE)
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        messages::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(EstimatorApp::bootstrap(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop gui exited with an error: {err}"))
}
