use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use terminal_core::{
    config::{load_settings, parse_pace_scale},
    content, ExternalActions, LoggingLauncher, SystemLauncher,
};
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::runtime::{launch, BootRequest};
use ui::{app::StartupConfig, PortfolioApp};

#[derive(Parser, Debug)]
#[command(about = "Terminal-style portfolio window")]
struct Args {
    #[arg(long)]
    instant: bool,
    #[arg(long, value_parser = parse_pace_scale)]
    pace_scale: Option<f64>,
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    no_launch: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings()?;
    if let Some(scale) = args.pace_scale {
        settings.pace_scale = scale;
    }
    if args.instant {
        settings.pace_scale = 0.0;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let script = match args.content.as_ref().or(settings.content_path.as_ref()) {
        Some(path) => content::load_script(path)
            .with_context(|| format!("failed to load boot script '{}'", path.display()))?,
        None => content::builtin_script().context("built-in boot script is invalid")?,
    };
    let actions: Arc<dyn ExternalActions> = if args.no_launch {
        Arc::new(LoggingLauncher)
    } else {
        Arc::new(SystemLauncher)
    };

    let (ui_tx, ui_rx) = bounded(2048);
    launch(
        BootRequest {
            script,
            pace_scale: settings.pace_scale,
            seed: args.seed.or(settings.rng_seed),
            actions,
        },
        ui_tx,
    );

    let startup = StartupConfig {
        prompt: settings.prompt,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio Terminal")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([560.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio Terminal",
        options,
        Box::new(|cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(PortfolioApp::new(ui_rx, startup)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))
}
