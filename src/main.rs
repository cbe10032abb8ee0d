#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dialogs;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gallery_core::GalleryConfig;
use tracing_subscriber::EnvFilter;

/// Media Gallery - desktop client
#[derive(Parser, Debug)]
#[command(name = "gallery-desktop")]
#[command(about = "Media Gallery - browse, upload and annotate your files and links")]
struct Args {
    /// Gallery server URL (overrides the config file)
    #[arg(short, long)]
    server: Option<String>,

    /// Path to a config.toml (default: <config dir>/media-gallery/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = GalleryConfig::load(args.config.as_deref())?.with_server_url(args.server);
    let controller = context::build_controller(&config)?;

    tracing::info!("Starting gallery against {}", config.server_url);

    // Window size: roomy enough for four card columns
    let window_width = 1100.0;
    let window_height = 850.0;

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Media Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(controller)
        .with_context(config)
        .launch(app::App);

    Ok(())
}
